//! figwind - compile utility-class strings into design-system styles.
//!
//! This is the umbrella crate that re-exports the public APIs of
//! `figwind-style` and `figwind-paint` and adds class-list compilation.
//!
//! # Example
//!
//! ```
//! use figwind::prelude::*;
//!
//! let compiled = compile(
//!     "flex flex-col items-center gap-4 rounded-lg bg-white/80 dark:bg-black",
//!     &Context::empty(),
//!     &ConvertOptions::default(),
//! );
//!
//! assert_eq!(compiled.style.layout_mode, Some(LayoutMode::Vertical));
//! assert_eq!(compiled.style.counter_axis_align, Some(AxisAlign::Center));
//! assert_eq!(compiled.variants.len(), 1);
//! ```
//!
//! # Features
//!
//! - `parallel`: parse class tokens across a rayon thread pool. The
//!   compiled output is the same as the sequential path.

pub use figwind_style::*;

mod compile;
pub mod prelude;

pub use compile::{Compiled, Compiler, ParsedClass, VariantStyle, compile};

/// Target design-system primitives.
pub mod paint {
    pub use figwind_paint::*;
}
