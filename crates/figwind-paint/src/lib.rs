//! Target design-system primitives for figwind.
//!
//! The style lowering stage in `figwind-style` produces a flat property bag
//! whose fields are built from the types in this crate:
//!
//! - **Colors**: straight-alpha RGBA with hex parsing ([`Color`])
//! - **Paints**: solid and image fills ([`Paint`])
//! - **Effects**: drop/inner shadows and blurs ([`Effect`], [`Shadow`])
//! - **Geometry**: per-corner radii ([`CornerRadii`])
//! - **Layout and text enums**: sizing modes, alignment, text case, line height
//!
//! # Example
//!
//! ```
//! use figwind_paint::{Color, Paint};
//!
//! let blue = Color::from_hex("#3b82f6").unwrap();
//! let fill = Paint::solid_with_opacity(blue, 0.5);
//! assert_eq!(fill.opacity(), 0.5);
//! ```

mod color;
mod error;
mod layout;
mod paint;
mod text;

pub use color::Color;
pub use error::{ColorError, Result};
pub use layout::{
    AxisAlign, CornerRadii, LayoutMode, LayoutPositioning, LayoutWrap, SizingMode, StrokeStyle,
};
pub use paint::{Effect, Paint, ScaleMode, Shadow};
pub use text::{FontStyle, LetterSpacing, LineHeight, TextAlign, TextCase, TextDecoration};
