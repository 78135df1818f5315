//! Prelude module for figwind.
//!
//! ```
//! use figwind::prelude::*;
//! ```
//!
//! This provides access to:
//! - Class-list compilation (`compile`, `Compiler`, `Compiled`)
//! - Single-token parsing (`parse_utility`, `StyleParser`, `Context`)
//! - The IR (`ParsedStyle`, `Property`, `StyleValue`)
//! - Lowering (`Converter`, `TargetStyle`) and the paint types it produces

// ============================================================================
// Compilation
// ============================================================================

pub use crate::{Compiled, Compiler, ParsedClass, VariantStyle, compile};

// ============================================================================
// Parsing, selectors, theme and lowering
// ============================================================================

pub use figwind_style::prelude::*;

// ============================================================================
// Paint primitives
// ============================================================================

pub use figwind_paint::{
    AxisAlign, Color, CornerRadii, Effect, FontStyle, LayoutMode, LayoutPositioning, LayoutWrap,
    LetterSpacing, LineHeight, Paint, Shadow, SizingMode, TextAlign, TextCase, TextDecoration,
};
