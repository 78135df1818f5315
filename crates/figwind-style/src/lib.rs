//! Utility-class parsing and style lowering for figwind.
//!
//! This crate turns single utility tokens into typed style nodes and lowers
//! them into design-system properties:
//!
//! - **Tokenizer**: splits `-mt-[calc(100%-1rem)]/50` into prefix, value,
//!   arbitrary content, opacity and markers
//! - **Classifier**: sorts arbitrary values into colors, lengths, numbers,
//!   keywords and passthrough expressions
//! - **Rules**: declarative utility families sharing one fallback chain
//!   (theme, preset, keyword, custom property, arbitrary)
//! - **Selectors**: modifier classification, ordering and selector
//!   composition
//! - **Lowering**: IR nodes to a flat target property bag
//!
//! # Example
//!
//! ```
//! use figwind_style::prelude::*;
//!
//! let ctx = Context::empty();
//! let style = parse_utility("-mt-6", &ctx).into_style().unwrap();
//! assert_eq!(style.property, Property::Margin);
//! assert!(style.negative);
//!
//! let target = Converter::default().convert(&style);
//! assert_eq!(target.margin_top, Some(Dimension::Pixels(-24.0)));
//! ```

pub mod convert;
pub mod parser;
pub mod rules;
pub mod selector;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::convert::{Binding, ConvertOptions, Converter, Dimension, TargetStyle};
    pub use crate::parser::{classify_value, parse_utility_token, ValueClass};
    pub use crate::rules::{FamilySpec, StyleParser, parse_utility};
    pub use crate::selector::{
        ComposedSelector, Modifier, ModifierKind, compose_selector, parse_modifier,
        parse_modifiers, sort_modifiers_for_selector,
    };
    pub use crate::theme::{Context, ThemeLookup, ThemeValue, ThemeVariables};
    pub use crate::types::{
        ParsedStyle, ParsedToken, ParsedUtility, Property, Side, StyleValue, Variant,
    };
    pub use crate::{Error, Result};
}
