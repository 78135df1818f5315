//! Core types for the utility pipeline.
//!
//! - [`ParsedToken`]: tokenizer output
//! - [`StyleValue`] and its building blocks: IR values
//! - [`ParsedStyle`] / [`ParsedUtility`]: IR nodes

mod style;
mod token;
mod value;

pub use style::{ParsedStyle, ParsedUtility, Property, Side, Variant};
pub use token::{ArbitraryType, ParsedToken};
pub use value::{ColorValue, FontValue, Length, LineHeightValue, StyleValue, Unit};
