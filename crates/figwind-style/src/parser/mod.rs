//! Utility token parsing.
//!
//! - [`parse_utility_token`]: prefix tokenizer
//! - [`classify_value`]: value classifier
//! - shape predicates and the `cssparser`-backed color/shadow parsers

mod classify;
mod css;
mod tokenizer;

pub use classify::{TYPE_HINTS, ValueClass, classify_value, is_hex_color, is_numeric};
pub use css::{
    DEFAULT_SHADOW_COLOR, is_angle_value, is_color_value, is_image_value, is_length_value,
    is_number_value, is_passthrough, is_percentage, is_time_value, named_color, parse_box_shadow,
    parse_color, parse_number,
};
pub use tokenizer::parse_utility_token;
