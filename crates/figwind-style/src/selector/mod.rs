//! Selector modifiers.
//!
//! A class such as `md:group-hover:bg-red-500` carries modifiers in front of
//! the utility. This module classifies them ([`parse_modifier`]), orders them
//! by selector precedence ([`sort_modifiers_for_selector`]) and builds the
//! final selector ([`compose_selector`]). It runs independently of utility
//! parsing.

mod compose;
mod modifier;
mod split;

pub use compose::{ComposedSelector, compose_selector, escape_class};
pub use modifier::{Modifier, ModifierKind, parse_modifier, sort_modifiers_for_selector};
pub use split::{parse_modifiers, split_class};
