//! Theme lookup.
//!
//! The theme is an injected, read-only capability: callers hand in anything
//! that implements [`ThemeLookup`] (a closure, a `serde_json::Value`, a
//! [`ThemeVariables`] map) wrapped in a [`Context`]. Nothing here loads or
//! caches theme files.

mod context;
mod json;
mod variables;

pub use context::{Context, ThemeLookup, ThemeValue};
pub use variables::ThemeVariables;
