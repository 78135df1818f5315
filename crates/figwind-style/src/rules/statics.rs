//! Prefix-only utilities matched by exact class name.

use crate::types::{ParsedStyle, Property, StyleValue};

/// `(class, property, keyword)` for classes that carry no value.
pub const STATIC_UTILITIES: &[(&str, Property, &str)] = &[
    // Display
    ("block", Property::Display, "block"),
    ("inline-block", Property::Display, "inline-block"),
    ("inline", Property::Display, "inline"),
    ("flex", Property::Display, "flex"),
    ("inline-flex", Property::Display, "inline-flex"),
    ("grid", Property::Display, "grid"),
    ("inline-grid", Property::Display, "inline-grid"),
    ("table", Property::Display, "table"),
    ("contents", Property::Display, "contents"),
    ("flow-root", Property::Display, "flow-root"),
    ("list-item", Property::Display, "list-item"),
    ("hidden", Property::Display, "none"),
    // Position
    ("static", Property::Position, "static"),
    ("fixed", Property::Position, "fixed"),
    ("absolute", Property::Position, "absolute"),
    ("relative", Property::Position, "relative"),
    ("sticky", Property::Position, "sticky"),
    // Visibility
    ("visible", Property::Visibility, "visible"),
    ("invisible", Property::Visibility, "hidden"),
    ("collapse", Property::Visibility, "collapse"),
    // Font style
    ("italic", Property::FontStyle, "italic"),
    ("not-italic", Property::FontStyle, "normal"),
    // Decoration line
    ("underline", Property::TextDecorationLine, "underline"),
    ("overline", Property::TextDecorationLine, "overline"),
    ("line-through", Property::TextDecorationLine, "line-through"),
    ("no-underline", Property::TextDecorationLine, "none"),
    // Text transform
    ("uppercase", Property::TextTransform, "uppercase"),
    ("lowercase", Property::TextTransform, "lowercase"),
    ("capitalize", Property::TextTransform, "capitalize"),
    ("normal-case", Property::TextTransform, "none"),
    // Overflow
    ("truncate", Property::TextOverflow, "truncate"),
];

/// Match an exact static utility, honoring `!` importance markers.
///
/// Negative forms never match.
pub fn parse_static(token: &str) -> Option<ParsedStyle> {
    let (body, important) = match token.strip_prefix('!').or_else(|| token.strip_suffix('!')) {
        Some(body) => (body, true),
        None => (token, false),
    };

    let (_, property, keyword) = STATIC_UTILITIES.iter().find(|(class, ..)| *class == body)?;
    let mut style = ParsedStyle::new(*property, StyleValue::keyword(*keyword), token);
    style.important = important;
    Some(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    #[test]
    fn exact_classes() {
        let style = parse_static("hidden").unwrap();
        assert_eq!(style.property, Property::Display);
        assert_eq!(style.value, StyleValue::keyword("none"));
        assert_eq!(style.variant, Variant::Preset);

        let style = parse_static("!absolute").unwrap();
        assert!(style.important);
        assert_eq!(style.raw, "!absolute");

        assert!(parse_static("-flex").is_none());
        assert!(parse_static("flex-1").is_none());
    }
}
