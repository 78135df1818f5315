//! Value classifier.
//!
//! Decides whether a value fragment is a preset (keyword or bare number), a
//! bracketed arbitrary value or a parenthesized custom property, and for
//! arbitrary values which inner grammar they use.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ArbitraryType;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid numeric regex"));

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex regex")
});

/// Data-type hints accepted in `[hint:value]` and `(hint:--x)`.
pub const TYPE_HINTS: &[&str] = &[
    "length",
    "color",
    "number",
    "integer",
    "percentage",
    "url",
    "image",
    "family-name",
    "angle",
    "position",
    "size",
    "line-width",
    "shadow",
    "ratio",
    "any",
];

/// Classification of one value fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueClass {
    pub custom_property: bool,
    pub arbitrary: bool,
    pub arbitrary_type: Option<ArbitraryType>,
    pub arbitrary_value: Option<String>,
    pub type_hint: Option<String>,
    pub numeric: bool,
    pub preset: bool,
}

/// Classify a value fragment (the part after `prefix-`).
///
/// Returns `None` for malformed bracket or paren content.
///
/// # Example
///
/// ```
/// use figwind_style::parser::classify_value;
/// use figwind_style::types::ArbitraryType;
///
/// let class = classify_value("[var(--gutter)]").unwrap();
/// assert_eq!(class.arbitrary_type, Some(ArbitraryType::Var));
/// assert_eq!(class.arbitrary_value.as_deref(), Some("--gutter"));
///
/// assert!(classify_value("[]").is_none());
/// ```
pub fn classify_value(value: &str) -> Option<ValueClass> {
    if value.starts_with('[') {
        return classify_arbitrary(value);
    }
    if value.starts_with('(') {
        return classify_custom_property(value);
    }
    if value.contains(['[', ']', '(', ')']) {
        return None;
    }

    Some(ValueClass {
        numeric: is_numeric(value),
        preset: true,
        ..Default::default()
    })
}

/// Check if a value is a bare unsigned number (`4`, `0.5`).
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// Check if a value is a `#` hex color with 3, 4, 6 or 8 digits.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

fn classify_arbitrary(value: &str) -> Option<ValueClass> {
    let inner = unwrap_delimited(value)?;
    let (type_hint, content) = split_type_hint(inner);
    if content.trim().is_empty() {
        return None;
    }

    let (arbitrary_type, arbitrary_value) = if is_hex_color(content) {
        (Some(ArbitraryType::Hex), content.to_string())
    } else if let Some(args) = function_args(content, "rgba") {
        non_empty(args)?;
        (Some(ArbitraryType::Rgba), content.to_string())
    } else if let Some(args) = function_args(content, "rgb") {
        non_empty(args)?;
        (Some(ArbitraryType::Rgb), content.to_string())
    } else if let Some(args) = function_args(content, "url") {
        (Some(ArbitraryType::Url), strip_quotes(non_empty(args)?).to_string())
    } else if let Some(args) = function_args(content, "var") {
        (Some(ArbitraryType::Var), non_empty(args)?.to_string())
    } else if let Some(args) = function_args(content, "calc") {
        (Some(ArbitraryType::Calc), underscores_to_spaces(non_empty(args)?))
    } else if let Some(args) = function_args(content, "theme") {
        (Some(ArbitraryType::Theme), strip_quotes(non_empty(args)?).to_string())
    } else if content.contains("url(") {
        (None, content.to_string())
    } else {
        (None, underscores_to_spaces(content))
    };

    Some(ValueClass {
        arbitrary: true,
        arbitrary_type,
        arbitrary_value: Some(arbitrary_value),
        type_hint: type_hint.map(str::to_string),
        ..Default::default()
    })
}

fn classify_custom_property(value: &str) -> Option<ValueClass> {
    let inner = unwrap_delimited(value)?;
    let (type_hint, name) = split_type_hint(inner);
    if !is_custom_property_name(name) {
        return None;
    }

    Some(ValueClass {
        custom_property: true,
        // Typed references go through the receiving family's arbitrary gate.
        arbitrary: type_hint.is_some(),
        arbitrary_value: Some(format!("var({name})")),
        type_hint: type_hint.map(str::to_string),
        ..Default::default()
    })
}

fn is_custom_property_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|ident| {
        !ident.is_empty()
            && ident
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Index of the delimiter closing the one at the start of `s`.
///
/// Tracks `[]` and `()` nesting and requires the kinds to match.
pub(crate) fn closing_index(s: &str) -> Option<usize> {
    let mut stack = Vec::new();
    for (i, c) in s.char_indices() {
        match c {
            '[' | '(' => stack.push(c),
            ']' | ')' => {
                let open = stack.pop()?;
                if (open, c) != ('[', ']') && (open, c) != ('(', ')') {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Inner content of `[...]` or `(...)` when the closing delimiter is last.
fn unwrap_delimited(value: &str) -> Option<&str> {
    let end = closing_index(value)?;
    if end != value.len() - 1 {
        return None;
    }
    non_empty(&value[1..end])
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// Split a known `hint:` prefix off arbitrary content.
fn split_type_hint(content: &str) -> (Option<&str>, &str) {
    match content.split_once(':') {
        Some((hint, rest)) if TYPE_HINTS.contains(&hint) => (Some(hint), rest),
        _ => (None, content),
    }
}

/// Arguments of `name(...)` when the call spans the whole content.
fn function_args<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let call = content.strip_prefix(name)?;
    if !call.starts_with('(') {
        return None;
    }
    let end = closing_index(call)?;
    (end == call.len() - 1).then(|| &call[1..end])
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// `_` separates words inside arbitrary values; `\_` is a literal underscore.
fn underscores_to_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}
