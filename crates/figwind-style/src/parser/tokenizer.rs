//! Prefix tokenizer.
//!
//! Splits a raw utility token into its family prefix, value and markers:
//!
//! ```text
//! token := ['!'] ['-'] prefix ('-' value)? ['/' opacity] ['!']
//! ```
//!
//! Bracket and paren depth is tracked while looking for the opacity suffix,
//! so `bg-[rgba(0,0,0,0.5)]/20` yields `/20` and never a `/` from inside the
//! brackets.

use super::classify::{classify_value, closing_index};
use crate::types::ParsedToken;

/// Tokenize `token` against a family's prefix table.
///
/// A prefix matches when the token (after its `!` and `-` markers) equals it
/// or continues with `prefix-`. An exact match always wins. Otherwise the
/// longest prefix whose remainder is a well-formed value is chosen, falling
/// back to the shortest match when no remainder is well-formed.
///
/// The `/suffix` is only split off when `has_slash` is set; families without
/// opacity keep it in the value (`w-1/2`).
///
/// Returns `None` when no prefix matches or the value is malformed (empty
/// `[]`/`()`, unbalanced delimiters, trailing content after the closing
/// delimiter).
///
/// # Example
///
/// ```
/// use figwind_style::parser::parse_utility_token;
///
/// let token = parse_utility_token("border-x-4", &["border", "border-x"], false).unwrap();
/// assert_eq!(token.prefix, "border-x");
/// assert_eq!(token.value, "4");
/// assert!(token.numeric);
/// ```
pub fn parse_utility_token(token: &str, prefixes: &[&str], has_slash: bool) -> Option<ParsedToken> {
    let (body, important) = strip_important(token);
    let (body, negative) = match body.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (body, false),
    };
    let (body, slash) = if has_slash {
        split_slash(body)
    } else {
        (body, None)
    };

    let (prefix, value) = match_prefix(body, prefixes)?;
    let class = classify_value(value)?;

    Some(ParsedToken {
        raw: token.to_string(),
        prefix: prefix.to_string(),
        value: value.to_string(),
        negative,
        important,
        slash: slash.map(str::to_string),
        custom_property: class.custom_property,
        arbitrary: class.arbitrary,
        arbitrary_type: class.arbitrary_type,
        arbitrary_value: class.arbitrary_value,
        type_hint: class.type_hint,
        numeric: class.numeric,
        preset: class.preset,
    })
}

/// Strip a leading or trailing `!`.
fn strip_important(token: &str) -> (&str, bool) {
    if let Some(rest) = token.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = token.strip_suffix('!') {
        (rest, true)
    } else {
        (token, false)
    }
}

/// Split off the last top-level `/suffix`.
///
/// The suffix must be a plain number or a bracketed value; anything else
/// stays in the body.
fn split_slash(body: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    let mut split = None;

    for (i, c) in body.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => split = Some(i),
            _ => {}
        }
    }

    match split {
        Some(i) if i > 0 && is_slash_suffix(&body[i + 1..]) => (&body[..i], Some(&body[i + 1..])),
        _ => (body, None),
    }
}

fn is_slash_suffix(suffix: &str) -> bool {
    if suffix.starts_with('[') {
        return suffix.len() > 2 && closing_index(suffix) == Some(suffix.len() - 1);
    }
    !suffix.is_empty()
        && !suffix.starts_with('.')
        && !suffix.ends_with('.')
        && suffix.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Pick the prefix and the remainder after `prefix-`.
fn match_prefix<'p, 'b>(body: &'b str, prefixes: &[&'p str]) -> Option<(&'p str, &'b str)> {
    let mut candidates: Vec<(&'p str, &'b str)> = Vec::new();

    for &prefix in prefixes {
        if body == prefix {
            return Some((prefix, ""));
        }
        if let Some(rest) = body.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) {
            candidates.push((prefix, rest));
        }
    }

    candidates
        .iter()
        .filter(|(_, value)| is_well_formed(value))
        .max_by_key(|(prefix, _)| prefix.len())
        .or_else(|| candidates.iter().min_by_key(|(prefix, _)| prefix.len()))
        .copied()
}

/// Check if a remainder could be a value on its own.
fn is_well_formed(value: &str) -> bool {
    if value.starts_with('[') || value.starts_with('(') {
        return closing_index(value) == Some(value.len() - 1);
    }
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '/' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArbitraryType;

    const BORDER: &[&str] = &["border", "border-x", "border-y", "border-t"];

    #[test]
    fn longest_well_formed_prefix_wins() {
        let token = parse_utility_token("border-x-4", BORDER, false).unwrap();
        assert_eq!(token.prefix, "border-x");
        assert_eq!(token.value, "4");
        assert!(token.numeric && token.preset);
        assert!(!token.negative);
    }

    #[test]
    fn overlapping_prefix_edge_cases() {
        let token = parse_utility_token("border-xx-2", BORDER, false).unwrap();
        assert_eq!((token.prefix.as_str(), token.value.as_str()), ("border", "xx-2"));

        let token = parse_utility_token("border-x-x-2", BORDER, false).unwrap();
        assert_eq!((token.prefix.as_str(), token.value.as_str()), ("border-x", "x-2"));
    }

    #[test]
    fn exact_match_wins() {
        let token = parse_utility_token("border-x", BORDER, false).unwrap();
        assert_eq!(token.prefix, "border-x");
        assert_eq!(token.value, "");
        assert!(token.preset);
    }

    #[test]
    fn falls_back_to_shortest_when_nothing_is_well_formed() {
        // "t--" is not well formed, neither is "x-t--"
        let token = parse_utility_token("border-x-t--", BORDER, false);
        assert!(token.is_some_and(|t| t.prefix == "border"));
    }

    #[test]
    fn negative_and_important_markers() {
        let token = parse_utility_token("!-mt-6", &["mt"], false).unwrap();
        assert!(token.important && token.negative);
        assert_eq!(token.value, "6");

        let token = parse_utility_token("-mt-6!", &["mt"], false).unwrap();
        assert!(token.important && token.negative);

        let token = parse_utility_token("mt-6", &["mt"], false).unwrap();
        assert!(!token.important && !token.negative);
    }

    #[test]
    fn slash_outside_brackets_only() {
        let token = parse_utility_token("bg-[rgba(0,0,0,0.5)]/20", &["bg"], true).unwrap();
        assert_eq!(token.slash.as_deref(), Some("20"));
        assert_eq!(token.arbitrary_type, Some(ArbitraryType::Rgba));
        assert_eq!(token.arbitrary_value.as_deref(), Some("rgba(0,0,0,0.5)"));

        let token = parse_utility_token("bg-[url(/img/a.png)]", &["bg"], true).unwrap();
        assert_eq!(token.slash, None);
        assert_eq!(token.arbitrary_value.as_deref(), Some("/img/a.png"));
    }

    #[test]
    fn slash_kept_in_value_without_opacity() {
        let token = parse_utility_token("w-1/2", &["w"], false).unwrap();
        assert_eq!(token.value, "1/2");
        assert_eq!(token.slash, None);
    }

    #[test]
    fn calc_is_unwrapped() {
        let token = parse_utility_token("w-[calc(100%-2rem)]", &["w"], false).unwrap();
        assert_eq!(token.prefix, "w");
        assert!(token.arbitrary);
        assert_eq!(token.arbitrary_type, Some(ArbitraryType::Calc));
        assert_eq!(token.arbitrary_value.as_deref(), Some("100%-2rem"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(parse_utility_token("bg-[]", &["bg"], true).is_none());
        assert!(parse_utility_token("bg-()", &["bg"], true).is_none());
        assert!(parse_utility_token("bg-[#fff", &["bg"], true).is_none());
        assert!(parse_utility_token("bg-[#fff]x", &["bg"], true).is_none());
        assert!(parse_utility_token("bg", &["p"], false).is_none());
    }

    #[test]
    fn split_slash_suffix_forms() {
        assert_eq!(split_slash("bg-red-500/50"), ("bg-red-500", Some("50")));
        assert_eq!(split_slash("bg-red-500/[.5]"), ("bg-red-500", Some("[.5]")));
        assert_eq!(split_slash("bg-red-500/x"), ("bg-red-500/x", None));
        assert_eq!(split_slash("bg-red-500/"), ("bg-red-500/", None));
    }
}
