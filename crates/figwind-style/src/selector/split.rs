//! Class name splitting.

use super::modifier::{Modifier, parse_modifier, sort_modifiers_for_selector};

/// Split a class name into its modifiers and the utility.
///
/// Splits on `:` outside `[]` and `()`, so arbitrary values and arbitrary
/// variants keep their colons.
///
/// # Example
///
/// ```
/// use figwind_style::selector::split_class;
///
/// let (modifiers, utility) = split_class("md:[&:hover]:bg-[url(a:b)]");
/// assert_eq!(modifiers, ["md", "[&:hover]"]);
/// assert_eq!(utility, "bg-[url(a:b)]");
/// ```
pub fn split_class(class: &str) -> (Vec<&str>, &str) {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (parts, &class[start..])
}

/// Split a class name and parse its modifiers in selector order.
pub fn parse_modifiers(class: &str) -> (Vec<Modifier>, &str) {
    let (raw, utility) = split_class(class);
    let modifiers = raw.into_iter().map(parse_modifier).collect();
    (sort_modifiers_for_selector(modifiers), utility)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utility() {
        assert_eq!(split_class("p-4"), (vec![], "p-4"));
        assert_eq!(split_class(""), (vec![], ""));
    }

    #[test]
    fn nested_colons_stay_put() {
        let (modifiers, utility) = split_class("dark:group-hover:grid-cols-[1fr_minmax(0,1fr)]");
        assert_eq!(modifiers, ["dark", "group-hover"]);
        assert_eq!(utility, "grid-cols-[1fr_minmax(0,1fr)]");

        let (modifiers, utility) = split_class("supports-[display:grid]:grid");
        assert_eq!(modifiers, ["supports-[display:grid]"]);
        assert_eq!(utility, "grid");
    }

    #[test]
    fn trailing_colon_leaves_empty_utility() {
        assert_eq!(split_class("hover:"), (vec!["hover"], ""));
    }

    #[test]
    fn modifiers_come_back_sorted() {
        let (modifiers, utility) = parse_modifiers("hover:md:before:bg-red-500");
        let raw: Vec<&str> = modifiers.iter().map(|m| m.raw.as_str()).collect();
        assert_eq!(raw, ["md", "hover", "before"]);
        assert_eq!(utility, "bg-red-500");
    }
}
