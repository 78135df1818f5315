//! Selector composition.

use std::fmt;

use serde::Serialize;

use super::modifier::{Modifier, ModifierKind, group_state_selector, sort_modifiers_for_selector};

/// A CSS selector together with the at-rules wrapping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComposedSelector {
    /// Outermost first.
    pub at_rules: Vec<String>,
    pub selector: String,
}

impl ComposedSelector {
    /// A bare class selector with no at-rules.
    pub fn class(class: &str) -> Self {
        Self {
            at_rules: Vec::new(),
            selector: format!(".{}", Escaped(class)),
        }
    }

    pub fn has_at_rules(&self) -> bool {
        !self.at_rules.is_empty()
    }
}

impl fmt::Display for ComposedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.at_rules {
            write!(f, "{} {{ ", rule)?;
        }
        write!(f, "{}", self.selector)?;
        for _ in &self.at_rules {
            write!(f, " }}")?;
        }
        Ok(())
    }
}

/// CSS identifier escaping.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cssparser::serialize_identifier(self.0, f)
    }
}

/// Escape a class name for use in a selector.
pub fn escape_class(class: &str) -> String {
    Escaped(class).to_string()
}

/// Build the selector for `class` under `modifiers`.
///
/// Modifiers are applied in priority order: at-rules wrap the selector,
/// group and peer states become ancestor and sibling compounds, element
/// states and pseudo-elements are appended to the class, and arbitrary
/// variants substitute the result for `&`. Unknown modifiers are skipped.
///
/// # Example
///
/// ```
/// use figwind_style::selector::{compose_selector, parse_modifier};
///
/// let modifiers = [parse_modifier("hover"), parse_modifier("md")];
/// let composed = compose_selector("md:hover:p-4", &modifiers);
/// assert_eq!(composed.at_rules, ["@media (width >= 768px)"]);
/// assert_eq!(composed.selector, r".md\:hover\:p-4:hover");
/// ```
pub fn compose_selector(class: &str, modifiers: &[Modifier]) -> ComposedSelector {
    let mut at_rules = Vec::new();
    let mut ancestors = String::new();
    let mut siblings = String::new();
    let mut states = String::new();
    let mut elements = String::new();
    let mut templates = Vec::new();

    for modifier in sort_modifiers_for_selector(modifiers.to_vec()) {
        if let Some(rule) = modifier.kind.at_rule() {
            at_rules.push(rule);
            continue;
        }
        match &modifier.kind {
            ModifierKind::Group { state, name } => {
                if let Some(state) = group_state_selector(state) {
                    ancestors.push_str(&format!("{}{} ", marker("group", name.as_deref()), state));
                }
            }
            ModifierKind::Peer { state, name } => {
                if let Some(state) = group_state_selector(state) {
                    siblings.push_str(&format!("{}{} ~ ", marker("peer", name.as_deref()), state));
                }
            }
            ModifierKind::Arbitrary { selector } => templates.push(selector.clone()),
            kind @ ModifierKind::PseudoElement { .. } => {
                elements.push_str(&kind.class_suffix().unwrap_or_default());
            }
            kind => match kind.class_suffix() {
                Some(suffix) => states.push_str(&suffix),
                None => tracing::debug!("modifier {} does not apply to {}", modifier, class),
            },
        }
    }

    let mut selector = format!(
        "{}{}.{}{}{}",
        ancestors,
        siblings,
        Escaped(class),
        states,
        elements
    );
    for template in templates {
        selector = template.replace('&', &selector);
    }

    ComposedSelector { at_rules, selector }
}

fn marker(kind: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!(".{}", Escaped(&format!("{kind}/{name}"))),
        None => format!(".{kind}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::parse_modifier;

    fn compose(class: &str, modifiers: &[&str]) -> ComposedSelector {
        let modifiers: Vec<Modifier> = modifiers.iter().map(|m| parse_modifier(m)).collect();
        compose_selector(class, &modifiers)
    }

    #[test]
    fn escapes_class_names() {
        assert_eq!(escape_class("w-1/2"), r"w-1\/2");
        assert_eq!(escape_class("bg-[#fff]"), r"bg-\[\#fff\]");
        assert_eq!(escape_class("p-4"), "p-4");
        assert_eq!(ComposedSelector::class("mt-0.5").selector, r".mt-0\.5");
    }

    #[test]
    fn at_rules_in_priority_order() {
        let composed = compose("x", &["dark", "lg", "motion-reduce"]);
        assert_eq!(
            composed.at_rules,
            [
                "@media (width >= 1024px)",
                "@media (prefers-color-scheme: dark)",
                "@media (prefers-reduced-motion: reduce)",
            ]
        );
        assert_eq!(composed.selector, ".x");
        assert_eq!(
            composed.to_string(),
            "@media (width >= 1024px) { @media (prefers-color-scheme: dark) { \
             @media (prefers-reduced-motion: reduce) { .x } } }"
        );
    }

    #[test]
    fn group_and_peer_compounds() {
        assert_eq!(compose("x", &["group-hover"]).selector, ".group:hover .x");
        assert_eq!(
            compose("x", &["group-focus/card"]).selector,
            r".group\/card:focus .x"
        );
        assert_eq!(
            compose("x", &["peer-invalid", "group-hover"]).selector,
            ".group:hover .peer:invalid ~ .x"
        );
    }

    #[test]
    fn element_states_then_pseudo_elements() {
        assert_eq!(
            compose("x", &["before", "hover", "first"]).selector,
            ".x:hover:first-child::before"
        );
        assert_eq!(
            compose("x", &["data-[state=open]"]).selector,
            ".x[data-state=\"open\"]"
        );
    }

    #[test]
    fn arbitrary_variants_wrap_everything() {
        assert_eq!(compose("x", &["[&>*]", "hover"]).selector, ".x:hover>*");
        assert_eq!(compose("x", &["[.dark_&]"]).selector, ".dark .x");

        let composed = compose("x", &["[@supports(display:grid)]"]);
        assert_eq!(composed.at_rules, ["@supports (display:grid)"]);
    }

    #[test]
    fn unknown_modifiers_are_skipped() {
        assert_eq!(compose("x", &["wobble", "hover"]).selector, ".x:hover");
    }
}
