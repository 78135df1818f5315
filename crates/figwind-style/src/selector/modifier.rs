//! Modifier classification and precedence.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::rules::scales;

static NTH_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(odd|even|-?\d*n(\s*[+-]\s*\d+)?|\d+)$").expect("valid nth regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z][\w-]*(?:[~|^$*]?=(?:"[^"]*"|'[^']*'|[^\]\s]+))?$"#)
        .expect("valid attribute regex")
});

/// One selector-level modifier (`md`, `hover`, `group-focus/item`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Modifier {
    /// The modifier text as written, without the trailing `:`.
    pub raw: String,
    #[serde(flatten)]
    pub kind: ModifierKind,
}

/// What a modifier selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModifierKind {
    /// Named breakpoint (`md`, `max-lg`).
    Responsive { breakpoint: String, max: bool },
    /// Arbitrary breakpoint (`min-[600px]`, `max-[40rem]`).
    Breakpoint { value: String, max: bool },
    /// Container query (`@md`, `@[400px]`, `@lg/sidebar`).
    Container { size: String, name: Option<String> },
    /// Media or supports feature (`print`, `portrait`, `supports-[display:grid]`).
    Media { name: String, query: String },
    /// `dark`
    DarkMode,
    /// `motion-safe` / `motion-reduce`
    Motion { reduce: bool },
    /// Ancestor state (`group-hover`, `group-focus/item`).
    Group { state: String, name: Option<String> },
    /// Preceding sibling state (`peer-checked`, `peer-invalid/email`).
    Peer { state: String, name: Option<String> },
    /// Interaction pseudo-class (`hover`, `focus-visible`).
    Pseudo { name: String },
    /// Element state (`disabled`, `checked`, `open`).
    State { name: String },
    /// Structural position (`first`, `odd`, `last-of-type`).
    Logical { name: String },
    /// `nth-3`, `nth-[2n+1]`
    Nth { expr: String },
    /// `nth-of-type-2`
    NthOfType { expr: String },
    /// `nth-last-of-type-2`
    NthLastOfType { expr: String },
    /// `data-active`, `data-[state=open]`
    Data { attribute: String, value: Option<String> },
    /// `aria-checked`, `aria-[sort=ascending]`
    Aria { attribute: String, value: Option<String> },
    /// Attribute or direction check on the element (`rtl`, `[open]`).
    Attribute { selector: String },
    /// `before`, `placeholder`, `file`, ...
    PseudoElement { name: String },
    /// Arbitrary selector or at-rule (`[&>*]`, `[@supports(display:grid)]`).
    Arbitrary { selector: String },
    /// Anything unrecognized.
    Unknown,
}

impl ModifierKind {
    /// Selector precedence; lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Responsive { .. } | Self::Breakpoint { .. } | Self::Container { .. } => 1,
            Self::Media { .. } | Self::DarkMode | Self::Motion { .. } => 2,
            Self::Group { .. } | Self::Peer { .. } => 3,
            Self::Pseudo { .. }
            | Self::State { .. }
            | Self::Logical { .. }
            | Self::Nth { .. }
            | Self::NthOfType { .. }
            | Self::NthLastOfType { .. }
            | Self::Data { .. }
            | Self::Aria { .. }
            | Self::Attribute { .. } => 4,
            Self::PseudoElement { .. } => 5,
            Self::Arbitrary { .. } => 6,
            Self::Unknown => 99,
        }
    }

    /// The wrapping at-rule, for modifiers that produce one.
    pub fn at_rule(&self) -> Option<String> {
        Some(match self {
            Self::Responsive { breakpoint, max } => {
                let px = scales::breakpoint(breakpoint)?;
                width_query("media", "", &format!("{px}px"), *max)
            }
            Self::Breakpoint { value, max } => width_query("media", "", value, *max),
            Self::Container { size, name } => {
                let name = name.as_deref().map(|n| format!("{n} ")).unwrap_or_default();
                let width = match scales::container(size) {
                    Some(length) => length.to_string(),
                    None => size.clone(),
                };
                width_query("container", &name, &width, false)
            }
            Self::Media { name, query } if name == "supports" => format!("@supports {query}"),
            Self::Media { query, .. } => format!("@media {query}"),
            Self::DarkMode => "@media (prefers-color-scheme: dark)".to_string(),
            Self::Motion { reduce: true } => "@media (prefers-reduced-motion: reduce)".to_string(),
            Self::Motion { reduce: false } => {
                "@media (prefers-reduced-motion: no-preference)".to_string()
            }
            Self::Arbitrary { selector } if selector.starts_with('@') => selector.clone(),
            _ => return None,
        })
    }

    /// Text appended to the element's own selector.
    pub fn class_suffix(&self) -> Option<String> {
        Some(match self {
            Self::Pseudo { name } => format!(":{name}"),
            Self::State { name } => state_selector(name)?.to_string(),
            Self::Logical { name } => format!(":{}", logical_selector(name)?),
            Self::Nth { expr } => format!(":nth-child({expr})"),
            Self::NthOfType { expr } => format!(":nth-of-type({expr})"),
            Self::NthLastOfType { expr } => format!(":nth-last-of-type({expr})"),
            Self::Data { attribute, value } => attribute_selector("data", attribute, value.as_deref()),
            Self::Aria { attribute, value } => attribute_selector("aria", attribute, value.as_deref()),
            Self::Attribute { selector } => selector.clone(),
            Self::PseudoElement { name } => format!("::{}", pseudo_element(name)?),
            _ => return None,
        })
    }
}

fn width_query(rule: &str, name: &str, width: &str, max: bool) -> String {
    let op = if max { "<" } else { ">=" };
    format!("@{rule} {name}(width {op} {width})")
}

fn attribute_selector(prefix: &str, attribute: &str, value: Option<&str>) -> String {
    match (prefix, value) {
        (_, Some(value)) => format!("[{prefix}-{attribute}=\"{value}\"]"),
        ("aria", None) => format!("[aria-{attribute}=\"true\"]"),
        (_, None) => format!("[{prefix}-{attribute}]"),
    }
}

impl Modifier {
    /// Selector precedence; see [`ModifierKind::priority`].
    pub fn priority(&self) -> u8 {
        self.kind.priority()
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == ModifierKind::Unknown
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

const PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "focus",
    "focus-visible",
    "focus-within",
    "active",
    "visited",
    "target",
];

fn state_selector(name: &str) -> Option<&'static str> {
    Some(match name {
        "disabled" => ":disabled",
        "enabled" => ":enabled",
        "checked" => ":checked",
        "indeterminate" => ":indeterminate",
        "default" => ":default",
        "required" => ":required",
        "optional" => ":optional",
        "valid" => ":valid",
        "invalid" => ":invalid",
        "user-valid" => ":user-valid",
        "user-invalid" => ":user-invalid",
        "in-range" => ":in-range",
        "out-of-range" => ":out-of-range",
        "placeholder-shown" => ":placeholder-shown",
        "autofill" => ":autofill",
        "read-only" => ":read-only",
        "empty" => ":empty",
        "open" => ":is([open], :popover-open)",
        "inert" => ":is([inert], [inert] *)",
        _ => return None,
    })
}

fn logical_selector(name: &str) -> Option<&'static str> {
    Some(match name {
        "first" => "first-child",
        "last" => "last-child",
        "only" => "only-child",
        "odd" => "nth-child(odd)",
        "even" => "nth-child(even)",
        "first-of-type" => "first-of-type",
        "last-of-type" => "last-of-type",
        "only-of-type" => "only-of-type",
        _ => return None,
    })
}

fn pseudo_element(name: &str) -> Option<&'static str> {
    Some(match name {
        "before" => "before",
        "after" => "after",
        "placeholder" => "placeholder",
        "file" => "file-selector-button",
        "marker" => "marker",
        "selection" => "selection",
        "first-line" => "first-line",
        "first-letter" => "first-letter",
        "backdrop" => "backdrop",
        _ => return None,
    })
}

fn media_query(name: &str) -> Option<&'static str> {
    Some(match name {
        "print" => "print",
        "portrait" => "(orientation: portrait)",
        "landscape" => "(orientation: landscape)",
        "contrast-more" => "(prefers-contrast: more)",
        "contrast-less" => "(prefers-contrast: less)",
        "forced-colors" => "(forced-colors: active)",
        "pointer-fine" => "(pointer: fine)",
        "pointer-coarse" => "(pointer: coarse)",
        _ => return None,
    })
}

/// Parse one modifier.
///
/// Never fails; unrecognized text becomes [`ModifierKind::Unknown`].
///
/// # Example
///
/// ```
/// use figwind_style::selector::{ModifierKind, parse_modifier};
///
/// let m = parse_modifier("group-hover/item");
/// assert_eq!(m.priority(), 3);
/// assert!(matches!(m.kind, ModifierKind::Group { ref name, .. } if name.as_deref() == Some("item")));
/// ```
pub fn parse_modifier(raw: &str) -> Modifier {
    let kind = classify(raw).unwrap_or_else(|| {
        tracing::debug!("unknown modifier: {}", raw);
        ModifierKind::Unknown
    });
    Modifier {
        raw: raw.to_string(),
        kind,
    }
}

fn classify(raw: &str) -> Option<ModifierKind> {
    if raw.is_empty() {
        return None;
    }

    if let Some(inner) = bracketed(raw) {
        return arbitrary(inner);
    }
    if let Some(rest) = raw.strip_prefix('@') {
        return container(rest);
    }
    if scales::breakpoint(raw).is_some() {
        return Some(ModifierKind::Responsive {
            breakpoint: raw.to_string(),
            max: false,
        });
    }
    if let Some(bp) = raw.strip_prefix("max-") {
        if scales::breakpoint(bp).is_some() {
            return Some(ModifierKind::Responsive {
                breakpoint: bp.to_string(),
                max: true,
            });
        }
        return bracketed(bp).map(|value| ModifierKind::Breakpoint {
            value: value.to_string(),
            max: true,
        });
    }
    if let Some(value) = raw.strip_prefix("min-").and_then(bracketed) {
        return Some(ModifierKind::Breakpoint {
            value: value.to_string(),
            max: false,
        });
    }

    match raw {
        "dark" => return Some(ModifierKind::DarkMode),
        "motion-safe" => return Some(ModifierKind::Motion { reduce: false }),
        "motion-reduce" => return Some(ModifierKind::Motion { reduce: true }),
        "rtl" | "ltr" => {
            return Some(ModifierKind::Attribute {
                selector: format!(":where(:dir({raw}), [dir=\"{raw}\"], [dir=\"{raw}\"] *)"),
            });
        }
        _ => {}
    }
    if let Some(query) = media_query(raw) {
        return Some(ModifierKind::Media {
            name: raw.to_string(),
            query: query.to_string(),
        });
    }
    if let Some(inner) = raw.strip_prefix("supports-").and_then(bracketed) {
        return Some(ModifierKind::Media {
            name: "supports".to_string(),
            query: format!("({})", underscores_to_spaces(inner)),
        });
    }

    if let Some(rest) = raw.strip_prefix("group-") {
        let (state, name) = named_state(rest)?;
        return Some(ModifierKind::Group { state, name });
    }
    if let Some(rest) = raw.strip_prefix("peer-") {
        let (state, name) = named_state(rest)?;
        return Some(ModifierKind::Peer { state, name });
    }

    element_kind(raw)
}

/// Kinds that attach directly to the element's selector.
fn element_kind(raw: &str) -> Option<ModifierKind> {
    if PSEUDO_CLASSES.contains(&raw) {
        return Some(ModifierKind::Pseudo {
            name: raw.to_string(),
        });
    }
    if state_selector(raw).is_some() {
        return Some(ModifierKind::State {
            name: raw.to_string(),
        });
    }
    if logical_selector(raw).is_some() {
        return Some(ModifierKind::Logical {
            name: raw.to_string(),
        });
    }
    if pseudo_element(raw).is_some() {
        return Some(ModifierKind::PseudoElement {
            name: raw.to_string(),
        });
    }

    if let Some(expr) = raw.strip_prefix("nth-last-of-type-") {
        return Some(ModifierKind::NthLastOfType { expr: nth_expr(expr)? });
    }
    if let Some(expr) = raw.strip_prefix("nth-of-type-") {
        return Some(ModifierKind::NthOfType { expr: nth_expr(expr)? });
    }
    if let Some(expr) = raw.strip_prefix("nth-") {
        return Some(ModifierKind::Nth { expr: nth_expr(expr)? });
    }

    if let Some(rest) = raw.strip_prefix("data-") {
        let (attribute, value) = attribute_parts(rest)?;
        return Some(ModifierKind::Data { attribute, value });
    }
    if let Some(rest) = raw.strip_prefix("aria-") {
        let (attribute, value) = attribute_parts(rest)?;
        return Some(ModifierKind::Aria { attribute, value });
    }

    None
}

fn container(rest: &str) -> Option<ModifierKind> {
    let (size, name) = match rest.rsplit_once('/') {
        Some((size, name)) if !name.is_empty() && !name.contains(']') => (size, Some(name.to_string())),
        _ => (rest, None),
    };
    let size = match scales::container(size) {
        Some(_) => size,
        None => bracketed(size)?,
    };
    Some(ModifierKind::Container {
        size: size.to_string(),
        name,
    })
}

/// Split `hover/item` into a validated state and optional group name.
fn named_state(rest: &str) -> Option<(String, Option<String>)> {
    let (state, name) = match rest.rsplit_once('/') {
        Some((state, name)) if !name.is_empty() && !name.contains(']') => (state, Some(name.to_string())),
        _ => (rest, None),
    };
    group_state_selector(state)?;
    Some((state.to_string(), name))
}

/// Selector text for a group/peer state.
pub(crate) fn group_state_selector(state: &str) -> Option<String> {
    if let Some(inner) = bracketed(state) {
        let inner = underscores_to_spaces(inner);
        let inner = inner.strip_prefix('&').unwrap_or(&inner);
        return (!inner.is_empty()).then(|| inner.to_string());
    }
    match element_kind(state)? {
        kind @ ModifierKind::PseudoElement { .. } => {
            tracing::debug!("pseudo-element {:?} is not a group state", kind);
            None
        }
        kind => kind.class_suffix(),
    }
}

fn arbitrary(inner: &str) -> Option<ModifierKind> {
    let content = underscores_to_spaces(inner);
    if content.starts_with('@') {
        let at_rule = match content.find('(') {
            Some(i) if !content[..i].ends_with(' ') => format!("{} {}", &content[..i], &content[i..]),
            _ => content,
        };
        return Some(ModifierKind::Arbitrary { selector: at_rule });
    }
    if content.contains('&') {
        return Some(ModifierKind::Arbitrary { selector: content });
    }
    if ATTRIBUTE.is_match(&content) {
        return Some(ModifierKind::Attribute {
            selector: format!("[{content}]"),
        });
    }
    None
}

fn nth_expr(value: &str) -> Option<String> {
    let expr = match bracketed(value) {
        Some(inner) => underscores_to_spaces(inner),
        None => value.to_string(),
    };
    NTH_EXPR.is_match(&expr).then_some(expr)
}

fn attribute_parts(rest: &str) -> Option<(String, Option<String>)> {
    if let Some(inner) = bracketed(rest) {
        let inner = underscores_to_spaces(inner);
        return Some(match inner.split_once('=') {
            Some((attr, value)) if !attr.is_empty() => {
                let value = value.trim_matches(|c| c == '"' || c == '\'');
                (attr.to_string(), Some(value.to_string()))
            }
            Some(_) => return None,
            None if inner.is_empty() => return None,
            None => (inner, None),
        });
    }
    let valid = !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    valid.then(|| (rest.to_string(), None))
}

fn bracketed(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    (!inner.is_empty()).then_some(inner)
}

fn underscores_to_spaces(value: &str) -> String {
    value.replace('_', " ")
}

/// Stable sort by [`Modifier::priority`].
///
/// Modifiers of equal priority keep their input order.
pub fn sort_modifiers_for_selector(mut modifiers: Vec<Modifier>) -> Vec<Modifier> {
    modifiers.sort_by_key(Modifier::priority);
    modifiers
}
