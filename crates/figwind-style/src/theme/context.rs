//! Context resolver: dotted-path lookup against an injected theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value returned by a theme lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Number(f32),
    String(String),
    /// Tuple-style entries such as `["0.875rem", "1.25rem"]` for font sizes
    /// or a font family stack.
    List(Vec<String>),
}

impl ThemeValue {
    /// Render the value as CSS text (lists are comma joined).
    pub fn to_css(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(items) => items.join(", "),
        }
    }

    /// First element for lists, the value itself otherwise.
    pub fn head(&self) -> String {
        match self {
            Self::List(items) => items.first().cloned().unwrap_or_default(),
            other => other.to_css(),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<f32> for ThemeValue {
    fn from(n: f32) -> Self {
        Self::Number(n)
    }
}

/// Resolve a dotted theme path (`colors.blue.200`).
///
/// Implementations return `None` for any missing segment.
pub trait ThemeLookup: Sync {
    fn theme(&self, path: &str) -> Option<ThemeValue>;
}

impl<F> ThemeLookup for F
where
    F: Fn(&str) -> Option<ThemeValue> + Sync,
{
    fn theme(&self, path: &str) -> Option<ThemeValue> {
        self(path)
    }
}

/// Read-only theme access handed to every rule.
///
/// `Context` is `Copy`; pass it by value or reference freely.
///
/// # Example
///
/// ```
/// use figwind_style::theme::{Context, ThemeValue};
///
/// let lookup = |path: &str| (path == "colors.blue.200").then(|| ThemeValue::from("#bfdbfe"));
/// let ctx = Context::new(&lookup);
///
/// assert_eq!(ctx.resolve("colors", "blue-200"), Some(ThemeValue::from("#bfdbfe")));
/// assert_eq!(Context::empty().resolve("colors", "blue-200"), None);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Context<'a> {
    lookup: Option<&'a dyn ThemeLookup>,
}

impl<'a> Context<'a> {
    /// Create a context over a theme lookup.
    pub fn new(lookup: &'a dyn ThemeLookup) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }

    /// A context with no theme; every lookup misses.
    pub const fn empty() -> Self {
        Self { lookup: None }
    }

    /// Check if a theme is attached.
    pub fn has_theme(&self) -> bool {
        self.lookup.is_some()
    }

    /// Look up a raw dotted path.
    pub fn theme(&self, path: &str) -> Option<ThemeValue> {
        self.lookup?.theme(path)
    }

    /// Look up a utility value in a theme namespace.
    ///
    /// `blue-200` is tried as `colors.blue.200` first and then verbatim as
    /// `colors.blue-200`. An empty key looks up `{namespace}.DEFAULT`.
    pub fn resolve(&self, namespace: &str, key: &str) -> Option<ThemeValue> {
        self.lookup?;

        let found = if key.is_empty() {
            self.theme(&format!("{namespace}.DEFAULT"))
        } else {
            let dotted = format!("{namespace}.{}", key.replace('-', "."));
            self.theme(&dotted).or_else(|| {
                key.contains('-')
                    .then(|| self.theme(&format!("{namespace}.{key}")))
                    .flatten()
            })
        };

        if found.is_none() {
            tracing::trace!("theme miss: {}.{}", namespace, key);
        }
        found
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("has_theme", &self.has_theme())
            .finish()
    }
}
