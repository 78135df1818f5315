//! Flat theme variables.

use std::collections::BTreeMap;

use super::{ThemeLookup, ThemeValue};

/// A flat map of theme variables.
///
/// Keys may be written as dotted paths (`colors.blue.200`) or as CSS custom
/// property names (`--colors-blue-200`); lookups try both spellings.
/// Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeVariables {
    entries: BTreeMap<String, String>,
}

fn bare(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}

impl ThemeVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable. A leading `--` is dropped.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries.insert(bare(&name).to_string(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(bare(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(bare(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variables in key order, without the `--` prefix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ThemeVariables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |vars, (name, value)| vars.with(name, value))
    }
}

impl ThemeLookup for ThemeVariables {
    fn theme(&self, path: &str) -> Option<ThemeValue> {
        let value = self
            .get(path)
            .or_else(|| self.get(&path.replace('.', "-")))?;

        Some(match value.parse::<f32>() {
            Ok(n) => ThemeValue::Number(n),
            Err(_) => ThemeValue::String(value.to_string()),
        })
    }
}
