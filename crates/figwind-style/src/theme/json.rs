//! `serde_json::Value` as a theme.
//!
//! Path segments are joined greedily with `.` or `-` while walking the
//! object, so keys such as `1.5` (spacing) or `light-blue` (colors) resolve
//! from a path split on every separator. An object reached at the end of the
//! path resolves to its `DEFAULT` entry.

use serde_json::Value;

use super::{ThemeLookup, ThemeValue};

impl ThemeLookup for Value {
    fn theme(&self, path: &str) -> Option<ThemeValue> {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        walk(self, &segments).and_then(to_theme_value)
    }
}

fn walk<'v>(value: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    if segments.is_empty() {
        return Some(value);
    }

    match value {
        Value::Object(map) => (1..=segments.len()).rev().find_map(|n| {
            [".", "-"].into_iter().find_map(|sep| {
                let child = map.get(&segments[..n].join(sep))?;
                walk(child, &segments[n..])
            })
        }),
        Value::Array(items) => {
            let index: usize = segments[0].parse().ok()?;
            walk(items.get(index)?, &segments[1..])
        }
        _ => None,
    }
}

fn to_theme_value(value: &Value) -> Option<ThemeValue> {
    match value {
        Value::Number(n) => n.as_f64().map(|n| ThemeValue::Number(n as f32)),
        Value::String(s) => Some(ThemeValue::String(s.clone())),
        Value::Array(items) => Some(ThemeValue::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        Value::Object(map) => map.get("DEFAULT").and_then(to_theme_value),
        Value::Bool(_) | Value::Null => None,
    }
}

/// Text of a list element; objects such as `{ "lineHeight": "1rem" }`
/// contribute their first scalar.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.values().find_map(scalar_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Context;
    use serde_json::json;

    fn theme() -> Value {
        json!({
            "colors": {
                "blue": { "200": "#bfdbfe", "DEFAULT": "#3b82f6" },
                "light-blue": { "500": "#0ea5e9" },
                "brand": "#ff5500"
            },
            "spacing": { "1.5": "0.375rem", "4": "1rem" },
            "zIndex": { "modal": 100 },
            "fontSize": { "sm": ["0.875rem", { "lineHeight": "1.25rem" }] },
            "fontFamily": { "sans": ["Inter", "sans-serif"] }
        })
    }

    #[test]
    fn nested_and_greedy_keys() {
        let theme = theme();
        let ctx = Context::new(&theme);
        assert_eq!(ctx.resolve("colors", "blue-200"), Some(ThemeValue::from("#bfdbfe")));
        assert_eq!(
            ctx.resolve("colors", "light-blue-500"),
            Some(ThemeValue::from("#0ea5e9"))
        );
        assert_eq!(ctx.resolve("spacing", "1.5"), Some(ThemeValue::from("0.375rem")));
        assert_eq!(ctx.resolve("zIndex", "modal"), Some(ThemeValue::Number(100.0)));
    }

    #[test]
    fn default_entries() {
        let theme = theme();
        assert_eq!(theme.theme("colors.blue"), Some(ThemeValue::from("#3b82f6")));
        assert_eq!(theme.theme("colors"), None);
    }

    #[test]
    fn lists() {
        let theme = theme();
        assert_eq!(
            theme.theme("fontSize.sm"),
            Some(ThemeValue::List(vec!["0.875rem".into(), "1.25rem".into()]))
        );
        assert_eq!(
            theme.theme("fontFamily.sans").map(|v| v.to_css()),
            Some("Inter, sans-serif".to_string())
        );
    }

    #[test]
    fn misses() {
        let theme = theme();
        assert_eq!(theme.theme("colors.red.500"), None);
        assert_eq!(theme.theme("colors.blue.200.x"), None);
        assert_eq!(Value::Null.theme("colors"), None);
    }
}
