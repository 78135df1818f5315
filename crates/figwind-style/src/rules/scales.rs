//! Built-in scales.
//!
//! The single definition of every preset table: utility rules use them to
//! accept keys and the lowering stage uses them to resolve the keys the
//! rules emitted.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::is_numeric;
use crate::types::{Length, LineHeightValue, StyleValue};

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid fraction regex"));

/// Key stored for the bare form of a utility (`rounded`, `shadow`, `blur`).
pub const DEFAULT_KEY: &str = "DEFAULT";

/// One spacing step in rem.
pub const SPACING_STEP_REM: f32 = 0.25;

/// Spacing scale value for `n` steps, for any multiple of 0.25.
pub fn spacing(n: f32) -> Option<Length> {
    spacing_with_step(n, SPACING_STEP_REM)
}

/// Like [`spacing`] with a custom step size.
pub fn spacing_with_step(n: f32, step_rem: f32) -> Option<Length> {
    (n >= 0.0 && (n * 4.0).fract() == 0.0).then(|| Length::rem(n * step_rem))
}

/// Spacing key as an IR value: scale steps as numbers, `px` as a keyword.
pub fn spacing_key(key: &str) -> Option<StyleValue> {
    if key == "px" {
        return Some(StyleValue::keyword("px"));
    }
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    spacing(n).map(|_| StyleValue::Number(n))
}

/// `a/b` fraction key.
pub fn fraction(key: &str) -> Option<StyleValue> {
    let caps = FRACTION.captures(key)?;
    let numerator = caps[1].parse().ok()?;
    let denominator = caps[2].parse().ok()?;
    (denominator != 0).then_some(StyleValue::Fraction {
        numerator,
        denominator,
    })
}

/// Border radius scale.
pub fn radius(key: &str) -> Option<Length> {
    let rem = match key {
        "none" => return Some(Length::px(0.0)),
        "full" => return Some(Length::px(9999.0)),
        "sm" => 0.125,
        DEFAULT_KEY => 0.25,
        "md" => 0.375,
        "lg" => 0.5,
        "xl" => 0.75,
        "2xl" => 1.0,
        "3xl" => 1.5,
        "4xl" => 2.0,
        _ => return None,
    };
    Some(Length::rem(rem))
}

/// Box shadow scale as CSS shadow lists.
pub fn shadow(key: &str) -> Option<&'static str> {
    Some(match key {
        "sm" => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
        DEFAULT_KEY => "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        "md" => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        "lg" => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        "xl" => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
        "2xl" => "0 25px 50px -12px rgb(0 0 0 / 0.25)",
        "inner" => "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
        "none" => "none",
        _ => return None,
    })
}

/// Blur scale in pixels.
pub fn blur(key: &str) -> Option<f32> {
    Some(match key {
        "none" => 0.0,
        "sm" => 4.0,
        DEFAULT_KEY => 8.0,
        "md" => 12.0,
        "lg" => 16.0,
        "xl" => 24.0,
        "2xl" => 40.0,
        "3xl" => 64.0,
        _ => return None,
    })
}

/// Font size scale: size in rem with its paired line height.
pub fn font_size(key: &str) -> Option<(f32, LineHeightValue)> {
    let (size, line_height) = match key {
        "xs" => (0.75, LineHeightValue::Length(Length::rem(1.0))),
        "sm" => (0.875, LineHeightValue::Length(Length::rem(1.25))),
        "base" => (1.0, LineHeightValue::Length(Length::rem(1.5))),
        "lg" => (1.125, LineHeightValue::Length(Length::rem(1.75))),
        "xl" => (1.25, LineHeightValue::Length(Length::rem(1.75))),
        "2xl" => (1.5, LineHeightValue::Length(Length::rem(2.0))),
        "3xl" => (1.875, LineHeightValue::Length(Length::rem(2.25))),
        "4xl" => (2.25, LineHeightValue::Length(Length::rem(2.5))),
        "5xl" => (3.0, LineHeightValue::Ratio(1.0)),
        "6xl" => (3.75, LineHeightValue::Ratio(1.0)),
        "7xl" => (4.5, LineHeightValue::Ratio(1.0)),
        "8xl" => (6.0, LineHeightValue::Ratio(1.0)),
        "9xl" => (8.0, LineHeightValue::Ratio(1.0)),
        _ => return None,
    };
    Some((size, line_height))
}

/// Font weight scale.
pub fn font_weight(key: &str) -> Option<f32> {
    Some(match key {
        "thin" => 100.0,
        "extralight" => 200.0,
        "light" => 300.0,
        "normal" => 400.0,
        "medium" => 500.0,
        "semibold" => 600.0,
        "bold" => 700.0,
        "extrabold" => 800.0,
        "black" => 900.0,
        _ => return None,
    })
}

/// Font family stacks.
pub fn font_family(key: &str) -> Option<&'static [&'static str]> {
    let stack: &'static [&'static str] = match key {
        "sans" => &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "Apple Color Emoji",
            "Segoe UI Emoji",
        ],
        "serif" => &["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"],
        "mono" => &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "monospace",
        ],
        _ => return None,
    };
    Some(stack)
}

/// Named line heights as font-size ratios.
pub fn line_height(key: &str) -> Option<f32> {
    Some(match key {
        "none" => 1.0,
        "tight" => 1.25,
        "snug" => 1.375,
        "normal" => 1.5,
        "relaxed" => 1.625,
        "loose" => 2.0,
        _ => return None,
    })
}

/// Letter spacing in em.
pub fn letter_spacing(key: &str) -> Option<f32> {
    Some(match key {
        "tighter" => -0.05,
        "tight" => -0.025,
        "normal" => 0.0,
        "wide" => 0.025,
        "wider" => 0.05,
        "widest" => 0.1,
        _ => return None,
    })
}

/// Container widths for `max-w-*`.
pub fn container(key: &str) -> Option<Length> {
    if let Some(bp) = key.strip_prefix("screen-") {
        return breakpoint(bp).map(Length::px);
    }
    let rem = match key {
        "3xs" => 16.0,
        "2xs" => 18.0,
        "xs" => 20.0,
        "sm" => 24.0,
        "md" => 28.0,
        "lg" => 32.0,
        "xl" => 36.0,
        "2xl" => 42.0,
        "3xl" => 48.0,
        "4xl" => 56.0,
        "5xl" => 64.0,
        "6xl" => 72.0,
        "7xl" => 80.0,
        "prose" => return Some(Length::new(65.0, crate::types::Unit::Ch)),
        _ => return None,
    };
    Some(Length::rem(rem))
}

/// Responsive breakpoints as minimum widths in pixels.
pub fn breakpoint(key: &str) -> Option<f32> {
    Some(match key {
        "sm" => 640.0,
        "md" => 768.0,
        "lg" => 1024.0,
        "xl" => 1280.0,
        "2xl" => 1536.0,
        _ => return None,
    })
}

/// Named easing curves.
pub fn easing(key: &str) -> Option<&'static str> {
    Some(match key {
        "linear" => "linear",
        "in" => "cubic-bezier(0.4, 0, 1, 1)",
        "out" => "cubic-bezier(0, 0, 0.2, 1)",
        "in-out" => "cubic-bezier(0.4, 0, 0.2, 1)",
        "initial" => "initial",
        _ => return None,
    })
}

/// Named animations.
pub fn animation(key: &str) -> Option<&'static str> {
    Some(match key {
        "none" => "none",
        "spin" => "spin 1s linear infinite",
        "ping" => "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
        "pulse" => "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        "bounce" => "bounce 1s infinite",
        _ => return None,
    })
}

/// Property lists for `transition-*`.
pub fn transition_property(key: &str) -> Option<&'static str> {
    Some(match key {
        DEFAULT_KEY => {
            "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter"
        }
        "none" => "none",
        "all" => "all",
        "colors" => "color, background-color, border-color, text-decoration-color, fill, stroke",
        "opacity" => "opacity",
        "shadow" => "box-shadow",
        "transform" => "transform",
        _ => return None,
    })
}

/// Default transition duration in milliseconds.
pub const DEFAULT_DURATION_MS: f32 = 150.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_steps() {
        assert_eq!(spacing(4.0), Some(Length::rem(1.0)));
        assert_eq!(spacing(0.5), Some(Length::rem(0.125)));
        assert_eq!(spacing(2.3), None);
        assert_eq!(spacing_key("6"), Some(StyleValue::Number(6.0)));
        assert_eq!(spacing_key("px"), Some(StyleValue::keyword("px")));
        assert_eq!(spacing_key("1.1"), None);
        assert_eq!(spacing_key("auto"), None);
    }

    #[test]
    fn fractions() {
        assert_eq!(
            fraction("1/3"),
            Some(StyleValue::Fraction {
                numerator: 1,
                denominator: 3
            })
        );
        assert_eq!(fraction("1/0"), None);
        assert_eq!(fraction("1/2/3"), None);
    }

    #[test]
    fn named_scales() {
        assert_eq!(radius("lg"), Some(Length::rem(0.5)));
        assert_eq!(radius(DEFAULT_KEY), Some(Length::rem(0.25)));
        assert_eq!(blur("md"), Some(12.0));
        assert_eq!(font_weight("semibold"), Some(600.0));
        assert_eq!(line_height("snug"), Some(1.375));
        assert_eq!(letter_spacing("tighter"), Some(-0.05));
        assert_eq!(container("screen-md"), Some(Length::px(768.0)));
        assert!(shadow("3xl").is_none());
        assert_eq!(
            font_size("sm"),
            Some((0.875, LineHeightValue::Length(Length::rem(1.25))))
        );
    }
}
