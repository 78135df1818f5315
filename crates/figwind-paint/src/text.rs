//! Text styling primitives.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    /// Parse from a CSS `text-align` keyword. Logical `start`/`end` resolve
    /// as left-to-right.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "justify" => Some(Self::Justified),
            _ => None,
        }
    }
}

/// Letter case transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
}

/// Text decoration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    None,
    Underline,
    Strikethrough,
    Overline,
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Line height, either absolute or relative to the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// Let the font decide.
    Auto,
    /// Absolute height in pixels.
    Pixels(f32),
    /// Percentage of the font size (150.0 = 1.5x).
    Percent(f32),
}

/// Letter spacing, either absolute or relative to the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    /// Absolute spacing in pixels.
    Pixels(f32),
    /// Percentage of the font size (-2.5 = -0.025em).
    Percent(f32),
}

impl LetterSpacing {
    /// Negate the spacing.
    pub fn negated(self) -> Self {
        match self {
            Self::Pixels(v) => Self::Pixels(-v),
            Self::Percent(v) => Self::Percent(-v),
        }
    }
}
