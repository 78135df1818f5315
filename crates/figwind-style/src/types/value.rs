//! Style value types carried by the IR.
//!
//! # Example
//!
//! ```
//! use figwind_style::types::{Length, Unit};
//!
//! let rem = Length::rem(1.5);
//! assert_eq!(rem.to_px(16.0), Some(24.0));
//!
//! let parsed = Length::parse("10px").unwrap();
//! assert_eq!(parsed, Length::new(10.0, Unit::Px));
//! ```

use cssparser::{Parser, ParserInput, Token};
use figwind_paint::Color;
use serde::Serialize;
use std::fmt;

/// CSS units understood by the classifier and the lowering stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Rem,
    Em,
    Percent,
    Vw,
    Vh,
    Ch,
    Deg,
    Ms,
    S,
}

impl Unit {
    /// Parse a CSS unit suffix.
    pub fn from_css(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Px),
            "rem" => Some(Self::Rem),
            "em" => Some(Self::Em),
            "%" => Some(Self::Percent),
            "vw" | "dvw" | "svw" | "lvw" => Some(Self::Vw),
            "vh" | "dvh" | "svh" | "lvh" => Some(Self::Vh),
            "ch" => Some(Self::Ch),
            "deg" => Some(Self::Deg),
            "ms" => Some(Self::Ms),
            "s" => Some(Self::S),
            _ => None,
        }
    }

    /// CSS suffix for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Ch => "ch",
            Self::Deg => "deg",
            Self::Ms => "ms",
            Self::S => "s",
        }
    }

    /// Check if this unit measures distance.
    pub fn is_length(&self) -> bool {
        matches!(
            self,
            Self::Px | Self::Rem | Self::Em | Self::Percent | Self::Vw | Self::Vh | Self::Ch
        )
    }

    /// Check if this unit measures time.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Ms | Self::S)
    }
}

/// A number with a unit, e.g. `1.5rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    /// Create a length.
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    pub const fn px(value: f32) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Create a rem length.
    pub const fn rem(value: f32) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Create an em length.
    pub const fn em(value: f32) -> Self {
        Self::new(value, Unit::Em)
    }

    /// Create a percentage.
    pub const fn percent(value: f32) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Parse a single CSS dimension (`10px`, `1.5rem`, `50%`, `0`, `45deg`).
    ///
    /// A unitless zero parses as `0px`; other unitless numbers are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let mut input = ParserInput::new(input);
        let mut parser = Parser::new(&mut input);

        let length = match parser.next().ok()?.clone() {
            Token::Dimension { value, unit, .. } => Self::new(value, Unit::from_css(&unit)?),
            Token::Percentage { unit_value, .. } => Self::percent(unit_value * 100.0),
            Token::Number { value, .. } if value == 0.0 => Self::px(0.0),
            _ => return None,
        };

        parser.expect_exhausted().ok()?;
        Some(length)
    }

    /// Resolve to pixels. Font-relative units use `root_font_size`; units
    /// that depend on a container or viewport do not resolve.
    pub fn to_px(&self, root_font_size: f32) -> Option<f32> {
        match self.unit {
            Unit::Px => Some(self.value),
            Unit::Rem | Unit::Em => Some(self.value * root_font_size),
            _ => None,
        }
    }

    /// Resolve a time length to milliseconds.
    pub fn to_ms(&self) -> Option<f32> {
        match self.unit {
            Unit::Ms => Some(self.value),
            Unit::S => Some(self.value * 1000.0),
            _ => None,
        }
    }

    /// Return the same length with the sign flipped.
    pub fn negated(self) -> Self {
        Self::new(-self.value, self.unit)
    }

    /// Check if this would resolve to zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

/// A resolved color together with the preset name it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    /// Palette key such as `blue-200`, when resolved from a preset.
    pub preset: Option<String>,
    /// The color.
    pub color: Color,
}

impl ColorValue {
    /// A color with no preset name.
    pub fn literal(color: Color) -> Self {
        Self { preset: None, color }
    }

    /// A color resolved from a named preset.
    pub fn preset(name: impl Into<String>, color: Color) -> Self {
        Self {
            preset: Some(name.into()),
            color,
        }
    }
}

/// Line height: either a multiple of the font size or an absolute length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum LineHeightValue {
    Ratio(f32),
    Length(Length),
}

/// Font size with an optional paired line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontValue {
    pub size: Length,
    pub line_height: Option<LineHeightValue>,
}

/// The value of an IR node.
///
/// Each variant belongs to a value domain; the lowering stage matches on it
/// per property and drops combinations it cannot express.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum StyleValue {
    /// Unitless number: scale keys (`mt-6` -> 6), z-index, weights, ratios.
    Number(f32),
    /// Number with a unit.
    Length(Length),
    /// `a/b` fraction, lowered as a percentage.
    Fraction { numerator: u32, denominator: u32 },
    /// Named keyword (`auto`, `full`, `px`, `center`, ...).
    Keyword(String),
    /// Resolved color.
    Color(ColorValue),
    /// Font size with optional line height.
    Font(FontValue),
    /// Font family stack.
    Families(Vec<String>),
    /// Custom property reference (`--foo`).
    Variable(String),
    /// Verbatim CSS (calc expressions, URLs, grid templates, shadows).
    Raw(String),
}

impl StyleValue {
    /// Create a keyword value.
    pub fn keyword(s: impl Into<String>) -> Self {
        Self::Keyword(s.into())
    }

    /// Get the keyword, if this is one.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Get the number, if this is one.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the color, if this is one.
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Check if a leading `-` means anything for this value.
    ///
    /// Keywords carry no sign except `px` and `full`.
    pub fn is_signable(&self) -> bool {
        match self {
            Self::Keyword(k) => matches!(k.as_str(), "px" | "full"),
            _ => true,
        }
    }

    /// Fraction as a percentage.
    pub fn fraction_percent(&self) -> Option<f32> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } if *denominator != 0 => Some(*numerator as f32 / *denominator as f32 * 100.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parse_units() {
        assert_eq!(Length::parse("10px"), Some(Length::px(10.0)));
        assert_eq!(Length::parse("1.5rem"), Some(Length::rem(1.5)));
        assert_eq!(Length::parse("50%"), Some(Length::percent(50.0)));
        assert_eq!(Length::parse("0"), Some(Length::px(0.0)));
        assert_eq!(Length::parse("45deg"), Some(Length::new(45.0, Unit::Deg)));
        assert_eq!(Length::parse("100dvh"), Some(Length::new(100.0, Unit::Vh)));
    }

    #[test]
    fn length_parse_rejects() {
        assert_eq!(Length::parse("12"), None);
        assert_eq!(Length::parse("10px 20px"), None);
        assert_eq!(Length::parse("10furlongs"), None);
        assert_eq!(Length::parse("red"), None);
    }

    #[test]
    fn length_to_px() {
        assert_eq!(Length::px(10.0).to_px(16.0), Some(10.0));
        assert_eq!(Length::rem(0.25).to_px(16.0), Some(4.0));
        assert_eq!(Length::percent(50.0).to_px(16.0), None);
        assert_eq!(Length::new(2.0, Unit::S).to_ms(), Some(2000.0));
    }

    #[test]
    fn fraction_percent() {
        let half = StyleValue::Fraction {
            numerator: 1,
            denominator: 2,
        };
        assert_eq!(half.fraction_percent(), Some(50.0));
        assert_eq!(StyleValue::Number(1.0).fraction_percent(), None);
    }
}
