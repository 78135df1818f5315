//! Value shapes: which arbitrary and theme values a family accepts.

use crate::parser::{
    is_image_value, is_passthrough, parse_box_shadow, parse_color, parse_number,
};
use crate::theme::ThemeValue;
use crate::types::{ColorValue, FontValue, Length, LineHeightValue, StyleValue, Unit};

/// Value grammar a family accepts for arbitrary and theme values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// `10px`, `1.5rem`, `50%`, `0`.
    Length,
    /// One or two lengths or `auto` (`background-size`).
    Size,
    /// Lengths and `left|right|top|bottom|center`.
    Position,
    Color,
    Number,
    /// Whole numbers.
    Integer,
    /// A ratio number or a length (line height, stroke width).
    LengthOrNumber,
    Percentage,
    Angle,
    Time,
    /// `url(...)` or a gradient.
    Image,
    /// A length, lowered as a font size.
    FontSize,
    /// Comma separated family names.
    FontFamily,
    /// A `box-shadow` list.
    Shadow,
    /// `16/9` or a number.
    Ratio,
    /// Anything, kept verbatim.
    Any,
}

impl ValueShape {
    /// Check if a `[hint:...]` / `(hint:--x)` data type fits this shape.
    pub fn accepts_hint(&self, hint: &str) -> bool {
        if hint == "any" {
            return true;
        }
        match self {
            Self::Length => matches!(hint, "length" | "percentage" | "size" | "line-width"),
            Self::Size => matches!(hint, "length" | "percentage" | "size"),
            Self::Position => matches!(hint, "length" | "percentage" | "position"),
            Self::Color => hint == "color",
            Self::Number => matches!(hint, "number" | "percentage"),
            Self::Integer => matches!(hint, "integer" | "number"),
            Self::LengthOrNumber => matches!(hint, "length" | "number" | "percentage"),
            Self::Percentage => matches!(hint, "percentage" | "number"),
            Self::Angle => hint == "angle",
            Self::Time => hint == "number",
            Self::Image => matches!(hint, "url" | "image"),
            Self::FontSize => matches!(hint, "length" | "percentage" | "size"),
            Self::FontFamily => hint == "family-name",
            Self::Shadow => hint == "shadow",
            Self::Ratio => matches!(hint, "ratio" | "number"),
            Self::Any => true,
        }
    }

    /// Check if a `calc(...)` expression can stand in for this shape.
    pub fn accepts_calc(&self) -> bool {
        !matches!(
            self,
            Self::Color | Self::Image | Self::FontFamily | Self::Shadow
        )
    }

    /// Parse plain arbitrary content.
    pub fn parse(&self, value: &str) -> Option<StyleValue> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if is_passthrough(value) && self.accepts_calc() {
            return Some(StyleValue::Raw(value.to_string()));
        }

        match self {
            Self::Length => length(value).map(StyleValue::Length),
            Self::Size => {
                let parts: Vec<&str> = value.split_whitespace().collect();
                let valid = (1..=2).contains(&parts.len())
                    && parts.iter().all(|p| *p == "auto" || length(p).is_some());
                if !valid {
                    None
                } else if let [single] = parts.as_slice()
                    && let Some(l) = length(single)
                {
                    Some(StyleValue::Length(l))
                } else {
                    Some(StyleValue::Raw(value.to_string()))
                }
            }
            Self::Position => {
                let parts: Vec<&str> = value.split_whitespace().collect();
                ((1..=4).contains(&parts.len())
                    && parts.iter().all(|p| {
                        matches!(*p, "left" | "right" | "top" | "bottom" | "center")
                            || length(p).is_some()
                    }))
                .then(|| StyleValue::Raw(value.to_string()))
            }
            Self::Color => parse_color(value).map(|c| StyleValue::Color(ColorValue::literal(c))),
            Self::Number => parse_number(value).map(StyleValue::Number),
            Self::Integer => parse_number(value)
                .filter(|n| n.fract() == 0.0)
                .map(StyleValue::Number),
            Self::LengthOrNumber => parse_number(value)
                .map(StyleValue::Number)
                .or_else(|| length(value).map(StyleValue::Length)),
            Self::Percentage => Length::parse(value)
                .filter(|l| l.unit == Unit::Percent)
                .map(StyleValue::Length),
            Self::Angle => Length::parse(value)
                .filter(|l| l.unit == Unit::Deg || l.is_zero())
                .map(|l| StyleValue::Length(Length::new(l.value, Unit::Deg))),
            Self::Time => Length::parse(value)
                .filter(|l| l.unit.is_time())
                .map(StyleValue::Length),
            Self::Image => is_image_value(value).then(|| StyleValue::Raw(value.to_string())),
            Self::FontSize => length(value).map(|size| {
                StyleValue::Font(FontValue {
                    size,
                    line_height: None,
                })
            }),
            Self::FontFamily => families(value).map(StyleValue::Families),
            Self::Shadow => parse_box_shadow(value, 16.0)
                .is_some()
                .then(|| StyleValue::Raw(value.to_string())),
            Self::Ratio => ratio(value),
            Self::Any => Some(StyleValue::Raw(value.to_string())),
        }
    }

    /// Convert a theme value found under `key`.
    pub fn from_theme(&self, key: &str, value: ThemeValue) -> Option<StyleValue> {
        match (self, value) {
            (Self::Color, value) => parse_color(&value.head())
                .map(|c| StyleValue::Color(ColorValue::preset(key, c))),
            (Self::FontSize, ThemeValue::List(items)) => {
                let size = length(items.first()?)?;
                let line_height = items.get(1).and_then(|lh| parse_line_height(lh));
                Some(StyleValue::Font(FontValue { size, line_height }))
            }
            (Self::FontSize, ThemeValue::Number(n)) => Some(StyleValue::Font(FontValue {
                size: Length::px(n),
                line_height: None,
            })),
            (Self::FontFamily, ThemeValue::List(items)) => Some(StyleValue::Families(items)),
            (Self::FontFamily, ThemeValue::String(s)) => families(&s).map(StyleValue::Families),
            (
                Self::Number | Self::Integer | Self::LengthOrNumber | Self::Ratio,
                ThemeValue::Number(n),
            ) => Some(StyleValue::Number(n)),
            (Self::Length | Self::Size | Self::Position, ThemeValue::Number(n)) => {
                Some(StyleValue::Length(Length::px(n)))
            }
            (Self::Angle, ThemeValue::Number(n)) => {
                Some(StyleValue::Length(Length::new(n, Unit::Deg)))
            }
            (Self::Time, ThemeValue::Number(n)) => {
                Some(StyleValue::Length(Length::new(n, Unit::Ms)))
            }
            (Self::Shadow | Self::Image | Self::Any, value) => Some(StyleValue::Raw(value.to_css())),
            (shape, value) => {
                let text = value.head();
                shape.parse(&text).or_else(|| {
                    is_keyword(&text).then(|| StyleValue::keyword(text.clone()))
                })
            }
        }
    }
}

fn length(value: &str) -> Option<Length> {
    Length::parse(value).filter(|l| l.unit.is_length())
}

fn is_keyword(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Parse a line height: a bare number is a ratio, otherwise a length.
pub fn parse_line_height(value: &str) -> Option<LineHeightValue> {
    parse_number(value)
        .map(LineHeightValue::Ratio)
        .or_else(|| length(value).map(LineHeightValue::Length))
}

fn families(value: &str) -> Option<Vec<String>> {
    let names: Vec<String> = value
        .split(',')
        .map(|name| name.trim().trim_matches(['"', '\'']).to_string())
        .collect();
    let valid = names.iter().all(|name| {
        !name.is_empty() && parse_number(name).is_none() && Length::parse(name).is_none()
    });
    valid.then_some(names)
}

fn ratio(value: &str) -> Option<StyleValue> {
    if let Some((a, b)) = value.split_once('/') {
        let (a, b) = (a.trim(), b.trim());
        let numerator = a.parse().ok()?;
        let denominator = b.parse().ok()?;
        return (denominator != 0).then_some(StyleValue::Fraction {
            numerator,
            denominator,
        });
    }
    parse_number(value)
        .filter(|n| *n > 0.0)
        .map(StyleValue::Number)
}
