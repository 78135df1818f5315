//! Layout and geometry primitives.

use serde::{Deserialize, Serialize};

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Create corner radii with the same value for all corners.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Zero radii (sharp corners).
    pub const ZERO: Self = Self::uniform(0.0);

    /// Check if all radii are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    /// Check if all four corners share one radius.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

/// How a node sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    /// Explicit size.
    Fixed,
    /// Shrink to content.
    Hug,
    /// Stretch to the parent.
    Fill,
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    Grid,
}

/// Whether auto-layout children wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    NoWrap,
    Wrap,
}

/// Alignment along an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
    Stretch,
}

/// Whether a child participates in its parent's auto layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    Auto,
    Absolute,
}

/// Stroke line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeStyle {
    /// No stroke.
    None,
    /// Solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Double line.
    Double,
}

impl StrokeStyle {
    /// Parse from a CSS `border-style` keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "hidden" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Dash pattern in stroke-weight multiples, empty for continuous lines.
    pub fn dash_pattern(&self, weight: f32) -> Vec<f32> {
        match self {
            Self::Dashed => vec![weight * 3.0, weight * 3.0],
            Self::Dotted => vec![weight, weight],
            Self::None | Self::Solid | Self::Double => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_radii_queries() {
        let radii = CornerRadii {
            top_left: 4.0,
            top_right: 4.0,
            bottom_right: 0.0,
            bottom_left: 0.0,
        };
        assert!(!radii.is_uniform());
        assert!(!radii.is_zero());
        assert!(CornerRadii::ZERO.is_zero());
        assert!(CornerRadii::uniform(8.0).is_uniform());
    }

    #[test]
    fn stroke_style_keywords() {
        assert_eq!(StrokeStyle::from_css("DASHED"), Some(StrokeStyle::Dashed));
        assert_eq!(StrokeStyle::from_css("hidden"), Some(StrokeStyle::None));
        assert_eq!(StrokeStyle::from_css("groove"), None);
        assert_eq!(StrokeStyle::Dashed.dash_pattern(2.0), vec![6.0, 6.0]);
        assert!(StrokeStyle::Solid.dash_pattern(2.0).is_empty());
    }
}
