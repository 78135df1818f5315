//! Paint and effect styles.
//!
//! A [`Paint`] describes how a shape is filled or stroked; an [`Effect`]
//! describes shadows and blurs layered on top of it.

use serde::{Deserialize, Serialize};

use crate::Color;

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Paint {
    /// Solid color fill. `opacity` is kept apart from the color channels.
    Solid { color: Color, opacity: f32 },
    /// Image fill referenced by URL.
    Image { url: String, scale_mode: ScaleMode },
}

impl Paint {
    /// Create a solid paint; the color's alpha becomes the paint opacity.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self::Solid {
            color: color.opaque(),
            opacity: color.a,
        }
    }

    /// Create a solid paint with an extra opacity multiplier (0.0-1.0).
    ///
    /// The color's own alpha and `opacity` multiply into the single paint
    /// opacity.
    #[inline]
    pub fn solid_with_opacity(color: Color, opacity: f32) -> Self {
        Self::Solid {
            color: color.opaque(),
            opacity: color.a * opacity,
        }
    }

    /// Create an image paint.
    pub fn image(url: impl Into<String>, scale_mode: ScaleMode) -> Self {
        Self::Image {
            url: url.into(),
            scale_mode,
        }
    }

    /// Get the solid color, if this is a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid { color, .. } => Some(*color),
            Self::Image { .. } => None,
        }
    }

    /// Paint opacity (1.0 for image paints).
    #[inline]
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Solid { opacity, .. } => *opacity,
            Self::Image { .. } => 1.0,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

/// How an image paint is scaled into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMode {
    /// Cover the frame, cropping overflow.
    #[default]
    Fill,
    /// Fit inside the frame.
    Fit,
    /// Repeat at natural size.
    Tile,
    /// Natural size, cropped.
    Crop,
}

/// A shadow definition shared by drop and inner shadows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color (alpha carries the shadow transparency).
    pub color: Color,
    /// Horizontal offset in pixels. Positive moves shadow right.
    pub offset_x: f32,
    /// Vertical offset in pixels. Positive moves shadow down.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur_radius: f32,
    /// Spread radius in pixels.
    pub spread_radius: f32,
}

impl Shadow {
    /// Create a shadow with the given geometry and color.
    #[inline]
    pub fn new(offset_x: f32, offset_y: f32, blur_radius: f32, spread_radius: f32, color: Color) -> Self {
        Self {
            color,
            offset_x,
            offset_y,
            blur_radius,
            spread_radius,
        }
    }

    /// Return the same geometry with a different color.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// A visual effect applied to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Effect {
    /// Outer shadow.
    DropShadow(Shadow),
    /// Inset shadow.
    InnerShadow(Shadow),
    /// Blur of the node itself.
    LayerBlur { radius: f32 },
    /// Blur of whatever sits behind the node.
    BackgroundBlur { radius: f32 },
}

impl Effect {
    /// Check if this effect is a shadow (drop or inner).
    pub fn is_shadow(&self) -> bool {
        matches!(self, Self::DropShadow(_) | Self::InnerShadow(_))
    }

    /// Check if this effect is a blur.
    pub fn is_blur(&self) -> bool {
        matches!(self, Self::LayerBlur { .. } | Self::BackgroundBlur { .. })
    }

    /// Recolor a shadow effect; blurs are returned unchanged.
    pub fn with_shadow_color(self, color: Color) -> Self {
        match self {
            Self::DropShadow(s) => Self::DropShadow(s.with_color(color)),
            Self::InnerShadow(s) => Self::InnerShadow(s.with_color(color)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_moves_alpha_into_opacity() {
        let paint = Paint::solid(Color::new(1.0, 0.0, 0.0, 0.5));
        assert_eq!(paint.as_solid(), Some(Color::from_rgb(1.0, 0.0, 0.0)));
        assert_eq!(paint.opacity(), 0.5);
    }

    #[test]
    fn solid_with_opacity_multiplies() {
        let paint = Paint::solid_with_opacity(Color::new(0.0, 0.0, 0.0, 0.5), 0.2);
        assert!((paint.opacity() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn shadow_recolor() {
        let shadow = Shadow::new(0.0, 1.0, 2.0, 0.0, Color::BLACK);
        let effect = Effect::DropShadow(shadow).with_shadow_color(Color::WHITE);
        assert_eq!(effect, Effect::DropShadow(shadow.with_color(Color::WHITE)));
        assert!(effect.is_shadow());

        let blur = Effect::LayerBlur { radius: 4.0 };
        assert_eq!(blur.clone().with_shadow_color(Color::WHITE), blur);
        assert!(blur.is_blur());
    }

    #[test]
    fn paint_serializes_tagged() {
        let json = serde_json::to_value(Paint::image("a.png", ScaleMode::Tile)).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["scale_mode"], "tile");
    }
}
