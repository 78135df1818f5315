//! Lowering configuration.

use serde::Deserialize;

use crate::rules::scales::SPACING_STEP_REM;

/// Options for [`Converter`](super::Converter).
///
/// Deserializable so hosts can embed it in their own config files; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Pixels per `rem` and `em`.
    pub root_font_size: f32,
    /// Size of one spacing step in rem (`p-1`).
    pub spacing_step: f32,
    /// Width of a bare `border` in pixels.
    pub border_width: f32,
    /// Width of a bare `ring` in pixels.
    pub ring_width: f32,
    /// Lower `w-screen` / `h-screen` as fill-container.
    pub screen_as_fill: bool,
    /// Keep values with no structural mapping in [`TargetStyle::css`](super::TargetStyle::css).
    pub keep_css: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_font_size: 16.0,
            spacing_step: SPACING_STEP_REM,
            border_width: 1.0,
            ring_width: 3.0,
            screen_as_fill: true,
            keep_css: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_font_size(mut self, px: f32) -> Self {
        self.root_font_size = px;
        self
    }

    pub fn with_spacing_step(mut self, rem: f32) -> Self {
        self.spacing_step = rem;
        self
    }

    pub fn with_border_width(mut self, px: f32) -> Self {
        self.border_width = px;
        self
    }

    pub fn with_ring_width(mut self, px: f32) -> Self {
        self.ring_width = px;
        self
    }

    pub fn with_screen_as_fill(mut self, enabled: bool) -> Self {
        self.screen_as_fill = enabled;
        self
    }

    pub fn with_keep_css(mut self, enabled: bool) -> Self {
        self.keep_css = enabled;
        self
    }

    /// Pixels for `n` spacing steps.
    pub fn spacing_px(&self, n: f32) -> f32 {
        n * self.spacing_step * self.root_font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_spacing() {
        let options = ConvertOptions::new().with_root_font_size(10.0).with_ring_width(2.0);
        assert_eq!(options.spacing_px(4.0), 10.0);
        assert_eq!(options.ring_width, 2.0);
        assert_eq!(ConvertOptions::default().spacing_px(4.0), 16.0);
    }

    #[test]
    fn deserialize_fills_defaults() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{ "root_font_size": 20, "screen_as_fill": false }"#).unwrap();
        assert_eq!(options.root_font_size, 20.0);
        assert!(!options.screen_as_fill);
        assert_eq!(options.border_width, 1.0);
        assert!(options.keep_css);
    }
}
