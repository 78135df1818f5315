//! The target property bag.

use std::collections::BTreeMap;

use figwind_paint::{
    AxisAlign, Color, CornerRadii, Effect, FontStyle, LayoutMode, LayoutPositioning, LayoutWrap,
    LetterSpacing, LineHeight, Paint, Shadow, SizingMode, StrokeStyle, TextAlign, TextCase,
    TextDecoration,
};
use serde::{Deserialize, Serialize};

/// A resolved length on the target side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Pixels(f32),
    Percent(f32),
    Auto,
}

impl Dimension {
    /// Pixel value, if this is one.
    pub fn as_pixels(&self) -> Option<f32> {
        match self {
            Self::Pixels(px) => Some(*px),
            _ => None,
        }
    }

    /// Return the same dimension with the sign flipped.
    pub fn negated(self) -> Self {
        match self {
            Self::Pixels(v) => Self::Pixels(-v),
            Self::Percent(v) => Self::Percent(-v),
            Self::Auto => Self::Auto,
        }
    }
}

/// A field driven by a custom property instead of a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Binding {
    /// `--name`, bound as is.
    Variable(String),
    /// A CSS expression (`calc(var(--x) * -1)`, `calc(100% - 2rem)`).
    Expression(String),
}

impl Binding {
    /// The binding as CSS value text.
    pub fn css_text(&self) -> String {
        match self {
            Self::Variable(name) => format!("var({name})"),
            Self::Expression(expression) => expression.clone(),
        }
    }
}

/// Focus ring drawn as spread shadows outside the box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ring {
    pub width: Option<f32>,
    pub color: Option<Color>,
    pub offset_width: Option<f32>,
    pub offset_color: Option<Color>,
}

impl Ring {
    /// The ring as drop shadows: the offset gap first, then the ring.
    ///
    /// Returns nothing until both a width and a color are known.
    pub fn effects(&self) -> Vec<Effect> {
        let (Some(width), Some(color)) = (self.width, self.color) else {
            return Vec::new();
        };
        let offset = self.offset_width.unwrap_or(0.0);

        let mut effects = Vec::with_capacity(2);
        if offset > 0.0 {
            let gap = self.offset_color.unwrap_or(Color::WHITE);
            effects.push(Effect::DropShadow(Shadow::new(0.0, 0.0, 0.0, offset, gap)));
        }
        effects.push(Effect::DropShadow(Shadow::new(0.0, 0.0, 0.0, offset + width, color)));
        effects
    }
}

/// Partial style in the target design system's vocabulary.
///
/// Every field is optional or empty by default; the converter only fills in
/// what the utilities set. Lengths are resolved to pixels. Serialized output
/// carries only the fields that are set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetStyle {
    // === Sizing ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Horizontal sizing mode (fixed, hug contents, fill container).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing_horizontal: Option<SizingMode>,
    /// Vertical sizing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing_vertical: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    /// Width divided by height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,

    // === Box model ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<Dimension>,

    // === Auto layout ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<LayoutWrap>,
    /// Main-axis distribution (`justify-content`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align: Option<AxisAlign>,
    /// Cross-axis alignment of children (`align-items`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align: Option<AxisAlign>,
    /// Cross-axis alignment of this node inside its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AxisAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column_span: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row_span: Option<u32>,

    // === Positioning and transforms ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning: Option<LayoutPositioning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Clockwise rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<Dimension>,

    // === Visibility ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,
    /// Layer opacity (0.0 to 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,

    // === Fills and strokes ===
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_top_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_right_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_bottom_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_left_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<StrokeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<CornerRadii>,

    // === Effects ===
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    /// Color applied to every shadow effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<Ring>,

    // === Text ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fill: Option<Paint>,
    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,
    /// Font family stack, preferred first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_truncation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,

    // === Unmapped ===
    /// Fields driven by custom properties, keyed by field name
    /// (`padding-top`, `width`, `fills`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bindings: BTreeMap<String, Binding>,
    /// Valid CSS with no structural counterpart, keyed by property.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub css: BTreeMap<String, String>,
}

impl TargetStyle {
    /// Create an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Padding slots in top, right, bottom, left order.
    pub(crate) fn padding_mut(&mut self) -> [&mut Option<f32>; 4] {
        [
            &mut self.padding_top,
            &mut self.padding_right,
            &mut self.padding_bottom,
            &mut self.padding_left,
        ]
    }

    pub(crate) fn margin_mut(&mut self) -> [&mut Option<Dimension>; 4] {
        [
            &mut self.margin_top,
            &mut self.margin_right,
            &mut self.margin_bottom,
            &mut self.margin_left,
        ]
    }

    pub(crate) fn inset_mut(&mut self) -> [&mut Option<Dimension>; 4] {
        [&mut self.top, &mut self.right, &mut self.bottom, &mut self.left]
    }

    pub(crate) fn stroke_weights_mut(&mut self) -> [&mut Option<f32>; 4] {
        [
            &mut self.stroke_top_weight,
            &mut self.stroke_right_weight,
            &mut self.stroke_bottom_weight,
            &mut self.stroke_left_weight,
        ]
    }

    /// Stroke weight when all four sides agree.
    pub fn uniform_stroke_weight(&self) -> Option<f32> {
        let weight = self.stroke_top_weight?;
        [
            self.stroke_right_weight,
            self.stroke_bottom_weight,
            self.stroke_left_weight,
        ]
        .iter()
        .all(|w| *w == Some(weight))
        .then_some(weight)
    }

    /// Shadow and blur effects followed by the ring, in paint order.
    pub fn all_effects(&self) -> Vec<Effect> {
        let mut effects = self.effects.clone();
        if let Some(ring) = &self.ring {
            effects.extend(ring.effects());
        }
        effects
    }
}

/// Write `value` into the slots whose flag is set.
pub(crate) fn set_slots<T: Copy>(slots: [&mut Option<T>; 4], on: [bool; 4], value: T) {
    for (slot, on) in slots.into_iter().zip(on) {
        if on {
            *slot = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_helpers() {
        assert_eq!(Dimension::Pixels(4.0).as_pixels(), Some(4.0));
        assert_eq!(Dimension::Percent(50.0).as_pixels(), None);
        assert_eq!(Dimension::Pixels(4.0).negated(), Dimension::Pixels(-4.0));
    }

    #[test]
    fn serialized_output_skips_unset_fields() {
        let json = serde_json::to_value(TargetStyle::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));

        let style = TargetStyle {
            padding_top: Some(4.0),
            fills: vec![Paint::solid(Color::BLACK)],
            ..TargetStyle::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["fills", "padding_top"]);

        let back: TargetStyle = serde_json::from_value(json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn ring_needs_width_and_color() {
        let mut ring = Ring {
            width: Some(2.0),
            ..Ring::default()
        };
        assert!(ring.effects().is_empty());

        ring.color = Some(Color::BLACK);
        ring.offset_width = Some(2.0);
        let effects = ring.effects();
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[1],
            Effect::DropShadow(Shadow::new(0.0, 0.0, 0.0, 4.0, Color::BLACK))
        );
    }

    #[test]
    fn slots_follow_flags() {
        let mut style = TargetStyle::new();
        set_slots(style.padding_mut(), [false, true, false, true], 8.0);
        assert_eq!(style.padding_left, Some(8.0));
        assert_eq!(style.padding_right, Some(8.0));
        assert_eq!(style.padding_top, None);
        assert!(!style.is_empty());
    }

    #[test]
    fn uniform_stroke_weight() {
        let mut style = TargetStyle::new();
        set_slots(style.stroke_weights_mut(), [true; 4], 1.0);
        assert_eq!(style.uniform_stroke_weight(), Some(1.0));
        style.stroke_top_weight = Some(2.0);
        assert_eq!(style.uniform_stroke_weight(), None);
    }

    #[test]
    fn serializes_partial_bag() {
        let style = TargetStyle {
            width: Some(Dimension::Percent(100.0)),
            sizing_horizontal: Some(SizingMode::Fill),
            ..TargetStyle::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["sizing_horizontal"], "FILL");
        assert_eq!(json["width"]["unit"], "PERCENT");
        assert_eq!(json["width"]["value"], 100.0);
    }
}
