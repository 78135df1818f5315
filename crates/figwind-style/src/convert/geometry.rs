//! Spacing, sizing, borders and transforms.

use figwind_paint::{CornerRadii, SizingMode, StrokeStyle};

use super::target::set_slots;
use super::{Converter, Dimension, TargetStyle, signed, unsupported};
use crate::error::{Error, Result};
use crate::rules::scales;
use crate::types::{ParsedStyle, Property, Side, StyleValue, Unit};

impl Converter {
    pub(super) fn lower_spacing(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        let edges = style.side_or_all().edges();
        match style.property {
            Property::Padding => {
                let px = self.spacing_px(style)?;
                set_slots(target.padding_mut(), edges, px);
            }
            Property::Margin => {
                let margin = self.dimension(style)?;
                set_slots(target.margin_mut(), edges, margin);
            }
            Property::Inset => {
                let inset = self.dimension(style)?;
                set_slots(target.inset_mut(), edges, inset);
            }
            // space-x/y has no per-child margins on the target; it becomes the gap.
            _ => {
                let px = self.spacing_px(style)?;
                match style.side_or_all() {
                    Side::X => target.column_gap = Some(px),
                    Side::Y => target.row_gap = Some(px),
                    _ => {
                        target.column_gap = Some(px);
                        target.row_gap = Some(px);
                    }
                }
            }
        }
        Ok(())
    }

    pub(super) fn lower_sizing(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        match style.property {
            Property::Width => {
                let (width, mode) = self.size(style)?;
                target.width = width;
                target.sizing_horizontal = Some(mode);
            }
            Property::Height => {
                let (height, mode) = self.size(style)?;
                target.height = height;
                target.sizing_vertical = Some(mode);
            }
            Property::Size => {
                let (size, mode) = self.size(style)?;
                target.width = size;
                target.height = size;
                target.sizing_horizontal = Some(mode);
                target.sizing_vertical = Some(mode);
            }
            Property::MinWidth => target.min_width = self.bound(style)?,
            Property::MinHeight => target.min_height = self.bound(style)?,
            Property::MaxWidth => target.max_width = self.bound(style)?,
            Property::MaxHeight => target.max_height = self.bound(style)?,
            Property::FlexBasis => target.flex_basis = Some(self.dimension(style)?),
            _ => target.aspect_ratio = aspect_ratio(style)?,
        }
        Ok(())
    }

    /// Width or height with its sizing mode.
    ///
    /// `full` fills the container, content keywords hug, everything else is
    /// fixed. Percentages fill their share of the container.
    fn size(&self, style: &ParsedStyle) -> Result<(Option<Dimension>, SizingMode)> {
        let fill = (Some(Dimension::Percent(100.0)), SizingMode::Fill);
        match style.value.as_keyword() {
            Some("full") => return Ok(fill),
            Some("screen") if self.options.screen_as_fill => return Ok(fill),
            Some("auto" | "min-content" | "max-content" | "fit-content") => {
                return Ok((None, SizingMode::Hug));
            }
            Some("px") | None => {}
            Some(_) => return Err(unsupported(style)),
        }

        Ok(match self.dimension(style)? {
            Dimension::Percent(p) => (Some(Dimension::Percent(p)), SizingMode::Fill),
            dimension => (Some(dimension), SizingMode::Fixed),
        })
    }

    /// Min/max constraint. `none` clears it.
    fn bound(&self, style: &ParsedStyle) -> Result<Option<Dimension>> {
        let Some(keyword) = style.value.as_keyword() else {
            return self.dimension(style).map(Some);
        };
        match keyword {
            "none" => Ok(None),
            "full" | "px" => self.dimension(style).map(Some),
            key => match scales::container(key) {
                Some(length) => Ok(Some(Dimension::Pixels(self.length_px(style, &length)?))),
                None => Err(unsupported(style)),
            },
        }
    }

    pub(super) fn lower_border(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        match style.property {
            Property::BorderWidth => {
                let px = self.width_px(style, self.options.border_width)?;
                set_slots(target.stroke_weights_mut(), style.side_or_all().edges(), px);
            }
            Property::BorderStyle => {
                let stroke_style = style
                    .value
                    .as_keyword()
                    .and_then(StrokeStyle::from_css)
                    .ok_or_else(|| unsupported(style))?;
                target.stroke_style = Some(stroke_style);
            }
            Property::BorderRadius => {
                let px = self.radius_px(style)?;
                let corners = style.side_or_all().corners();
                if !corners.contains(&true) {
                    return Err(unsupported(style));
                }
                let mut radii = target.corner_radii.unwrap_or(CornerRadii::ZERO);
                let slots = [
                    &mut radii.top_left,
                    &mut radii.top_right,
                    &mut radii.bottom_right,
                    &mut radii.bottom_left,
                ];
                for (slot, on) in slots.into_iter().zip(corners) {
                    if on {
                        *slot = px;
                    }
                }
                target.corner_radii = Some(radii);
            }
            Property::RingWidth => {
                let px = self.width_px(style, self.options.ring_width)?;
                target.ring.get_or_insert_default().width = Some(px);
            }
            _ => {
                let px = self.width_px(style, 0.0)?;
                target.ring.get_or_insert_default().offset_width = Some(px);
            }
        }
        Ok(())
    }

    fn radius_px(&self, style: &ParsedStyle) -> Result<f32> {
        match &style.value {
            StyleValue::Keyword(key) => {
                let length = scales::radius(key).ok_or_else(|| unsupported(style))?;
                self.length_px(style, &length)
            }
            StyleValue::Length(l) if l.unit == Unit::Percent => Err(unsupported(style)),
            StyleValue::Length(l) => self.length_px(style, l),
            _ => Err(unsupported(style)),
        }
    }

    pub(super) fn lower_transform(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        let side = style.side_or_all();
        match style.property {
            Property::Rotate => match &style.value {
                StyleValue::Length(l) if l.unit == Unit::Deg => {
                    target.rotation = Some(signed(style, l.value));
                }
                _ => return Err(unsupported(style)),
            },
            Property::Scale => {
                let factor = style.value.as_number().ok_or_else(|| unsupported(style))?;
                let factor = signed(style, factor);
                if side != Side::Y {
                    target.scale_x = Some(factor);
                }
                if side != Side::X {
                    target.scale_y = Some(factor);
                }
            }
            _ => {
                let offset = self.dimension(style)?;
                if offset == Dimension::Auto {
                    return Err(unsupported(style));
                }
                if side != Side::Y {
                    target.translate_x = Some(offset);
                }
                if side != Side::X {
                    target.translate_y = Some(offset);
                }
            }
        }
        Ok(())
    }
}

fn aspect_ratio(style: &ParsedStyle) -> Result<Option<f32>> {
    match &style.value {
        StyleValue::Keyword(k) if k == "auto" => Ok(None),
        StyleValue::Fraction {
            numerator,
            denominator,
        } if *denominator != 0 => Ok(Some(*numerator as f32 / *denominator as f32)),
        StyleValue::Number(n) if *n > 0.0 => Ok(Some(*n)),
        StyleValue::Fraction { .. } | StyleValue::Number(_) => Err(Error::invalid_value(
            style.property.as_str(),
            "ratio must be positive",
        )),
        _ => Err(unsupported(style)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::ConvertOptions;
    use super::super::tests::{convert, parse};
    use super::*;

    #[test]
    fn full_auto_and_fixed_widths() {
        let target = convert(&["w-full"]);
        assert_eq!(target.width, Some(Dimension::Percent(100.0)));
        assert_eq!(target.sizing_horizontal, Some(SizingMode::Fill));

        let target = convert(&["h-auto"]);
        assert_eq!(target.height, None);
        assert_eq!(target.sizing_vertical, Some(SizingMode::Hug));

        let target = convert(&["w-64", "h-[120px]"]);
        assert_eq!(target.width, Some(Dimension::Pixels(256.0)));
        assert_eq!(target.height, Some(Dimension::Pixels(120.0)));
        assert_eq!(target.sizing_vertical, Some(SizingMode::Fixed));

        let target = convert(&["w-1/2"]);
        assert_eq!(target.width, Some(Dimension::Percent(50.0)));
    }

    #[test]
    fn size_sets_both_axes() {
        let target = convert(&["size-10"]);
        assert_eq!(target.width, Some(Dimension::Pixels(40.0)));
        assert_eq!(target.height, Some(Dimension::Pixels(40.0)));
    }

    #[test]
    fn max_width_resolves_containers() {
        let target = convert(&["max-w-md", "min-h-full"]);
        assert_eq!(target.max_width, Some(Dimension::Pixels(448.0)));
        assert_eq!(target.min_height, Some(Dimension::Percent(100.0)));

        let target = convert(&["max-w-md", "max-w-none"]);
        assert_eq!(target.max_width, None);
    }

    #[test]
    fn padding_and_margin_sides() {
        let target = convert(&["px-4", "pt-1", "-mt-6", "mx-auto"]);
        assert_eq!(target.padding_left, Some(16.0));
        assert_eq!(target.padding_right, Some(16.0));
        assert_eq!(target.padding_top, Some(4.0));
        assert_eq!(target.padding_bottom, None);
        assert_eq!(target.margin_top, Some(Dimension::Pixels(-24.0)));
        assert_eq!(target.margin_left, Some(Dimension::Auto));
    }

    #[test]
    fn gaps_and_space_between() {
        let target = convert(&["gap-4", "gap-y-2"]);
        assert_eq!(target.column_gap, Some(16.0));
        assert_eq!(target.row_gap, Some(8.0));

        let target = convert(&["space-x-3"]);
        assert_eq!(target.column_gap, Some(12.0));
        assert_eq!(target.row_gap, None);
    }

    #[test]
    fn inset_edges() {
        let target = convert(&["inset-x-0", "top-1/2"]);
        assert_eq!(target.left, Some(Dimension::Pixels(0.0)));
        assert_eq!(target.right, Some(Dimension::Pixels(0.0)));
        assert_eq!(target.top, Some(Dimension::Percent(50.0)));
    }

    #[test]
    fn border_widths_per_side() {
        let target = convert(&["border-x-4"]);
        assert_eq!(target.stroke_left_weight, Some(4.0));
        assert_eq!(target.stroke_right_weight, Some(4.0));
        assert_eq!(target.stroke_top_weight, None);

        let target = convert(&["border", "border-dashed"]);
        assert_eq!(target.uniform_stroke_weight(), Some(1.0));
        assert_eq!(target.stroke_style, Some(StrokeStyle::Dashed));
    }

    #[test]
    fn radius_per_corner() {
        let target = convert(&["rounded-lg", "rounded-tl-none"]);
        let radii = target.corner_radii.unwrap();
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.top_right, 8.0);
        assert_eq!(radii.bottom_left, 8.0);

        let target = convert(&["rounded-b-[6px]"]);
        let radii = target.corner_radii.unwrap();
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.bottom_right, 6.0);
    }

    #[test]
    fn ring_widths() {
        let target = convert(&["ring", "ring-offset-2"]);
        let ring = target.ring.unwrap();
        assert_eq!(ring.width, Some(3.0));
        assert_eq!(ring.offset_width, Some(2.0));
    }

    #[test]
    fn transforms() {
        let target = convert(&["-rotate-45", "scale-x-150", "translate-y-full"]);
        assert_eq!(target.rotation, Some(-45.0));
        assert_eq!(target.scale_x, Some(1.5));
        assert_eq!(target.scale_y, None);
        assert_eq!(target.translate_y, Some(Dimension::Percent(100.0)));
    }

    #[test]
    fn aspect_ratios() {
        assert_eq!(convert(&["aspect-video"]).aspect_ratio, Some(16.0 / 9.0));
        assert_eq!(convert(&["aspect-square", "aspect-auto"]).aspect_ratio, None);
    }

    #[test]
    fn screen_width_option() {
        assert_eq!(convert(&["w-screen"]).sizing_horizontal, Some(SizingMode::Fill));

        let converter = Converter::new(ConvertOptions::default().with_screen_as_fill(false));
        let target = converter.convert(&parse("w-screen"));
        assert_eq!(target.sizing_horizontal, None);
        assert_eq!(target.css.get("width").map(String::as_str), Some("100vw"));
    }
}
