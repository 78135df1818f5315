//! Auto layout, positioning and visibility.

use figwind_paint::{AxisAlign, LayoutMode, LayoutPositioning, LayoutWrap};

use super::{Converter, Dimension, TargetStyle, signed, unsupported};
use crate::error::{Error, Result};
use crate::types::{Length, ParsedStyle, Property, StyleValue, Unit};

impl Converter {
    pub(super) fn lower_layout(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        let keyword = style.value.as_keyword();
        match style.property {
            Property::Display => match keyword {
                // `flex` keeps a column direction set by an earlier `flex-col`.
                Some("flex" | "inline-flex") => {
                    if target.layout_mode != Some(LayoutMode::Vertical) {
                        target.layout_mode = Some(LayoutMode::Horizontal);
                    }
                }
                Some("grid" | "inline-grid") => target.layout_mode = Some(LayoutMode::Grid),
                Some("none") => target.visible = Some(false),
                Some("block" | "inline" | "inline-block" | "flow-root" | "list-item" | "table") => {
                    target.layout_mode = Some(LayoutMode::None);
                }
                _ => return Err(unsupported(style)),
            },
            Property::Position => {
                target.positioning = Some(match keyword {
                    Some("absolute" | "fixed") => LayoutPositioning::Absolute,
                    Some("static" | "relative" | "sticky") => LayoutPositioning::Auto,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::Overflow => {
                target.clips_content = Some(match keyword {
                    Some("hidden" | "clip" | "auto" | "scroll") => true,
                    Some("visible") => false,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::Visibility => {
                target.visible = Some(match keyword {
                    Some("visible") => true,
                    Some("hidden" | "collapse") => false,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::ZIndex => {
                target.z_index = match keyword {
                    Some("auto") => None,
                    _ => Some(integer(style)?),
                };
            }
            Property::Order => target.order = Some(integer(style)?),
            Property::FlexDirection => {
                target.layout_mode = Some(match keyword {
                    Some("row" | "row-reverse") => LayoutMode::Horizontal,
                    Some("column" | "column-reverse") => LayoutMode::Vertical,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::FlexWrap => {
                target.layout_wrap = Some(match keyword {
                    Some("wrap" | "wrap-reverse") => LayoutWrap::Wrap,
                    Some("nowrap") => LayoutWrap::NoWrap,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::Flex => {
                let (grow, shrink, basis) = self.flex(style)?;
                target.flex_grow = Some(grow);
                target.flex_shrink = Some(shrink);
                target.flex_basis = Some(basis);
            }
            Property::FlexGrow => {
                target.flex_grow = Some(style.value.as_number().ok_or_else(|| unsupported(style))?);
            }
            Property::FlexShrink => {
                target.flex_shrink = Some(style.value.as_number().ok_or_else(|| unsupported(style))?);
            }
            Property::JustifyContent => {
                target.primary_axis_align = Some(match keyword {
                    Some("flex-start" | "normal") => AxisAlign::Min,
                    Some("center") => AxisAlign::Center,
                    Some("flex-end") => AxisAlign::Max,
                    Some("space-between") => AxisAlign::SpaceBetween,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::AlignItems => {
                target.counter_axis_align = Some(item_align(style)?);
            }
            Property::AlignSelf => {
                target.align_self = match keyword {
                    Some("auto") => None,
                    _ => Some(item_align(style)?),
                };
            }
            Property::GridTemplateColumns => target.grid_columns = track_count(style)?,
            Property::GridTemplateRows => target.grid_rows = track_count(style)?,
            Property::GridColumn => target.grid_column_span = Some(span(style)?),
            _ => target.grid_row_span = Some(span(style)?),
        }
        Ok(())
    }

    /// `flex` shorthand as grow, shrink and basis.
    fn flex(&self, style: &ParsedStyle) -> Result<(f32, f32, Dimension)> {
        let text = match &style.value {
            StyleValue::Keyword(k) if k == "none" => return Ok((0.0, 0.0, Dimension::Auto)),
            StyleValue::Number(n) => return Ok((*n, 1.0, Dimension::Percent(0.0))),
            StyleValue::Keyword(text) | StyleValue::Raw(text) => text.as_str(),
            _ => return Err(unsupported(style)),
        };

        let parts: Vec<&str> = text.split_whitespace().collect();
        let invalid = || Error::invalid_value(style.property.as_str(), format!("bad flex '{text}'"));
        let number = |s: &str| s.parse::<f32>().map_err(|_| invalid());
        match parts.as_slice() {
            [grow] => Ok((number(grow)?, 1.0, Dimension::Percent(0.0))),
            [grow, shrink] => Ok((number(grow)?, number(shrink)?, Dimension::Percent(0.0))),
            [grow, shrink, basis] => {
                let basis = match *basis {
                    "auto" => Dimension::Auto,
                    basis => match Length::parse(basis).ok_or_else(invalid)? {
                        Length {
                            value,
                            unit: Unit::Percent,
                        } => Dimension::Percent(value),
                        length => Dimension::Pixels(self.length_px(style, &length)?),
                    },
                };
                Ok((number(grow)?, number(shrink)?, basis))
            }
            _ => Err(invalid()),
        }
    }
}

fn integer(style: &ParsedStyle) -> Result<i32> {
    let n = style.value.as_number().ok_or_else(|| unsupported(style))?;
    Ok(signed(style, n) as i32)
}

fn item_align(style: &ParsedStyle) -> Result<AxisAlign> {
    Ok(match style.value.as_keyword() {
        Some("flex-start") => AxisAlign::Min,
        Some("center") => AxisAlign::Center,
        Some("flex-end") => AxisAlign::Max,
        Some("baseline") => AxisAlign::Baseline,
        Some("stretch") => AxisAlign::Stretch,
        _ => return Err(unsupported(style)),
    })
}

/// Equal-track count for `grid-cols-3`; `none` clears it.
fn track_count(style: &ParsedStyle) -> Result<Option<u32>> {
    match &style.value {
        StyleValue::Keyword(k) if k == "none" => Ok(None),
        StyleValue::Number(n) if *n >= 1.0 => Ok(Some(*n as u32)),
        _ => Err(unsupported(style)),
    }
}

fn span(style: &ParsedStyle) -> Result<u32> {
    match &style.value {
        StyleValue::Number(n) if *n >= 1.0 => Ok(*n as u32),
        _ => Err(unsupported(style)),
    }
}
