//! Typography.

use figwind_paint::{FontStyle, LetterSpacing, LineHeight, TextAlign, TextCase, TextDecoration};

use super::{Converter, TargetStyle, unsupported};
use crate::error::{Error, Result};
use crate::types::{Length, LineHeightValue, ParsedStyle, Property, StyleValue, Unit};

impl Converter {
    pub(super) fn lower_text(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        let keyword = style.value.as_keyword();
        match style.property {
            Property::FontSize => {
                let StyleValue::Font(font) = &style.value else {
                    return Err(unsupported(style));
                };
                if font.size.unit == Unit::Percent {
                    return Err(unsupported(style));
                }
                let size = self.length_px(style, &font.size)?;
                let line_height = font
                    .line_height
                    .map(|lh| self.line_height(style, lh))
                    .transpose()?;

                target.font_size = Some(size);
                if line_height.is_some() {
                    target.line_height = line_height;
                }
            }
            Property::FontWeight => {
                target.font_weight = Some(style.value.as_number().ok_or_else(|| unsupported(style))?);
            }
            Property::FontFamily => match &style.value {
                StyleValue::Families(families) => target.font_family = Some(families.clone()),
                _ => return Err(unsupported(style)),
            },
            Property::FontStyle => {
                target.font_style = Some(match keyword {
                    Some("italic") => FontStyle::Italic,
                    Some("normal") => FontStyle::Normal,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::LineHeight => {
                let value = match &style.value {
                    StyleValue::Number(ratio) => LineHeightValue::Ratio(*ratio),
                    StyleValue::Length(length) => LineHeightValue::Length(*length),
                    _ => return Err(unsupported(style)),
                };
                target.line_height = Some(self.line_height(style, value)?);
            }
            Property::LetterSpacing => {
                let StyleValue::Length(length) = &style.value else {
                    return Err(unsupported(style));
                };
                let spacing = self.letter_spacing(style, length)?;
                target.letter_spacing = Some(if style.negative {
                    spacing.negated()
                } else {
                    spacing
                });
            }
            Property::TextAlign => {
                let align = keyword
                    .and_then(TextAlign::from_css)
                    .ok_or_else(|| unsupported(style))?;
                target.text_align = Some(align);
            }
            Property::TextDecorationLine => {
                target.text_decoration = Some(match keyword {
                    Some("underline") => TextDecoration::Underline,
                    Some("line-through") => TextDecoration::Strikethrough,
                    Some("overline") => TextDecoration::Overline,
                    Some("none") => TextDecoration::None,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::TextTransform => {
                target.text_case = Some(match keyword {
                    Some("uppercase") => TextCase::Upper,
                    Some("lowercase") => TextCase::Lower,
                    Some("capitalize") => TextCase::Title,
                    Some("none") => TextCase::Original,
                    _ => return Err(unsupported(style)),
                });
            }
            Property::TextOverflow => match keyword {
                Some("truncate") => {
                    target.text_truncation = Some(true);
                    target.max_lines = Some(1);
                }
                Some("ellipsis") => target.text_truncation = Some(true),
                Some("clip") => target.text_truncation = Some(false),
                _ => return Err(unsupported(style)),
            },
            _ => match &style.value {
                StyleValue::Keyword(k) if k == "none" => {
                    target.text_truncation = Some(false);
                    target.max_lines = None;
                }
                StyleValue::Number(n) if *n >= 1.0 && n.fract() == 0.0 => {
                    target.text_truncation = Some(true);
                    target.max_lines = Some(*n as u32);
                }
                StyleValue::Number(_) => {
                    return Err(Error::invalid_value(
                        style.property.as_str(),
                        "line count must be a positive integer",
                    ));
                }
                _ => return Err(unsupported(style)),
            },
        }
        Ok(())
    }

    fn line_height(&self, style: &ParsedStyle, value: LineHeightValue) -> Result<LineHeight> {
        Ok(match value {
            LineHeightValue::Ratio(ratio) => LineHeight::Percent(ratio * 100.0),
            LineHeightValue::Length(l) if l.unit == Unit::Percent => LineHeight::Percent(l.value),
            LineHeightValue::Length(l) => LineHeight::Pixels(self.length_px(style, &l)?),
        })
    }

    /// `em` tracking is relative to the font size and stays relative.
    fn letter_spacing(&self, style: &ParsedStyle, length: &Length) -> Result<LetterSpacing> {
        Ok(match length.unit {
            Unit::Em => LetterSpacing::Percent(length.value * 100.0),
            Unit::Percent => LetterSpacing::Percent(length.value),
            _ => LetterSpacing::Pixels(self.length_px(style, length)?),
        })
    }
}
