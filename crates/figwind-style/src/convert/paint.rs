//! Fills, strokes, shadows and blurs.

use figwind_paint::{Color, Effect, Paint, ScaleMode};

use super::{Converter, TargetStyle, unsupported};
use crate::error::{Error, Result};
use crate::parser::parse_box_shadow;
use crate::rules::scales;
use crate::types::{ParsedStyle, Property, Side, StyleValue, Unit};

impl Converter {
    pub(super) fn lower_paint(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        match style.property {
            Property::BackgroundColor => target.fills.push(solid(style)?),
            Property::BackgroundImage => match &style.value {
                StyleValue::Keyword(k) if k == "none" => {
                    target.fills.retain(|fill| !matches!(fill, Paint::Image { .. }));
                }
                StyleValue::Raw(raw) => {
                    let url = image_url(raw).ok_or_else(|| unsupported(style))?;
                    target.fills.push(Paint::image(url, ScaleMode::Fill));
                }
                _ => return Err(unsupported(style)),
            },
            Property::TextColor => target.text_fill = Some(solid(style)?),
            Property::BorderColor => {
                if style.side_or_all() != Side::All {
                    return Err(unsupported(style));
                }
                target.strokes = vec![solid(style)?];
            }
            Property::RingColor => {
                target.ring.get_or_insert_default().color = Some(color(style)?);
            }
            Property::RingOffsetColor => {
                target.ring.get_or_insert_default().offset_color = Some(color(style)?);
            }
            Property::ShadowColor => {
                let shadow_color = color(style)?;
                for effect in &mut target.effects {
                    *effect = effect.with_shadow_color(shadow_color);
                }
                target.shadow_color = Some(shadow_color);
            }
            Property::BoxShadow => {
                let mut shadows = self.shadows(style)?;
                if shadows.is_empty() {
                    target.effects.retain(|effect| !effect.is_shadow());
                    return Ok(());
                }
                if let Some(shadow_color) = target.shadow_color {
                    shadows = shadows
                        .into_iter()
                        .map(|effect| effect.with_shadow_color(shadow_color))
                        .collect();
                }
                target.effects.extend(shadows);
            }
            Property::Opacity => {
                let opacity = style.value.as_number().ok_or_else(|| unsupported(style))?;
                target.opacity = Some(opacity.clamp(0.0, 1.0));
            }
            Property::Blur => {
                let radius = self.blur_radius(style)?;
                target
                    .effects
                    .retain(|effect| !matches!(effect, Effect::LayerBlur { .. }));
                if radius > 0.0 {
                    target.effects.push(Effect::LayerBlur { radius });
                }
            }
            Property::BackdropBlur => {
                let radius = self.blur_radius(style)?;
                target
                    .effects
                    .retain(|effect| !matches!(effect, Effect::BackgroundBlur { .. }));
                if radius > 0.0 {
                    target.effects.push(Effect::BackgroundBlur { radius });
                }
            }
            _ => {
                let mode = style.value.as_keyword().ok_or_else(|| unsupported(style))?;
                target.blend_mode = Some(mode.to_ascii_uppercase().replace('-', "_"));
            }
        }
        Ok(())
    }

    fn shadows(&self, style: &ParsedStyle) -> Result<Vec<Effect>> {
        let css = match &style.value {
            StyleValue::Keyword(key) => scales::shadow(key).ok_or_else(|| unsupported(style))?,
            StyleValue::Raw(raw) => raw.as_str(),
            _ => return Err(unsupported(style)),
        };
        parse_box_shadow(css, self.options.root_font_size).ok_or_else(|| {
            Error::invalid_value(style.property.as_str(), format!("bad shadow '{css}'"))
        })
    }

    fn blur_radius(&self, style: &ParsedStyle) -> Result<f32> {
        match &style.value {
            StyleValue::Keyword(key) => scales::blur(key).ok_or_else(|| unsupported(style)),
            StyleValue::Length(l) if l.unit != Unit::Percent => self.length_px(style, l),
            _ => Err(unsupported(style)),
        }
    }
}

/// The node's color with its opacity suffix folded into alpha.
fn color(style: &ParsedStyle) -> Result<Color> {
    let value = style.value.as_color().ok_or_else(|| unsupported(style))?;
    let color = value.color;
    Ok(match style.opacity {
        Some(opacity) => color.with_alpha(color.a * f32::from(opacity) / 100.0),
        None => color,
    })
}

/// Solid paint; the color alpha and opacity suffix become the paint opacity.
fn solid(style: &ParsedStyle) -> Result<Paint> {
    color(style).map(Paint::solid)
}

fn image_url(raw: &str) -> Option<&str> {
    let inner = raw.strip_prefix("url(")?.strip_suffix(')')?.trim();
    let unquoted = inner
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| inner.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(inner);
    (!unquoted.is_empty()).then_some(unquoted)
}

#[cfg(test)]
mod tests {
    use super::super::tests::convert;
    use super::*;
    use figwind_paint::Shadow;

    fn solid_parts(paint: &Paint) -> (Color, f32) {
        match paint {
            Paint::Solid { color, opacity } => (*color, *opacity),
            other => panic!("expected solid paint, got {other:?}"),
        }
    }

    #[test]
    fn background_opacity_suffix() {
        let target = convert(&["bg-white/50"]);
        let (color, opacity) = solid_parts(&target.fills[0]);
        assert_eq!(color, Color::WHITE);
        assert!((opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fills_accumulate() {
        let target = convert(&["bg-black", "bg-[url(/hero.png)]"]);
        assert_eq!(target.fills.len(), 2);
        assert_eq!(target.fills[1], Paint::image("/hero.png", ScaleMode::Fill));

        let target = convert(&["bg-[url('/a.png')]", "bg-none"]);
        assert!(target.fills.is_empty());
    }

    #[test]
    fn text_and_border_colors() {
        let target = convert(&["text-black", "border-white"]);
        assert_eq!(target.text_fill, Some(Paint::solid(Color::BLACK)));
        assert_eq!(target.strokes, vec![Paint::solid(Color::WHITE)]);

        let target = convert(&["border-t-white"]);
        assert!(target.strokes.is_empty());
        assert_eq!(
            target.css.get("border-top-color").map(String::as_str),
            Some("#ffffff")
        );
    }

    #[test]
    fn gradients_stay_css() {
        let target = convert(&["bg-gradient-to-r"]);
        assert!(target.fills.is_empty());
        assert!(target.css["background-image"].starts_with("linear-gradient(to right"));
    }

    #[test]
    fn shadow_scale_and_color() {
        let target = convert(&["shadow-lg"]);
        assert_eq!(target.effects.len(), 2);
        assert!(target.effects.iter().all(Effect::is_shadow));

        let target = convert(&["shadow-sm", "shadow-black/50"]);
        assert_eq!(
            target.effects,
            vec![Effect::DropShadow(Shadow::new(
                0.0,
                1.0,
                2.0,
                0.0,
                Color::BLACK.with_alpha(0.5)
            ))]
        );

        let target = convert(&["shadow-black", "shadow-inner"]);
        let Effect::InnerShadow(shadow) = target.effects[0] else {
            panic!("expected inner shadow");
        };
        assert_eq!(shadow.color, Color::BLACK);
    }

    #[test]
    fn shadow_none_clears() {
        let target = convert(&["shadow-md", "blur-sm", "shadow-none"]);
        assert_eq!(target.effects, vec![Effect::LayerBlur { radius: 4.0 }]);
    }

    #[test]
    fn blurs_replace() {
        let target = convert(&["blur", "blur-lg", "backdrop-blur-[2px]"]);
        assert_eq!(
            target.effects,
            vec![
                Effect::LayerBlur { radius: 16.0 },
                Effect::BackgroundBlur { radius: 2.0 }
            ]
        );
    }

    #[test]
    fn ring_color_and_opacity() {
        let target = convert(&["ring-2", "ring-black", "opacity-75", "mix-blend-color-dodge"]);
        let ring = target.ring.unwrap();
        assert_eq!(ring.color, Some(Color::BLACK));
        assert_eq!(target.all_effects().len(), 1);
        assert_eq!(target.opacity, Some(0.75));
        assert_eq!(target.blend_mode.as_deref(), Some("COLOR_DODGE"));
    }

    #[test]
    fn image_urls() {
        assert_eq!(image_url("url(a.png)"), Some("a.png"));
        assert_eq!(image_url("url(\"a b.png\")"), Some("a b.png"));
        assert_eq!(image_url("url()"), None);
        assert_eq!(image_url("linear-gradient(red, blue)"), None);
    }
}
