//! Color utilities: every family resolves the same palette and accepts an
//! opacity suffix.

use super::family::{CustomProperty, FamilySpec};
use super::palette;
use super::shape::ValueShape;
use crate::types::{ColorValue, Property, Side, StyleValue};

const COLOR_KEYWORDS: &[(&str, &str)] = &[("current", "currentColor"), ("inherit", "inherit")];

fn palette_color(key: &str) -> Option<StyleValue> {
    palette::color(key).map(|c| StyleValue::Color(ColorValue::preset(key, c)))
}

const fn color_family(
    name: &'static str,
    property: Property,
    prefixes: &'static [(&'static str, Option<Side>)],
) -> FamilySpec {
    FamilySpec::new(name, property, prefixes)
        .theme(&["colors"])
        .preset(palette_color)
        .keywords(COLOR_KEYWORDS)
        .shape(ValueShape::Color)
        .custom_property(CustomProperty::Accept)
        .opacity()
}

pub static BACKGROUND_COLOR: FamilySpec =
    color_family("background-color", Property::BackgroundColor, &[("bg", None)]);

pub static TEXT_COLOR: FamilySpec = color_family("text-color", Property::TextColor, &[("text", None)]);

pub static BORDER_COLOR: FamilySpec = color_family(
    "border-color",
    Property::BorderColor,
    &[
        ("border", Some(Side::All)),
        ("border-x", Some(Side::X)),
        ("border-y", Some(Side::Y)),
        ("border-s", Some(Side::InlineStart)),
        ("border-e", Some(Side::InlineEnd)),
        ("border-t", Some(Side::Top)),
        ("border-r", Some(Side::Right)),
        ("border-b", Some(Side::Bottom)),
        ("border-l", Some(Side::Left)),
    ],
);

pub static OUTLINE_COLOR: FamilySpec =
    color_family("outline-color", Property::OutlineColor, &[("outline", None)]);

pub static RING_COLOR: FamilySpec = color_family("ring-color", Property::RingColor, &[("ring", None)]);

pub static RING_OFFSET_COLOR: FamilySpec = color_family(
    "ring-offset-color",
    Property::RingOffsetColor,
    &[("ring-offset", None)],
);

pub static DIVIDE_COLOR: FamilySpec =
    color_family("divide-color", Property::DivideColor, &[("divide", None)]);

pub static FILL: FamilySpec = color_family("fill", Property::Fill, &[("fill", None)])
    .keywords(&[("current", "currentColor"), ("inherit", "inherit"), ("none", "none")]);

pub static STROKE: FamilySpec = color_family("stroke", Property::Stroke, &[("stroke", None)])
    .keywords(&[("current", "currentColor"), ("inherit", "inherit"), ("none", "none")]);

pub static ACCENT_COLOR: FamilySpec = color_family("accent-color", Property::AccentColor, &[("accent", None)])
    .keywords(&[("current", "currentColor"), ("inherit", "inherit"), ("auto", "auto")]);

pub static CARET_COLOR: FamilySpec = color_family("caret-color", Property::CaretColor, &[("caret", None)]);

pub static PLACEHOLDER_COLOR: FamilySpec = color_family(
    "placeholder-color",
    Property::PlaceholderColor,
    &[("placeholder", None)],
);

pub static DECORATION_COLOR: FamilySpec = color_family(
    "text-decoration-color",
    Property::TextDecorationColor,
    &[("decoration", None)],
);

pub static SHADOW_COLOR: FamilySpec =
    color_family("shadow-color", Property::ShadowColor, &[("shadow", None)]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve_family;
    use crate::theme::{Context, ThemeValue};
    use crate::types::Variant;
    use figwind_paint::Color;

    #[test]
    fn palette_preset_with_opacity() {
        let lookup = |path: &str| (path == "colors.blue.200").then(|| ThemeValue::from("#bfdbfe"));
        let ctx = Context::new(&lookup);

        let style = resolve_family(&BACKGROUND_COLOR, "bg-blue-200/50", &ctx).unwrap();
        assert_eq!(style.property, Property::BackgroundColor);
        assert_eq!(style.preset_name(), Some("blue-200"));
        assert_eq!(style.opacity, Some(50));
        assert!(!style.is_arbitrary());
    }

    #[test]
    fn builtin_palette_without_theme() {
        let style = resolve_family(&TEXT_COLOR, "text-red-500", &Context::empty()).unwrap();
        assert_eq!(style.preset_name(), Some("red-500"));
        assert_eq!(style.value.as_color().unwrap().color, Color::from_hex("#ef4444").unwrap());
    }

    #[test]
    fn empty_brackets_are_rejected() {
        assert!(resolve_family(&BACKGROUND_COLOR, "bg-[]", &Context::empty()).is_none());
    }

    #[test]
    fn arbitrary_colors() {
        let ctx = Context::empty();
        let style = resolve_family(&BACKGROUND_COLOR, "bg-[rgba(0,0,0,0.5)]/20", &ctx).unwrap();
        assert_eq!(style.opacity, Some(20));
        assert_eq!(style.value.as_color().unwrap().color.a, 0.5);

        let style = resolve_family(&BACKGROUND_COLOR, "bg-[#0af]", &ctx).unwrap();
        assert_eq!(style.variant, Variant::Arbitrary);

        assert!(resolve_family(&BACKGROUND_COLOR, "bg-[10px]", &ctx).is_none());
        assert!(resolve_family(&BACKGROUND_COLOR, "bg-[url(/a.png)]", &ctx).is_none());
        assert!(resolve_family(&BACKGROUND_COLOR, "bg-red-500/150", &ctx).is_none());
    }

    #[test]
    fn side_custom_property_with_opacity() {
        let style = resolve_family(&BORDER_COLOR, "border-x-(--foo)/50", &Context::empty()).unwrap();
        assert_eq!(style.side, Some(Side::X));
        assert_eq!(style.value, StyleValue::Variable("--foo".into()));
        assert_eq!(style.variant, Variant::CustomProperty);
        assert_eq!(style.opacity, Some(50));
    }

    #[test]
    fn current_color_keyword() {
        let style = resolve_family(&FILL, "fill-current", &Context::empty()).unwrap();
        assert_eq!(style.value, StyleValue::keyword("currentColor"));
    }
}
