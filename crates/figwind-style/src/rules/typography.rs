//! Font and text families.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{FontValue, Length, Property, StyleValue};

fn number(key: &str) -> Option<StyleValue> {
    is_numeric(key)
        .then(|| key.parse().ok())
        .flatten()
        .map(StyleValue::Number)
}

fn font_size(key: &str) -> Option<StyleValue> {
    scales::font_size(key).map(|(rem, line_height)| {
        StyleValue::Font(FontValue {
            size: Length::rem(rem),
            line_height: Some(line_height),
        })
    })
}

fn font_weight(key: &str) -> Option<StyleValue> {
    scales::font_weight(key).map(StyleValue::Number)
}

fn font_family(key: &str) -> Option<StyleValue> {
    scales::font_family(key)
        .map(|stack| StyleValue::Families(stack.iter().map(|s| s.to_string()).collect()))
}

/// Named leading is a ratio; numeric leading is a spacing step.
fn line_height(key: &str) -> Option<StyleValue> {
    if let Some(ratio) = scales::line_height(key) {
        return Some(StyleValue::Number(ratio));
    }
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    scales::spacing(n).map(StyleValue::Length)
}

fn letter_spacing(key: &str) -> Option<StyleValue> {
    scales::letter_spacing(key).map(|em| StyleValue::Length(Length::em(em)))
}

pub static FONT_SIZE: FamilySpec = FamilySpec::new("font-size", Property::FontSize, &[("text", None)])
    .theme(&["fontSize"])
    .preset(font_size)
    .shape(ValueShape::FontSize)
    .custom_property(CustomProperty::Hinted)
    .line_height();

pub static TEXT_ALIGN: FamilySpec = FamilySpec::new("text-align", Property::TextAlign, &[("text", None)])
    .keywords(&[
        ("left", "left"),
        ("center", "center"),
        ("right", "right"),
        ("justify", "justify"),
        ("start", "start"),
        ("end", "end"),
    ]);

pub static TEXT_OVERFLOW: FamilySpec =
    FamilySpec::new("text-overflow", Property::TextOverflow, &[("text", None)])
        .keywords(&[("ellipsis", "ellipsis"), ("clip", "clip")]);

pub static FONT_WEIGHT: FamilySpec = FamilySpec::new("font-weight", Property::FontWeight, &[("font", None)])
    .theme(&["fontWeight"])
    .preset(font_weight)
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Hinted);

pub static FONT_FAMILY: FamilySpec = FamilySpec::new("font-family", Property::FontFamily, &[("font", None)])
    .theme(&["fontFamily"])
    .preset(font_family)
    .shape(ValueShape::FontFamily)
    .custom_property(CustomProperty::Accept);

pub static LINE_HEIGHT: FamilySpec = FamilySpec::new("line-height", Property::LineHeight, &[("leading", None)])
    .theme(&["lineHeight"])
    .preset(line_height)
    .shape(ValueShape::LengthOrNumber)
    .custom_property(CustomProperty::Accept);

pub static LETTER_SPACING: FamilySpec =
    FamilySpec::new("letter-spacing", Property::LetterSpacing, &[("tracking", None)])
        .theme(&["letterSpacing"])
        .preset(letter_spacing)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Accept)
        .negative();

pub static DECORATION_THICKNESS: FamilySpec = FamilySpec::new(
    "text-decoration-thickness",
    Property::TextDecorationThickness,
    &[("decoration", None)],
)
.theme(&["textDecorationThickness"])
.preset(number)
.keywords(&[("auto", "auto"), ("from-font", "from-font")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Hinted);

pub static UNDERLINE_OFFSET: FamilySpec = FamilySpec::new(
    "text-underline-offset",
    Property::TextUnderlineOffset,
    &[("underline-offset", None)],
)
.theme(&["textUnderlineOffset"])
.preset(number)
.keywords(&[("auto", "auto")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept)
.negative();

pub static WHITE_SPACE: FamilySpec =
    FamilySpec::new("white-space", Property::WhiteSpace, &[("whitespace", None)]).keywords(&[
        ("normal", "normal"),
        ("nowrap", "nowrap"),
        ("pre", "pre"),
        ("pre-line", "pre-line"),
        ("pre-wrap", "pre-wrap"),
        ("break-spaces", "break-spaces"),
    ]);

pub static WORD_BREAK: FamilySpec = FamilySpec::new("word-break", Property::WordBreak, &[("break", None)])
    .keywords(&[
        ("normal", "normal"),
        ("words", "break-word"),
        ("all", "break-all"),
        ("keep", "keep-all"),
    ]);

pub static VERTICAL_ALIGN: FamilySpec =
    FamilySpec::new("vertical-align", Property::VerticalAlign, &[("align", None)])
        .keywords(&[
            ("baseline", "baseline"),
            ("top", "top"),
            ("middle", "middle"),
            ("bottom", "bottom"),
            ("text-top", "text-top"),
            ("text-bottom", "text-bottom"),
            ("sub", "sub"),
            ("super", "super"),
        ])
        .shape(ValueShape::Length);

pub static LINE_CLAMP: FamilySpec = FamilySpec::new("line-clamp", Property::LineClamp, &[("line-clamp", None)])
    .preset(number)
    .keywords(&[("none", "none")])
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Accept);

pub static LIST_STYLE_TYPE: FamilySpec =
    FamilySpec::new("list-style-type", Property::ListStyleType, &[("list", None)])
        .theme(&["listStyleType"])
        .keywords(&[("none", "none"), ("disc", "disc"), ("decimal", "decimal")])
        .shape(ValueShape::Any)
        .custom_property(CustomProperty::Accept);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve_family;
    use crate::theme::{Context, ThemeValue};
    use crate::types::LineHeightValue;

    #[test]
    fn font_size_with_paired_line_height() {
        let style = resolve_family(&FONT_SIZE, "text-sm", &Context::empty()).unwrap();
        assert_eq!(
            style.value,
            StyleValue::Font(FontValue {
                size: Length::rem(0.875),
                line_height: Some(LineHeightValue::Length(Length::rem(1.25))),
            })
        );

        let style = resolve_family(&FONT_SIZE, "text-base/7", &Context::empty()).unwrap();
        let StyleValue::Font(font) = style.value else {
            panic!("expected font value");
        };
        assert_eq!(font.line_height, Some(LineHeightValue::Length(Length::rem(1.75))));
    }

    #[test]
    fn text_prefix_is_shared() {
        let ctx = Context::empty();
        assert!(resolve_family(&FONT_SIZE, "text-red-500", &ctx).is_none());
        assert!(resolve_family(&FONT_SIZE, "text-center", &ctx).is_none());
        assert!(resolve_family(&FONT_SIZE, "text-[#fff]", &ctx).is_none());
        assert!(resolve_family(&FONT_SIZE, "text-[2rem]", &ctx).is_some());
        assert!(resolve_family(&TEXT_ALIGN, "text-center", &ctx).is_some());
    }

    #[test]
    fn font_prefix_is_shared() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&FONT_WEIGHT, "font-semibold", &ctx).unwrap().value,
            StyleValue::Number(600.0)
        );
        assert_eq!(
            resolve_family(&FONT_WEIGHT, "font-[650]", &ctx).unwrap().value,
            StyleValue::Number(650.0)
        );
        assert!(resolve_family(&FONT_WEIGHT, "font-mono", &ctx).is_none());
        assert!(resolve_family(&FONT_WEIGHT, "font-(--f)", &ctx).is_none());

        let style = resolve_family(&FONT_FAMILY, "font-mono", &ctx).unwrap();
        assert!(matches!(style.value, StyleValue::Families(ref f) if f[0] == "ui-monospace"));
        assert!(resolve_family(&FONT_FAMILY, "font-[650]", &ctx).is_none());
    }

    #[test]
    fn leading_named_and_numeric() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&LINE_HEIGHT, "leading-tight", &ctx).unwrap().value,
            StyleValue::Number(1.25)
        );
        assert_eq!(
            resolve_family(&LINE_HEIGHT, "leading-6", &ctx).unwrap().value,
            StyleValue::Length(Length::rem(1.5))
        );
    }

    #[test]
    fn tracking_from_theme() {
        let lookup = |path: &str| (path == "letterSpacing.brand").then(|| ThemeValue::from("0.2em"));
        let ctx = Context::new(&lookup);
        assert_eq!(
            resolve_family(&LETTER_SPACING, "tracking-brand", &ctx).unwrap().value,
            StyleValue::Length(Length::em(0.2))
        );
        let style = resolve_family(&LETTER_SPACING, "-tracking-wide", &ctx).unwrap();
        assert!(style.negative);
    }
}
