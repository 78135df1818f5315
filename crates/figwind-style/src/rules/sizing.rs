//! Width, height and their min/max variants, size and flex-basis.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::types::{Property, Side, StyleValue};

const SIZE_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "full"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const WIDTH_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "full"),
    ("screen", "screen"),
    ("svw", "screen"),
    ("dvw", "screen"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const HEIGHT_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "full"),
    ("screen", "screen"),
    ("svh", "screen"),
    ("dvh", "screen"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MAX_KEYWORDS: &[(&str, &str)] = &[
    ("none", "none"),
    ("full", "full"),
    ("screen", "screen"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

fn spacing_or_fraction(key: &str) -> Option<StyleValue> {
    scales::spacing_key(key).or_else(|| scales::fraction(key))
}

fn spacing(key: &str) -> Option<StyleValue> {
    scales::spacing_key(key)
}

/// Named container widths stay keywords; lowering resolves them.
fn container(key: &str) -> Option<StyleValue> {
    scales::container(key)
        .map(|_| StyleValue::keyword(key))
        .or_else(|| scales::spacing_key(key))
}

const fn size_family(
    name: &'static str,
    property: Property,
    prefix: &'static [(&'static str, Option<Side>)],
    theme: &'static [&'static str],
) -> FamilySpec {
    FamilySpec::new(name, property, prefix)
        .theme(theme)
        .preset(spacing_or_fraction)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Accept)
}

pub static WIDTH: FamilySpec =
    size_family("width", Property::Width, &[("w", None)], &["width", "spacing"]).keywords(WIDTH_KEYWORDS);

pub static HEIGHT: FamilySpec =
    size_family("height", Property::Height, &[("h", None)], &["height", "spacing"]).keywords(HEIGHT_KEYWORDS);

pub static SIZE: FamilySpec =
    size_family("size", Property::Size, &[("size", None)], &["size", "spacing"]).keywords(SIZE_KEYWORDS);

pub static MIN_WIDTH: FamilySpec = size_family(
    "min-width",
    Property::MinWidth,
    &[("min-w", None)],
    &["minWidth", "spacing"],
)
.preset(spacing)
.keywords(WIDTH_KEYWORDS);

pub static MIN_HEIGHT: FamilySpec = size_family(
    "min-height",
    Property::MinHeight,
    &[("min-h", None)],
    &["minHeight", "spacing"],
)
.preset(spacing)
.keywords(HEIGHT_KEYWORDS);

pub static MAX_WIDTH: FamilySpec = size_family(
    "max-width",
    Property::MaxWidth,
    &[("max-w", None)],
    &["maxWidth"],
)
.preset(container)
.keywords(MAX_KEYWORDS);

pub static MAX_HEIGHT: FamilySpec = size_family(
    "max-height",
    Property::MaxHeight,
    &[("max-h", None)],
    &["maxHeight", "spacing"],
)
.preset(spacing)
.keywords(MAX_KEYWORDS);

pub static FLEX_BASIS: FamilySpec = size_family(
    "flex-basis",
    Property::FlexBasis,
    &[("basis", None)],
    &["flexBasis", "spacing"],
)
.keywords(SIZE_KEYWORDS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve_family;
    use crate::theme::Context;
    use crate::types::{Length, Variant};

    #[test]
    fn width_forms() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&WIDTH, "w-full", &ctx).unwrap().value,
            StyleValue::keyword("full")
        );
        assert_eq!(
            resolve_family(&WIDTH, "w-64", &ctx).unwrap().value,
            StyleValue::Number(64.0)
        );
        assert_eq!(
            resolve_family(&WIDTH, "w-1/2", &ctx).unwrap().value.fraction_percent(),
            Some(50.0)
        );

        let style = resolve_family(&WIDTH, "w-[calc(100%-2rem)]", &ctx).unwrap();
        assert_eq!(style.variant, Variant::Arbitrary);
        assert_eq!(style.value, StyleValue::Raw("calc(100%-2rem)".into()));

        assert!(resolve_family(&WIDTH, "-w-4", &ctx).is_none());
    }

    #[test]
    fn max_width_containers() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&MAX_WIDTH, "max-w-md", &ctx).unwrap().value,
            StyleValue::keyword("md")
        );
        assert_eq!(
            resolve_family(&MAX_WIDTH, "max-w-screen-lg", &ctx).unwrap().value,
            StyleValue::keyword("screen-lg")
        );
        assert!(resolve_family(&MAX_WIDTH, "max-w-1/2", &ctx).is_none());
    }

    #[test]
    fn height_screen_and_arbitrary() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&HEIGHT, "h-dvh", &ctx).unwrap().value,
            StyleValue::keyword("screen")
        );
        assert_eq!(
            resolve_family(&MIN_HEIGHT, "min-h-[50vh]", &ctx).unwrap().value,
            StyleValue::Length(Length::new(50.0, crate::types::Unit::Vh))
        );
    }
}
