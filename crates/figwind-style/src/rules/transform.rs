//! Rotate, scale, translate, skew and transform origin.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{Length, Property, Side, StyleValue, Unit};

fn degrees(key: &str) -> Option<StyleValue> {
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    Some(StyleValue::Length(Length::new(n, Unit::Deg)))
}

/// `scale-95` is stored as the factor 0.95.
fn scale(key: &str) -> Option<StyleValue> {
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    Some(StyleValue::Number(n / 100.0))
}

fn translate(key: &str) -> Option<StyleValue> {
    scales::spacing_key(key).or_else(|| scales::fraction(key))
}

pub static ROTATE: FamilySpec = FamilySpec::new("rotate", Property::Rotate, &[("rotate", None)])
    .theme(&["rotate"])
    .preset(degrees)
    .shape(ValueShape::Angle)
    .custom_property(CustomProperty::Accept)
    .negative();

pub static SCALE: FamilySpec = FamilySpec::new(
    "scale",
    Property::Scale,
    &[
        ("scale", Some(Side::All)),
        ("scale-x", Some(Side::X)),
        ("scale-y", Some(Side::Y)),
    ],
)
.theme(&["scale"])
.preset(scale)
.shape(ValueShape::Number)
.custom_property(CustomProperty::Accept)
.negative();

pub static TRANSLATE: FamilySpec = FamilySpec::new(
    "translate",
    Property::Translate,
    &[("translate-x", Some(Side::X)), ("translate-y", Some(Side::Y))],
)
.theme(&["translate", "spacing"])
.preset(translate)
.keywords(&[("full", "full")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept)
.negative();

pub static SKEW: FamilySpec = FamilySpec::new(
    "skew",
    Property::Skew,
    &[("skew-x", Some(Side::X)), ("skew-y", Some(Side::Y))],
)
.theme(&["skew"])
.preset(degrees)
.shape(ValueShape::Angle)
.custom_property(CustomProperty::Accept)
.negative();

pub static TRANSFORM_ORIGIN: FamilySpec =
    FamilySpec::new("transform-origin", Property::TransformOrigin, &[("origin", None)])
        .theme(&["transformOrigin"])
        .keywords(&[
            ("center", "center"),
            ("top", "top"),
            ("top-right", "top right"),
            ("right", "right"),
            ("bottom-right", "bottom right"),
            ("bottom", "bottom"),
            ("bottom-left", "bottom left"),
            ("left", "left"),
            ("top-left", "top left"),
        ])
        .shape(ValueShape::Position)
        .custom_property(CustomProperty::Accept);
