//! Border width/style/radius, outlines, rings, dividers and stroke width.

use super::family::{CustomProperty, FamilySpec};
use super::scales::{self, DEFAULT_KEY};
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{Property, Side, StyleValue};

/// Bare form keeps the `DEFAULT` key; numbers are pixel widths.
fn width(key: &str) -> Option<StyleValue> {
    if key == DEFAULT_KEY {
        return Some(StyleValue::keyword(DEFAULT_KEY));
    }
    number(key)
}

fn number(key: &str) -> Option<StyleValue> {
    is_numeric(key)
        .then(|| key.parse().ok())
        .flatten()
        .map(StyleValue::Number)
}

fn radius(key: &str) -> Option<StyleValue> {
    scales::radius(key).map(|_| StyleValue::keyword(key))
}

const LINE_STYLES: &[(&str, &str)] = &[
    ("solid", "solid"),
    ("dashed", "dashed"),
    ("dotted", "dotted"),
    ("double", "double"),
    ("hidden", "hidden"),
    ("none", "none"),
];

const BORDER_SIDES: &[(&str, Option<Side>)] = &[
    ("border", Some(Side::All)),
    ("border-x", Some(Side::X)),
    ("border-y", Some(Side::Y)),
    ("border-s", Some(Side::InlineStart)),
    ("border-e", Some(Side::InlineEnd)),
    ("border-t", Some(Side::Top)),
    ("border-r", Some(Side::Right)),
    ("border-b", Some(Side::Bottom)),
    ("border-l", Some(Side::Left)),
];

pub static BORDER_WIDTH: FamilySpec = FamilySpec::new("border-width", Property::BorderWidth, BORDER_SIDES)
    .theme(&["borderWidth"])
    .preset(width)
    .shape(ValueShape::Length)
    .custom_property(CustomProperty::Hinted);

pub static BORDER_STYLE: FamilySpec =
    FamilySpec::new("border-style", Property::BorderStyle, &[("border", None)]).keywords(LINE_STYLES);

pub static BORDER_RADIUS: FamilySpec = FamilySpec::new(
    "border-radius",
    Property::BorderRadius,
    &[
        ("rounded", Some(Side::All)),
        ("rounded-s", Some(Side::InlineStart)),
        ("rounded-e", Some(Side::InlineEnd)),
        ("rounded-t", Some(Side::Top)),
        ("rounded-r", Some(Side::Right)),
        ("rounded-b", Some(Side::Bottom)),
        ("rounded-l", Some(Side::Left)),
        ("rounded-ss", Some(Side::StartStart)),
        ("rounded-se", Some(Side::StartEnd)),
        ("rounded-ee", Some(Side::EndEnd)),
        ("rounded-es", Some(Side::EndStart)),
        ("rounded-tl", Some(Side::TopLeft)),
        ("rounded-tr", Some(Side::TopRight)),
        ("rounded-br", Some(Side::BottomRight)),
        ("rounded-bl", Some(Side::BottomLeft)),
    ],
)
.theme(&["borderRadius"])
.preset(radius)
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept);

pub static OUTLINE_OFFSET: FamilySpec =
    FamilySpec::new("outline-offset", Property::OutlineOffset, &[("outline-offset", None)])
        .theme(&["outlineOffset"])
        .preset(number)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Accept)
        .negative();

pub static OUTLINE_WIDTH: FamilySpec =
    FamilySpec::new("outline-width", Property::OutlineWidth, &[("outline", None)])
        .theme(&["outlineWidth"])
        .preset(number)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Hinted);

pub static OUTLINE_STYLE: FamilySpec =
    FamilySpec::new("outline-style", Property::OutlineStyle, &[("outline", None)]).keywords(&[
        (DEFAULT_KEY, "solid"),
        ("solid", "solid"),
        ("dashed", "dashed"),
        ("dotted", "dotted"),
        ("double", "double"),
        ("none", "none"),
        ("hidden", "none"),
    ]);

pub static RING_OFFSET_WIDTH: FamilySpec =
    FamilySpec::new("ring-offset-width", Property::RingOffsetWidth, &[("ring-offset", None)])
        .theme(&["ringOffsetWidth"])
        .preset(number)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Hinted);

pub static RING_WIDTH: FamilySpec = FamilySpec::new("ring-width", Property::RingWidth, &[("ring", None)])
    .theme(&["ringWidth"])
    .preset(width)
    .shape(ValueShape::Length)
    .custom_property(CustomProperty::Hinted);

pub static DIVIDE_WIDTH: FamilySpec = FamilySpec::new(
    "divide-width",
    Property::DivideWidth,
    &[("divide-x", Some(Side::X)), ("divide-y", Some(Side::Y))],
)
.theme(&["divideWidth", "borderWidth"])
.preset(width)
.keywords(&[("reverse", "reverse")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Hinted);

pub static STROKE_WIDTH: FamilySpec = FamilySpec::new("stroke-width", Property::StrokeWidth, &[("stroke", None)])
    .theme(&["strokeWidth"])
    .preset(number)
    .shape(ValueShape::LengthOrNumber)
    .custom_property(CustomProperty::Hinted);
