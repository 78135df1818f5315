//! Margin, padding, gap, space-between and inset.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::types::{Property, Side, StyleValue};

fn spacing(key: &str) -> Option<StyleValue> {
    scales::spacing_key(key)
}

fn spacing_or_fraction(key: &str) -> Option<StyleValue> {
    scales::spacing_key(key).or_else(|| scales::fraction(key))
}

pub static MARGIN: FamilySpec = FamilySpec::new(
    "margin",
    Property::Margin,
    &[
        ("m", Some(Side::All)),
        ("mx", Some(Side::X)),
        ("my", Some(Side::Y)),
        ("ms", Some(Side::InlineStart)),
        ("me", Some(Side::InlineEnd)),
        ("mt", Some(Side::Top)),
        ("mr", Some(Side::Right)),
        ("mb", Some(Side::Bottom)),
        ("ml", Some(Side::Left)),
    ],
)
.theme(&["margin", "spacing"])
.preset(spacing)
.keywords(&[("auto", "auto")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept)
.negative();

pub static PADDING: FamilySpec = FamilySpec::new(
    "padding",
    Property::Padding,
    &[
        ("p", Some(Side::All)),
        ("px", Some(Side::X)),
        ("py", Some(Side::Y)),
        ("ps", Some(Side::InlineStart)),
        ("pe", Some(Side::InlineEnd)),
        ("pt", Some(Side::Top)),
        ("pr", Some(Side::Right)),
        ("pb", Some(Side::Bottom)),
        ("pl", Some(Side::Left)),
    ],
)
.theme(&["padding", "spacing"])
.preset(spacing)
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept);

pub static GAP: FamilySpec = FamilySpec::new(
    "gap",
    Property::Gap,
    &[
        ("gap", Some(Side::All)),
        ("gap-x", Some(Side::X)),
        ("gap-y", Some(Side::Y)),
    ],
)
.theme(&["gap", "spacing"])
.preset(spacing)
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept);

pub static SPACE_BETWEEN: FamilySpec = FamilySpec::new(
    "space-between",
    Property::SpaceBetween,
    &[("space-x", Some(Side::X)), ("space-y", Some(Side::Y))],
)
.theme(&["space", "spacing"])
.preset(spacing)
.keywords(&[("reverse", "reverse")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept)
.negative();

pub static INSET: FamilySpec = FamilySpec::new(
    "inset",
    Property::Inset,
    &[
        ("inset", Some(Side::All)),
        ("inset-x", Some(Side::X)),
        ("inset-y", Some(Side::Y)),
        ("start", Some(Side::InlineStart)),
        ("end", Some(Side::InlineEnd)),
        ("top", Some(Side::Top)),
        ("right", Some(Side::Right)),
        ("bottom", Some(Side::Bottom)),
        ("left", Some(Side::Left)),
    ],
)
.theme(&["inset", "spacing"])
.preset(spacing_or_fraction)
.keywords(&[("auto", "auto"), ("full", "full")])
.shape(ValueShape::Length)
.custom_property(CustomProperty::Accept)
.negative();
