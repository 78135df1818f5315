//! Shadows, opacity, blurs and blend modes.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{Property, StyleValue};

fn shadow(key: &str) -> Option<StyleValue> {
    scales::shadow(key).map(|_| StyleValue::keyword(key))
}

fn blur(key: &str) -> Option<StyleValue> {
    scales::blur(key).map(|_| StyleValue::keyword(key))
}

/// `opacity-50` is stored as the fraction 0.5.
fn opacity(key: &str) -> Option<StyleValue> {
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    (n <= 100.0).then(|| StyleValue::Number(n / 100.0))
}

pub static BOX_SHADOW: FamilySpec = FamilySpec::new("box-shadow", Property::BoxShadow, &[("shadow", None)])
    .theme(&["boxShadow"])
    .preset(shadow)
    .shape(ValueShape::Shadow)
    .custom_property(CustomProperty::Hinted);

pub static OPACITY: FamilySpec = FamilySpec::new("opacity", Property::Opacity, &[("opacity", None)])
    .theme(&["opacity"])
    .preset(opacity)
    .shape(ValueShape::Number)
    .custom_property(CustomProperty::Accept);

pub static BLUR: FamilySpec = FamilySpec::new("blur", Property::Blur, &[("blur", None)])
    .theme(&["blur"])
    .preset(blur)
    .shape(ValueShape::Length)
    .custom_property(CustomProperty::Accept);

pub static BACKDROP_BLUR: FamilySpec =
    FamilySpec::new("backdrop-blur", Property::BackdropBlur, &[("backdrop-blur", None)])
        .theme(&["backdropBlur", "blur"])
        .preset(blur)
        .shape(ValueShape::Length)
        .custom_property(CustomProperty::Accept);

pub static MIX_BLEND_MODE: FamilySpec =
    FamilySpec::new("mix-blend-mode", Property::MixBlendMode, &[("mix-blend", None)]).keywords(&[
        ("normal", "normal"),
        ("multiply", "multiply"),
        ("screen", "screen"),
        ("overlay", "overlay"),
        ("darken", "darken"),
        ("lighten", "lighten"),
        ("color-dodge", "color-dodge"),
        ("color-burn", "color-burn"),
        ("hard-light", "hard-light"),
        ("soft-light", "soft-light"),
        ("difference", "difference"),
        ("exclusion", "exclusion"),
        ("hue", "hue"),
        ("saturation", "saturation"),
        ("color", "color"),
        ("luminosity", "luminosity"),
        ("plus-darker", "plus-darker"),
        ("plus-lighter", "plus-lighter"),
    ]);
