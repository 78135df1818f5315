//! Animations and transitions.

use super::family::{CustomProperty, FamilySpec};
use super::scales;
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{Length, Property, StyleValue, Unit};

fn animation(key: &str) -> Option<StyleValue> {
    scales::animation(key).map(|_| StyleValue::keyword(key))
}

fn transition(key: &str) -> Option<StyleValue> {
    scales::transition_property(key).map(|_| StyleValue::keyword(key))
}

fn easing(key: &str) -> Option<StyleValue> {
    scales::easing(key).map(|_| StyleValue::keyword(key))
}

fn millis(key: &str) -> Option<StyleValue> {
    let n: f32 = is_numeric(key).then(|| key.parse().ok()).flatten()?;
    Some(StyleValue::Length(Length::new(n, Unit::Ms)))
}

pub static ANIMATION: FamilySpec = FamilySpec::new("animation", Property::Animation, &[("animate", None)])
    .theme(&["animation"])
    .preset(animation)
    .shape(ValueShape::Any)
    .custom_property(CustomProperty::Accept);

pub static TRANSITION_PROPERTY: FamilySpec =
    FamilySpec::new("transition-property", Property::TransitionProperty, &[("transition", None)])
        .theme(&["transitionProperty"])
        .preset(transition)
        .shape(ValueShape::Any)
        .custom_property(CustomProperty::Accept);

pub static TRANSITION_DURATION: FamilySpec =
    FamilySpec::new("transition-duration", Property::TransitionDuration, &[("duration", None)])
        .theme(&["transitionDuration"])
        .preset(millis)
        .shape(ValueShape::Time)
        .custom_property(CustomProperty::Accept);

pub static TRANSITION_DELAY: FamilySpec =
    FamilySpec::new("transition-delay", Property::TransitionDelay, &[("delay", None)])
        .theme(&["transitionDelay"])
        .preset(millis)
        .shape(ValueShape::Time)
        .custom_property(CustomProperty::Accept);

pub static TRANSITION_TIMING_FUNCTION: FamilySpec = FamilySpec::new(
    "transition-timing-function",
    Property::TransitionTimingFunction,
    &[("ease", None)],
)
.theme(&["transitionTimingFunction"])
.preset(easing)
.shape(ValueShape::Any)
.custom_property(CustomProperty::Accept);
