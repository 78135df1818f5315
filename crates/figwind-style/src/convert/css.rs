//! CSS text for values with no structural mapping.

use super::ConvertOptions;
use crate::rules::scales::{self, DEFAULT_KEY};
use crate::types::{ParsedStyle, Property, Side, StyleValue};

/// CSS property name for a node, including its side.
///
/// ```
/// use figwind_style::convert::css_property;
/// use figwind_style::rules::parse_utility;
/// use figwind_style::theme::Context;
///
/// let style = parse_utility("border-t-red-500", &Context::empty()).into_style().unwrap();
/// assert_eq!(css_property(&style), "border-top-color");
/// ```
pub fn css_property(style: &ParsedStyle) -> String {
    let name = style.property.as_str();
    let side = match style.side {
        None | Some(Side::All) => return name.to_string(),
        Some(side) => side,
    };

    match (style.property, side) {
        (_, Side::X) if !is_border(style.property) => format!("{name}-x"),
        (_, Side::Y) if !is_border(style.property) => format!("{name}-y"),
        (Property::BorderRadius, side) => format!("border-{}-radius", side_name(side)),
        (Property::BorderColor, side) => format!("border-{}-color", side_name(side)),
        (Property::BorderWidth, side) => format!("border-{}-width", side_name(side)),
        (_, side) => format!("{name}-{}", side_name(side)),
    }
}

fn is_border(property: Property) -> bool {
    matches!(
        property,
        Property::BorderColor | Property::BorderWidth | Property::BorderRadius
    )
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::All => "all",
        Side::X => "inline",
        Side::Y => "block",
        Side::Top => "top",
        Side::Right => "right",
        Side::Bottom => "bottom",
        Side::Left => "left",
        Side::InlineStart => "inline-start",
        Side::InlineEnd => "inline-end",
        Side::TopLeft => "top-left",
        Side::TopRight => "top-right",
        Side::BottomRight => "bottom-right",
        Side::BottomLeft => "bottom-left",
        Side::StartStart => "start-start",
        Side::StartEnd => "start-end",
        Side::EndEnd => "end-end",
        Side::EndStart => "end-start",
    }
}

/// CSS text for a node's value, with scale keys resolved.
///
/// Returns `None` for scale keys the built-in tables do not know.
pub fn css_value(style: &ParsedStyle, options: &ConvertOptions) -> Option<String> {
    let text = match &style.value {
        StyleValue::Number(n) => number(style.property, *n, options),
        StyleValue::Length(l) => l.to_string(),
        StyleValue::Fraction { .. } => format!("{}%", style.value.fraction_percent()?),
        StyleValue::Keyword(k) => keyword(style.property, k, options)?,
        StyleValue::Color(c) => {
            let color = match style.opacity {
                Some(opacity) => c.color.with_alpha(c.color.a * f32::from(opacity) / 100.0),
                None => c.color,
            };
            color.to_hex()
        }
        StyleValue::Font(font) => font.size.to_string(),
        StyleValue::Families(families) => families
            .iter()
            .map(|f| {
                if f.contains(' ') {
                    format!("\"{f}\"")
                } else {
                    f.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        StyleValue::Variable(name) => translucent(format!("var({name})"), style.opacity),
        StyleValue::Raw(raw) => translucent(raw.clone(), style.opacity),
    };

    Some(if style.negative {
        negate(&text)
    } else {
        text
    })
}

/// Mix a color expression with transparent for an opacity suffix.
pub(crate) fn translucent(color: String, opacity: Option<u8>) -> String {
    match opacity {
        Some(opacity) => format!("color-mix(in srgb, {color} {opacity}%, transparent)"),
        None => color,
    }
}

fn number(property: Property, n: f32, options: &ConvertOptions) -> String {
    use Property::*;
    match property {
        GridTemplateColumns | GridTemplateRows => format!("repeat({n}, minmax(0, 1fr))"),
        GridColumn | GridRow => format!("span {n} / span {n}"),
        BorderWidth | OutlineWidth | OutlineOffset | RingWidth | RingOffsetWidth | DivideWidth
        | TextDecorationThickness | TextUnderlineOffset => format!("{n}px"),
        Margin | Padding | Gap | SpaceBetween | Inset | Width | Height | Size | MinWidth
        | MinHeight | MaxWidth | MaxHeight | FlexBasis | Translate => {
            format!("{}rem", n * options.spacing_step)
        }
        _ => n.to_string(),
    }
}

fn keyword(property: Property, key: &str, options: &ConvertOptions) -> Option<String> {
    use Property::*;
    let resolved = match (property, key) {
        (Animation, key) => scales::animation(key)?.to_string(),
        (TransitionProperty, key) => scales::transition_property(key)?.to_string(),
        (TransitionTimingFunction, key) => scales::easing(key)?.to_string(),
        (BoxShadow, key) => scales::shadow(key)?.to_string(),
        (BorderRadius, key) => scales::radius(key)?.to_string(),
        (Blur | BackdropBlur, key) => format!("blur({}px)", scales::blur(key)?),
        (BorderWidth | DivideWidth, DEFAULT_KEY) => format!("{}px", options.border_width),
        (RingWidth, DEFAULT_KEY) => format!("{}px", options.ring_width),
        (OutlineWidth, DEFAULT_KEY) => "1px".to_string(),
        (GridColumn | GridRow, "full") => "1 / -1".to_string(),
        (Width | MinWidth | MaxWidth, "screen") => "100vw".to_string(),
        (Height | MinHeight | MaxHeight, "screen") => "100vh".to_string(),
        (MaxWidth, key) if scales::container(key).is_some() => scales::container(key)?.to_string(),
        (_, "full") => "100%".to_string(),
        (_, "px") => "1px".to_string(),
        (_, key) => key.to_string(),
    };
    Some(resolved)
}

fn negate(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') => format!("-{text}"),
        None => format!("calc({text} * -1)"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::parse;
    use super::*;

    fn css(token: &str) -> String {
        css_value(&parse(token), &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn scale_keys_resolve() {
        assert_eq!(css("animate-spin"), "spin 1s linear infinite");
        assert_eq!(css("ease-in-out"), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(css("border"), "1px");
        assert_eq!(css("grid-cols-4"), "repeat(4, minmax(0, 1fr))");
        assert_eq!(css("max-w-prose"), "65ch");
    }

    #[test]
    fn lengths_and_signs() {
        assert_eq!(css("duration-300"), "300ms");
        assert_eq!(css("-skew-x-6"), "-6deg");
        assert_eq!(css("outline-offset-2"), "2px");
    }

    #[test]
    fn colors_fold_opacity() {
        assert_eq!(css("caret-white/50"), "#ffffff80");
        assert_eq!(css("accent-current"), "currentColor");
    }

    #[test]
    fn property_names_carry_sides() {
        assert_eq!(css_property(&parse("border-x-red-500")), "border-inline-color");
        assert_eq!(css_property(&parse("rounded-tl-lg")), "border-top-left-radius");
        assert_eq!(css_property(&parse("divide-y-2")), "divide-width-y");
        assert_eq!(css_property(&parse("cursor-pointer")), "cursor");
    }

    #[test]
    fn negate_text() {
        assert_eq!(negate("4px"), "-4px");
        assert_eq!(negate("-4px"), "4px");
        assert_eq!(negate("var(--x)"), "calc(var(--x) * -1)");
    }
}
