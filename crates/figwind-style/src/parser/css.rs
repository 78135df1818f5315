//! CSS value checks backed by `cssparser`.
//!
//! Shape predicates decide which family accepts an arbitrary value; the
//! color and shadow parsers are shared with the lowering stage.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use figwind_paint::{Color, Effect, Shadow};

use crate::types::{Length, Unit};

type CssResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// Color of arbitrary shadows that do not name one.
pub const DEFAULT_SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.1);

const PASSTHROUGH_FUNCTIONS: &[&str] = &["var(", "calc(", "min(", "max(", "clamp("];

/// Check if a value defers to the browser (`var(...)`, `calc(...)`, ...).
///
/// These pass every shape predicate.
pub fn is_passthrough(value: &str) -> bool {
    PASSTHROUGH_FUNCTIONS.iter().any(|f| value.starts_with(f))
}

/// Check if a value is a length (`10px`, `1.5rem`, `50%`, `0`).
pub fn is_length_value(value: &str) -> bool {
    is_passthrough(value) || Length::parse(value).is_some_and(|l| l.unit.is_length())
}

/// Check if a value is a percentage.
pub fn is_percentage(value: &str) -> bool {
    is_passthrough(value) || Length::parse(value).is_some_and(|l| l.unit == Unit::Percent)
}

/// Check if a value is a single plain number.
pub fn is_number_value(value: &str) -> bool {
    is_passthrough(value) || parse_number(value).is_some()
}

/// Check if a value is an angle (`45deg`, `0`).
pub fn is_angle_value(value: &str) -> bool {
    is_passthrough(value)
        || Length::parse(value).is_some_and(|l| l.unit == Unit::Deg || l.is_zero())
}

/// Check if a value is a duration (`150ms`, `2s`).
pub fn is_time_value(value: &str) -> bool {
    is_passthrough(value) || Length::parse(value).is_some_and(|l| l.unit.is_time())
}

/// Check if a value is a color.
pub fn is_color_value(value: &str) -> bool {
    is_passthrough(value) || parse_color(value).is_some()
}

/// Check if a value is an image (`url(...)` or a gradient).
pub fn is_image_value(value: &str) -> bool {
    is_passthrough(value)
        || value.starts_with("url(")
        || ["linear-gradient(", "radial-gradient(", "conic-gradient("]
            .iter()
            .any(|g| value.starts_with(g) || value.starts_with(&format!("repeating-{g}")))
}

/// Parse a single CSS number.
pub fn parse_number(value: &str) -> Option<f32> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let number = parser.expect_number().ok()?;
    parser.expect_exhausted().ok()?;
    Some(number)
}

/// Parse a CSS color: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` (comma or
/// space separated, optional `/ alpha`) and a small set of named colors.
///
/// # Example
///
/// ```
/// use figwind_style::parser::parse_color;
///
/// let c = parse_color("rgb(255 0 0 / 50%)").unwrap();
/// assert_eq!((c.r, c.a), (1.0, 0.5));
/// assert!(parse_color("rgb(300,0,0)").is_none());
/// ```
pub fn parse_color(value: &str) -> Option<Color> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let color = parse_color_token(&mut parser).ok()?;
    parser.expect_exhausted().ok()?;
    Some(color)
}

fn parse_color_token<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Color> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(&hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => named_color(&name).ok_or_else(|| parser.new_custom_error(())),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let [r, g, b, a] = channels(p, rgb_component)?;
                Color::try_from_channels(r, g, b, a).map_err(|_| p.new_custom_error(()))
            })
        }
        Token::Function(name)
            if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
        {
            parser.parse_nested_block(|p| {
                let [h, s, l, a] = channels(p, hsl_component)?;
                if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&l) {
                    return Err(p.new_custom_error(()));
                }
                Ok(hsl_to_rgb(h, s, l, a))
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Three components, comma or space separated, plus an optional alpha.
fn channels<'i, 't>(
    parser: &mut Parser<'i, 't>,
    component: fn(&mut Parser<'i, 't>, usize) -> CssResult<'i, f32>,
) -> CssResult<'i, [f32; 4]> {
    let first = component(parser, 0)?;
    let commas = parser.try_parse(|p| p.expect_comma()).is_ok();
    let second = component(parser, 1)?;
    if commas {
        parser.expect_comma()?;
    }
    let third = component(parser, 2)?;

    let alpha = if parser.is_exhausted() {
        1.0
    } else {
        if commas {
            parser.expect_comma()?;
        } else {
            parser.expect_delim('/')?;
        }
        alpha_component(parser)?
    };
    parser.expect_exhausted()?;

    Ok([first, second, third, alpha])
}

fn rgb_component<'i>(parser: &mut Parser<'i, '_>, _index: usize) -> CssResult<'i, f32> {
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value),
        Token::Percentage { unit_value, .. } => Ok(unit_value * 255.0),
        _ => Err(parser.new_custom_error(())),
    }
}

fn hsl_component<'i>(parser: &mut Parser<'i, '_>, index: usize) -> CssResult<'i, f32> {
    match (index, parser.next()?.clone()) {
        (0, Token::Number { value, .. }) => Ok(value),
        (0, Token::Dimension { value, unit, .. }) if unit.eq_ignore_ascii_case("deg") => Ok(value),
        (_, Token::Percentage { unit_value, .. }) if index > 0 => Ok(unit_value),
        _ => Err(parser.new_custom_error(())),
    }
}

fn alpha_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, f32> {
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 360.0;
    if saturation == 0.0 {
        return Color::new(lightness, lightness, lightness, alpha);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    Color::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0), alpha)
}

/// Basic CSS named colors.
pub fn named_color(name: &str) -> Option<Color> {
    let hex = match name.to_ascii_lowercase().as_str() {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => "000000",
        "white" => "ffffff",
        "red" => "ff0000",
        "green" => "008000",
        "lime" => "00ff00",
        "blue" => "0000ff",
        "navy" => "000080",
        "yellow" => "ffff00",
        "orange" => "ffa500",
        "purple" => "800080",
        "pink" => "ffc0cb",
        "gray" | "grey" => "808080",
        "silver" => "c0c0c0",
        "maroon" => "800000",
        "olive" => "808000",
        "teal" => "008080",
        "aqua" | "cyan" => "00ffff",
        "fuchsia" | "magenta" => "ff00ff",
        "brown" => "a52a2a",
        _ => return None,
    };
    Color::from_hex(hex)
}

/// Parse a `box-shadow` list into shadow effects.
///
/// Lengths resolve to pixels with `root_font_size`; a missing color falls
/// back to [`DEFAULT_SHADOW_COLOR`]. `none` yields an empty list.
///
/// # Example
///
/// ```
/// use figwind_style::parser::parse_box_shadow;
///
/// let effects = parse_box_shadow("0 1px 3px 0 rgb(0 0 0 / 0.1), inset 0 2px 4px #000", 16.0).unwrap();
/// assert_eq!(effects.len(), 2);
/// ```
pub fn parse_box_shadow(value: &str, root_font_size: f32) -> Option<Vec<Effect>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    if parser
        .try_parse(|p| p.expect_ident_matching("none"))
        .is_ok()
    {
        parser.expect_exhausted().ok()?;
        return Some(Vec::new());
    }

    parser
        .parse_comma_separated(|p| shadow_layer(p, root_font_size))
        .ok()
}

fn shadow_layer<'i>(parser: &mut Parser<'i, '_>, root_font_size: f32) -> CssResult<'i, Effect> {
    let mut lengths = Vec::with_capacity(4);
    let mut color = None;
    let mut inset = false;

    while !parser.is_exhausted() {
        if parser
            .try_parse(|p| p.expect_ident_matching("inset"))
            .is_ok()
        {
            inset = true;
            continue;
        }
        if let Ok(c) = parser.try_parse(|p| parse_color_token(p)) {
            color = Some(c);
            continue;
        }

        let px = match parser.next()?.clone() {
            Token::Dimension { value, unit, .. } => {
                Unit::from_css(&unit).and_then(|u| Length::new(value, u).to_px(root_font_size))
            }
            Token::Number { value, .. } if value == 0.0 => Some(0.0),
            _ => None,
        };
        match px {
            Some(v) if lengths.len() < 4 => lengths.push(v),
            _ => return Err(parser.new_custom_error(())),
        }
    }

    if lengths.len() < 2 {
        return Err(parser.new_custom_error(()));
    }

    let shadow = Shadow::new(
        lengths[0],
        lengths[1],
        lengths.get(2).copied().unwrap_or(0.0),
        lengths.get(3).copied().unwrap_or(0.0),
        color.unwrap_or(DEFAULT_SHADOW_COLOR),
    );
    Ok(if inset {
        Effect::InnerShadow(shadow)
    } else {
        Effect::DropShadow(shadow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_predicate() {
        assert!(is_length_value("10px"));
        assert!(is_length_value("2.5rem"));
        assert!(is_length_value("50%"));
        assert!(is_length_value("0"));
        assert!(is_length_value("calc(100% - 1rem)"));
        assert!(!is_length_value("12"));
        assert!(!is_length_value("#fff"));
        assert!(!is_length_value("45deg"));
    }

    #[test]
    fn color_predicate() {
        assert!(is_color_value("#fff"));
        assert!(is_color_value("rgba(0,0,0,0.5)"));
        assert!(is_color_value("hsl(210 40% 50%)"));
        assert!(is_color_value("red"));
        assert!(is_color_value("var(--brand)"));
        assert!(!is_color_value("10px"));
        assert!(!is_color_value("rgb(1,2)"));
    }

    #[test]
    fn number_and_other_predicates() {
        assert!(is_number_value("1.5"));
        assert!(is_number_value("-3"));
        assert!(!is_number_value("1px"));
        assert!(is_percentage("33%"));
        assert!(is_angle_value("45deg"));
        assert!(is_time_value("150ms"));
        assert!(is_image_value("url(a.png)"));
        assert!(is_image_value("linear-gradient(to right, red, blue)"));
        assert!(!is_image_value("red"));
    }

    #[test]
    fn rgb_forms() {
        assert_eq!(parse_color("rgb(255,0,0)"), Some(Color::from_rgb(1.0, 0.0, 0.0)));
        let c = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(c.a, 0.5);
        let c = parse_color("rgb(0 0 0 / 25%)").unwrap();
        assert_eq!(c.a, 0.25);
        assert!(parse_color("rgb(0 0 0, 1)").is_none());
        assert!(parse_color("rgb(0,0,0) red").is_none());
    }

    #[test]
    fn hsl_primary_colors() {
        let red = parse_color("hsl(0, 100%, 50%)").unwrap();
        assert!((red.r - 1.0).abs() < 1e-5 && red.g.abs() < 1e-5);
        let blue = parse_color("hsl(240deg 100% 50%)").unwrap();
        assert!((blue.b - 1.0).abs() < 1e-5);
        let gray = parse_color("hsl(0 0% 50%)").unwrap();
        assert_eq!(gray.r, 0.5);
    }

    #[test]
    fn shadow_list() {
        let effects = parse_box_shadow("0 35px 60px -15px rgba(0,0,0,0.3)", 16.0).unwrap();
        assert_eq!(
            effects,
            vec![Effect::DropShadow(Shadow::new(
                0.0,
                35.0,
                60.0,
                -15.0,
                Color::new(0.0, 0.0, 0.0, 0.3)
            ))]
        );

        let effects = parse_box_shadow("inset 0 0.125rem 0.25rem", 16.0).unwrap();
        assert_eq!(
            effects,
            vec![Effect::InnerShadow(Shadow::new(0.0, 2.0, 4.0, 0.0, DEFAULT_SHADOW_COLOR))]
        );

        assert_eq!(parse_box_shadow("none", 16.0), Some(Vec::new()));
        assert!(parse_box_shadow("10px", 16.0).is_none());
        assert!(parse_box_shadow("red blue", 16.0).is_none());
    }
}
