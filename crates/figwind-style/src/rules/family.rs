//! Declarative utility families and the shared fallback chain.

use std::fmt;

use super::scales::{self, DEFAULT_KEY};
use super::shape::{ValueShape, parse_line_height};
use crate::parser::{parse_color, parse_utility_token};
use crate::theme::Context;
use crate::types::{
    ArbitraryType, ColorValue, LineHeightValue, ParsedStyle, ParsedToken, Property, Side, StyleValue, Variant,
};

/// How a family treats `(--name)` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomProperty {
    /// Never accepted.
    #[default]
    Reject,
    /// Accepted only with a matching type hint (`(length:--x)`).
    Hinted,
    /// Accepted with or without a hint.
    Accept,
}

/// What a `/suffix` means for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlashMode {
    /// No suffix; `/` stays part of the value (`w-1/2`).
    #[default]
    None,
    /// Opacity percentage (`bg-red-500/50`).
    Opacity,
    /// Line height paired with a font size (`text-sm/6`).
    LineHeight,
}

/// Preset function: maps a keyword or number key to an IR value.
pub type PresetFn = fn(&str) -> Option<StyleValue>;

fn no_preset(_: &str) -> Option<StyleValue> {
    None
}

/// One utility family.
///
/// Every family runs the same chain: theme namespaces, the preset function,
/// the keyword table, the custom property form and the arbitrary form gated
/// by `shape`. The first step that yields a value wins.
#[derive(Clone)]
pub struct FamilySpec {
    pub name: &'static str,
    pub property: Property,
    /// Prefixes with the side each one selects.
    pub prefixes: &'static [(&'static str, Option<Side>)],
    /// Theme namespaces consulted first, in order.
    pub theme: &'static [&'static str],
    pub preset: PresetFn,
    /// `(utility value, keyword)` pairs.
    pub keywords: &'static [(&'static str, &'static str)],
    /// Shape for theme and arbitrary values. `None` disables both.
    pub shape: Option<ValueShape>,
    pub custom_property: CustomProperty,
    pub slash: SlashMode,
    /// Accept a leading `-`.
    pub negative: bool,
}

impl FamilySpec {
    /// A family with only prefixes; every step is disabled.
    pub const fn new(
        name: &'static str,
        property: Property,
        prefixes: &'static [(&'static str, Option<Side>)],
    ) -> Self {
        Self {
            name,
            property,
            prefixes,
            theme: &[],
            preset: no_preset,
            keywords: &[],
            shape: None,
            custom_property: CustomProperty::Reject,
            slash: SlashMode::None,
            negative: false,
        }
    }

    pub const fn theme(mut self, namespaces: &'static [&'static str]) -> Self {
        self.theme = namespaces;
        self
    }

    pub const fn preset(mut self, preset: PresetFn) -> Self {
        self.preset = preset;
        self
    }

    pub const fn keywords(mut self, keywords: &'static [(&'static str, &'static str)]) -> Self {
        self.keywords = keywords;
        self
    }

    pub const fn shape(mut self, shape: ValueShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub const fn custom_property(mut self, mode: CustomProperty) -> Self {
        self.custom_property = mode;
        self
    }

    pub const fn opacity(mut self) -> Self {
        self.slash = SlashMode::Opacity;
        self
    }

    pub const fn line_height(mut self) -> Self {
        self.slash = SlashMode::LineHeight;
        self
    }

    pub const fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Prefix strings for the tokenizer.
    pub fn prefix_names(&self) -> Vec<&'static str> {
        self.prefixes.iter().map(|(prefix, _)| *prefix).collect()
    }

    /// Side selected by a matched prefix.
    pub fn side_for(&self, prefix: &str) -> Option<Side> {
        self.prefixes
            .iter()
            .find(|(p, _)| *p == prefix)
            .and_then(|(_, side)| *side)
    }

    fn keyword(&self, key: &str) -> Option<StyleValue> {
        self.keywords
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, keyword)| StyleValue::keyword(*keyword))
    }
}

impl fmt::Debug for FamilySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilySpec")
            .field("name", &self.name)
            .field("property", &self.property)
            .field("prefixes", &self.prefix_names())
            .field("theme", &self.theme)
            .field("shape", &self.shape)
            .field("custom_property", &self.custom_property)
            .field("slash", &self.slash)
            .field("negative", &self.negative)
            .finish_non_exhaustive()
    }
}

/// Tokenize `raw` against a family and run its fallback chain.
///
/// # Example
///
/// ```
/// use figwind_style::rules::{resolve_family, spacing::MARGIN};
/// use figwind_style::theme::Context;
/// use figwind_style::types::{Side, StyleValue};
///
/// let style = resolve_family(&MARGIN, "-mt-6", &Context::empty()).unwrap();
/// assert_eq!(style.side, Some(Side::Top));
/// assert_eq!(style.value, StyleValue::Number(6.0));
/// assert!(style.negative);
/// ```
pub fn resolve_family(spec: &FamilySpec, raw: &str, ctx: &Context<'_>) -> Option<ParsedStyle> {
    let token = parse_utility_token(raw, &spec.prefix_names(), spec.slash != SlashMode::None)?;
    resolve_token(spec, &token, ctx)
}

/// Run a family's fallback chain on an already tokenized utility.
pub fn resolve_token(spec: &FamilySpec, token: &ParsedToken, ctx: &Context<'_>) -> Option<ParsedStyle> {
    if token.negative && !spec.negative {
        return None;
    }
    let side = spec.side_for(&token.prefix);
    let opacity = match spec.slash {
        SlashMode::Opacity => token.slash_percent()?,
        _ => None,
    };

    let (mut value, variant) = if token.preset {
        resolve_preset(spec, token, ctx)?
    } else if token.custom_property {
        resolve_custom_property(spec, token)?
    } else {
        resolve_arbitrary(spec, token, ctx)?
    };

    if token.negative && !value.is_signable() {
        return None;
    }
    if spec.slash == SlashMode::LineHeight {
        value = with_line_height(value, token.slash.as_deref())?;
    }

    Some(ParsedStyle {
        property: spec.property,
        value,
        variant,
        side,
        opacity,
        negative: token.negative,
        important: token.important,
        raw: token.raw.clone(),
    })
}

fn resolve_preset(
    spec: &FamilySpec,
    token: &ParsedToken,
    ctx: &Context<'_>,
) -> Option<(StyleValue, Variant)> {
    let key = if token.value.is_empty() {
        DEFAULT_KEY
    } else {
        token.value.as_str()
    };

    if let Some(shape) = spec.shape {
        for namespace in spec.theme {
            if let Some(found) = ctx.resolve(namespace, &token.value)
                && let Some(value) = shape.from_theme(key, found)
            {
                return Some((value, Variant::Preset));
            }
        }
    }

    (spec.preset)(key)
        .or_else(|| spec.keyword(key))
        .map(|value| (value, Variant::Preset))
}

fn resolve_custom_property(spec: &FamilySpec, token: &ParsedToken) -> Option<(StyleValue, Variant)> {
    let shape = spec.shape?;
    let allowed = match (spec.custom_property, token.type_hint.as_deref()) {
        (CustomProperty::Reject, _) => false,
        (_, Some(hint)) => shape.accepts_hint(hint),
        (mode, None) => mode == CustomProperty::Accept,
    };
    if !allowed {
        return None;
    }

    let name = token
        .arbitrary_value
        .as_deref()?
        .strip_prefix("var(")?
        .strip_suffix(')')?;
    Some((StyleValue::Variable(name.to_string()), Variant::CustomProperty))
}

fn resolve_arbitrary(
    spec: &FamilySpec,
    token: &ParsedToken,
    ctx: &Context<'_>,
) -> Option<(StyleValue, Variant)> {
    let shape = spec.shape?;
    let content = token.arbitrary_value.as_deref()?;
    if let Some(hint) = token.type_hint.as_deref()
        && !shape.accepts_hint(hint)
    {
        return None;
    }

    let value = match token.arbitrary_type {
        Some(ArbitraryType::Var) => {
            if spec.custom_property == CustomProperty::Hinted && token.type_hint.is_none() {
                return None;
            }
            StyleValue::Variable(content.to_string())
        }
        Some(ArbitraryType::Calc) if shape.accepts_calc() => {
            StyleValue::Raw(format!("calc({content})"))
        }
        Some(ArbitraryType::Calc) => return None,
        Some(ArbitraryType::Theme) => {
            let found = ctx.theme(content)?;
            let value = shape.from_theme(content, found)?;
            return Some((value, Variant::ThemeVariable));
        }
        Some(ArbitraryType::Hex | ArbitraryType::Rgb | ArbitraryType::Rgba) => {
            if shape != ValueShape::Color {
                return None;
            }
            StyleValue::Color(ColorValue::literal(parse_color(content)?))
        }
        Some(ArbitraryType::Url) => {
            if !matches!(shape, ValueShape::Image | ValueShape::Any) {
                return None;
            }
            StyleValue::Raw(format!("url({content})"))
        }
        None => shape.parse(content)?,
    };

    Some((value, Variant::Arbitrary))
}

/// Attach a `/line-height` suffix to a font size value.
fn with_line_height(value: StyleValue, slash: Option<&str>) -> Option<StyleValue> {
    let Some(slash) = slash else {
        return Some(value);
    };
    let StyleValue::Font(mut font) = value else {
        return None;
    };

    let line_height = match slash.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => parse_line_height(inner)?,
        None => LineHeightValue::Length(scales::spacing(slash.parse().ok()?)?),
    };
    font.line_height = Some(line_height);
    Some(StyleValue::Font(font))
}
