//! Per-utility rule set.
//!
//! Each utility family is a declarative [`FamilySpec`] resolved by one shared
//! fallback chain ([`resolve_family`]). [`StyleParser`] tries the static
//! class table and then every family in order; the first match wins and
//! tokens nothing accepts become [`ParsedUtility::Unknown`].
//!
//! Families sharing a prefix are ordered so the narrower value grammar runs
//! first: `text-` tries font size, alignment and overflow before color;
//! `border-` tries width and style before color; `bg-` tries color before
//! image, size, position and repeat.
//!
//! # Example
//!
//! ```
//! use figwind_style::rules::StyleParser;
//! use figwind_style::theme::Context;
//! use figwind_style::types::Property;
//!
//! let parser = StyleParser::builtin();
//! let ctx = Context::empty();
//!
//! let style = parser.parse("bg-red-500/50", &ctx).into_style().unwrap();
//! assert_eq!(style.property, Property::BackgroundColor);
//! assert_eq!(style.opacity, Some(50));
//!
//! assert!(parser.parse("not-a-utility", &ctx).is_unknown());
//! ```

pub mod border;
pub mod color;
pub mod effects;
mod family;
pub mod interactivity;
pub mod layout;
pub mod motion;
pub mod palette;
pub mod scales;
mod shape;
pub mod sizing;
pub mod spacing;
mod statics;
pub mod transform;
pub mod typography;

use std::sync::LazyLock;

pub use family::{CustomProperty, FamilySpec, PresetFn, SlashMode, resolve_family, resolve_token};
pub use shape::{ValueShape, parse_line_height};
pub use statics::{STATIC_UTILITIES, parse_static};

use crate::theme::Context;
use crate::types::{ParsedStyle, ParsedUtility};
use crate::{Error, Result};

/// Built-in families in dispatch order.
pub fn builtin_families() -> Vec<FamilySpec> {
    vec![
        // Spacing
        spacing::MARGIN.clone(),
        spacing::PADDING.clone(),
        spacing::GAP.clone(),
        spacing::SPACE_BETWEEN.clone(),
        spacing::INSET.clone(),
        // Sizing
        sizing::WIDTH.clone(),
        sizing::HEIGHT.clone(),
        sizing::SIZE.clone(),
        sizing::MIN_WIDTH.clone(),
        sizing::MIN_HEIGHT.clone(),
        sizing::MAX_WIDTH.clone(),
        sizing::MAX_HEIGHT.clone(),
        sizing::FLEX_BASIS.clone(),
        // bg-*
        color::BACKGROUND_COLOR.clone(),
        layout::BACKGROUND_IMAGE.clone(),
        layout::BACKGROUND_SIZE.clone(),
        layout::BACKGROUND_POSITION.clone(),
        layout::BACKGROUND_REPEAT.clone(),
        // text-*
        typography::FONT_SIZE.clone(),
        typography::TEXT_ALIGN.clone(),
        typography::TEXT_OVERFLOW.clone(),
        color::TEXT_COLOR.clone(),
        // border-*, rounded-*
        border::BORDER_WIDTH.clone(),
        border::BORDER_STYLE.clone(),
        color::BORDER_COLOR.clone(),
        border::BORDER_RADIUS.clone(),
        // outline-*
        border::OUTLINE_OFFSET.clone(),
        border::OUTLINE_WIDTH.clone(),
        border::OUTLINE_STYLE.clone(),
        color::OUTLINE_COLOR.clone(),
        // ring-*
        border::RING_OFFSET_WIDTH.clone(),
        color::RING_OFFSET_COLOR.clone(),
        border::RING_WIDTH.clone(),
        color::RING_COLOR.clone(),
        // divide-*
        border::DIVIDE_WIDTH.clone(),
        color::DIVIDE_COLOR.clone(),
        // stroke-*, fill-*
        border::STROKE_WIDTH.clone(),
        color::STROKE.clone(),
        color::FILL.clone(),
        // Other colors
        color::ACCENT_COLOR.clone(),
        color::CARET_COLOR.clone(),
        color::PLACEHOLDER_COLOR.clone(),
        // shadow-*
        effects::BOX_SHADOW.clone(),
        color::SHADOW_COLOR.clone(),
        // Effects
        effects::OPACITY.clone(),
        effects::BLUR.clone(),
        effects::BACKDROP_BLUR.clone(),
        effects::MIX_BLEND_MODE.clone(),
        // font-*
        typography::FONT_WEIGHT.clone(),
        typography::FONT_FAMILY.clone(),
        // decoration-*
        typography::DECORATION_THICKNESS.clone(),
        color::DECORATION_COLOR.clone(),
        // Typography
        typography::LINE_HEIGHT.clone(),
        typography::LETTER_SPACING.clone(),
        typography::UNDERLINE_OFFSET.clone(),
        typography::WHITE_SPACE.clone(),
        typography::WORD_BREAK.clone(),
        typography::VERTICAL_ALIGN.clone(),
        typography::LINE_CLAMP.clone(),
        typography::LIST_STYLE_TYPE.clone(),
        // flex-*
        layout::FLEX.clone(),
        layout::FLEX_DIRECTION.clone(),
        layout::FLEX_WRAP.clone(),
        layout::FLEX_GROW.clone(),
        layout::FLEX_SHRINK.clone(),
        layout::ORDER.clone(),
        // Alignment
        layout::JUSTIFY_CONTENT.clone(),
        layout::JUSTIFY_ITEMS.clone(),
        layout::JUSTIFY_SELF.clone(),
        layout::ALIGN_ITEMS.clone(),
        layout::ALIGN_SELF.clone(),
        layout::ALIGN_CONTENT.clone(),
        layout::PLACE_CONTENT.clone(),
        // Grid
        layout::GRID_TEMPLATE_COLUMNS.clone(),
        layout::GRID_TEMPLATE_ROWS.clone(),
        layout::GRID_COLUMN.clone(),
        layout::GRID_ROW.clone(),
        // Layout
        layout::Z_INDEX.clone(),
        layout::OVERFLOW.clone(),
        layout::OBJECT_FIT.clone(),
        layout::ASPECT_RATIO.clone(),
        layout::BOX_SIZING.clone(),
        // Interaction
        interactivity::CURSOR.clone(),
        interactivity::POINTER_EVENTS.clone(),
        interactivity::USER_SELECT.clone(),
        // Transforms
        transform::ROTATE.clone(),
        transform::SCALE.clone(),
        transform::TRANSLATE.clone(),
        transform::SKEW.clone(),
        transform::TRANSFORM_ORIGIN.clone(),
        // Motion
        motion::ANIMATION.clone(),
        motion::TRANSITION_PROPERTY.clone(),
        motion::TRANSITION_DURATION.clone(),
        motion::TRANSITION_DELAY.clone(),
        motion::TRANSITION_TIMING_FUNCTION.clone(),
    ]
}

/// Top-level utility dispatcher.
///
/// Holds the family table. Families registered with
/// [`with_family`](Self::with_family) run before the static table and the
/// built-in families, in registration order.
#[derive(Debug, Clone)]
pub struct StyleParser {
    custom: Vec<FamilySpec>,
    families: Vec<FamilySpec>,
}

impl StyleParser {
    /// A parser with the built-in family table.
    pub fn builtin() -> Self {
        Self {
            custom: Vec::new(),
            families: builtin_families(),
        }
    }

    /// A parser with no built-in families (the static table still applies).
    pub fn empty() -> Self {
        Self {
            custom: Vec::new(),
            families: Vec::new(),
        }
    }

    /// Register an extra family.
    pub fn with_family(mut self, family: FamilySpec) -> Self {
        self.custom.push(family);
        self
    }

    /// All families in dispatch order.
    pub fn families(&self) -> impl Iterator<Item = &FamilySpec> {
        self.custom.iter().chain(self.families.iter())
    }

    /// Find a family by name.
    pub fn family(&self, name: &str) -> Option<&FamilySpec> {
        self.families().find(|f| f.name == name)
    }

    /// Parse one utility token. Never fails: unmatched tokens are
    /// [`ParsedUtility::Unknown`].
    pub fn parse(&self, token: &str, ctx: &Context<'_>) -> ParsedUtility {
        for family in &self.custom {
            if let Some(style) = resolve_family(family, token, ctx) {
                return ParsedUtility::Style(style);
            }
        }
        if let Some(style) = parse_static(token) {
            return ParsedUtility::Style(style);
        }
        for family in &self.families {
            if let Some(style) = resolve_family(family, token, ctx) {
                tracing::trace!("{} matched family {}", token, family.name);
                return ParsedUtility::Style(style);
            }
        }

        tracing::debug!("unknown utility: {}", token);
        ParsedUtility::Unknown {
            raw: token.to_string(),
        }
    }

    /// Parse one utility token, reporting unmatched tokens as an error.
    pub fn parse_strict(&self, token: &str, ctx: &Context<'_>) -> Result<ParsedStyle> {
        self.parse(token, ctx)
            .into_style()
            .ok_or_else(|| Error::unknown_utility(token))
    }
}

impl Default for StyleParser {
    fn default() -> Self {
        Self::builtin()
    }
}

static DEFAULT_PARSER: LazyLock<StyleParser> = LazyLock::new(StyleParser::builtin);

/// Parse one utility token with the built-in family table.
pub fn parse_utility(token: &str, ctx: &Context<'_>) -> ParsedUtility {
    DEFAULT_PARSER.parse(token, ctx)
}

macro_rules! family_parsers {
    ($($name:ident => $family:path,)+) => {
        $(
            #[doc = concat!("Parse a token with the [`", stringify!($family), "`] family only.")]
            pub fn $name(token: &str, ctx: &Context<'_>) -> Option<ParsedStyle> {
                resolve_family(&$family, token, ctx)
            }
        )+
    };
}

family_parsers! {
    parse_margin => spacing::MARGIN,
    parse_padding => spacing::PADDING,
    parse_gap => spacing::GAP,
    parse_inset => spacing::INSET,
    parse_width => sizing::WIDTH,
    parse_height => sizing::HEIGHT,
    parse_max_width => sizing::MAX_WIDTH,
    parse_background_color => color::BACKGROUND_COLOR,
    parse_text_color => color::TEXT_COLOR,
    parse_border_color => color::BORDER_COLOR,
    parse_border_width => border::BORDER_WIDTH,
    parse_border_radius => border::BORDER_RADIUS,
    parse_shadow => effects::BOX_SHADOW,
    parse_opacity => effects::OPACITY,
    parse_font_size => typography::FONT_SIZE,
    parse_font_weight => typography::FONT_WEIGHT,
    parse_leading => typography::LINE_HEIGHT,
    parse_z_index => layout::Z_INDEX,
    parse_animation => motion::ANIMATION,
    parse_transition_duration => motion::TRANSITION_DURATION,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Property, Side, StyleValue, Variant};

    #[test]
    fn shared_prefixes_dispatch_by_value() {
        let ctx = Context::empty();
        let cases = [
            ("text-sm", Property::FontSize),
            ("text-center", Property::TextAlign),
            ("text-ellipsis", Property::TextOverflow),
            ("text-red-500", Property::TextColor),
            ("text-[#333]", Property::TextColor),
            ("text-[14px]", Property::FontSize),
            ("text-(--brand)", Property::TextColor),
            ("text-(length:--size)", Property::FontSize),
            ("border", Property::BorderWidth),
            ("border-2", Property::BorderWidth),
            ("border-dashed", Property::BorderStyle),
            ("border-gray-200", Property::BorderColor),
            ("bg-white", Property::BackgroundColor),
            ("bg-[url(/a.png)]", Property::BackgroundImage),
            ("bg-cover", Property::BackgroundSize),
            ("bg-center", Property::BackgroundPosition),
            ("bg-no-repeat", Property::BackgroundRepeat),
            ("font-bold", Property::FontWeight),
            ("font-sans", Property::FontFamily),
            ("shadow-md", Property::BoxShadow),
            ("shadow-black", Property::ShadowColor),
            ("ring-2", Property::RingWidth),
            ("ring-offset-2", Property::RingOffsetWidth),
            ("ring-blue-500", Property::RingColor),
            ("outline-offset-2", Property::OutlineOffset),
            ("outline-dashed", Property::OutlineStyle),
            ("decoration-2", Property::TextDecorationThickness),
            ("decoration-sky-500", Property::TextDecorationColor),
            ("stroke-2", Property::StrokeWidth),
            ("stroke-current", Property::Stroke),
            ("flex", Property::Display),
            ("flex-1", Property::Flex),
            ("flex-col", Property::FlexDirection),
            ("flex-wrap", Property::FlexWrap),
            ("divide-y", Property::DivideWidth),
            ("divide-slate-100", Property::DivideColor),
        ];
        for (token, property) in cases {
            let style = parse_utility(token, &ctx)
                .into_style()
                .unwrap_or_else(|| panic!("{token} was not recognized"));
            assert_eq!(style.property, property, "{token}");
        }
    }

    #[test]
    fn unknown_tokens() {
        let ctx = Context::empty();
        for token in ["", "foo", "bg-[]", "p-()", "-bg-red-500", "text-", "m-[10px"] {
            let parsed = parse_utility(token, &ctx);
            assert_eq!(parsed, ParsedUtility::Unknown { raw: token.into() }, "{token}");
        }
    }

    #[test]
    fn strict_parse_reports_unknown() {
        let parser = StyleParser::builtin();
        let ctx = Context::empty();
        assert!(parser.parse_strict("mt-4", &ctx).is_ok());
        assert_eq!(
            parser.parse_strict("wobble-3", &ctx),
            Err(Error::unknown_utility("wobble-3"))
        );
    }

    #[test]
    fn custom_families_run_first() {
        fn tab(key: &str) -> Option<StyleValue> {
            key.parse().ok().map(StyleValue::Number)
        }
        static TAB_SIZE: FamilySpec =
            FamilySpec::new("tab-size", Property::Width, &[("tab", None)]).preset(tab);

        let parser = StyleParser::builtin().with_family(TAB_SIZE.clone());
        let ctx = Context::empty();
        let style = parser.parse_strict("tab-4", &ctx).unwrap();
        assert_eq!(style.value, StyleValue::Number(4.0));
        assert!(parser.family("tab-size").is_some());
        assert_eq!(parser.families().count(), builtin_families().len() + 1);
    }

    #[test]
    fn named_family_parsers() {
        let ctx = Context::empty();
        let style = parse_margin("-mt-6", &ctx).unwrap();
        assert_eq!(style.side, Some(Side::Top));
        assert_eq!(style.value, StyleValue::Number(6.0));
        assert!(style.negative);

        assert!(parse_background_color("bg-[]", &ctx).is_none());
        assert!(parse_margin("p-4", &ctx).is_none());
        assert_eq!(parse_width("w-[10px]", &ctx).unwrap().variant, Variant::Arbitrary);
        assert_eq!(parse_leading("leading-none", &ctx).unwrap().value, StyleValue::Number(1.0));
        assert_eq!(
            parse_line_height("1.5"),
            Some(crate::types::LineHeightValue::Ratio(1.5))
        );
    }

    #[test]
    fn family_names_are_unique() {
        let families = builtin_families();
        for (i, a) in families.iter().enumerate() {
            assert!(
                families[i + 1..].iter().all(|b| b.name != a.name),
                "duplicate family {}",
                a.name
            );
        }
    }
}
