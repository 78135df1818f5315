//! IR nodes produced by the utility rules.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use super::StyleValue;

macro_rules! properties {
    ($($variant:ident => $name:literal,)+) => {
        /// Canonical style property an IR node sets.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Property {
            $($variant,)+
        }

        impl Property {
            /// All properties, in declaration order.
            pub const ALL: &'static [Property] = &[$(Property::$variant,)+];

            /// Canonical CSS-style key.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Property::$variant => $name,)+
                }
            }

            /// Look up a property by its canonical key.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Property::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

properties! {
    // Spacing
    Margin => "margin",
    Padding => "padding",
    Gap => "gap",
    SpaceBetween => "space-between",
    Inset => "inset",
    // Sizing
    Width => "width",
    Height => "height",
    Size => "size",
    MinWidth => "min-width",
    MinHeight => "min-height",
    MaxWidth => "max-width",
    MaxHeight => "max-height",
    FlexBasis => "flex-basis",
    // Colors
    BackgroundColor => "background-color",
    TextColor => "color",
    BorderColor => "border-color",
    OutlineColor => "outline-color",
    RingColor => "ring-color",
    RingOffsetColor => "ring-offset-color",
    DivideColor => "divide-color",
    Fill => "fill",
    Stroke => "stroke",
    AccentColor => "accent-color",
    CaretColor => "caret-color",
    PlaceholderColor => "placeholder-color",
    TextDecorationColor => "text-decoration-color",
    ShadowColor => "shadow-color",
    // Borders
    BorderWidth => "border-width",
    BorderStyle => "border-style",
    BorderRadius => "border-radius",
    OutlineWidth => "outline-width",
    OutlineOffset => "outline-offset",
    OutlineStyle => "outline-style",
    RingWidth => "ring-width",
    RingOffsetWidth => "ring-offset-width",
    DivideWidth => "divide-width",
    StrokeWidth => "stroke-width",
    // Effects
    BoxShadow => "box-shadow",
    Opacity => "opacity",
    Blur => "blur",
    BackdropBlur => "backdrop-blur",
    MixBlendMode => "mix-blend-mode",
    // Typography
    FontSize => "font-size",
    FontWeight => "font-weight",
    FontFamily => "font-family",
    LineHeight => "line-height",
    LetterSpacing => "letter-spacing",
    TextAlign => "text-align",
    TextDecorationLine => "text-decoration-line",
    TextDecorationThickness => "text-decoration-thickness",
    TextUnderlineOffset => "text-underline-offset",
    TextTransform => "text-transform",
    FontStyle => "font-style",
    WhiteSpace => "white-space",
    WordBreak => "word-break",
    TextOverflow => "text-overflow",
    VerticalAlign => "vertical-align",
    LineClamp => "line-clamp",
    ListStyleType => "list-style-type",
    // Layout
    Display => "display",
    Position => "position",
    Overflow => "overflow",
    Visibility => "visibility",
    ZIndex => "z-index",
    FlexDirection => "flex-direction",
    FlexWrap => "flex-wrap",
    Flex => "flex",
    FlexGrow => "flex-grow",
    FlexShrink => "flex-shrink",
    Order => "order",
    JustifyContent => "justify-content",
    JustifyItems => "justify-items",
    JustifySelf => "justify-self",
    AlignItems => "align-items",
    AlignSelf => "align-self",
    AlignContent => "align-content",
    PlaceContent => "place-content",
    GridTemplateColumns => "grid-template-columns",
    GridTemplateRows => "grid-template-rows",
    GridColumn => "grid-column",
    GridRow => "grid-row",
    ObjectFit => "object-fit",
    AspectRatio => "aspect-ratio",
    BoxSizing => "box-sizing",
    BackgroundSize => "background-size",
    BackgroundPosition => "background-position",
    BackgroundRepeat => "background-repeat",
    BackgroundImage => "background-image",
    // Interaction
    Cursor => "cursor",
    PointerEvents => "pointer-events",
    UserSelect => "user-select",
    // Transforms
    Rotate => "rotate",
    Scale => "scale",
    Translate => "translate",
    Skew => "skew",
    TransformOrigin => "transform-origin",
    // Motion
    Animation => "animation",
    TransitionProperty => "transition-property",
    TransitionDuration => "transition-duration",
    TransitionDelay => "transition-delay",
    TransitionTimingFunction => "transition-timing-function",
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which side, axis or corner of the box an IR node applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    All,
    /// Horizontal (inline) axis.
    X,
    /// Vertical (block) axis.
    Y,
    Top,
    Right,
    Bottom,
    Left,
    InlineStart,
    InlineEnd,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    StartStart,
    StartEnd,
    EndEnd,
    EndStart,
}

impl Side {
    /// Physical edges this side covers (top, right, bottom, left), with
    /// logical sides resolved left-to-right.
    pub fn edges(&self) -> [bool; 4] {
        match self {
            Side::All => [true, true, true, true],
            Side::X => [false, true, false, true],
            Side::Y => [true, false, true, false],
            Side::Top => [true, false, false, false],
            Side::Right | Side::InlineEnd => [false, true, false, false],
            Side::Bottom => [false, false, true, false],
            Side::Left | Side::InlineStart => [false, false, false, true],
            Side::TopLeft | Side::StartStart => [true, false, false, true],
            Side::TopRight | Side::StartEnd => [true, true, false, false],
            Side::BottomRight | Side::EndEnd => [false, true, true, false],
            Side::BottomLeft | Side::EndStart => [false, false, true, true],
        }
    }

    /// Corners this side covers (top-left, top-right, bottom-right,
    /// bottom-left), with logical corners resolved left-to-right.
    pub fn corners(&self) -> [bool; 4] {
        match self {
            Side::All => [true, true, true, true],
            Side::Top => [true, true, false, false],
            Side::Right | Side::InlineEnd => [false, true, true, false],
            Side::Bottom => [false, false, true, true],
            Side::Left | Side::InlineStart => [true, false, false, true],
            Side::TopLeft | Side::StartStart => [true, false, false, false],
            Side::TopRight | Side::StartEnd => [false, true, false, false],
            Side::BottomRight | Side::EndEnd => [false, false, true, false],
            Side::BottomLeft | Side::EndStart => [false, false, false, true],
            Side::X | Side::Y => [false, false, false, false],
        }
    }
}

/// Where an IR node's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Theme context or built-in keyword/scale table.
    Preset,
    /// Bracketed literal.
    Arbitrary,
    /// Parenthesized custom property reference.
    CustomProperty,
    /// `theme(...)` reference resolved against the context.
    ThemeVariable,
}

/// One parsed utility: the IR node handed to the lowering stage.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParsedStyle {
    #[serde(rename = "type")]
    pub property: Property,
    pub value: StyleValue,
    pub variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    pub negative: bool,
    pub important: bool,
    pub raw: String,
}

impl ParsedStyle {
    /// Create a preset node with no side, opacity or markers.
    pub fn new(property: Property, value: StyleValue, raw: impl Into<String>) -> Self {
        Self {
            property,
            value,
            variant: Variant::Preset,
            side: None,
            opacity: None,
            negative: false,
            important: false,
            raw: raw.into(),
        }
    }

    /// Check if the value came from a bracketed literal.
    pub fn is_arbitrary(&self) -> bool {
        self.variant == Variant::Arbitrary
    }

    /// Palette key for preset colors (`blue-200`).
    pub fn preset_name(&self) -> Option<&str> {
        self.value.as_color().and_then(|c| c.preset.as_deref())
    }

    /// The side, defaulting to [`Side::All`].
    pub fn side_or_all(&self) -> Side {
        self.side.unwrap_or(Side::All)
    }
}

/// Result of parsing one utility token at the top level.
///
/// Never `None`: tokens no rule accepts become [`ParsedUtility::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedUtility {
    Style(ParsedStyle),
    Unknown { raw: String },
}

impl ParsedUtility {
    /// Get the IR node, if the token was recognized.
    pub fn as_style(&self) -> Option<&ParsedStyle> {
        match self {
            Self::Style(style) => Some(style),
            Self::Unknown { .. } => None,
        }
    }

    /// Consume into the IR node, if the token was recognized.
    pub fn into_style(self) -> Option<ParsedStyle> {
        match self {
            Self::Style(style) => Some(style),
            Self::Unknown { .. } => None,
        }
    }

    /// Check if no rule recognized the token.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// The original token.
    pub fn raw(&self) -> &str {
        match self {
            Self::Style(style) => &style.raw,
            Self::Unknown { raw } => raw,
        }
    }
}

impl Serialize for ParsedUtility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Style(style) => style.serialize(serializer),
            Self::Unknown { raw } => {
                let mut state = serializer.serialize_struct("ParsedUtility", 2)?;
                state.serialize_field("type", "unknown")?;
                state.serialize_field("raw", raw)?;
                state.end()
            }
        }
    }
}
