//! Lowering from IR nodes to the target property bag.
//!
//! [`Converter`] maps each [`ParsedStyle`] onto the fields of a
//! [`TargetStyle`]: spacing steps and rem values become pixels, colors with
//! an opacity suffix become paints, shadows become effects. Values driven by
//! custom properties become [`Binding`]s. Values that are valid CSS but have
//! no structural counterpart land in [`TargetStyle::css`], or are rejected by
//! [`Converter::try_convert`].
//!
//! # Example
//!
//! ```
//! use figwind_style::convert::{Converter, Dimension};
//! use figwind_style::rules::parse_utility;
//! use figwind_style::theme::Context;
//!
//! let ctx = Context::empty();
//! let styles: Vec<_> = ["w-full", "p-4", "bg-blue-500/50"]
//!     .iter()
//!     .filter_map(|class| parse_utility(class, &ctx).into_style())
//!     .collect();
//!
//! let target = Converter::default().convert_all(&styles);
//! assert_eq!(target.width, Some(Dimension::Percent(100.0)));
//! assert_eq!(target.padding_top, Some(16.0));
//! assert_eq!(target.fills.len(), 1);
//! ```

mod css;
mod geometry;
mod layout;
mod options;
mod paint;
mod target;
mod text;

pub use css::{css_property, css_value};
pub use options::ConvertOptions;
pub use target::{Binding, Dimension, Ring, TargetStyle};

use crate::error::{Error, Result};
use crate::parser::is_passthrough;
use crate::rules::scales::DEFAULT_KEY;
use crate::types::{Length, ParsedStyle, Property, Side, StyleValue, Unit};
use css::translucent;

/// Lowers IR nodes into [`TargetStyle`]s.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Lower a single node. Nothing the node cannot express is set.
    pub fn convert(&self, style: &ParsedStyle) -> TargetStyle {
        let mut target = TargetStyle::new();
        self.apply(&mut target, style);
        target
    }

    /// Lower nodes in order into one bag.
    ///
    /// Later nodes override scalar fields set by earlier ones; fills and
    /// effects accumulate.
    pub fn convert_all<'a, I>(&self, styles: I) -> TargetStyle
    where
        I: IntoIterator<Item = &'a ParsedStyle>,
    {
        let mut target = TargetStyle::new();
        for style in styles {
            self.apply(&mut target, style);
        }
        target
    }

    /// Lower `style` into an existing bag.
    pub fn apply(&self, target: &mut TargetStyle, style: &ParsedStyle) {
        match self.lower(target, style) {
            Ok(()) => {}
            Err(Error::Unsupported { .. }) if self.options.keep_css => {
                match css_value(style, &self.options) {
                    Some(value) => {
                        target.css.insert(css_property(style), value);
                    }
                    None => tracing::debug!("dropped {}: no css form", style.raw),
                }
            }
            Err(err) => tracing::debug!("dropped {}: {}", style.raw, err),
        }
    }

    /// Lower a single node, reporting anything it cannot express.
    pub fn try_convert(&self, style: &ParsedStyle) -> Result<TargetStyle> {
        let mut target = TargetStyle::new();
        self.lower(&mut target, style)?;
        Ok(target)
    }

    fn lower(&self, target: &mut TargetStyle, style: &ParsedStyle) -> Result<()> {
        if let Some(binding) = binding(style) {
            let fields = binding_fields(style).ok_or_else(|| unsupported(style))?;
            for field in fields {
                target.bindings.insert(field, binding.clone());
            }
            return Ok(());
        }

        use Property::*;
        match style.property {
            Margin | Padding | Gap | SpaceBetween | Inset => self.lower_spacing(target, style),
            Width | Height | Size | MinWidth | MinHeight | MaxWidth | MaxHeight | FlexBasis
            | AspectRatio => self.lower_sizing(target, style),
            BorderWidth | BorderStyle | BorderRadius | RingWidth | RingOffsetWidth => {
                self.lower_border(target, style)
            }
            Rotate | Scale | Translate => self.lower_transform(target, style),
            BackgroundColor | BackgroundImage | TextColor | BorderColor | RingColor
            | RingOffsetColor | ShadowColor | BoxShadow | Opacity | Blur | BackdropBlur
            | MixBlendMode => self.lower_paint(target, style),
            FontSize | FontWeight | FontFamily | FontStyle | LineHeight | LetterSpacing
            | TextAlign | TextDecorationLine | TextTransform | TextOverflow | LineClamp => {
                self.lower_text(target, style)
            }
            Display | Position | Overflow | Visibility | ZIndex | FlexDirection | FlexWrap
            | Flex | FlexGrow | FlexShrink | Order | JustifyContent | AlignItems | AlignSelf
            | GridTemplateColumns | GridTemplateRows | GridColumn | GridRow => {
                self.lower_layout(target, style)
            }
            _ => Err(unsupported(style)),
        }
    }

    // === Shared resolution ===

    /// Resolve a length to pixels.
    fn length_px(&self, style: &ParsedStyle, length: &Length) -> Result<f32> {
        length.to_px(self.options.root_font_size).ok_or_else(|| {
            Error::invalid_value(
                style.property.as_str(),
                format!("'{}' has no pixel size", length),
            )
        })
    }

    /// Resolve a spacing-scale value (`4`, `px`, `[10px]`) to pixels.
    fn spacing_px(&self, style: &ParsedStyle) -> Result<f32> {
        let px = match &style.value {
            StyleValue::Number(n) => self.options.spacing_px(*n),
            StyleValue::Keyword(k) if k == "px" => 1.0,
            StyleValue::Length(l) => self.length_px(style, l)?,
            _ => return Err(unsupported(style)),
        };
        Ok(signed(style, px))
    }

    /// Resolve a spacing value that may also be a percentage or `auto`.
    fn dimension(&self, style: &ParsedStyle) -> Result<Dimension> {
        let dimension = match &style.value {
            StyleValue::Keyword(k) if k == "auto" => Dimension::Auto,
            StyleValue::Keyword(k) if k == "full" => Dimension::Percent(100.0),
            StyleValue::Length(l) if l.unit == Unit::Percent => Dimension::Percent(l.value),
            StyleValue::Fraction { .. } => {
                Dimension::Percent(style.value.fraction_percent().ok_or_else(|| {
                    Error::invalid_value(style.property.as_str(), "zero denominator")
                })?)
            }
            _ => return self.spacing_px(style).map(Dimension::Pixels),
        };
        Ok(if style.negative {
            dimension.negated()
        } else {
            dimension
        })
    }

    /// Resolve a width-like value (`DEFAULT`, `2`, `[3px]`) to pixels.
    fn width_px(&self, style: &ParsedStyle, default: f32) -> Result<f32> {
        match &style.value {
            StyleValue::Keyword(k) if k == DEFAULT_KEY => Ok(default),
            StyleValue::Number(n) => Ok(*n),
            StyleValue::Length(l) => self.length_px(style, l),
            _ => Err(unsupported(style)),
        }
    }
}

/// Binding for values driven by custom properties or CSS expressions.
///
/// An opacity suffix turns the binding into a `color-mix` expression.
fn binding(style: &ParsedStyle) -> Option<Binding> {
    let binding = match &style.value {
        StyleValue::Variable(name) if style.negative => {
            Binding::Expression(format!("calc(var({name}) * -1)"))
        }
        StyleValue::Variable(name) => Binding::Variable(name.clone()),
        StyleValue::Raw(raw) if is_passthrough(raw) && style.negative => {
            Binding::Expression(format!("calc({raw} * -1)"))
        }
        StyleValue::Raw(raw) if is_passthrough(raw) => Binding::Expression(raw.clone()),
        _ => return None,
    };
    Some(match style.opacity {
        Some(_) => Binding::Expression(translucent(binding.css_text(), style.opacity)),
        None => binding,
    })
}

const EDGES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

/// Target fields a bound node drives, or `None` when the property has no
/// structural counterpart.
fn binding_fields(style: &ParsedStyle) -> Option<Vec<String>> {
    let side = style.side_or_all();
    let edges = |format: fn(&str) -> String| -> Vec<String> {
        EDGES
            .iter()
            .zip(side.edges())
            .filter(|(_, on)| *on)
            .map(|(edge, _)| format(edge))
            .collect()
    };
    let axes = |x: &str, y: &str| -> Vec<String> {
        match side {
            Side::X => vec![x.to_string()],
            Side::Y => vec![y.to_string()],
            _ => vec![x.to_string(), y.to_string()],
        }
    };

    use Property::*;
    let fields = match style.property {
        Padding => edges(|e| format!("padding-{e}")),
        Margin => edges(|e| format!("margin-{e}")),
        Inset => edges(|e| e.to_string()),
        BorderWidth => edges(|e| format!("stroke-{e}-weight")),
        BorderRadius => CORNERS
            .iter()
            .zip(side.corners())
            .filter(|(_, on)| *on)
            .map(|(corner, _)| format!("{corner}-radius"))
            .collect(),
        Gap | SpaceBetween => axes("column-gap", "row-gap"),
        Scale => axes("scale-x", "scale-y"),
        Translate => axes("translate-x", "translate-y"),
        Size => vec!["width".into(), "height".into()],
        BackgroundColor | BackgroundImage => vec!["fills".into()],
        TextColor => vec!["text-fill".into()],
        // strokes share one paint list
        BorderColor if side != Side::All => return None,
        BorderColor => vec!["strokes".into()],
        Rotate => vec!["rotation".into()],
        Blur => vec!["layer-blur".into()],
        BackdropBlur => vec!["background-blur".into()],
        FlexDirection | Display => vec!["layout-mode".into()],
        JustifyContent => vec!["primary-axis-align".into()],
        AlignItems => vec!["counter-axis-align".into()],
        Overflow => vec!["clips-content".into()],
        Width | Height | MinWidth | MinHeight | MaxWidth | MaxHeight | FlexBasis
        | AspectRatio | RingColor | RingOffsetColor | RingWidth | RingOffsetWidth
        | ShadowColor | BoxShadow | Opacity | FontSize | FontWeight | FontFamily
        | LineHeight | LetterSpacing | ZIndex | Order | FlexGrow | FlexShrink | LineClamp
        | GridTemplateColumns | GridTemplateRows | GridColumn | GridRow => {
            vec![style.property.as_str().to_string()]
        }
        _ => return None,
    };
    Some(fields)
}

fn unsupported(style: &ParsedStyle) -> Error {
    Error::unsupported(style.property, &style.raw)
}

fn signed(style: &ParsedStyle, value: f32) -> f32 {
    if style.negative { -value } else { value }
}
