//! Flexbox, grid, alignment, stacking, overflow and background layout.

use super::family::{CustomProperty, FamilySpec};
use super::scales::{self, DEFAULT_KEY};
use super::shape::ValueShape;
use crate::parser::is_numeric;
use crate::types::{Property, Side, StyleValue};

fn number(key: &str) -> Option<StyleValue> {
    is_numeric(key)
        .then(|| key.parse().ok())
        .flatten()
        .map(StyleValue::Number)
}

/// Bare `grow` / `shrink` mean 1.
fn factor(key: &str) -> Option<StyleValue> {
    if key == DEFAULT_KEY {
        return Some(StyleValue::Number(1.0));
    }
    number(key)
}

fn order(key: &str) -> Option<StyleValue> {
    match key {
        "first" => Some(StyleValue::Number(-9999.0)),
        "last" => Some(StyleValue::Number(9999.0)),
        "none" => Some(StyleValue::Number(0.0)),
        _ => number(key),
    }
}

fn aspect_ratio(key: &str) -> Option<StyleValue> {
    match key {
        "square" => Some(StyleValue::Fraction {
            numerator: 1,
            denominator: 1,
        }),
        "video" => Some(StyleValue::Fraction {
            numerator: 16,
            denominator: 9,
        }),
        _ => scales::fraction(key),
    }
}

fn gradient(key: &str) -> Option<StyleValue> {
    let direction = match key.strip_prefix("gradient-to-")? {
        "t" => "to top",
        "tr" => "to top right",
        "r" => "to right",
        "br" => "to bottom right",
        "b" => "to bottom",
        "bl" => "to bottom left",
        "l" => "to left",
        "tl" => "to top left",
        _ => return None,
    };
    Some(StyleValue::Raw(format!(
        "linear-gradient({direction}, var(--tw-gradient-stops))"
    )))
}

pub static Z_INDEX: FamilySpec = FamilySpec::new("z-index", Property::ZIndex, &[("z", None)])
    .theme(&["zIndex"])
    .preset(number)
    .keywords(&[("auto", "auto")])
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Accept)
    .negative();

pub static OVERFLOW: FamilySpec = FamilySpec::new(
    "overflow",
    Property::Overflow,
    &[
        ("overflow", Some(Side::All)),
        ("overflow-x", Some(Side::X)),
        ("overflow-y", Some(Side::Y)),
    ],
)
.keywords(&[
    ("auto", "auto"),
    ("hidden", "hidden"),
    ("clip", "clip"),
    ("visible", "visible"),
    ("scroll", "scroll"),
]);

pub static FLEX: FamilySpec = FamilySpec::new("flex", Property::Flex, &[("flex", None)])
    .theme(&["flex"])
    .keywords(&[
        ("1", "1 1 0%"),
        ("auto", "1 1 auto"),
        ("initial", "0 1 auto"),
        ("none", "none"),
    ])
    .shape(ValueShape::Any)
    .custom_property(CustomProperty::Accept);

pub static FLEX_DIRECTION: FamilySpec =
    FamilySpec::new("flex-direction", Property::FlexDirection, &[("flex", None)]).keywords(&[
        ("row", "row"),
        ("row-reverse", "row-reverse"),
        ("col", "column"),
        ("col-reverse", "column-reverse"),
    ]);

pub static FLEX_WRAP: FamilySpec = FamilySpec::new("flex-wrap", Property::FlexWrap, &[("flex", None)])
    .keywords(&[
        ("wrap", "wrap"),
        ("wrap-reverse", "wrap-reverse"),
        ("nowrap", "nowrap"),
    ]);

pub static FLEX_GROW: FamilySpec = FamilySpec::new("flex-grow", Property::FlexGrow, &[("grow", None)])
    .theme(&["flexGrow"])
    .preset(factor)
    .shape(ValueShape::Number)
    .custom_property(CustomProperty::Accept);

pub static FLEX_SHRINK: FamilySpec = FamilySpec::new("flex-shrink", Property::FlexShrink, &[("shrink", None)])
    .theme(&["flexShrink"])
    .preset(factor)
    .shape(ValueShape::Number)
    .custom_property(CustomProperty::Accept);

pub static ORDER: FamilySpec = FamilySpec::new("order", Property::Order, &[("order", None)])
    .theme(&["order"])
    .preset(order)
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Accept)
    .negative();

const CONTENT_ALIGN: &[(&str, &str)] = &[
    ("normal", "normal"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
    ("stretch", "stretch"),
    ("baseline", "baseline"),
];

const ITEM_ALIGN: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("stretch", "stretch"),
];

const SELF_ALIGN: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("stretch", "stretch"),
];

pub static JUSTIFY_CONTENT: FamilySpec =
    FamilySpec::new("justify-content", Property::JustifyContent, &[("justify", None)])
        .keywords(CONTENT_ALIGN);

pub static JUSTIFY_ITEMS: FamilySpec =
    FamilySpec::new("justify-items", Property::JustifyItems, &[("justify-items", None)])
        .keywords(ITEM_ALIGN);

pub static JUSTIFY_SELF: FamilySpec =
    FamilySpec::new("justify-self", Property::JustifySelf, &[("justify-self", None)])
        .keywords(SELF_ALIGN);

pub static ALIGN_ITEMS: FamilySpec =
    FamilySpec::new("align-items", Property::AlignItems, &[("items", None)]).keywords(ITEM_ALIGN);

pub static ALIGN_SELF: FamilySpec =
    FamilySpec::new("align-self", Property::AlignSelf, &[("self", None)]).keywords(SELF_ALIGN);

pub static ALIGN_CONTENT: FamilySpec =
    FamilySpec::new("align-content", Property::AlignContent, &[("content", None)])
        .keywords(CONTENT_ALIGN);

pub static PLACE_CONTENT: FamilySpec =
    FamilySpec::new("place-content", Property::PlaceContent, &[("place-content", None)])
        .keywords(CONTENT_ALIGN);

pub static GRID_TEMPLATE_COLUMNS: FamilySpec = FamilySpec::new(
    "grid-template-columns",
    Property::GridTemplateColumns,
    &[("grid-cols", None)],
)
.theme(&["gridTemplateColumns"])
.preset(number)
.keywords(&[("none", "none"), ("subgrid", "subgrid")])
.shape(ValueShape::Any)
.custom_property(CustomProperty::Accept);

pub static GRID_TEMPLATE_ROWS: FamilySpec = FamilySpec::new(
    "grid-template-rows",
    Property::GridTemplateRows,
    &[("grid-rows", None)],
)
.theme(&["gridTemplateRows"])
.preset(number)
.keywords(&[("none", "none"), ("subgrid", "subgrid")])
.shape(ValueShape::Any)
.custom_property(CustomProperty::Accept);

pub static GRID_COLUMN: FamilySpec = FamilySpec::new("grid-column", Property::GridColumn, &[("col-span", None)])
    .preset(number)
    .keywords(&[("full", "full")])
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Accept);

pub static GRID_ROW: FamilySpec = FamilySpec::new("grid-row", Property::GridRow, &[("row-span", None)])
    .preset(number)
    .keywords(&[("full", "full")])
    .shape(ValueShape::Integer)
    .custom_property(CustomProperty::Accept);

pub static OBJECT_FIT: FamilySpec = FamilySpec::new("object-fit", Property::ObjectFit, &[("object", None)])
    .keywords(&[
        ("contain", "contain"),
        ("cover", "cover"),
        ("fill", "fill"),
        ("none", "none"),
        ("scale-down", "scale-down"),
    ]);

pub static ASPECT_RATIO: FamilySpec = FamilySpec::new("aspect-ratio", Property::AspectRatio, &[("aspect", None)])
    .theme(&["aspectRatio"])
    .preset(aspect_ratio)
    .keywords(&[("auto", "auto")])
    .shape(ValueShape::Ratio)
    .custom_property(CustomProperty::Accept);

pub static BOX_SIZING: FamilySpec = FamilySpec::new("box-sizing", Property::BoxSizing, &[("box", None)])
    .keywords(&[("border", "border-box"), ("content", "content-box")]);

pub static BACKGROUND_IMAGE: FamilySpec =
    FamilySpec::new("background-image", Property::BackgroundImage, &[("bg", None)])
        .theme(&["backgroundImage"])
        .preset(gradient)
        .keywords(&[("none", "none")])
        .shape(ValueShape::Image)
        .custom_property(CustomProperty::Hinted);

pub static BACKGROUND_SIZE: FamilySpec =
    FamilySpec::new("background-size", Property::BackgroundSize, &[("bg", None)])
        .keywords(&[("auto", "auto"), ("cover", "cover"), ("contain", "contain")])
        .shape(ValueShape::Size)
        .custom_property(CustomProperty::Hinted);

pub static BACKGROUND_POSITION: FamilySpec =
    FamilySpec::new("background-position", Property::BackgroundPosition, &[("bg", None)])
        .keywords(&[
            ("bottom", "bottom"),
            ("center", "center"),
            ("left", "left"),
            ("left-bottom", "left bottom"),
            ("left-top", "left top"),
            ("right", "right"),
            ("right-bottom", "right bottom"),
            ("right-top", "right top"),
            ("top", "top"),
        ])
        .shape(ValueShape::Position)
        .custom_property(CustomProperty::Hinted);

pub static BACKGROUND_REPEAT: FamilySpec =
    FamilySpec::new("background-repeat", Property::BackgroundRepeat, &[("bg", None)]).keywords(&[
        ("repeat", "repeat"),
        ("no-repeat", "no-repeat"),
        ("repeat-x", "repeat-x"),
        ("repeat-y", "repeat-y"),
        ("repeat-round", "round"),
        ("repeat-space", "space"),
    ]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve_family;
    use crate::theme::{Context, ThemeValue};
    use crate::types::{Length, Variant};

    #[test]
    fn z_index_theme_then_numbers() {
        let lookup = |path: &str| (path == "zIndex.modal").then_some(ThemeValue::Number(100.0));
        let ctx = Context::new(&lookup);
        assert_eq!(
            resolve_family(&Z_INDEX, "z-modal", &ctx).unwrap().value,
            StyleValue::Number(100.0)
        );
        let style = resolve_family(&Z_INDEX, "-z-10", &ctx).unwrap();
        assert!(style.negative);
        assert_eq!(style.value, StyleValue::Number(10.0));
        assert!(resolve_family(&Z_INDEX, "z-[1.5]", &ctx).is_none());
    }

    #[test]
    fn flex_shares_its_prefix() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&FLEX, "flex-1", &ctx).unwrap().value,
            StyleValue::keyword("1 1 0%")
        );
        assert!(resolve_family(&FLEX, "flex-col", &ctx).is_none());
        assert_eq!(
            resolve_family(&FLEX_DIRECTION, "flex-col", &ctx).unwrap().value,
            StyleValue::keyword("column")
        );
        assert_eq!(
            resolve_family(&FLEX_WRAP, "flex-wrap", &ctx).unwrap().value,
            StyleValue::keyword("wrap")
        );
    }

    #[test]
    fn grow_and_order() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&FLEX_GROW, "grow", &ctx).unwrap().value,
            StyleValue::Number(1.0)
        );
        assert_eq!(
            resolve_family(&ORDER, "order-last", &ctx).unwrap().value,
            StyleValue::Number(9999.0)
        );
    }

    #[test]
    fn alignment_keywords() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&JUSTIFY_CONTENT, "justify-between", &ctx).unwrap().value,
            StyleValue::keyword("space-between")
        );
        assert!(resolve_family(&JUSTIFY_CONTENT, "justify-items-center", &ctx).is_none());
        assert_eq!(
            resolve_family(&ALIGN_ITEMS, "items-center", &ctx).unwrap().value,
            StyleValue::keyword("center")
        );
    }

    #[test]
    fn grid_templates() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&GRID_TEMPLATE_COLUMNS, "grid-cols-3", &ctx).unwrap().value,
            StyleValue::Number(3.0)
        );
        let style = resolve_family(&GRID_TEMPLATE_COLUMNS, "grid-cols-[1fr_2fr]", &ctx).unwrap();
        assert_eq!(style.value, StyleValue::Raw("1fr 2fr".into()));
        assert_eq!(style.variant, Variant::Arbitrary);
    }

    #[test]
    fn background_families() {
        let ctx = Context::empty();
        let style = resolve_family(&BACKGROUND_IMAGE, "bg-[url(/img/hero.png)]", &ctx).unwrap();
        assert_eq!(style.value, StyleValue::Raw("url(/img/hero.png)".into()));

        assert!(resolve_family(&BACKGROUND_IMAGE, "bg-gradient-to-r", &ctx).is_some());
        assert!(resolve_family(&BACKGROUND_IMAGE, "bg-red-500", &ctx).is_none());

        assert_eq!(
            resolve_family(&BACKGROUND_SIZE, "bg-[length:200px_100px]", &ctx).unwrap().value,
            StyleValue::Raw("200px 100px".into())
        );
        assert_eq!(
            resolve_family(&BACKGROUND_SIZE, "bg-[50%]", &ctx).unwrap().value,
            StyleValue::Length(Length::percent(50.0))
        );
        assert_eq!(
            resolve_family(&BACKGROUND_POSITION, "bg-[position:center_top]", &ctx)
                .unwrap()
                .value,
            StyleValue::Raw("center top".into())
        );
        assert_eq!(
            resolve_family(&BACKGROUND_REPEAT, "bg-no-repeat", &ctx).unwrap().value,
            StyleValue::keyword("no-repeat")
        );
    }

    #[test]
    fn aspect_presets() {
        let ctx = Context::empty();
        assert_eq!(
            resolve_family(&ASPECT_RATIO, "aspect-video", &ctx).unwrap().value,
            StyleValue::Fraction {
                numerator: 16,
                denominator: 9
            }
        );
        assert!(resolve_family(&ASPECT_RATIO, "aspect-[4/3]", &ctx).is_some());
    }
}
