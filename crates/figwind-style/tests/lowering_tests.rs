//! End-to-end tests: utility tokens through parsing and lowering.

use figwind_paint::{AxisAlign, Color, Effect, LayoutMode, Paint, SizingMode};
use figwind_style::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn styles(tokens: &[&str]) -> Vec<ParsedStyle> {
    init_tracing();
    let ctx = Context::empty();
    tokens
        .iter()
        .filter_map(|token| parse_utility(token, &ctx).into_style())
        .collect()
}

fn lower(tokens: &[&str]) -> TargetStyle {
    Converter::default().convert_all(&styles(tokens))
}

#[test]
fn button() {
    let target = lower(&[
        "inline-flex",
        "items-center",
        "justify-center",
        "px-4",
        "py-2",
        "rounded-md",
        "bg-black",
        "text-white",
        "text-sm",
        "font-semibold",
        "shadow-sm",
    ]);

    assert_eq!(target.layout_mode, Some(LayoutMode::Horizontal));
    assert_eq!(target.counter_axis_align, Some(AxisAlign::Center));
    assert_eq!(target.primary_axis_align, Some(AxisAlign::Center));
    assert_eq!((target.padding_left, target.padding_top), (Some(16.0), Some(8.0)));
    assert_eq!(target.fills, vec![Paint::solid(Color::BLACK)]);
    assert_eq!(target.text_fill, Some(Paint::solid(Color::WHITE)));
    assert_eq!(target.font_size, Some(14.0));
    assert_eq!(target.font_weight, Some(600.0));
    assert!(matches!(target.effects.as_slice(), [Effect::DropShadow(_)]));
    assert!(target.css.is_empty());
}

#[test]
fn sizing_modes() {
    let target = lower(&["w-full", "h-auto"]);
    assert_eq!(target.sizing_horizontal, Some(SizingMode::Fill));
    assert_eq!(target.sizing_vertical, Some(SizingMode::Hug));
    assert_eq!(target.height, None);

    let target = lower(&["w-64", "h-[120px]"]);
    assert_eq!(target.width, Some(Dimension::Pixels(256.0)));
    assert_eq!(target.height, Some(Dimension::Pixels(120.0)));
    assert_eq!(target.sizing_horizontal, Some(SizingMode::Fixed));
}

#[test]
fn negative_values() {
    let target = lower(&["-mt-6", "-mx-[3px]"]);
    assert_eq!(target.margin_top, Some(Dimension::Pixels(-24.0)));
    assert_eq!(target.margin_left, Some(Dimension::Pixels(-3.0)));
    assert_eq!(target.margin_right, Some(Dimension::Pixels(-3.0)));
}

#[test]
fn expressions_and_variables_bind() {
    let target = lower(&["w-[calc(100%-2rem)]", "mt-(--stack)"]);
    assert_eq!(
        target.bindings.get("width"),
        Some(&Binding::Expression("calc(100%-2rem)".into()))
    );
    assert_eq!(
        target.bindings.get("margin-top"),
        Some(&Binding::Variable("--stack".into()))
    );
    assert_eq!(target.width, None);
}

#[test]
fn variable_colors_with_opacity() {
    let target = lower(&["bg-(--surface)/25", "text-[var(--ink)]/80", "border-x-(--foo)/50"]);
    assert_eq!(
        target.bindings.get("fills"),
        Some(&Binding::Expression(
            "color-mix(in srgb, var(--surface) 25%, transparent)".into()
        ))
    );
    assert_eq!(
        target.bindings.get("text-fill"),
        Some(&Binding::Expression("color-mix(in srgb, var(--ink) 80%, transparent)".into()))
    );
    assert!(!target.bindings.contains_key("strokes"));
    assert_eq!(
        target.css.get("border-inline-color").map(String::as_str),
        Some("color-mix(in srgb, var(--foo) 50%, transparent)")
    );
}

#[test]
fn unsupported_utilities_keep_css() {
    let target = lower(&["cursor-pointer", "select-none", "transition", "duration-150"]);
    assert_eq!(target.css.get("cursor").map(String::as_str), Some("pointer"));
    assert_eq!(target.css.get("user-select").map(String::as_str), Some("none"));
    assert_eq!(
        target.css.get("transition-duration").map(String::as_str),
        Some("150ms")
    );
}

#[test]
fn options_change_units() {
    let converter = Converter::new(
        ConvertOptions::default()
            .with_root_font_size(10.0)
            .with_border_width(2.0),
    );
    let target = converter.convert_all(&styles(&["p-4", "border", "text-[2rem]"]));

    assert_eq!(target.padding_top, Some(10.0));
    assert_eq!(target.uniform_stroke_weight(), Some(2.0));
    assert_eq!(target.font_size, Some(20.0));
}

#[test]
fn options_from_json() {
    let options: ConvertOptions =
        serde_json::from_str(r#"{ "root_font_size": 18, "keep_css": false }"#).unwrap();
    assert_eq!(options.root_font_size, 18.0);
    assert!(!options.keep_css);
    assert_eq!(options.ring_width, ConvertOptions::default().ring_width);
}

#[test]
fn strict_conversion_reports_errors() {
    let converter = Converter::default();
    let style = &styles(&["cursor-wait"])[0];

    match converter.try_convert(style) {
        Err(Error::Unsupported { property, .. }) => assert_eq!(property, Property::Cursor),
        other => panic!("expected unsupported, got {other:?}"),
    }

    let style = &styles(&["rounded-lg"])[0];
    let target = converter.try_convert(style).unwrap();
    assert!(target.corner_radii.is_some());
}

#[test]
fn target_serializes_flat() {
    let target = lower(&["p-2", "opacity-50"]);
    let json = serde_json::to_value(&target).unwrap();

    assert_eq!(json["padding_top"], serde_json::json!(8.0));
    assert_eq!(json["opacity"], serde_json::json!(0.5));
    assert!(json.get("width").is_none());
    assert!(json.get("fills").is_none());
    assert!(json.get("css").is_none());
}
