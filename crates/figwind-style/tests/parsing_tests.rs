//! Integration tests for tokenizing, parsing and modifier handling.

use figwind_style::prelude::*;
use figwind_style::theme::ThemeValue;
use figwind_style::types::ArbitraryType;

const CORPUS: &[&str] = &[
    "p-4",
    "-mt-6",
    "!px-2",
    "w-1/2",
    "w-[calc(100%-2rem)]",
    "bg-blue-200/50",
    "bg-[rgba(0,0,0,0.5)]/20",
    "bg-[#ff0]",
    "bg-(--brand)",
    "text-(length:--size)",
    "text-[length:var(--size)]",
    "border",
    "border-x-4",
    "rounded-tl-[3px]",
    "shadow-[0_1px_2px_rgba(0,0,0,.2)]",
    "grid-cols-[1fr_2fr]",
    "leading-[1.75]",
    "font-[Inter,sans-serif]",
    "translate-x-1/3",
    "z-[999]",
    "flex",
    "hidden",
    "wobble-3",
];

const PREFIXES: &[&str] = &[
    "p", "px", "mt", "w", "bg", "text", "border", "border-x", "rounded-tl", "shadow", "grid-cols",
    "leading", "font", "translate-x", "z", "flex", "hidden", "wobble",
];

#[test]
fn parsing_is_deterministic() {
    let ctx = Context::empty();
    for token in CORPUS {
        assert_eq!(parse_utility(token, &ctx), parse_utility(token, &ctx), "{token}");
        assert_eq!(
            parse_utility_token(token, PREFIXES, true),
            parse_utility_token(token, PREFIXES, true),
            "{token}"
        );
    }
}

#[test]
fn value_forms_are_mutually_exclusive() {
    for token in CORPUS {
        let Some(parsed) = parse_utility_token(token, PREFIXES, true) else {
            continue;
        };
        let set = [parsed.preset, parsed.arbitrary, parsed.custom_property]
            .into_iter()
            .filter(|&flag| flag)
            .count();

        if parsed.custom_property && parsed.type_hint.is_some() {
            // typed custom properties also pass the arbitrary gate
            assert!(parsed.arbitrary, "{token}");
            assert!(!parsed.preset, "{token}");
        } else {
            assert_eq!(set, 1, "{token}: {parsed:?}");
        }
    }
}

#[test]
fn parse_utility_is_total() {
    let ctx = Context::empty();
    let odd = [
        "", "-", "!", "!!", "[", "]", "bg-[", "bg-]", "--", "p-", "/", "bg-red-500/", "w-[[]]",
        "-[x]", "ß-4", "p-4/", "()", "bg-()", "text-[length:]", "-!p-4", "p-4!!",
    ];
    for token in odd.iter().chain(CORPUS) {
        let parsed = parse_utility(token, &ctx);
        assert_eq!(parsed.raw(), *token);
    }

    assert_eq!(
        parse_utility("bg-[]", &ctx),
        ParsedUtility::Unknown {
            raw: "bg-[]".into()
        }
    );
}

#[test]
fn longest_prefix_match() {
    let token = parse_utility_token("border-x-4", &["border", "border-x"], false).unwrap();
    assert_eq!(token.prefix, "border-x");
    assert_eq!(token.value, "4");
    assert!(token.numeric && token.preset);
}

#[test]
fn slash_is_found_outside_brackets() {
    let token = parse_utility_token("bg-[rgba(0,0,0,0.5)]/20", &["bg"], true).unwrap();
    assert_eq!(token.slash.as_deref(), Some("20"));
    assert_eq!(token.slash_percent(), Some(Some(20)));
    assert_eq!(token.arbitrary_type, Some(ArbitraryType::Rgba));
}

#[test]
fn calc_width() {
    let token = parse_utility_token("w-[calc(100%-2rem)]", &["w"], false).unwrap();
    assert_eq!(token.arbitrary_type, Some(ArbitraryType::Calc));
    assert_eq!(token.arbitrary_value.as_deref(), Some("100%-2rem"));

    let style = parse_utility("w-[calc(100%-2rem)]", &Context::empty())
        .into_style()
        .unwrap();
    assert_eq!(style.property, Property::Width);
    assert!(style.is_arbitrary());
}

#[test]
fn negative_margin() {
    let style = parse_utility("-mt-6", &Context::empty()).into_style().unwrap();
    assert_eq!(style.property, Property::Margin);
    assert_eq!(style.side, Some(Side::Top));
    assert_eq!(style.value, StyleValue::Number(6.0));
    assert!(style.negative);
    assert!(!style.important);
}

#[test]
fn themed_color_with_opacity() {
    let lookup = |path: &str| (path == "colors.blue.200").then(|| ThemeValue::from("#bfdbfe"));
    let ctx = Context::new(&lookup);

    let style = parse_utility("bg-blue-200/50", &ctx).into_style().unwrap();
    assert_eq!(style.property, Property::BackgroundColor);
    assert_eq!(style.preset_name(), Some("blue-200"));
    assert_eq!(style.opacity, Some(50));
    assert!(!style.is_arbitrary());
}

#[test]
fn empty_brackets_are_unknown() {
    let ctx = Context::empty();
    assert!(parse_utility_token("bg-[]", &["bg"], true).is_none());
    assert!(parse_utility("bg-[]", &ctx).is_unknown());
}

#[test]
fn modifiers_sort_by_priority() {
    let class = "[&>*]:before:hover:group-hover:dark:md:first:peer-focus:nth-3:\
                 disabled:print:aria-checked:odd:data-active:lg:focus:rtl:underline";
    let (modifiers, utility) = parse_modifiers(class);

    assert_eq!(utility, "underline");
    let priorities: Vec<u8> = modifiers.iter().map(Modifier::priority).collect();
    assert_eq!(
        priorities,
        [1, 1, 2, 2, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 6]
    );

    // stable within a priority
    let responsive: Vec<&str> = modifiers[..2].iter().map(|m| m.raw.as_str()).collect();
    assert_eq!(responsive, ["md", "lg"]);
}

#[test]
fn composed_selector_escapes_and_wraps() {
    let (modifiers, _) = parse_modifiers("md:hover:p-4");
    let composed = compose_selector("md:hover:p-4", &modifiers);

    assert_eq!(composed.selector, r".md\:hover\:p-4:hover");
    assert!(composed.has_at_rules());
}

#[test]
fn strict_parsing_reports_unknowns() {
    let parser = StyleParser::builtin();
    let ctx = Context::empty();
    assert!(parser.parse("wobble-3", &ctx).is_unknown());
    assert!(parser.parse_strict("wobble-3", &ctx).is_err());
    assert!(parser.parse_strict("p-3", &ctx).is_ok());
}
