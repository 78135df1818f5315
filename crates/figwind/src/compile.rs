//! Class-list compilation.

use figwind_style::convert::{ConvertOptions, Converter, TargetStyle};
use figwind_style::rules::StyleParser;
use figwind_style::selector::{ComposedSelector, Modifier, compose_selector, parse_modifiers};
use figwind_style::theme::Context;
use figwind_style::types::ParsedUtility;
use serde::Serialize;

/// One class from a class list, split and parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedClass {
    /// The class as written.
    pub class: String,
    /// Modifiers in selector order.
    pub modifiers: Vec<Modifier>,
    pub utility: ParsedUtility,
}

impl ParsedClass {
    /// Check if no rule recognized the utility part.
    pub fn is_unknown(&self) -> bool {
        self.utility.is_unknown()
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// The selector this class applies under.
    pub fn selector(&self) -> ComposedSelector {
        compose_selector(&self.class, &self.modifiers)
    }

    /// The modifier chain as written in selector order (`md:hover`).
    pub fn modifier_key(&self) -> String {
        chain(&self.modifiers)
    }
}

/// Styles that apply only under a modifier chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantStyle {
    /// Modifiers in selector order, shared by every class in the group.
    pub modifiers: Vec<Modifier>,
    /// Selector for each class in the group, in class-list order.
    pub selectors: Vec<ComposedSelector>,
    pub style: TargetStyle,
}

impl VariantStyle {
    /// The modifier chain (`dark:hover`).
    pub fn key(&self) -> String {
        chain(&self.modifiers)
    }
}

/// Result of compiling a class list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Compiled {
    /// Base style from classes without modifiers.
    pub style: TargetStyle,
    /// Every class in input order.
    pub classes: Vec<ParsedClass>,
    /// Classes whose utility no rule recognized, in input order.
    pub unknown: Vec<String>,
    /// Modified classes grouped by modifier chain, in first-seen order.
    pub variants: Vec<VariantStyle>,
}

impl Compiled {
    /// Find the variant group for a modifier chain such as `md:hover`.
    pub fn variant(&self, key: &str) -> Option<&VariantStyle> {
        self.variants.iter().find(|v| v.key() == key)
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }
}

/// Class-list compiler.
///
/// Holds a family table and lowering options; reuse one compiler across
/// many class lists.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    parser: StyleParser,
    converter: Converter,
}

impl Compiler {
    /// A compiler with the built-in families.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_parser(StyleParser::builtin(), options)
    }

    /// A compiler over a custom family table.
    pub fn with_parser(parser: StyleParser, options: ConvertOptions) -> Self {
        Self {
            parser,
            converter: Converter::new(options),
        }
    }

    pub fn parser(&self) -> &StyleParser {
        &self.parser
    }

    pub fn options(&self) -> &ConvertOptions {
        self.converter.options()
    }

    /// Split, parse and lower a whitespace-separated class list.
    pub fn compile(&self, class_list: &str, ctx: &Context<'_>) -> Compiled {
        let tokens: Vec<&str> = class_list.split_whitespace().collect();
        let classes = self.parse_all(&tokens, ctx);

        let mut compiled = Compiled::default();
        for class in &classes {
            let Some(style) = class.utility.as_style() else {
                compiled.unknown.push(class.class.clone());
                continue;
            };
            if !class.has_modifiers() {
                self.converter.apply(&mut compiled.style, style);
                continue;
            }

            let index = match compiled
                .variants
                .iter()
                .position(|v| v.modifiers == class.modifiers)
            {
                Some(index) => index,
                None => {
                    compiled.variants.push(VariantStyle {
                        modifiers: class.modifiers.clone(),
                        selectors: Vec::new(),
                        style: TargetStyle::new(),
                    });
                    compiled.variants.len() - 1
                }
            };
            let variant = &mut compiled.variants[index];
            variant.selectors.push(class.selector());
            self.converter.apply(&mut variant.style, style);
        }

        if compiled.has_unknown() {
            tracing::debug!(
                "{} of {} classes unknown: {}",
                compiled.unknown.len(),
                classes.len(),
                compiled.unknown.join(" ")
            );
        }
        compiled.classes = classes;
        compiled
    }

    /// Parse a single class with its modifiers.
    pub fn parse_class(&self, class: &str, ctx: &Context<'_>) -> ParsedClass {
        let (modifiers, utility) = parse_modifiers(class);
        ParsedClass {
            class: class.to_string(),
            modifiers,
            utility: self.parser.parse(utility, ctx),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn parse_all(&self, tokens: &[&str], ctx: &Context<'_>) -> Vec<ParsedClass> {
        tokens
            .iter()
            .map(|class| self.parse_class(class, ctx))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn parse_all(&self, tokens: &[&str], ctx: &Context<'_>) -> Vec<ParsedClass> {
        use rayon::prelude::*;

        tokens
            .par_iter()
            .map(|class| self.parse_class(class, ctx))
            .collect()
    }
}

fn chain(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|m| m.raw.as_str())
        .collect::<Vec<_>>()
        .join(":")
}

/// Compile a class list with the built-in families.
///
/// # Example
///
/// ```
/// use figwind::prelude::*;
///
/// let compiled = compile(
///     "flex gap-2 p-4 hover:bg-black md:p-8 not-a-class",
///     &Context::empty(),
///     &ConvertOptions::default(),
/// );
///
/// assert_eq!(compiled.style.layout_mode, Some(LayoutMode::Horizontal));
/// assert_eq!(compiled.style.padding_top, Some(16.0));
/// assert_eq!(compiled.unknown, ["not-a-class"]);
/// assert_eq!(compiled.variant("md").unwrap().style.padding_top, Some(32.0));
/// ```
pub fn compile(class_list: &str, ctx: &Context<'_>, options: &ConvertOptions) -> Compiled {
    Compiler::new(options.clone()).compile(class_list, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figwind_paint::{Color, Paint};

    fn compile_default(class_list: &str) -> Compiled {
        compile(class_list, &Context::empty(), &ConvertOptions::default())
    }

    #[test]
    fn empty_list() {
        let compiled = compile_default("   \n\t ");
        assert!(compiled.classes.is_empty());
        assert!(compiled.style.is_empty());
        assert!(compiled.variants.is_empty());
    }

    #[test]
    fn base_ignores_modified_classes() {
        let compiled = compile_default("bg-white hover:bg-black");
        assert_eq!(compiled.style.fills, vec![Paint::solid(Color::WHITE)]);

        let hover = compiled.variant("hover").unwrap();
        assert_eq!(hover.style.fills, vec![Paint::solid(Color::BLACK)]);
        assert_eq!(hover.selectors[0].selector, r".hover\:bg-black:hover");
    }

    #[test]
    fn variants_group_by_modifier_chain() {
        let compiled = compile_default("md:p-2 hover:md:m-1 md:hover:m-2 md:gap-4");
        let keys: Vec<String> = compiled.variants.iter().map(VariantStyle::key).collect();
        assert_eq!(keys, ["md", "md:hover"]);

        let md = compiled.variant("md").unwrap();
        assert_eq!(md.selectors.len(), 2);
        assert_eq!(md.style.padding_left, Some(8.0));
        assert_eq!(md.style.column_gap, Some(16.0));
    }

    #[test]
    fn unknown_classes_are_listed_in_order() {
        let compiled = compile_default("zzz p-1 hover:yyy");
        assert_eq!(compiled.unknown, ["zzz", "hover:yyy"]);
        assert_eq!(compiled.classes.len(), 3);
        assert!(compiled.classes[0].is_unknown());
        assert!(!compiled.classes[1].is_unknown());
    }

    #[test]
    fn modifiers_are_sorted() {
        let compiled = compile_default("hover:dark:md:underline");
        let class = &compiled.classes[0];
        assert_eq!(class.modifier_key(), "md:dark:hover");
    }
}
