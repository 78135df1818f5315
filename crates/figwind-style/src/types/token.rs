//! Tokenizer output.

use serde::Serialize;
use std::fmt;

/// Inner grammar of a bracketed arbitrary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArbitraryType {
    /// `#` followed by 3, 4, 6 or 8 hex digits.
    Hex,
    /// `rgb(...)`, kept whole.
    Rgb,
    /// `rgba(...)`, kept whole.
    Rgba,
    /// `url(...)`, unwrapped to the inner reference.
    Url,
    /// `var(...)`, unwrapped to the inner custom property name.
    Var,
    /// `calc(...)`, unwrapped to the inner expression.
    Calc,
    /// `theme(...)`, unwrapped to the inner dotted path.
    Theme,
}

impl ArbitraryType {
    /// The function name or marker this type was detected from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Url => "url",
            Self::Var => "var",
            Self::Calc => "calc",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for ArbitraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A utility token split into its prefix, value and markers.
///
/// Produced by [`parse_utility_token`](crate::parser::parse_utility_token).
/// For any non-trivial token exactly one of `preset`, `arbitrary` and
/// `custom_property` is set; the one exception is the typed custom property
/// form `(length:--x)`, which also sets `arbitrary` so that it goes through
/// the arbitrary value gate of the family that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedToken {
    /// The original token.
    pub raw: String,
    /// The matched family prefix.
    pub prefix: String,
    /// Remainder after the prefix and its `-` separator (empty on exact match).
    pub value: String,
    /// A `-` preceded the prefix.
    pub negative: bool,
    /// A leading or trailing `!` was present.
    pub important: bool,
    /// Trailing `/digits` suffix, only extracted for families that allow it.
    pub slash: Option<String>,
    /// Value was `(--x)` or `(hint:--x)`.
    pub custom_property: bool,
    /// Value was `[...]` (or a typed custom property).
    pub arbitrary: bool,
    /// Inner grammar of an arbitrary value, `None` for plain content.
    pub arbitrary_type: Option<ArbitraryType>,
    /// Unwrapped arbitrary or custom property content.
    pub arbitrary_value: Option<String>,
    /// Data-type hint from `[hint:...]` or `(hint:--x)`.
    pub type_hint: Option<String>,
    /// Value is a bare number.
    pub numeric: bool,
    /// Value is a keyword or number to look up in a preset table.
    pub preset: bool,
}

impl ParsedToken {
    /// Check whether the value is exactly the given keyword.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.preset && self.value == keyword
    }

    /// Parse the value as a number, if it is numeric.
    pub fn number(&self) -> Option<f32> {
        if self.numeric {
            self.value.parse().ok()
        } else {
            None
        }
    }

    /// Opacity from the slash suffix as a 0-100 percentage.
    ///
    /// `Some(None)` when there is no suffix; `None` when the suffix is not a
    /// valid opacity (`/150`, `/abc`). Bracketed suffixes accept a 0-1
    /// fraction or an explicit percentage (`/[.35]`, `/[35%]`).
    pub fn slash_percent(&self) -> Option<Option<u8>> {
        let Some(slash) = &self.slash else {
            return Some(None);
        };
        let percent = match slash.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(inner) => match inner.strip_suffix('%') {
                Some(p) => p.parse::<f32>().ok()?,
                None => inner.parse::<f32>().ok()? * 100.0,
            },
            None => slash.parse::<f32>().ok()?,
        };
        (0.0..=100.0)
            .contains(&percent)
            .then(|| Some(percent.round() as u8))
    }
}
