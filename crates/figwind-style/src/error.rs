//! Error types for the strict entry points.
//!
//! The parse and lowering pipeline itself reports failure through `None`,
//! unknown IR nodes and dropped fields. These errors are only produced by
//! [`StyleParser::parse_strict`](crate::rules::StyleParser::parse_strict) and
//! [`Converter::try_convert`](crate::convert::Converter::try_convert).

use crate::types::Property;

/// Result type alias for strict style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the strict entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No utility family recognized the token.
    #[error("unknown utility '{raw}'")]
    UnknownUtility { raw: String },

    /// The lowering stage has no mapping for this property/value pair.
    #[error("'{raw}' ({property}) has no target mapping")]
    Unsupported { property: Property, raw: String },

    /// The value could not be resolved (e.g. a unit with no pixel size).
    #[error("invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an unknown-utility error.
    pub fn unknown_utility(raw: impl Into<String>) -> Self {
        Self::UnknownUtility { raw: raw.into() }
    }

    /// Create an unsupported-mapping error.
    pub fn unsupported(property: Property, raw: impl Into<String>) -> Self {
        Self::Unsupported {
            property,
            raw: raw.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
