//! Error types for paint primitives.

/// Result type alias for paint operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors that can occur when constructing colors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The hex string has the wrong length or non-hex digits.
    #[error("invalid hex color '{input}'")]
    InvalidHex { input: String },

    /// A channel value fell outside its permitted range.
    #[error("color channel '{channel}' out of range: {value}")]
    OutOfRange { channel: char, value: f32 },
}

impl ColorError {
    /// Create a hex error.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
