//! RGBA color type.

use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Channels are stored in the 0.0-1.0 range. Design tools keep the RGB part
/// and the alpha apart (a solid paint has an RGB color plus an opacity), so
/// the alpha channel is never folded into the color channels here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from 0-255 channel floats and a 0-1 alpha, rejecting
    /// out-of-range input.
    pub fn try_from_channels(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if !(0.0..=255.0).contains(&value) {
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::OutOfRange { channel: 'a', value: a });
        }
        Ok(Self::new(r / 255.0, g / 255.0, b / 255.0, a))
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without the
    /// leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::parse_hex(hex).ok()
    }

    /// Like [`from_hex`](Self::from_hex) but reports why parsing failed.
    pub fn parse_hex(input: &str) -> Result<Self> {
        let hex = input.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(input));
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

        let channels = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ColorError::invalid_hex(input)),
        };

        match channels {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_rgba8(r, g, b, a)),
            _ => Err(ColorError::invalid_hex(input)),
        }
    }

    /// Return a new color with the given alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Return the same color fully opaque.
    #[inline]
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    /// Format as a lowercase hex string; the alpha byte is omitted when opaque.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));

        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}
