// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 24-bit RGB color with hex parsing and channel interpolation.

use core::fmt;

/// Failure to interpret a string as a hex color.
///
/// Accepted shapes are `#rgb` and `#rrggbb` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable hex color: {input:?}")]
pub struct ColorParseError {
    /// The rejected input text.
    pub input: String,
}

/// A 24-bit RGB color.
///
/// Colors are plain values; alpha and color-space handling belong to the
/// rendering host, not this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb`, case-insensitive.
    ///
    /// The short form expands each digit (`#fa0` → `#ffaa00`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the input has the wrong shape or a
    /// non-hex digit.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: input.to_owned(),
        };
        let digits = input.strip_prefix('#').ok_or_else(err)?;
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
        let chars: Vec<u8> = digits.chars().map(nibble).collect::<Option<_>>().ok_or_else(err)?;
        match chars.as_slice() {
            &[r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            _ => Err(err()),
        }
    }

    /// Formats the color as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation from `self` to `other`.
    ///
    /// `t` is clamped into `[0, 1]`; `0` yields `self` and `1` yields
    /// `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let mixed = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            mixed.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl core::str::FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
