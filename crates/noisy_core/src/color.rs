//! # Colors
//!
//! 8-bit RGBA colors and `#RRGGBB` parsing.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::error::{NoiseError, NoiseResult};

/// An RGBA color with one byte per channel.
///
/// The layout is exactly four bytes in R, G, B, A order, so an RGBA pixel
/// row can be reinterpreted as `&mut [Color]` with [`bytemuck`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from `[r, g, b, a]`.
    #[inline]
    #[must_use]
    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self::rgba(channels[0], channels[1], channels[2], channels[3])
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses a `#RRGGBB` string. Hex digits are case-insensitive and
    /// alpha is always 255.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidColor`] carrying the input when it is not
    /// exactly seven characters, lacks the leading `#`, or contains a
    /// non-hex digit.
    pub fn parse_hex(input: &str) -> NoiseResult<Self> {
        let invalid = || NoiseError::InvalidColor(input.to_string());

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if input.len() != 7 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel =
            |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear blend toward `other` by `factor` in [0, 1].
    ///
    /// Each channel is narrowed by truncation, so the fractional part is
    /// discarded rather than rounded. Channels equal in both colors come
    /// out unchanged for any factor.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, factor: f64) -> Self {
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            (from + (f64::from(to) - from) * factor) as u8
        };
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl FromStr for Color {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
