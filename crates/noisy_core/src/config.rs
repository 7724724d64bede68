//! # Generation Configuration
//!
//! Raw, unvalidated settings as they arrive from a command line or a
//! settings file, and the validated [`GenerationConfig`] the engine runs on.
//!
//! Validation order: mode, dimensions, colors, then the parameters the
//! selected mode actually uses. Nothing is allocated until all of it passes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::color::Color;
use crate::error::{Axis, NoiseError, NoiseResult};

/// Which fill strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Four independent random bytes per pixel (`"color"`).
    ColorNoise,
    /// Two-color weighted coin flip per pixel (`"white"`).
    WhiteNoise,
    /// Octaved simplex field blended between two colors (`"simplex"`).
    Simplex,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::ColorNoise, Self::WhiteNoise, Self::Simplex];

    /// Looks up a mode by its exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::UnknownOperation`] for any other string.
    pub fn from_name(name: &str) -> NoiseResult<Self> {
        match name {
            "color" => Ok(Self::ColorNoise),
            "white" => Ok(Self::WhiteNoise),
            "simplex" => Ok(Self::Simplex),
            other => Err(NoiseError::UnknownOperation(other.to_string())),
        }
    }

    /// The name this mode is selected by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorNoise => "color",
            Self::WhiteNoise => "white",
            Self::Simplex => "simplex",
        }
    }
}

impl FromStr for Mode {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoiseParams {
    /// Independent random RGBA per pixel.
    Color,
    /// `color1` with probability `chance`, otherwise `color2`.
    White {
        /// Color written when the draw does not exceed `chance`.
        color1: Color,
        /// Color written when the draw exceeds `chance`.
        color2: Color,
        /// Bias in [0, 1].
        chance: f64,
    },
    /// Simplex field blended from `background` (0) to `foreground` (1).
    Simplex {
        /// Color at field value 0.
        background: Color,
        /// Color at field value 1.
        foreground: Color,
        /// Spatial scale; larger is smoother.
        scale: f64,
    },
}

impl NoiseParams {
    /// The mode these parameters belong to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Color => Mode::ColorNoise,
            Self::White { .. } => Mode::WhiteNoise,
            Self::Simplex { .. } => Mode::Simplex,
        }
    }

    fn validate(&self) -> NoiseResult<()> {
        match *self {
            Self::Color => Ok(()),
            Self::White { chance, .. } => {
                if chance.is_finite() && (0.0..=1.0).contains(&chance) {
                    Ok(())
                } else {
                    Err(NoiseError::InvalidChance(chance))
                }
            }
            Self::Simplex { scale, .. } => {
                if scale.is_finite() && scale > 0.0 {
                    Ok(())
                } else {
                    Err(NoiseError::InvalidScale(scale))
                }
            }
        }
    }
}

/// Unvalidated settings, field-for-field what a user can type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Image width in pixels.
    pub width: i64,
    /// Image height in pixels.
    pub height: i64,
    /// `"color"`, `"white"` or `"simplex"`.
    pub mode: String,
    /// First color, `#RRGGBB`.
    pub color1: String,
    /// Second color, `#RRGGBB`.
    pub color2: String,
    /// White noise bias.
    pub chance: f64,
    /// Simplex scale.
    pub scale: f64,
    /// Fixed seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            mode: Mode::WhiteNoise.name().to_string(),
            color1: Color::BLACK.to_string(),
            color2: Color::WHITE.to_string(),
            chance: 0.5,
            scale: 10.0,
            seed: None,
        }
    }
}

/// Validated generation settings.
///
/// Immutable once built; every value in here has passed validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    width: u32,
    height: u32,
    params: NoiseParams,
    seed: Option<u64>,
}

impl GenerationConfig {
    /// Builds a config from signed dimensions and typed parameters.
    ///
    /// # Errors
    ///
    /// Fails on a negative or oversized dimension, or on out-of-range
    /// mode parameters.
    pub fn new(width: i64, height: i64, params: NoiseParams) -> NoiseResult<Self> {
        let (width, height) = validate_dimensions(width, height)?;
        params.validate()?;
        Ok(Self {
            width,
            height,
            params,
            seed: None,
        })
    }

    /// Validates raw settings.
    ///
    /// Both colors are parsed for every mode, even `"color"`, which
    /// ignores them.
    ///
    /// # Errors
    ///
    /// Returns the first failure in order: unknown mode, bad dimension,
    /// bad color, bad chance or scale.
    pub fn from_raw(raw: &RawConfig) -> NoiseResult<Self> {
        let mode = Mode::from_name(&raw.mode)?;
        let (width, height) = validate_dimensions(raw.width, raw.height)?;
        let color1 = Color::parse_hex(&raw.color1)?;
        let color2 = Color::parse_hex(&raw.color2)?;

        let params = match mode {
            Mode::ColorNoise => NoiseParams::Color,
            Mode::WhiteNoise => NoiseParams::White {
                color1,
                color2,
                chance: raw.chance,
            },
            Mode::Simplex => NoiseParams::Simplex {
                background: color1,
                foreground: color2,
                scale: raw.scale,
            },
        };
        params.validate()?;

        Ok(Self {
            width,
            height,
            params,
            seed: raw.seed,
        })
    }

    /// Fixes the seed, making generation reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Selected mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.params.mode()
    }

    /// Mode parameters.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Fixed seed, if any.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Buffer length in bytes, `width * height * 4`.
    #[inline]
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

fn validate_dimensions(width: i64, height: i64) -> NoiseResult<(u32, u32)> {
    if height < 0 {
        return Err(NoiseError::NegativeDimension {
            axis: Axis::Height,
            value: height,
        });
    }
    if width < 0 {
        return Err(NoiseError::NegativeDimension {
            axis: Axis::Width,
            value: width,
        });
    }

    let too_large = || NoiseError::DimensionsTooLarge { width, height };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    (w as usize)
        .checked_mul(h as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(too_large)?;

    Ok((w, h))
}
