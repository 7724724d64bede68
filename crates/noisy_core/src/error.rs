//! # Noise Error Types
//!
//! All errors that can occur before a noise image is generated.
//!
//! Generation itself is total: once a [`GenerationConfig`](crate::GenerationConfig)
//! exists, every fill strategy runs to completion.

use thiserror::Error;

/// Image axis named in dimension errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Errors that can occur while building a generation configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A dimension was negative.
    #[error("{axis} cannot be under 0 (got {value})")]
    NegativeDimension {
        /// Which dimension failed.
        axis: Axis,
        /// The rejected value.
        value: i64,
    },

    /// A dimension does not fit the pixel buffer.
    #[error("image of {width}x{height} pixels is too large")]
    DimensionsTooLarge {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// Mode string did not name a known operation.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    /// Color string was not `#RRGGBB`.
    #[error("{0} is not a valid hex code")]
    InvalidColor(String),

    /// White noise bias outside [0, 1].
    #[error("chance must be within [0, 1], got {0}")]
    InvalidChance(f64),

    /// Simplex scale not a positive finite number.
    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    /// Injected permutation does not contain every value 0..=255 exactly once.
    #[error("permutation table must contain every value 0..=255 exactly once")]
    InvalidPermutation,
}

impl NoiseError {
    /// Returns true for errors raised by dimension or mode validation.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeDimension { .. }
                | Self::DimensionsTooLarge { .. }
                | Self::UnknownOperation(_)
                | Self::InvalidChance(_)
                | Self::InvalidScale(_)
        )
    }
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
