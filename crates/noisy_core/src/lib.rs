//! # Noisy Core
//!
//! Noise image generation: fills an RGBA buffer from procedural noise.
//!
//! ## Modes
//!
//! 1. **Color noise** (`"color"`): four independent random bytes per pixel
//! 2. **White noise** (`"white"`): each pixel is one of two colors, biased by `chance`
//! 3. **Simplex noise** (`"simplex"`): 12-octave simplex field blended between two colors
//!
//! ## Core Components
//!
//! - `NoiseContext`: permutation table and seed for one run
//! - `simplex2` / `fractal`: lattice evaluator and octave compositor
//! - `fill`: the three per-pixel strategies, parallel over rows
//! - `GenerationConfig`: validated settings
//! - `NoiseImage`: the `(width, height, pixels)` result
//!
//! ## Example
//!
//! ```rust,ignore
//! use noisy_core::{GenerationConfig, NoiseImage, RawConfig};
//!
//! let raw = RawConfig {
//!     width: 256,
//!     height: 256,
//!     mode: "simplex".into(),
//!     seed: Some(42),
//!     ..RawConfig::default()
//! };
//! let config = GenerationConfig::from_raw(&raw)?;
//! let image = NoiseImage::generate(&config);
//! assert_eq!(image.pixels().len(), 256 * 256 * 4);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod fill;
pub mod image;
pub mod noise;

pub use color::Color;
pub use config::{GenerationConfig, Mode, NoiseParams, RawConfig};
pub use context::{NoiseContext, PermutationTable, Seed};
pub use error::{Axis, NoiseError, NoiseResult};
pub use image::NoiseImage;
pub use noise::{fractal, simplex2, OctaveSettings};
