//! # Noise Images
//!
//! The generation entry point: validated config in, fully populated RGBA
//! buffer out. No I/O happens here; encoders take the
//! `(width, height, pixels)` triple from [`NoiseImage`].

use std::time::Instant;

use crate::color::Color;
use crate::config::GenerationConfig;
use crate::context::NoiseContext;
use crate::fill::fill;

/// A generated image.
///
/// `pixels` is row-major RGBA, `width * height * 4` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl NoiseImage {
    /// Generates an image.
    ///
    /// Uses the config's seed when it has one, otherwise OS entropy, so
    /// unseeded runs differ from each other.
    #[must_use]
    pub fn generate(config: &GenerationConfig) -> Self {
        let ctx = match config.seed() {
            Some(seed) => NoiseContext::from_seed(seed),
            None => NoiseContext::from_entropy(),
        };
        Self::generate_with(&ctx, config)
    }

    /// Generates an image from an existing context.
    ///
    /// The config's own seed is ignored; the context decides all randomness.
    #[must_use]
    pub fn generate_with(ctx: &NoiseContext, config: &GenerationConfig) -> Self {
        let (width, height) = (config.width(), config.height());
        tracing::debug!(
            mode = %config.mode(),
            width,
            height,
            seed = ctx.seed().value(),
            "generating noise image"
        );

        let start = Instant::now();

        let pixels = fill(ctx, width, height, config.params());
        debug_assert_eq!(pixels.len(), config.buffer_len());

        tracing::debug!(
            bytes = pixels.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "noise image complete"
        );

        Self {
            width,
            height,
            pixels,
        }
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

    /// The RGBA bytes.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Takes ownership of the RGBA bytes.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at `(x, y)`, if in bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let bytes: [u8; 4] = self.pixels[index..index + 4].try_into().ok()?;
        Some(Color::from_array(bytes))
    }
}
