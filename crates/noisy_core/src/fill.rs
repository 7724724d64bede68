//! # Pixel Fill Strategies
//!
//! Each strategy turns `width x height` into a flat RGBA buffer of
//! `width * height * 4` bytes, row-major, byte `(y * width + x) * 4 + c`
//! holding channel `c` of pixel `(x, y)`.
//!
//! ## Parallelism
//!
//! Rows are independent, so every strategy fills them in parallel with
//! rayon. Each row owns a disjoint slice of the buffer and its own random
//! stream from [`NoiseContext::row_rng`]; the permutation table is shared
//! read-only. The buffer is returned only after every row has finished.

use rand::Rng;
use rayon::prelude::*;

use crate::color::Color;
use crate::config::NoiseParams;
use crate::context::NoiseContext;
use crate::noise::{fractal, OctaveSettings};

/// Runs the strategy selected by `params`.
#[must_use]
pub fn fill(ctx: &NoiseContext, width: u32, height: u32, params: &NoiseParams) -> Vec<u8> {
    match *params {
        NoiseParams::Color => fill_color_noise(ctx, width, height),
        NoiseParams::White {
            color1,
            color2,
            chance,
        } => fill_white_noise(ctx, width, height, color1, color2, chance),
        NoiseParams::Simplex {
            background,
            foreground,
            scale,
        } => fill_simplex(ctx, width, height, background, foreground, scale),
    }
}

/// Four independent uniform bytes per pixel, alpha included.
#[must_use]
pub fn fill_color_noise(ctx: &NoiseContext, width: u32, height: u32) -> Vec<u8> {
    fill_rows(width, height, |row, pixels| {
        let mut rng = ctx.row_rng(row);
        for pixel in pixels {
            *pixel = Color::from_array(rng.gen());
        }
    })
}

/// One uniform draw in [0, 1) per pixel: `color2` if it exceeds `chance`,
/// `color1` otherwise.
///
/// `chance` is therefore the probability of `color1`. At `chance = 1.0`
/// every pixel is `color1`.
#[must_use]
pub fn fill_white_noise(
    ctx: &NoiseContext,
    width: u32,
    height: u32,
    color1: Color,
    color2: Color,
    chance: f64,
) -> Vec<u8> {
    fill_rows(width, height, |row, pixels| {
        let mut rng = ctx.row_rng(row);
        for pixel in pixels {
            let draw: f64 = rng.gen();
            *pixel = if draw > chance { color2 } else { color1 };
        }
    })
}

/// Octaved simplex field per pixel, blended from `background` to
/// `foreground` with truncating channel conversion.
#[must_use]
pub fn fill_simplex(
    ctx: &NoiseContext,
    width: u32,
    height: u32,
    background: Color,
    foreground: Color,
    scale: f64,
) -> Vec<u8> {
    let perm = ctx.permutation();
    let settings = OctaveSettings::IMAGE;
    fill_rows(width, height, |row, pixels| {
        #[allow(clippy::cast_possible_truncation)]
        let y = row as u32;
        for (pixel, x) in pixels.iter_mut().zip(0u32..) {
            let factor = fractal(perm, x, y, scale, &settings);
            *pixel = background.lerp(foreground, factor);
        }
    })
}

/// Allocates the buffer and hands each row, as colors, to `fill_row`.
fn fill_rows<F>(width: u32, height: u32, fill_row: F) -> Vec<u8>
where
    F: Fn(usize, &mut [Color]) + Sync,
{
    let row_len = width as usize * 4;
    let mut buffer = vec![0u8; row_len * height as usize];
    if buffer.is_empty() {
        return buffer;
    }

    buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, bytes)| fill_row(row, bytemuck::cast_slice_mut(bytes)));

    buffer
}
