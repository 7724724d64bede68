//! # PNG Output
//!
//! Encodes a [`NoiseImage`] buffer as an RGBA PNG. Failures are returned,
//! never panicked on.

use std::path::{Path, PathBuf};

use image::{ExtendedColorType, ImageFormat};
use noisy_core::NoiseImage;

use crate::error::{AppError, AppResult};

/// Writes `image` to `<stem>.png` and returns the path written.
///
/// # Errors
///
/// Returns [`AppError::Encode`] if the file cannot be created or the
/// encoder rejects the image (a zero-sized image, for example).
pub fn save_png(image: &NoiseImage, stem: &str) -> AppResult<PathBuf> {
    let path = PathBuf::from(format!("{stem}.png"));
    write_png(image, &path)?;
    Ok(path)
}

/// Writes `image` as PNG to exactly `path`.
///
/// # Errors
///
/// Returns [`AppError::Encode`] on any encoder or I/O failure.
pub fn write_png(image: &NoiseImage, path: &Path) -> AppResult<()> {
    image::save_buffer_with_format(
        path,
        image.pixels(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|source| AppError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote png"
    );
    Ok(())
}
