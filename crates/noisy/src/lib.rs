//! # Noisy Front End
//!
//! Turns command-line flags and an optional settings file into a PNG noise
//! image. Generation lives in `noisy_core`; this crate only gathers input
//! and writes output.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod error;
pub mod output;
pub mod settings;

use std::path::PathBuf;

use noisy_core::{GenerationConfig, NoiseImage};

pub use cli::Args;
pub use error::{AppError, AppResult};
pub use settings::Settings;

/// Resolves settings from `args`: the settings file if given, then flags.
///
/// # Errors
///
/// Fails if the settings file cannot be read or parsed.
pub fn resolve_settings(args: &Args) -> AppResult<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    args.apply(&mut settings);
    Ok(settings)
}

/// Validates, generates and writes one image. Returns the written path.
///
/// # Errors
///
/// Configuration errors are returned before any pixel is generated;
/// encoding errors after.
pub fn run(settings: &Settings) -> AppResult<PathBuf> {
    let config = GenerationConfig::from_raw(&settings.generation)?;
    tracing::info!(
        mode = %config.mode(),
        width = config.width(),
        height = config.height(),
        "generating"
    );

    let image = NoiseImage::generate(&config);
    output::save_png(&image, &settings.output)
}
