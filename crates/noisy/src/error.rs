//! # Front End Errors

use std::path::PathBuf;

use noisy_core::NoiseError;
use thiserror::Error;

/// Errors surfaced to the user by the `noisy` binary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings failed validation.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    ReadSettings {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for our keys.
    #[error("invalid settings file {path}: {source}")]
    ParseSettings {
        /// File that was parsed.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: toml::de::Error,
    },

    /// The image could not be encoded or written.
    #[error("failed to write {path}: {source}")]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Encoder or I/O failure.
        #[source]
        source: image::ImageError,
    },
}

/// Result type for the front end.
pub type AppResult<T> = Result<T, AppError>;
