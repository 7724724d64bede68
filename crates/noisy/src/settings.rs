//! # Settings Files
//!
//! Optional TOML file holding the same keys as the command line:
//!
//! ```toml
//! width = 800
//! height = 600
//! mode = "simplex"
//! color1 = "#0B1D3A"
//! color2 = "#F2E8CF"
//! scale = 12.5
//! seed = 42
//! output = "clouds"
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected.

use std::path::Path;

use noisy_core::RawConfig;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Every key a settings file may contain.
const KEYS: &[&str] = &[
    "width", "height", "mode", "color1", "color2", "chance", "scale", "seed", "output",
];

/// Output stem used when none is given.
pub const DEFAULT_OUTPUT: &str = "noise";

/// Everything needed for one run: generation settings plus where to write.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generation settings, validated later by `noisy_core`.
    #[serde(flatten)]
    pub generation: RawConfig,
    /// Output path without extension.
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: RawConfig::default(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed text, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(text)?;
        if let Some(key) = table.keys().find(|key| !KEYS.contains(&key.as_str())) {
            return Err(serde::de::Error::unknown_field(key, KEYS));
        }
        toml::Value::Table(table).try_into()
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| AppError::ParseSettings {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_file() {
        let settings = Settings::from_toml_str(
            r##"
            width = 800
            height = 600
            mode = "simplex"
            color1 = "#0B1D3A"
            color2 = "#F2E8CF"
            chance = 0.1
            scale = 12.5
            seed = 42
            output = "clouds"
            "##,
        )
        .expect("valid settings");

        assert_eq!(settings.output, "clouds");
        assert_eq!(
            settings.generation,
            RawConfig {
                width: 800,
                height: 600,
                mode: "simplex".to_string(),
                color1: "#0B1D3A".to_string(),
                color2: "#F2E8CF".to_string(),
                chance: 0.1,
                scale: 12.5,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            Settings::from_toml_str("mode = \"color\"\nwidth = -4\n").expect("valid settings");
        assert_eq!(settings.generation.mode, "color");
        assert_eq!(settings.generation.width, -4);
        assert_eq!(settings.generation.height, RawConfig::default().height);
        assert_eq!(settings.output, DEFAULT_OUTPUT);
        assert_eq!(settings.generation.seed, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").expect("empty is valid"), Settings::default());
    }

    #[test]
    fn test_mistyped_value_rejected() {
        assert!(Settings::from_toml_str("width = \"wide\"").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml_str("colour1 = \"#FF0000\"\n").unwrap_err();
        assert!(err.to_string().contains("colour1"), "{err}");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("definitely/not/here.toml");
        let err = Settings::load(path).unwrap_err();
        assert!(matches!(err, AppError::ReadSettings { .. }));
        assert!(err.to_string().contains("here.toml"));
    }
}
