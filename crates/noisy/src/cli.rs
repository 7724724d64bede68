//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::Settings;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "noisy")]
#[command(about = "Generate color, white and simplex noise images", long_about = None)]
pub struct Args {
    /// TOML settings file; flags given here override it
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Image height in pixels
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Noise mode: color, white or simplex
    #[arg(long, short = 'm', value_name = "MODE")]
    pub mode: Option<String>,

    /// First color (#RRGGBB); simplex background
    #[arg(long, value_name = "HEX")]
    pub color1: Option<String>,

    /// Second color (#RRGGBB); simplex foreground
    #[arg(long, value_name = "HEX")]
    pub color2: Option<String>,

    /// White noise: probability of the first color
    #[arg(long, value_name = "PROBABILITY")]
    pub chance: Option<f64>,

    /// Simplex: feature scale, larger is smoother
    #[arg(long, value_name = "SCALE")]
    pub scale: Option<f64>,

    /// Fixed seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output path without extension; ".png" is appended
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<String>,

    /// Debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Overrides `settings` with every flag that was given.
    pub fn apply(&self, settings: &mut Settings) {
        let generation = &mut settings.generation;
        if let Some(width) = self.width {
            generation.width = width;
        }
        if let Some(height) = self.height {
            generation.height = height;
        }
        if let Some(mode) = &self.mode {
            generation.mode.clone_from(mode);
        }
        if let Some(color1) = &self.color1 {
            generation.color1.clone_from(color1);
        }
        if let Some(color2) = &self.color2 {
            generation.color2.clone_from(color2);
        }
        if let Some(chance) = self.chance {
            generation.chance = chance;
        }
        if let Some(scale) = self.scale {
            generation.scale = scale;
        }
        if self.seed.is_some() {
            generation.seed = self.seed;
        }
        if let Some(output) = &self.output {
            settings.output.clone_from(output);
        }
    }
}
