//! # Noisy
//!
//! Generate noise images from the command line.
//!
//! ## Usage
//!
//! ```bash
//! noisy --mode simplex --width 1024 --height 1024 --scale 8 -o clouds
//! noisy --mode white --chance 0.1 --color1 "#000000" --color2 "#FFFFFF"
//! noisy --config settings.toml --seed 42
//! ```

use std::process::ExitCode;

use clap::Parser;
use noisy::{resolve_settings, run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = resolve_settings(&args).and_then(|settings| run(&settings));
    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
