//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_features` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_features::config::Opt;
use url_features::initialization::init_logger_with;
use url_features::{run_extraction, Config};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_extraction(config) {
        Ok(report) => {
            // Summary goes to stderr so stdout can carry the rows
            eprintln!(
                "✅ Extracted features for {} URL{} ({} failed) in {:.1}s",
                report.extracted,
                if report.extracted == 1 { "" } else { "s" },
                report.failed,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("url_features error: {:#}", e);
            process::exit(1);
        }
    }
}
