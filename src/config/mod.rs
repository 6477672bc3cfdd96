//! Application configuration and constants.
//!
//! This module provides:
//! - Feature-contract constants (vector width, special characters, thresholds)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
