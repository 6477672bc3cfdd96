//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for extracted feature rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One header row plus one flat row per URL
    Csv,
    /// One JSON object per line, features kept in contract order
    Jsonl,
}

/// Command-line options for the `url_features` binary.
#[derive(Debug, Parser)]
#[command(
    name = "url_features",
    about = "Extract phishing-classifier features from a list of URLs"
)]
pub struct Opt {
    /// File to read URLs from, one per line (`-` reads stdin)
    pub file: PathBuf,

    /// Write rows to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Logistic model (JSON) used to score each URL
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through argument parsing.
///
/// # Examples
///
/// ```no_run
/// use url_features::{Config, OutputFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     format: OutputFormat::Jsonl,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URLs from (`-` for stdin)
    pub file: PathBuf,

    /// Output path (stdout if `None`)
    pub output: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Optional logistic model path
    pub model: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            output: None,
            format: OutputFormat::Csv,
            model: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            output: opt.output,
            format: opt.format,
            model: opt.model,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
