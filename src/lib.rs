//! url_features library: lexical and structural URL features for phishing detection
//!
//! This library turns a URL string into the fixed, ordered feature vector a
//! phishing classifier consumes: character counts over the whole URL, counts
//! and flags over the host, aggregates over subdomain labels, presence of
//! path/query/fragment, and Shannon entropy.
//!
//! # Example
//!
//! ```
//! use url_features::{extract_features, FeatureName, FeatureValue};
//!
//! let features = extract_features("http://a--1.b-c.example.com");
//! assert_eq!(features.len(), 41);
//! assert_eq!(features.get(FeatureName::NumberOfSubdomains), FeatureValue::Int(2));
//! assert_eq!(features.get(FeatureName::HavingHyphenInSubdomain), FeatureValue::Bool(true));
//! ```
//!
//! Extraction is pure and synchronous: no I/O, no global state, and every
//! text input yields a full vector.

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
mod domain;
mod error_handling;
pub mod export;
pub mod features;
pub mod initialization;
mod parse;

// Re-export public API
pub use classifier::{assess, classify, Classification, LogisticModel, PhishingClassifier, Verdict};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, FEATURE_COUNT};
pub use error_handling::{ClassifierError, FeatureError, InitializationError};
pub use features::{
    extract_features, shannon_entropy, try_extract_features, FeatureKind, FeatureName,
    FeatureValue, FeatureVector, FEATURE_ORDER,
};
pub use parse::{parse_url, ParsedUrl};
pub use run::{extract_stream, run_extraction, ExtractionReport, StreamStats};

// Internal run module (contains the batch extraction logic)
mod run {
    use std::fs::File;
    use std::io::{self, BufRead, BufReader};
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::classifier::{classify, LogisticModel, PhishingClassifier};
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::export::{create_sink, open_output, FeatureRecord, RecordSink};
    use crate::features::{decode_url, extract_features};

    /// Results of a batch extraction run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Number of non-empty, non-comment input lines
        pub total_urls: usize,
        /// Number of URLs written to the output
        pub extracted: usize,
        /// Number of lines rejected (not UTF-8, or scoring failed)
        pub failed: usize,
        /// Output file, `None` for stdout
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Per-stream counters.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct StreamStats {
        /// Non-empty, non-comment lines seen
        pub total: usize,
        /// Records written
        pub extracted: usize,
        /// Lines rejected
        pub failed: usize,
    }

    /// Extracts features for every URL in `reader` and writes them to `sink`.
    ///
    /// Lines are trimmed; empty lines and lines starting with `#` are skipped.
    /// A line that is not valid UTF-8, or whose score is rejected, is logged
    /// and counted as failed; processing continues with the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    pub fn extract_stream<R: BufRead>(
        reader: R,
        sink: &mut dyn RecordSink,
        model: Option<&dyn PhishingClassifier>,
    ) -> Result<StreamStats> {
        let mut stats = StreamStats::default();

        for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = line.context("Failed to read input line")?;
            let trimmed = line.trim_ascii();
            if trimmed.is_empty() || trimmed.starts_with(b"#") {
                continue;
            }
            stats.total += 1;

            let url = match decode_url(trimmed) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Skipping line {}: {}", line_no + 1, e);
                    stats.failed += 1;
                    continue;
                }
            };

            let features = extract_features(url);
            let verdict = match model.map(|m| classify(m, &features)).transpose() {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!("Skipping {url}: {e}");
                    stats.failed += 1;
                    continue;
                }
            };
            if let Some(v) = &verdict {
                debug!("{url} -> {} ({})", v.formatted_probability(), v.classification);
            }

            sink.write_record(&FeatureRecord {
                url,
                features: &features,
                verdict: verdict.as_ref(),
            })?;
            stats.extracted += 1;

            if stats.extracted % LOGGING_INTERVAL == 0 {
                info!("Extracted features for {} URLs", stats.extracted);
            }
        }

        sink.finish()?;
        Ok(stats)
    }

    /// Runs a batch extraction with the provided configuration.
    ///
    /// Reads URLs from the input file (or stdin for `-`), extracts their
    /// features, optionally scores them with the configured model, and writes
    /// one record per URL.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The model file cannot be loaded
    /// - The input file cannot be opened or read
    /// - The output cannot be created or written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use url_features::{run_extraction, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     file: PathBuf::from("urls.txt"),
    ///     output: Some(PathBuf::from("features.csv")),
    ///     ..Default::default()
    /// };
    /// let report = run_extraction(config)?;
    /// println!("Extracted {} of {} URLs", report.extracted, report.total_urls);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_extraction(config: Config) -> Result<ExtractionReport> {
        let start = Instant::now();

        let model = match config.model.as_deref() {
            Some(path) => {
                info!("Loading model from {}", path.display());
                Some(LogisticModel::from_path(path).context("Failed to load model")?)
            }
            None => None,
        };

        let reader: Box<dyn BufRead> = if config.file.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            Box::new(BufReader::new(io::stdin().lock()))
        } else {
            info!("Reading URLs from {}", config.file.display());
            let file = File::open(&config.file).with_context(|| {
                format!("Failed to open input file: {}", config.file.display())
            })?;
            Box::new(BufReader::new(file))
        };

        let writer = open_output(config.output.as_deref())?;
        let mut sink = create_sink(config.format, writer, model.is_some())?;

        let stats = extract_stream(
            reader,
            sink.as_mut(),
            model.as_ref().map(|m| m as &dyn PhishingClassifier),
        )?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Processed {} URLs ({} extracted, {} failed) in {:.2}s",
            stats.total, stats.extracted, stats.failed, elapsed_seconds
        );

        Ok(ExtractionReport {
            total_urls: stats.total,
            extracted: stats.extracted,
            failed: stats.failed,
            output: config.output,
            elapsed_seconds,
        })
    }
}
