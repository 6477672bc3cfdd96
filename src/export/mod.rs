//! Export of extracted feature rows.
//!
//! This module writes one record per URL in either of two formats:
//! - CSV: flat view with the feature columns in contract order
//! - JSONL: one object per line, features nested and kept in contract order

mod csv;
mod jsonl;
mod output;
mod types;

pub use self::csv::{csv_header, CsvSink};
pub use jsonl::JsonlSink;
pub use output::open_output;
pub use types::{FeatureRecord, RecordSink};

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;

/// Creates the sink for `format` on top of `writer`.
///
/// When `include_verdict` is set, CSV output gets `probability` and
/// `classification` columns.
///
/// # Errors
///
/// Returns an error if the CSV header cannot be written.
pub fn create_sink(
    format: OutputFormat,
    writer: Box<dyn Write>,
    include_verdict: bool,
) -> Result<Box<dyn RecordSink>> {
    Ok(match format {
        OutputFormat::Csv => Box::new(CsvSink::new(writer, include_verdict)?),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(writer)),
    })
}
