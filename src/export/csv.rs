//! CSV export functionality.
//!
//! One header row, then one flat row per URL. Booleans are written as
//! `true`/`false`.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use super::types::{FeatureRecord, RecordSink};
use crate::features::FEATURE_ORDER;

/// Column names: `url`, the feature columns, and optionally the verdict columns.
pub fn csv_header(include_verdict: bool) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(FEATURE_ORDER.len() + 3);
    header.push("url");
    header.extend(FEATURE_ORDER.iter().map(|name| name.as_str()));
    if include_verdict {
        header.push("probability");
        header.push("classification");
    }
    header
}

/// Writes feature records as CSV.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    include_verdict: bool,
}

impl<W: Write> CsvSink<W> {
    /// Creates the sink and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(inner: W, include_verdict: bool) -> Result<Self> {
        let mut writer = Writer::from_writer(inner);
        writer
            .write_record(csv_header(include_verdict))
            .context("Failed to write CSV header")?;
        Ok(Self {
            writer,
            include_verdict,
        })
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &FeatureRecord<'_>) -> Result<()> {
        let mut row: Vec<String> = Vec::with_capacity(record.features.len() + 3);
        row.push(record.url.to_string());
        row.extend(record.features.values().iter().map(|v| v.to_string()));
        if self.include_verdict {
            match record.verdict {
                Some(verdict) => {
                    row.push(verdict.formatted_probability());
                    row.push(verdict.classification.to_string());
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        self.writer
            .write_record(&row)
            .with_context(|| format!("Failed to write CSV row for {}", record.url))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}
