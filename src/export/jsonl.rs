//! JSONL export functionality.
//!
//! Each line is a complete JSON object for one URL:
//!
//! ```json
//! {"url":"http://localhost/","features":{"url_length":17,...},"verdict":{"probability":"12.000%","classification":"not phishing"}}
//! ```
//!
//! Feature keys keep their column order. `verdict` is omitted when no model
//! is configured.

use std::io::Write;

use anyhow::{Context, Result};

use super::types::{FeatureRecord, RecordSink};

/// Writes feature records as JSON Lines.
pub struct JsonlSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonlSink<W> {
    /// Creates the sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RecordSink for JsonlSink<W> {
    fn write_record(&mut self, record: &FeatureRecord<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)
            .with_context(|| format!("Failed to serialize record for {}", record.url))?;
        self.writer
            .write_all(b"\n")
            .context("Failed to write JSONL line")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush JSONL output")?;
        Ok(())
    }
}
