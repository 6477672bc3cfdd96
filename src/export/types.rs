//! Export types.

use anyhow::Result;
use serde::Serialize;

use crate::classifier::Verdict;
use crate::features::FeatureVector;

/// One output row: the URL, its features and, if a model is configured, its verdict.
#[derive(Debug, Serialize)]
pub struct FeatureRecord<'a> {
    /// URL as read from the input
    pub url: &'a str,
    /// Extracted features
    pub features: &'a FeatureVector,
    /// Model verdict, omitted when no model is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<&'a Verdict>,
}

/// Destination for feature records.
pub trait RecordSink {
    /// Writes a single record.
    fn write_record(&mut self, record: &FeatureRecord<'_>) -> Result<()>;

    /// Flushes buffered output.
    fn finish(&mut self) -> Result<()>;
}
