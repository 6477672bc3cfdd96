//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for feature extraction.
///
/// Every text input produces a feature vector, however odd it is as a URL.
/// The only failure is input that is not text at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// The input is not usable text (e.g. not valid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Error types for the classifier seam.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Feature extraction failed before scoring.
    #[error("Feature extraction failed: {0}")]
    Feature(#[from] FeatureError),

    /// The model returned something that is not a probability.
    #[error("Classifier returned {0}, expected a probability in [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// The model file could not be read or decoded.
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// The model refers to a feature that is not part of the vector.
    #[error("Model weight refers to unknown feature '{0}'")]
    UnknownFeature(String),
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::ModelLoad(e.to_string())
    }
}
