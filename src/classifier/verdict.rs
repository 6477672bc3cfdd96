//! Probability-to-label mapping.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use strum_macros::{AsRefStr, Display};

use crate::config::PHISHING_THRESHOLD_PERCENT;
use crate::error_handling::ClassifierError;

/// Binary label derived from a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum Classification {
    /// Probability at or above the threshold
    #[strum(serialize = "phishing")]
    Phishing,
    /// Probability below the threshold
    #[strum(serialize = "not phishing")]
    NotPhishing,
}

/// Outcome of scoring one URL.
///
/// Serializes as `{"probability": "87.500%", "classification": "phishing"}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Model output in `[0, 1]`
    pub probability: f64,
    /// Label at the 70% threshold
    pub classification: Classification,
}

impl Verdict {
    /// Builds a verdict from a model probability.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::ProbabilityOutOfRange` for values outside
    /// `[0, 1]`, including NaN.
    pub fn from_probability(probability: f64) -> Result<Self, ClassifierError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ClassifierError::ProbabilityOutOfRange(probability));
        }
        let classification = if probability * 100.0 >= PHISHING_THRESHOLD_PERCENT {
            Classification::Phishing
        } else {
            Classification::NotPhishing
        };
        Ok(Self {
            probability,
            classification,
        })
    }

    /// Probability scaled to percent.
    pub fn probability_percent(&self) -> f64 {
        self.probability * 100.0
    }

    /// Percent with three decimals and a `%` suffix, e.g. `87.500%`.
    pub fn formatted_probability(&self) -> String {
        format!("{:.3}%", self.probability_percent())
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Verdict", 2)?;
        state.serialize_field("probability", &self.formatted_probability())?;
        state.serialize_field("classification", self.classification.as_ref())?;
        state.end()
    }
}
