//! Logistic-regression model loaded from JSON.
//!
//! File format:
//!
//! ```json
//! {
//!   "intercept": -3.2,
//!   "weights": {
//!     "url_length": 0.015,
//!     "having_repeated_digits_in_url": 0.8
//!   }
//! }
//! ```
//!
//! Features without a weight contribute nothing. Weight names must match
//! feature column names exactly.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::PhishingClassifier;
use crate::config::FEATURE_COUNT;
use crate::error_handling::ClassifierError;
use crate::features::{FeatureName, FeatureVector};

#[derive(Debug, Deserialize)]
struct ModelFile {
    intercept: f64,
    #[serde(default)]
    weights: BTreeMap<String, f64>,
}

/// Linear model over the numeric feature row, squashed by the logistic function.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    intercept: f64,
    weights: [f64; FEATURE_COUNT],
}

impl LogisticModel {
    /// Creates a model from per-column weights in feature order.
    pub fn new(intercept: f64, weights: [f64; FEATURE_COUNT]) -> Self {
        Self { intercept, weights }
    }

    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::ModelLoad` for malformed JSON and
    /// `ClassifierError::UnknownFeature` for a weight that names no feature.
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let file: ModelFile = serde_json::from_str(json)?;
        let mut weights = [0.0; FEATURE_COUNT];
        for (name, weight) in &file.weights {
            let feature: FeatureName = name
                .parse()
                .map_err(|_| ClassifierError::UnknownFeature(name.clone()))?;
            weights[feature.index()] = *weight;
        }
        debug!(
            "Loaded logistic model with intercept {} and {} weighted features",
            file.intercept,
            file.weights.len()
        );
        Ok(Self::new(file.intercept, weights))
    }

    /// Reads and parses a model file.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::ModelLoad` if the file cannot be read, plus
    /// everything [`LogisticModel::from_json`] can return.
    pub fn from_path(path: &Path) -> Result<Self, ClassifierError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::ModelLoad(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Weight of a single feature.
    pub fn weight(&self, name: FeatureName) -> f64 {
        self.weights[name.index()]
    }

    /// Linear score before the logistic function.
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        features
            .to_numeric_row()
            .iter()
            .zip(self.weights.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w)
    }
}

impl PhishingClassifier for LogisticModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let z = self.decision_function(features);
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}
