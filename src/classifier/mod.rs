//! Classifier seam.
//!
//! The phishing model itself is a black box: anything that turns a
//! [`FeatureVector`] into a probability implements [`PhishingClassifier`].
//! This module turns that probability into a [`Verdict`] using the fixed
//! 70% threshold, and ships one concrete model, [`LogisticModel`], that can be
//! loaded from JSON.

mod logistic;
mod verdict;

pub use logistic::LogisticModel;
pub use verdict::{Classification, Verdict};

use crate::error_handling::ClassifierError;
use crate::features::{extract_features, FeatureVector};

/// A scoring model over feature vectors.
pub trait PhishingClassifier {
    /// Probability in `[0, 1]` that the URL behind `features` is phishing.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}

/// Scores an already extracted feature vector.
///
/// # Errors
///
/// Returns an error if the model fails or returns a value outside `[0, 1]`.
pub fn classify<C>(classifier: &C, features: &FeatureVector) -> Result<Verdict, ClassifierError>
where
    C: PhishingClassifier + ?Sized,
{
    let probability = classifier.predict_proba(features)?;
    Verdict::from_probability(probability)
}

/// Extracts features from `url` and scores them.
///
/// # Example
///
/// ```
/// use url_features::{assess, Classification, LogisticModel};
///
/// let model = LogisticModel::from_json(r#"{"intercept": 2.0, "weights": {}}"#).unwrap();
/// let verdict = assess(&model, "http://example.com").unwrap();
/// assert_eq!(verdict.classification, Classification::Phishing);
/// ```
pub fn assess<C>(classifier: &C, url: &str) -> Result<Verdict, ClassifierError>
where
    C: PhishingClassifier + ?Sized,
{
    classify(classifier, &extract_features(url))
}
