//! Feature values and the fixed-width feature vector.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::names::{FeatureName, FEATURE_ORDER};
use crate::config::FEATURE_COUNT;

/// A single feature value.
///
/// Serializes untagged: `12`, `true`, `3.1`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Count or length
    Int(usize),
    /// Presence flag
    Bool(bool),
    /// Mean or entropy
    Float(f64),
}

impl FeatureValue {
    /// Numeric form used in the classifier row (`true` → 1.0, `false` → 0.0).
    pub fn as_f64(&self) -> f64 {
        match *self {
            FeatureValue::Int(n) => n as f64,
            FeatureValue::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            FeatureValue::Float(x) => x,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(n) => write!(f, "{n}"),
            FeatureValue::Bool(b) => write!(f, "{b}"),
            FeatureValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<usize> for FeatureValue {
    fn from(n: usize) -> Self {
        FeatureValue::Int(n)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Bool(b)
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        FeatureValue::Float(x)
    }
}

/// Ordered, fixed-width mapping from feature name to value.
///
/// Always holds exactly one value per [`FeatureName`], stored in
/// [`FEATURE_ORDER`]. Serializes as a JSON object whose keys appear in that
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn new(values: [FeatureValue; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Value of a single feature.
    pub fn get(&self, name: FeatureName) -> FeatureValue {
        self.values[name.index()]
    }

    /// Number of entries (always [`FEATURE_COUNT`]).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in column order.
    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.values
    }

    /// `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, FeatureValue)> + '_ {
        FEATURE_ORDER.iter().copied().zip(self.values.iter().copied())
    }

    /// Single numeric row, as fed to the classifier.
    pub fn to_numeric_row(&self) -> [f64; FEATURE_COUNT] {
        self.values.map(|v| v.as_f64())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name.as_str(), &value)?;
        }
        map.end()
    }
}
