//! URL feature extraction.
//!
//! Turns a URL string into the fixed, ordered feature vector consumed by the
//! phishing classifier. The families are:
//!
//! - **Whole URL**: character counts over the raw input
//! - **Host**: counts and flags over the authority without its port
//! - **Subdomains**: aggregates over the host labels before the last two
//! - **Components**: presence and length of path, query and fragment
//! - **Entropy**: Shannon entropy of the URL and of the host
//!
//! All extractors are pure and total. The column order is defined by
//! [`FEATURE_ORDER`] and must not change without retraining the classifier.

mod charset;
mod entropy;
mod extract;
mod names;
mod subdomain;
mod vector;

// Re-export public API
pub use entropy::shannon_entropy;
pub use extract::{decode_url, extract_features, try_extract_features, ExtractionContext};
pub use names::{FeatureKind, FeatureName, FEATURE_ORDER};
pub use vector::{FeatureValue, FeatureVector};
