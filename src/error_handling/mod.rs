//! Error handling.
//!
//! Library operations return the typed errors defined here. The batch runner and
//! the binary wrap them in `anyhow` with context.
//!
//! Error types are categorized into:
//! - **Initialization**: logger setup failures
//! - **Feature**: input that is not usable text
//! - **Classifier**: model loading and scoring failures

mod types;

// Re-export public API
pub use types::{ClassifierError, FeatureError, InitializationError};
