//! Application initialization.
//!
//! Sets up process-wide resources for the binary. The extraction core itself
//! needs no initialization.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
