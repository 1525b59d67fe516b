//! Error types for page setup.
//!
//! ERROR HANDLING
//! ==============
//! The only failure a visitor could ever notice is a broken config blob, so
//! that is the only error surfaced to the host page. A missing element is a
//! [`BindingError`] that callers log once at setup and then treat as "feature
//! not present".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure to parse the page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid portfolio config: {0}")]
    Json(#[from] serde_json::Error),
}

/// A required element could not be found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("no element with id `{0}`")]
    MissingId(String),
    #[error("no element matches `{0}`")]
    MissingSelector(String),
    #[error("document is not available")]
    NoDocument,
}
