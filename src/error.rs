//! Error types for the HireHub library.
//!
//! All fallible operations return [`Result`], whose error is the
//! [`HireHubError`] enum. Only index construction and catalog loading can
//! fail in practice; ranking never returns an error.
//!
//! # Examples
//!
//! ```
//! use hirehub::error::{HireHubError, Result};
//!
//! fn build_something(rows: usize) -> Result<()> {
//!     if rows == 0 {
//!         return Err(HireHubError::configuration("catalog is empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(build_something(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for HireHub operations.
#[derive(Error, Debug)]
pub enum HireHubError {
    /// I/O errors (catalog files, resume files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The index cannot be built from the given catalog or configuration.
    /// Fatal: a process must not start serving with a broken index.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog file structure errors (unreadable header, unknown format)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Analysis-related errors (tokenizer patterns, filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// No text could be obtained from a resume document
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for operations that may fail with HireHubError.
pub type Result<T> = std::result::Result<T, HireHubError>;

impl HireHubError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        HireHubError::Configuration(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        HireHubError::Catalog(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HireHubError::Analysis(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        HireHubError::Extraction(msg.into())
    }

    /// Whether this error came from an unusable catalog or configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, HireHubError::Configuration(_))
    }
}
