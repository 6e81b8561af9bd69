//! Error types for the bayestag library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use bayestag::error::{BayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayesError::invalid_config("correction must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// The main error type for bayestag operations.
///
/// Missing data (unseen words, untrained categories, empty queries) is never
/// reported through this type; those cases have defined fallbacks.
#[derive(Error, Debug)]
pub enum BayesError {
    /// I/O errors (reading configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text that cannot be interpreted as UTF-8.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] Utf8Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid classifier configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A stored tally or category total is negative.
    #[error("Corrupt bayesian database: {0}")]
    CorruptStore(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BayesError.
pub type Result<T> = std::result::Result<T, BayesError>;

impl BayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BayesError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        BayesError::Storage(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        BayesError::InvalidConfig(msg.into())
    }

    /// Create a new corrupt store error.
    pub fn corrupt_store<S: Into<String>>(msg: S) -> Self {
        BayesError::CorruptStore(msg.into())
    }

    /// Whether this error reports a broken store invariant.
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, BayesError::CorruptStore(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BayesError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = BayesError::storage("Test storage error");
        assert_eq!(error.to_string(), "Storage error: Test storage error");

        let error = BayesError::corrupt_store("negative tally");
        assert_eq!(error.to_string(), "Corrupt bayesian database: negative tally");
        assert!(error.is_corrupt_store());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BayesError::from(io_error);

        match error {
            BayesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = vec![0xff, 0xfe];
        let utf8_error = std::str::from_utf8(&bytes).unwrap_err();
        let error = BayesError::from(utf8_error);

        assert!(matches!(error, BayesError::InvalidInput(_)));
        assert!(!error.is_corrupt_store());
    }
}
