//! Error types for solr-suggest.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is the [`SuggestError`] enum. Failures talking to the remote index are all
//! folded into [`SuggestError::Search`] so callers only have one variant to
//! match when a suggestion or indexing request goes wrong.
//!
//! # Examples
//!
//! ```
//! use solr_suggest::error::{Result, SuggestError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SuggestError::search("connection refused"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for solr-suggest operations.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// I/O errors (dictionary files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Remote search failures (network, server status, malformed responses)
    #[error("Search error: {0}")]
    Search(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, n-gram sizes)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SuggestError.
pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Create a new search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        SuggestError::Search(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SuggestError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SuggestError::Analysis(msg.into())
    }

    /// Whether this error came from the remote index.
    pub fn is_search(&self) -> bool {
        matches!(self, SuggestError::Search(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SuggestError::search("Test search error");
        assert_eq!(error.to_string(), "Search error: Test search error");
        assert!(error.is_search());

        let error = SuggestError::config("batch size must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: batch size must be positive"
        );

        let error = SuggestError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
        assert!(!error.is_search());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let suggest_error = SuggestError::from(io_error);

        match suggest_error {
            SuggestError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
