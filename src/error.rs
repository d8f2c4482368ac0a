//! Error types for the miniparse library.
//!
//! Tokenization and entity extraction are total functions and never fail.
//! Errors only arise around them: loading configuration, reading CLI input,
//! and custom pipeline stages. All of these are represented by the
//! [`MiniparseError`] enum.
//!
//! # Examples
//!
//! ```
//! use miniparse::error::{MiniparseError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MiniparseError::config("tokenizer section is missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for miniparse operations.
#[derive(Error, Debug)]
pub enum MiniparseError {
    /// I/O errors (reading config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pipeline stage failed
    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors raised by custom stages through `anyhow`
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MiniparseError.
pub type Result<T> = std::result::Result<T, MiniparseError>;

impl MiniparseError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MiniparseError::Config(msg.into())
    }

    /// Create a new stage error attributed to the named stage.
    pub fn stage<N: Into<String>, S: Into<String>>(stage: N, msg: S) -> Self {
        MiniparseError::Stage {
            stage: stage.into(),
            message: msg.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MiniparseError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MiniparseError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MiniparseError::config("bad toggle");
        assert_eq!(error.to_string(), "Configuration error: bad toggle");

        let error = MiniparseError::stage("spellcheck", "dictionary missing");
        assert_eq!(
            error.to_string(),
            "Stage 'spellcheck' failed: dictionary missing"
        );

        let error = MiniparseError::invalid_argument("empty input");
        assert_eq!(error.to_string(), "Error: Invalid argument: empty input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = MiniparseError::from(io_error);

        match error {
            MiniparseError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let error = MiniparseError::from(anyhow::anyhow!("upstream timeout"));
        assert_eq!(error.to_string(), "Anyhow error: upstream timeout");
    }
}
