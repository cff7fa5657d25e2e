//! Splitter error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while resolving, splitting or verifying a file
#[derive(Error, Debug)]
pub enum SplitError {
    /// Input path does not exist
    #[error("file '{}' does not exist", path.display())]
    InputNotFound {
        /// The missing input path
        path: PathBuf,
    },

    /// None of the candidate encodings could decode the input
    #[error("could not decode '{}' with any of: {}", path.display(), tried.join(", "))]
    DecodeExhausted {
        /// The input path
        path: PathBuf,
        /// Names of the encodings that were attempted, in order
        tried: Vec<String>,
    },

    /// I/O failure while reading or writing
    #[error("{context}: {source}")]
    Io {
        /// What was being done when the failure happened
        context: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SplitError {
    /// Wrap an I/O error with the action and path it relates to
    pub(crate) fn io(action: &str, path: &Path, source: std::io::Error) -> Self {
        SplitError::Io {
            context: format!("failed to {action} '{}'", path.display()),
            source,
        }
    }
}

/// Result type for splitter operations
pub type Result<T> = std::result::Result<T, SplitError>;
