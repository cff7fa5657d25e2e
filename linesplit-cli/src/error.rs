//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file given, neither positionally nor with `--input`
    MissingInput,
    /// No line count given, neither positionally nor with `--lines`
    MissingLineCount,
    /// Line count is zero or negative
    InvalidLineCount(i64),
    /// Configuration file could not be used
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput => {
                write!(f, "No input file specified (use <INPUT> or --input)")
            }
            CliError::MissingLineCount => {
                write!(f, "No line count specified (use <LINES> or --lines)")
            }
            CliError::InvalidLineCount(n) => {
                write!(f, "Invalid line count: {n} (must be greater than 0)")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
