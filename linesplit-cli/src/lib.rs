//! linesplit CLI library
//!
//! This library provides the command-line interface for splitting a text
//! file into parts of a fixed number of lines.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
