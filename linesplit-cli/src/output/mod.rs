//! Report formatting module

use anyhow::Result;
use linesplit_core::SplitReport;
use serde::{Deserialize, Serialize};
use std::io;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Write the run header before splitting starts
    fn write_header(&mut self, _input: &str, _lines_per_file: usize) -> Result<()> {
        Ok(())
    }

    /// Write the final report of a completed split
    fn write_report(&mut self, report: &SplitReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable progress and summary
    #[default]
    Text,
    /// A single JSON document describing the produced parts
    Json,
}

impl ReportFormat {
    /// Create the formatter for this format writing to stdout
    pub fn stdout_formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            ReportFormat::Text => Box::new(TextFormatter::stdout()),
            ReportFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        }
    }
}
