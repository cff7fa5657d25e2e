//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use linesplit_core::SplitReport;
use std::io::Write;

/// JSON formatter - outputs the whole report as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &SplitReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
