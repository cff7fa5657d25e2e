//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use linesplit_core::SplitReport;
use std::io::{self, Write};

/// Plain text formatter - header before the run, file listing after it
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_header(&mut self, input: &str, lines_per_file: usize) -> Result<()> {
        writeln!(self.writer, "File: {input}")?;
        writeln!(self.writer, "Lines per file: {lines_per_file}")?;
        writeln!(self.writer, "{}", "-".repeat(40))?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_report(&mut self, report: &SplitReport) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Split complete!")?;
        writeln!(self.writer, "Generated {} files", report.file_count())?;

        writeln!(self.writer)?;
        writeln!(self.writer, "Generated files:")?;
        for part in &report.parts {
            writeln!(self.writer, "  {}: {} lines", part.path.display(), part.lines)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
