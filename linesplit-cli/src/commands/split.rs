//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::ReportFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use linesplit_core::{SplitConfig, SplitStrategy, Splitter};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

// Input and line count may be given positionally or with flags; the flag
// wins when both are given. (No doc comment: it would become the about text.)
#[derive(Debug, Default, Args)]
pub struct SplitArgs {
    /// Input file
    #[arg(value_name = "INPUT")]
    pub input_file: Option<PathBuf>,

    /// Lines per output file
    #[arg(value_name = "LINES")]
    pub line_count: Option<i64>,

    /// Input file (overrides INPUT)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Lines per output file (overrides LINES)
    #[arg(short, long, value_name = "N")]
    pub lines: Option<i64>,

    /// Output file prefix (default: input file name without extension)
    #[arg(short, long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Directory to write the parts to
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Candidate source encoding, tried in the order given (repeatable)
    #[arg(short, long = "encoding", value_name = "LABEL")]
    pub encodings: Vec<String>,

    /// Read the whole input into memory and split in a single pass
    #[arg(long)]
    pub buffered: bool,

    /// Skip re-reading the parts after writing them
    #[arg(long)]
    pub no_verify: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LINESPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        // Arguments are checked before the input is touched
        let lines_per_file = self.lines_per_file()?;
        let input = self.input_path()?;

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = self.format.unwrap_or(cli_config.output.format);
        let split_config = self.split_config(lines_per_file, &cli_config)?;

        let mut formatter = format.stdout_formatter();
        let show_progress = format == ReportFormat::Text && !self.quiet;
        if show_progress {
            formatter.write_header(&input.display().to_string(), lines_per_file.get())?;
        }

        let mut reporter = ProgressReporter::new(!show_progress);
        let report = Splitter::new(split_config)
            .split(input, &mut reporter)
            .with_context(|| format!("Failed to split {}", input.display()))?;
        reporter.finish();

        log::info!(
            "Split {} into {} parts",
            input.display(),
            report.file_count()
        );

        if format == ReportFormat::Json || show_progress {
            formatter.write_report(&report)?;
        }

        Ok(())
    }

    /// Input path; `--input` wins over the positional form
    pub fn input_path(&self) -> Result<&Path, CliError> {
        self.input
            .as_deref()
            .or(self.input_file.as_deref())
            .ok_or(CliError::MissingInput)
    }

    /// Lines per file; `--lines` wins over the positional form
    pub fn lines_per_file(&self) -> Result<NonZeroUsize, CliError> {
        let count = self
            .lines
            .or(self.line_count)
            .ok_or(CliError::MissingLineCount)?;

        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(CliError::InvalidLineCount(count))
    }

    /// Merge flags over the configuration file into a splitter configuration
    pub fn split_config(
        &self,
        lines_per_file: NonZeroUsize,
        cli_config: &CliConfig,
    ) -> Result<SplitConfig> {
        let settings = &cli_config.split;

        let strategy = if self.buffered {
            SplitStrategy::Buffered
        } else {
            settings.strategy
        };

        let mut builder = SplitConfig::builder(lines_per_file)
            .pad_width(settings.pad_width)
            .strategy(strategy)
            .verify(settings.verify && !self.no_verify);

        if let Some(prefix) = &self.prefix {
            builder = builder.prefix(prefix.clone());
        }

        if let Some(dir) = self.output_dir.as_ref().or(settings.output_dir.as_ref()) {
            builder = builder.output_dir(dir.clone());
        }

        if !self.encodings.is_empty() {
            builder = builder.encodings(self.encodings.iter().cloned());
        } else if let Some(labels) = &settings.encodings {
            builder = builder.encodings(labels.iter().cloned());
        }

        builder.build().context("Invalid split configuration")
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when embedded
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
