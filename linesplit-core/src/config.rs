//! Splitter configuration

use crate::encoding::{default_candidates, encoding_for_label};
use crate::error::{Result, SplitError};
use crate::naming::DEFAULT_PAD_WIDTH;
use encoding_rs::Encoding;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// How the source is traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SplitStrategy {
    /// Count pass then split pass; one line in memory at a time
    #[default]
    Streaming,
    /// Single pass that holds every decoded line in memory
    Buffered,
}

/// Configuration for a [`Splitter`](crate::Splitter)
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Maximum number of lines per output file
    pub lines_per_file: NonZeroUsize,
    /// Output file stem (default: input file stem)
    pub prefix: Option<String>,
    /// Directory the parts are written to (default: relative to the prefix)
    pub output_dir: Option<PathBuf>,
    /// Candidate source encodings, tried in order
    pub encodings: Vec<&'static Encoding>,
    /// Zero-padding width of the part number
    pub pad_width: usize,
    /// Traversal strategy
    pub strategy: SplitStrategy,
    /// Re-read every part after writing to report its line count
    pub verify: bool,
}

impl SplitConfig {
    /// Configuration with defaults for everything but the chunk size
    pub fn new(lines_per_file: NonZeroUsize) -> Self {
        Self {
            lines_per_file,
            prefix: None,
            output_dir: None,
            encodings: default_candidates(),
            pad_width: DEFAULT_PAD_WIDTH,
            strategy: SplitStrategy::default(),
            verify: true,
        }
    }

    /// Create a builder
    pub fn builder(lines_per_file: NonZeroUsize) -> SplitConfigBuilder {
        SplitConfigBuilder {
            config: Self::new(lines_per_file),
            encoding_labels: None,
        }
    }
}

/// Configuration builder
#[derive(Debug)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
    encoding_labels: Option<Vec<String>>,
}

impl SplitConfigBuilder {
    /// Set the output prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Replace the candidate encodings with WHATWG labels, resolved at build time
    pub fn encodings<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encoding_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the part number padding width
    pub fn pad_width(mut self, width: usize) -> Self {
        self.config.pad_width = width;
        self
    }

    /// Set the traversal strategy
    pub fn strategy(mut self, strategy: SplitStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Enable or disable the verification pass
    pub fn verify(mut self, verify: bool) -> Self {
        self.config.verify = verify;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<SplitConfig> {
        if let Some(labels) = self.encoding_labels {
            if labels.is_empty() {
                return Err(SplitError::InvalidArgument(
                    "at least one candidate encoding is required".to_string(),
                ));
            }
            self.config.encodings = labels
                .iter()
                .map(|label| encoding_for_label(label))
                .collect::<Result<_>>()?;
        }

        if self.config.pad_width == 0 {
            return Err(SplitError::InvalidArgument(
                "pad width must be at least 1".to_string(),
            ));
        }

        if matches!(&self.config.prefix, Some(prefix) if prefix.is_empty()) {
            return Err(SplitError::InvalidArgument(
                "prefix must not be empty".to_string(),
            ));
        }

        Ok(self.config)
    }
}
