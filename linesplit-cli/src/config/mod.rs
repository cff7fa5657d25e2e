//! Configuration module

use crate::error::CliError;
use crate::output::ReportFormat;
use anyhow::{Context, Result};
use linesplit_core::naming::DEFAULT_PAD_WIDTH;
use linesplit_core::SplitStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Splitting configuration
    #[serde(default)]
    pub split: SplitSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSettings,
}

/// Splitting-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSettings {
    /// Candidate source encodings, tried in order (default: utf-8, gbk, latin1)
    pub encodings: Option<Vec<String>>,

    /// Directory parts are written to
    pub output_dir: Option<PathBuf>,

    /// Zero-padding width of the part number
    pub pad_width: usize,

    /// Traversal strategy
    pub strategy: SplitStrategy,

    /// Re-read parts after writing
    pub verify: bool,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            encodings: None,
            output_dir: None,
            pad_width: DEFAULT_PAD_WIDTH,
            strategy: SplitStrategy::Streaming,
            verify: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Default report format
    pub format: ReportFormat,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&text).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message()))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
