//! Plan, progress and summary types

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of parts a run will produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SplitPlan {
    /// Lines in the source
    pub total_lines: u64,
    /// Maximum lines per part
    pub lines_per_file: usize,
    /// `ceil(total_lines / lines_per_file)`
    pub num_files: u64,
}

impl SplitPlan {
    /// Plan a split of `total_lines` into chunks of `lines_per_file`
    pub fn new(total_lines: u64, lines_per_file: usize) -> Self {
        debug_assert!(lines_per_file > 0);
        Self {
            total_lines,
            lines_per_file,
            num_files: total_lines.div_ceil(lines_per_file as u64),
        }
    }
}

/// Progress after a part has been closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based index of the part just closed
    pub part_index: usize,
    /// Source lines written so far
    pub lines_written: u64,
    /// Lines in the source
    pub total_lines: u64,
    /// The part reached `lines_per_file`; `false` only for a short last part
    pub full: bool,
}

impl Progress {
    /// Percentage of the source written, capped at 100
    pub fn percent(&self) -> f64 {
        if self.total_lines == 0 {
            return 100.0;
        }
        (self.lines_written as f64 / self.total_lines as f64 * 100.0).min(100.0)
    }
}

/// One produced part and its line count
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PartSummary {
    /// 1-based part index
    pub index: usize,
    /// Path of the part
    pub path: PathBuf,
    /// Line count (re-read from disk when verification is enabled)
    pub lines: u64,
}

/// Outcome of a completed split
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SplitReport {
    /// The input file
    pub input: PathBuf,
    /// Name of the resolved source encoding
    pub encoding: String,
    /// The plan the run followed
    pub plan: SplitPlan,
    /// Produced parts in index order
    pub parts: Vec<PartSummary>,
    /// Whether part line counts were re-read from disk
    pub verified: bool,
}

impl SplitReport {
    /// Number of parts produced
    pub fn file_count(&self) -> usize {
        self.parts.len()
    }
}
