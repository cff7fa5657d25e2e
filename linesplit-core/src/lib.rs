//! Line-count file splitting
//!
//! This crate splits a text file into sequentially numbered parts
//! (`{prefix}_part001.txt`, `{prefix}_part002.txt`, ...) holding at most a
//! fixed number of lines each. The source encoding is resolved once from
//! an ordered list of candidates, and every part is written as UTF-8.
//!
//! ```no_run
//! use linesplit_core::{NoopObserver, SplitConfig, Splitter};
//! use std::num::NonZeroUsize;
//! use std::path::Path;
//!
//! let config = SplitConfig::builder(NonZeroUsize::new(5000).unwrap())
//!     .prefix("chunk")
//!     .build()?;
//! let report = Splitter::new(config).split(Path::new("large_file.txt"), &mut NoopObserver)?;
//! println!("{} parts", report.file_count());
//! # Ok::<(), linesplit_core::SplitError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod naming;
pub mod observer;
pub mod reader;
pub mod report;
pub mod splitter;

use std::num::NonZeroUsize;
use std::path::Path;

// Re-export key types
pub use encoding_rs;
pub use config::{SplitConfig, SplitConfigBuilder, SplitStrategy};
pub use encoding::{default_candidates, encoding_for_label, resolve_encoding};
pub use error::{Result, SplitError};
pub use observer::{NoopObserver, SplitObserver};
pub use report::{PartSummary, Progress, SplitPlan, SplitReport};
pub use splitter::Splitter;

/// Split `input` into parts of `lines_per_file` lines with default settings
///
/// `prefix` defaults to the input file stem.
pub fn split(
    input: &Path,
    lines_per_file: NonZeroUsize,
    prefix: Option<&str>,
) -> Result<SplitReport> {
    let mut builder = SplitConfig::builder(lines_per_file);
    if let Some(prefix) = prefix {
        builder = builder.prefix(prefix);
    }
    Splitter::new(builder.build()?).split(input, &mut NoopObserver)
}
