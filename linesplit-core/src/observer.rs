//! Hooks for reporting a split as it runs

use crate::report::{PartSummary, Progress, SplitPlan};
use encoding_rs::Encoding;
use std::path::Path;

/// Receives events from a [`Splitter`](crate::Splitter) in pipeline order
///
/// Every hook has an empty default so implementors only override what
/// they display.
pub trait SplitObserver {
    /// The source encoding has been resolved
    fn encoding_resolved(&mut self, _encoding: &'static Encoding) {}

    /// The counting pass finished
    fn counted(&mut self, _total_lines: u64) {}

    /// The split has been planned
    fn planned(&mut self, _plan: &SplitPlan) {}

    /// A new part was created and is open for writing
    fn part_created(&mut self, _index: usize, _path: &Path) {}

    /// A part was closed, either full or as the short last part
    fn part_closed(&mut self, _progress: &Progress) {}

    /// A part was re-read after the split pass
    fn verified(&mut self, _part: &PartSummary) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SplitObserver for NoopObserver {}
