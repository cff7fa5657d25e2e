//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use linesplit_core::encoding_rs::Encoding;
use linesplit_core::{PartSummary, Progress, SplitObserver, SplitPlan};
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

/// Console reporter for a split run
///
/// Status lines go to stdout; the progress bar is drawn on stderr and
/// only when it is a terminal.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for the split pass
    fn init_lines(&mut self, total_lines: u64) {
        if self.quiet || total_lines == 0 {
            return;
        }

        let pb = ProgressBar::new(total_lines);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} lines {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Print a status line without tearing the progress bar
    fn say(&self, message: impl Display) {
        if self.quiet {
            return;
        }
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| println!("{message}")),
            None => println!("{message}"),
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

impl SplitObserver for ProgressReporter {
    fn encoding_resolved(&mut self, encoding: &'static Encoding) {
        log::info!("Using source encoding {}", encoding.name());
        self.say(format_args!("Encoding: {}", encoding.name()));
    }

    fn counted(&mut self, total_lines: u64) {
        self.say(format_args!("Total lines: {total_lines}"));
    }

    fn planned(&mut self, plan: &SplitPlan) {
        self.say(format_args!(
            "Splitting into {} files, {} lines each",
            plan.num_files, plan.lines_per_file
        ));
        self.init_lines(plan.total_lines);
    }

    fn part_created(&mut self, _index: usize, path: &Path) {
        self.say(format_args!("Created file: {}", path.display()));
        if let Some(pb) = &self.progress_bar {
            pb.set_message(path.display().to_string());
        }
    }

    fn part_closed(&mut self, progress: &Progress) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(progress.lines_written);
        }
        // A short last part is listed in the summary instead
        if !progress.full {
            return;
        }
        self.say(format_args!(
            "Progress: {}/{} ({:.1}%)",
            progress.lines_written,
            progress.total_lines,
            progress.percent()
        ));
    }

    fn verified(&mut self, part: &PartSummary) {
        log::debug!("{} re-read: {} lines", part.path.display(), part.lines);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
