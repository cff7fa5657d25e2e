//! The splitting pipeline: resolve, count, split, verify

use crate::config::{SplitConfig, SplitStrategy};
use crate::encoding::resolve_encoding;
use crate::error::{Result, SplitError};
use crate::naming::{default_prefix, part_file_name};
use crate::observer::SplitObserver;
use crate::reader::{count_lines, LineReader};
use crate::report::{PartSummary, Progress, SplitPlan, SplitReport};
use encoding_rs::UTF_8;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// An output part open for writing
struct PartWriter {
    index: usize,
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl PartWriter {
    fn create(index: usize, path: PathBuf) -> Result<Self> {
        let file = File::create(&path).map_err(|e| SplitError::io("create", &path, e))?;
        Ok(Self {
            index,
            path,
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| SplitError::io("write", &self.path, e))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and close the part
    fn finish(mut self) -> Result<PartSummary> {
        self.writer
            .flush()
            .map_err(|e| SplitError::io("write", &self.path, e))?;
        Ok(PartSummary {
            index: self.index,
            path: self.path,
            lines: self.lines as u64,
        })
    }
}

/// Splits a text file into numbered parts of at most `lines_per_file` lines
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a splitter
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Path of the `index`-th part for `prefix`
    pub fn part_path(&self, prefix: &str, index: usize) -> PathBuf {
        let name = part_file_name(prefix, index, self.config.pad_width);
        match &self.config.output_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Split `input`, reporting each stage to `observer`
    ///
    /// Parts closed before a failure are left on disk. The open part and
    /// the source are closed on every return path.
    pub fn split(&self, input: &Path, observer: &mut dyn SplitObserver) -> Result<SplitReport> {
        if !input.exists() {
            return Err(SplitError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let encoding = resolve_encoding(input, &self.config.encodings)?;
        observer.encoding_resolved(encoding);

        let prefix = self
            .config
            .prefix
            .clone()
            .unwrap_or_else(|| default_prefix(input));

        if let Some(dir) = &self.config.output_dir {
            fs::create_dir_all(dir).map_err(|e| SplitError::io("create directory", dir, e))?;
        }

        let lines_per_file = self.config.lines_per_file.get();
        let (plan, parts) = match self.config.strategy {
            SplitStrategy::Streaming => {
                log::debug!("counting lines of {}", input.display());
                let total_lines = count_lines(input, encoding)?;
                let plan = self.announce(total_lines, lines_per_file, observer);

                log::debug!("splitting {} into {} parts", input.display(), plan.num_files);
                let source = LineReader::open(input, encoding)?;
                let parts = self.write_parts(input, source, &prefix, &plan, observer)?;
                (plan, parts)
            }
            SplitStrategy::Buffered => {
                log::debug!("reading {} into memory", input.display());
                let lines = LineReader::open(input, encoding)?
                    .collect::<io::Result<Vec<_>>>()
                    .map_err(|e| SplitError::io("read", input, e))?;
                let plan = self.announce(lines.len() as u64, lines_per_file, observer);

                let parts =
                    self.write_parts(input, lines.into_iter().map(Ok), &prefix, &plan, observer)?;
                (plan, parts)
            }
        };

        let parts = if self.config.verify {
            self.verify_parts(parts, observer)?
        } else {
            parts
        };

        Ok(SplitReport {
            input: input.to_path_buf(),
            encoding: encoding.name().to_string(),
            plan,
            parts,
            verified: self.config.verify,
        })
    }

    fn announce(
        &self,
        total_lines: u64,
        lines_per_file: usize,
        observer: &mut dyn SplitObserver,
    ) -> SplitPlan {
        observer.counted(total_lines);
        let plan = SplitPlan::new(total_lines, lines_per_file);
        observer.planned(&plan);
        plan
    }

    /// Write `lines` into consecutive parts; at most one part is open at a time
    fn write_parts<I>(
        &self,
        input: &Path,
        lines: I,
        prefix: &str,
        plan: &SplitPlan,
        observer: &mut dyn SplitObserver,
    ) -> Result<Vec<PartSummary>>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let mut parts = Vec::with_capacity(plan.num_files as usize);
        let mut current: Option<PartWriter> = None;
        let mut lines_written = 0u64;

        for line in lines {
            let line = line.map_err(|e| SplitError::io("read", input, e))?;

            let mut part = match current.take() {
                Some(part) => part,
                None => {
                    let index = parts.len() + 1;
                    let part = PartWriter::create(index, self.part_path(prefix, index))?;
                    observer.part_created(index, &part.path);
                    part
                }
            };

            part.write_line(&line)?;
            lines_written += 1;

            if part.lines == plan.lines_per_file {
                parts.push(self.close_part(part, lines_written, plan, observer)?);
            } else {
                current = Some(part);
            }
        }

        if let Some(part) = current {
            parts.push(self.close_part(part, lines_written, plan, observer)?);
        }

        Ok(parts)
    }

    fn close_part(
        &self,
        part: PartWriter,
        lines_written: u64,
        plan: &SplitPlan,
        observer: &mut dyn SplitObserver,
    ) -> Result<PartSummary> {
        let summary = part.finish()?;
        observer.part_closed(&Progress {
            part_index: summary.index,
            lines_written,
            total_lines: plan.total_lines,
            full: summary.lines == plan.lines_per_file as u64,
        });
        Ok(summary)
    }

    /// Re-read every part as UTF-8 and replace the written counts with what is on disk
    fn verify_parts(
        &self,
        parts: Vec<PartSummary>,
        observer: &mut dyn SplitObserver,
    ) -> Result<Vec<PartSummary>> {
        parts
            .into_iter()
            .map(|part| -> Result<PartSummary> {
                let lines = count_lines(&part.path, UTF_8)?;
                if lines != part.lines {
                    log::warn!(
                        "{} holds {} lines, {} were written",
                        part.path.display(),
                        lines,
                        part.lines
                    );
                }
                let verified = PartSummary { lines, ..part };
                observer.verified(&verified);
                Ok(verified)
            })
            .collect()
    }
}
