//! CLI command implementations

use clap::Parser;

pub mod split;

pub use split::SplitArgs;

const EXAMPLES: &str = "\
Examples:
  linesplit input.txt 5000             Split input.txt into parts of 5000 lines
  linesplit input.txt 1000 -p split    Split and name the parts split_partNNN.txt
  linesplit -i input.txt -l 2000       Flag form of the same arguments

  A 10000-line large_file.txt split with `linesplit large_file.txt 5000` gives
    large_file_part001.txt (5000 lines)
    large_file_part002.txt (5000 lines)";

/// Split a text file into parts of a fixed number of lines
#[derive(Debug, Parser)]
#[command(
    name = "linesplit",
    version,
    about = "Split a text file into parts of a fixed number of lines",
    after_help = EXAMPLES,
    allow_negative_numbers = true
)]
pub struct Cli {
    #[command(flatten)]
    pub split: SplitArgs,
}

impl Cli {
    /// Run the command line
    pub fn execute(&self) -> anyhow::Result<()> {
        self.split.execute()
    }
}
