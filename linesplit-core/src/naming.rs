//! Output file naming

use std::path::Path;

/// Default zero-padding width of the part number
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Prefix used when the input has no usable file stem
const FALLBACK_PREFIX: &str = "output";

/// Derive the default prefix from an input path (directory and extension stripped)
pub fn default_prefix(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_PREFIX.to_string())
}

/// Name of the `index`-th part (1-based): `{prefix}_part{index:0width}.txt`
///
/// Indices wider than `width` are written in full.
pub fn part_file_name(prefix: &str, index: usize, width: usize) -> String {
    format!("{prefix}_part{index:0width$}.txt")
}
