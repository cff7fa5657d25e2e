//! Line-oriented reading with a resolved encoding

use crate::error::{Result, SplitError};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open an input file, mapping a missing path to [`SplitError::InputNotFound`]
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SplitError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SplitError::io("open", path, e)
        }
    })
}

/// Streams decoded lines, each one keeping its terminator
///
/// Lines are cut on the raw `\n`, `\r\n` or lone `\r` bytes and decoded
/// one at a time. This is sound for every ASCII-compatible encoding, where
/// `0x0A` and `0x0D` never appear inside a multi-byte sequence.
pub struct LineReader<R> {
    inner: R,
    encoding: &'static Encoding,
    raw: Vec<u8>,
    replaced: bool,
}

impl LineReader<BufReader<File>> {
    /// Open `path` for reading with `encoding`
    pub fn open(path: &Path, encoding: &'static Encoding) -> Result<Self> {
        Ok(Self::new(BufReader::new(open_input(path)?), encoding))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader
    pub fn new(inner: R, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            encoding,
            raw: Vec::new(),
            replaced: false,
        }
    }

    /// The encoding lines are decoded with
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Read the next line into `line`, replacing its contents.
    ///
    /// Returns `false` once the stream is exhausted.
    pub fn read_line(&mut self, line: &mut String) -> io::Result<bool> {
        line.clear();
        self.raw.clear();

        if !read_raw_line(&mut self.inner, &mut self.raw)? {
            return Ok(false);
        }

        let (decoded, had_errors) = self.encoding.decode_without_bom_handling(&self.raw);
        if had_errors && !self.replaced {
            log::warn!(
                "input is no longer valid {}, malformed bytes were replaced",
                self.encoding.name()
            );
            self.replaced = true;
        }
        line.push_str(&decoded);

        Ok(true)
    }
}

/// Append the next raw line to `buf`, terminator included
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns `false` at end of
/// stream.
fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if available[i] == b'\n' => {
                buf.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                return Ok(true);
            }
            Some(i) => {
                let crlf = available.get(i + 1) == Some(&b'\n');
                let end = if crlf { i + 2 } else { i + 1 };
                buf.extend_from_slice(&available[..end]);
                let at_boundary = end == available.len() && !crlf;
                reader.consume(end);

                // The `\n` of a `\r\n` pair may start the next buffer
                if at_boundary && next_byte_is_newline(reader)? {
                    buf.push(b'\n');
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

fn next_byte_is_newline<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    loop {
        match reader.fill_buf() {
            Ok(available) => return Ok(available.first() == Some(&b'\n')),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(true) => Some(Ok(line)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Count the lines of `path` decoded with `encoding`
///
/// A trailing run without a terminator counts as a line; an empty file
/// has zero lines.
pub fn count_lines(path: &Path, encoding: &'static Encoding) -> Result<u64> {
    let mut reader = LineReader::open(path, encoding)?;
    let mut line = String::new();
    let mut total = 0u64;

    while reader
        .read_line(&mut line)
        .map_err(|e| SplitError::io("read", path, e))?
    {
        total += 1;
    }

    Ok(total)
}
