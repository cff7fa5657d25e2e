//! Encoding resolution
//!
//! The input is tried against an ordered list of candidate encodings. The
//! first candidate that decodes the whole stream without a malformed
//! sequence is used for every later pass over the file.

use crate::error::{Result, SplitError};
use crate::reader::open_input;
use encoding_rs::{DecoderResult, Encoding, GBK, UTF_8, WINDOWS_1252};
use std::io::{self, BufReader, Read};
use std::path::Path;

const INPUT_BUFFER_SIZE: usize = 64 * 1024;
const SCRATCH_BUFFER_SIZE: usize = 16 * 1024;

/// Default candidates: UTF-8, then GBK, then latin-1 (windows-1252),
/// which maps every byte and therefore always succeeds.
///
/// Both fallbacks use the WHATWG tables: `GBK` decodes like gb18030
/// (a lone `0x80` is `€`, four-byte sequences are valid) and
/// windows-1252 maps `0x80..=0x9F` to printable characters rather than
/// C1 controls.
pub fn default_candidates() -> Vec<&'static Encoding> {
    vec![UTF_8, GBK, WINDOWS_1252]
}

/// Look up an encoding by its WHATWG label (`utf-8`, `gbk`, `latin1`, ...)
///
/// Only ASCII-compatible encodings are accepted, since lines are split on
/// the `\n` and `\r` bytes before decoding.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| SplitError::InvalidArgument(format!("unknown encoding '{label}'")))?;

    if !encoding.is_ascii_compatible() {
        return Err(SplitError::InvalidArgument(format!(
            "encoding '{}' is not supported for line splitting",
            encoding.name()
        )));
    }

    Ok(encoding)
}

/// Resolve the encoding of `path` by trying `candidates` in order
pub fn resolve_encoding(
    path: &Path,
    candidates: &[&'static Encoding],
) -> Result<&'static Encoding> {
    if candidates.is_empty() {
        return Err(SplitError::InvalidArgument(
            "at least one candidate encoding is required".to_string(),
        ));
    }

    for &encoding in candidates {
        let reader = BufReader::new(open_input(path)?);
        let clean =
            decodes_cleanly(reader, encoding).map_err(|e| SplitError::io("read", path, e))?;

        if clean {
            log::info!("{} decodes as {}", path.display(), encoding.name());
            return Ok(encoding);
        }
        log::debug!("{} is not valid {}", path.display(), encoding.name());
    }

    Err(SplitError::DecodeExhausted {
        path: path.to_path_buf(),
        tried: candidates.iter().map(|e| e.name().to_string()).collect(),
    })
}

/// Returns true when the whole stream decodes without a malformed sequence
pub(crate) fn decodes_cleanly<R: Read>(
    mut reader: R,
    encoding: &'static Encoding,
) -> io::Result<bool> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut input = vec![0u8; INPUT_BUFFER_SIZE];
    let mut scratch = vec![0u8; SCRATCH_BUFFER_SIZE];

    loop {
        let read = match reader.read(&mut input) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let last = read == 0;

        let mut pending = &input[..read];
        loop {
            let (result, consumed, _) =
                decoder.decode_to_utf8_without_replacement(pending, &mut scratch, last);
            pending = &pending[consumed..];

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => return Ok(false),
            }
        }

        if last {
            return Ok(true);
        }
    }
}
