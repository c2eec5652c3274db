//! Whole-file text helpers.

use std::{fs::File, io::Read, path::Path};

use crate::error::Error;

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads a whole file as text with line endings normalized to `\n`.
///
/// A byte-order mark selects the decoding (UTF-8 BOMs are stripped, UTF-16 files are
/// transcoded); without one the bytes must be valid UTF-8, otherwise an
/// [`std::io::ErrorKind::InvalidData`] error is returned.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;
    Ok(normalize_newlines(&decoded))
}

/// Writes `text` to `path` as UTF-8, replacing any existing file.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), Error> {
    std::fs::write(path, text.as_bytes()).map_err(Error::Io)
}
