//! Traits for reading and writing language map files.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{error::Error, files::read_text};

/// A trait for parsing and writing one language map file.
///
/// # Example
///
/// ```rust,no_run
/// use langmap::traits::Parser;
/// let format = langmap::formats::langmap::Format::read_from("zh_CN.langmap")?;
/// format.write_to("zh_CN_copy.langmap")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, honouring a byte-order mark if present.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let decoded = read_text(path)?;
        Self::from_str(&decoded)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
