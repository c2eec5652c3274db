//! Support for the language map format.
//!
//! A language map is a sequence of records. Each record is framed by three delimiter
//! lines holding exactly `'''`: the first opens the key, the second switches to the
//! message, the third commits the pair.
//!
//! ```text
//! # comments are only recognised outside a record
//! '''
//! Hello
//! '''
//! Bonjour
//! '''
//! ```
//!
//! Blank lines between records are ignored. Inside a record every line, blank or not,
//! is part of the key or message; lines are joined with a single `\n`. A stray line
//! outside a record is reported as a [`Diagnostic`] and skipped, as is a record left
//! open at end of input.

use std::io::BufRead;

use indoc::indoc;

use crate::{
    diagnostics::Diagnostic,
    error::Error,
    files::normalize_newlines,
    traits::Parser,
    types::DomainTable,
};

/// The line that opens a record, separates key from message and closes the record.
pub const DELIMITER: &str = "'''";

/// Lines starting with this marker are comments when outside a record.
pub const COMMENT_MARKER: char = '#';

/// Where the parser is within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    Key,
    Content,
}

/// A parsed language map file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    /// Committed records in file order. A key may appear more than once.
    pub records: Vec<Record>,
    /// Non-fatal findings in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// One committed key/message pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub message: String,
    /// 1-based line of the delimiter that committed the record, 0 if not read from text.
    pub line: usize,
}

impl Record {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Record {
            key: key.into(),
            message: message.into(),
            line: 0,
        }
    }
}

/// Accumulates the text of one record while the parser walks the lines.
#[derive(Debug, Default)]
struct RecordBuffer {
    key: String,
    message: String,
    opened_at: usize,
}

/// Appends `line` to `buffer`, joining with `\n` only when the buffer already has text.
///
/// Blank lines at the start of a buffer therefore leave it empty.
fn push_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

impl Format {
    /// Runs the record state machine over already split lines.
    ///
    /// `lines` must not carry their terminators.
    pub fn parse_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parser = LineParser::default();
        for line in lines {
            parser.feed(line);
        }
        parser.finish()
    }

    /// Parses whole map text. `\n`, `\r\n` and lone `\r` all end a line.
    pub fn parse_text(text: &str) -> Self {
        Self::parse_lines(normalize_newlines(text).lines())
    }

    /// Keys and messages with later records overwriting earlier ones.
    pub fn to_table(&self) -> DomainTable {
        self.records
            .iter()
            .map(|record| (record.key.clone(), record.message.clone()))
            .collect()
    }

    /// Builds a format from a table, one record per entry.
    pub fn from_table(table: &DomainTable) -> Self {
        Format {
            records: table
                .iter()
                .map(|entry| Record::new(entry.key.clone(), entry.message.clone()))
                .collect(),
            diagnostics: Vec::new(),
        }
    }
}

/// Incremental form of [`Format::parse_lines`], fed one line at a time.
#[derive(Debug)]
struct LineParser {
    state: State,
    line_number: usize,
    buffer: RecordBuffer,
    format: Format,
}

impl Default for LineParser {
    fn default() -> Self {
        LineParser {
            state: State::Closed,
            line_number: 0,
            buffer: RecordBuffer::default(),
            format: Format::default(),
        }
    }
}

impl LineParser {
    fn feed(&mut self, line: &str) {
        self.line_number += 1;

        if line.is_empty() && self.state == State::Closed {
            return;
        }

        if line == DELIMITER {
            match self.state {
                State::Closed => {
                    self.buffer.opened_at = self.line_number;
                    self.state = State::Key;
                }
                State::Key => self.state = State::Content,
                State::Content => {
                    let buffer = std::mem::take(&mut self.buffer);
                    self.format.records.push(Record {
                        key: buffer.key,
                        message: buffer.message,
                        line: self.line_number,
                    });
                    self.state = State::Closed;
                }
            }
            return;
        }

        match self.state {
            State::Key => push_line(&mut self.buffer.key, line),
            State::Content => push_line(&mut self.buffer.message, line),
            State::Closed if line.starts_with(COMMENT_MARKER) => {}
            State::Closed => self
                .format
                .diagnostics
                .push(Diagnostic::syntax_error(self.line_number)),
        }
    }

    fn finish(mut self) -> Format {
        if self.state != State::Closed {
            self.format
                .diagnostics
                .push(Diagnostic::unclosed_record(self.buffer.opened_at));
        }
        self.format
    }
}

/// Checks that `text` reads back unchanged once written as record lines.
fn check_representable(what: &str, text: &str) -> Result<(), Error> {
    if text.starts_with('\n') {
        return Err(Error::DataMismatch(format!(
            "{} {:?} starts with a blank line, which the language map format drops",
            what, text
        )));
    }
    for line in text.split('\n') {
        if line == DELIMITER {
            return Err(Error::DataMismatch(format!(
                "{} {:?} contains a delimiter line",
                what, text
            )));
        }
    }
    if text.contains('\r') {
        return Err(Error::DataMismatch(format!(
            "{} {:?} contains a carriage return, which reads back as a line break",
            what, text
        )));
    }
    Ok(())
}

impl Parser for Format {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(Error::Io)?;
        Ok(Self::parse_text(&text))
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = String::from(indoc! {"
            # This file is automatically generated by langmap.
            # Each record is a key and a message framed by ''' lines.

        "});

        for record in &self.records {
            check_representable("key", &record.key)?;
            check_representable("message", &record.message)?;

            content.push_str(DELIMITER);
            content.push('\n');
            if !record.key.is_empty() {
                content.push_str(&record.key);
                content.push('\n');
            }
            content.push_str(DELIMITER);
            content.push('\n');
            if !record.message.is_empty() {
                content.push_str(&record.message);
                content.push('\n');
            }
            content.push_str(DELIMITER);
            content.push_str("\n\n");
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }
}
