//! Non-fatal findings produced while loading a language map, and the reports that
//! carry them back to the caller.
//!
//! Nothing in this crate prints. Callers decide where diagnostics go; the CLI sends
//! them to stderr so they never mix with transformed output.

use serde::Serialize;

/// What went wrong on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A line outside any record that is neither blank, a comment nor a delimiter.
    SyntaxError,
    /// End of input was reached while a record was still open.
    UnclosedRecord,
}

/// A single non-fatal finding, tied to a 1-based line number.
///
/// For [`DiagnosticKind::UnclosedRecord`] the line is the delimiter that opened the
/// abandoned record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn syntax_error(line: usize) -> Self {
        Diagnostic {
            line,
            kind: DiagnosticKind::SyntaxError,
        }
    }

    pub fn unclosed_record(line: usize) -> Self {
        Diagnostic {
            line,
            kind: DiagnosticKind::UnclosedRecord,
        }
    }

    /// Renders the diagnostic for the file it was found in.
    pub fn message(&self, source: &str) -> String {
        match self.kind {
            DiagnosticKind::SyntaxError => format!("{}:{}: syntax error", source, self.line),
            DiagnosticKind::UnclosedRecord => format!(
                "{}:{}: record opened here was never closed",
                source, self.line
            ),
        }
    }
}

/// Outcome of loading one language map into a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Where the text came from, usually the file path.
    pub source: String,
    /// Domain the records were stored under.
    pub domain: String,
    /// Number of committed records, overwritten duplicates included.
    pub loaded: usize,
    /// Findings in file order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// `<source>: loaded <N> messages.`
    pub fn summary(&self) -> String {
        format!("{}: loaded {} messages.", self.source, self.loaded)
    }

    /// Every diagnostic rendered against the source, followed by the summary line.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.message(&self.source))
            .chain(std::iter::once(self.summary()))
            .collect()
    }
}
