//! Literal key → message substitution over a whole text.
//!
//! Keys are applied one after another, in the order the domain first saw them, each
//! against the text produced by the previous step. A message that spells a later key
//! is therefore replaced again:
//!
//! ```rust
//! use langmap::{MessageStore, substitute};
//!
//! let mut store = MessageStore::new();
//! store.insert("main", "HELLO", "Hi");
//! store.insert("main", "Hi", "Greetings");
//!
//! let result = substitute("HELLO", "main", &store)?;
//! assert_eq!(result.text, "Greetings");
//! assert_eq!(result.replaced, 2);
//! # Ok::<(), langmap::Error>(())
//! ```

use std::path::Path;

use serde::Serialize;

use crate::{
    diagnostics::LoadReport,
    error::Error,
    files::{read_text, write_text},
    load_options::LoadOptions,
    store::MessageStore,
};

/// Result of running every key of a domain over a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    /// The rewritten text.
    pub text: String,
    /// Number of keys processed, whether or not they occurred in the text.
    pub replaced: usize,
}

impl Substitution {
    /// `<output>: replaced <N> words.`
    pub fn summary(&self, output: &str) -> String {
        format!("{}: replaced {} words.", output, self.replaced)
    }
}

/// Replaces every literal occurrence of each key of `domain` with its message.
///
/// An unknown domain has no keys, so the text comes back unchanged with a count of 0.
pub fn substitute(input: &str, domain: &str, store: &MessageStore) -> Result<Substitution, Error> {
    let mut text = input.to_string();
    let mut replaced = 0;

    for key in store.list_keys(domain) {
        let message = store.get(domain, key, key)?;
        text = text.replace(key, message);
        replaced += 1;
    }

    Ok(Substitution { text, replaced })
}

/// Everything [`substitute_file`] did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub load: LoadReport,
    pub substitution: Substitution,
}

/// Loads `langmap` into `domain`, substitutes `input` and writes the result to `output`.
///
/// Line endings of both files are normalized to `\n` on read, so multi-line keys match
/// CRLF input too. The substituted text is kept in the returned report as well.
pub fn substitute_file<P, Q, R>(
    input: P,
    output: Q,
    langmap: R,
    domain: &str,
    options: &LoadOptions,
) -> Result<FileReport, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    substitute_file_with(input, output, langmap, domain, options, |_, _| Ok(()))
}

/// Like [`substitute_file`], calling `on_load` once the language map is loaded and
/// before the input is read. An error from `on_load` aborts the run.
pub fn substitute_file_with<P, Q, R, F>(
    input: P,
    output: Q,
    langmap: R,
    domain: &str,
    options: &LoadOptions,
    on_load: F,
) -> Result<FileReport, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
    F: FnOnce(&MessageStore, &LoadReport) -> Result<(), Error>,
{
    let mut store = MessageStore::new();
    let load = store.load_file(langmap, domain, options)?;
    on_load(&store, &load)?;

    let data = read_text(input)?;
    let substitution = substitute(&data, domain, &store)?;
    write_text(output, &substitution.text)?;

    Ok(FileReport { load, substitution })
}
