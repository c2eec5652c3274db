//! The in-memory message store: domains of key → message tables, filled from language
//! map files and queried by the substitution engine.

use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use serde::Serialize;

use crate::{
    diagnostics::LoadReport,
    error::Error,
    formats::LangmapFormat,
    load_options::LoadOptions,
    traits::Parser,
    types::{DomainTable, Fallback},
};

/// Domains of messages loaded from one or more language maps.
///
/// # Example
///
/// ```rust
/// use langmap::{LoadOptions, MessageStore};
///
/// let mut store = MessageStore::new();
/// let report = store.load_str("'''\nHELLO\n'''\nHi\n'''\n", "inline", "main", &LoadOptions::new())?;
/// assert_eq!(report.loaded, 1);
/// assert_eq!(store.get("main", "HELLO", "")?, "Hi");
/// # Ok::<(), langmap::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageStore {
    domains: BTreeMap<String, DomainTable>,
}

impl MessageStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the language map at `path` into `domain`.
    ///
    /// Only file access can fail (missing, unreadable or undecodable file), or a
    /// duplicate key when `options.strict` is set. Malformed lines and unclosed records
    /// end up in the returned report.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        domain: &str,
        options: &LoadOptions,
    ) -> Result<LoadReport, Error> {
        let path = path.as_ref();
        let format = LangmapFormat::read_from(path)?;
        self.load_format(format, &path.display().to_string(), domain, options)
    }

    /// Loads language map text into `domain`. `source` names the text in diagnostics.
    pub fn load_str(
        &mut self,
        text: &str,
        source: &str,
        domain: &str,
        options: &LoadOptions,
    ) -> Result<LoadReport, Error> {
        let format = LangmapFormat::parse_text(text);
        self.load_format(format, source, domain, options)
    }

    /// Commits already parsed records into `domain`, in file order.
    ///
    /// The domain is registered even if there are no records. In strict mode a duplicate
    /// fails the load before anything, the domain included, is committed.
    pub fn load_format(
        &mut self,
        format: LangmapFormat,
        source: &str,
        domain: &str,
        options: &LoadOptions,
    ) -> Result<LoadReport, Error> {
        if options.strict {
            let mut seen: HashSet<&str> = self
                .domains
                .get(domain)
                .map(|table| table.keys().collect())
                .unwrap_or_default();
            for record in &format.records {
                if !seen.insert(record.key.as_str()) {
                    return Err(Error::DuplicateKey {
                        key: record.key.clone(),
                        line: record.line,
                    });
                }
            }
        }

        let table = self.domains.entry(domain.to_string()).or_default();
        let loaded = format.records.len();
        for record in format.records {
            table.insert(record.key, record.message);
        }

        Ok(LoadReport {
            source: source.to_string(),
            domain: domain.to_string(),
            loaded,
            diagnostics: format.diagnostics,
        })
    }

    /// Inserts a single message, overwriting any previous one for `key`.
    pub fn insert(&mut self, domain: &str, key: impl Into<String>, message: impl Into<String>) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Keys of `domain` in insertion order; empty for an unknown domain.
    pub fn list_keys(&self, domain: &str) -> Vec<&str> {
        self.domains
            .get(domain)
            .map(|table| table.keys().collect())
            .unwrap_or_default()
    }

    /// Looks up a message with the legacy default-value contract.
    ///
    /// An empty `default_value` means "no default": a missing key is then an error.
    /// Any other `default_value` is returned as-is for a missing key. Use
    /// [`MessageStore::lookup`] when an empty fallback is meaningful.
    pub fn get<'a>(
        &'a self,
        domain: &str,
        key: &str,
        default_value: &'a str,
    ) -> Result<&'a str, Error> {
        if default_value.is_empty() {
            self.lookup(domain, key, &Fallback::None)
        } else {
            let table = self.require_domain(domain)?;
            Ok(table.get(key).unwrap_or(default_value))
        }
    }

    /// Looks up a message, falling back as `fallback` says when the key is missing.
    pub fn lookup<'a>(
        &'a self,
        domain: &str,
        key: &str,
        fallback: &'a Fallback,
    ) -> Result<&'a str, Error> {
        let table = self.require_domain(domain)?;
        match (table.get(key), fallback) {
            (Some(message), _) => Ok(message),
            (None, Fallback::Value(value)) => Ok(value.as_str()),
            (None, Fallback::None) => Err(Error::key_not_found(domain, key)),
        }
    }

    /// Returns the table of `domain`, if loaded.
    pub fn domain(&self, domain: &str) -> Option<&DomainTable> {
        self.domains.get(domain)
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// Names of all domains, sorted.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Serializes the store as pretty JSON: domain → ordered entries.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Parse)
    }

    fn require_domain(&self, domain: &str) -> Result<&DomainTable, Error> {
        self.domains
            .get(domain)
            .ok_or_else(|| Error::DomainNotFound(domain.to_string()))
    }
}
