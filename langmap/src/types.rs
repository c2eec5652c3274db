//! Core types for langmap: domain tables and their entries.

use std::{collections::HashMap, fmt::Display};

use serde::Serialize;

/// The well-known domain used by the substitution workflow.
pub const MAIN_DOMAIN: &str = "main";

/// A single key → message pair as stored in a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Literal text to search for. May span several lines.
    pub key: String,

    /// Replacement text. May span several lines.
    pub message: String,
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry {{ key: {:?}, message: {:?} }}", self.key, self.message)
    }
}

/// Keys of one domain mapped to their messages.
///
/// Entries keep the position at which their key was first inserted; overwriting a key
/// replaces the message in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainTable {
    entries: Vec<Entry>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DomainTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`, returning the message it replaced.
    pub fn insert(&mut self, key: String, message: String) -> Option<String> {
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(
                &mut self.entries[position].message,
                message,
            )),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, message });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].message.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DomainTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for DomainTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = DomainTable::new();
        for (key, message) in iter {
            table.insert(key, message);
        }
        table
    }
}

/// What [`crate::MessageStore::lookup`] returns for a key the domain does not have.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Fail with [`crate::Error::KeyNotFound`].
    #[default]
    None,
    /// Return this value, even when it is empty.
    Value(String),
}

impl Fallback {
    pub fn value(value: impl Into<String>) -> Self {
        Fallback::Value(value.into())
    }
}
