//! All error types for the langmap crate.
//!
//! These are returned from fallible operations (file access, lookups, strict loading,
//! serialization). Malformed lines in a language map are not errors; they are reported
//! as [`crate::diagnostics::Diagnostic`] values instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid domain '{0}'")]
    DomainNotFound(String),

    #[error("invalid key '{key}' in domain '{domain}'")]
    KeyNotFound { domain: String, key: String },

    #[error("duplicate key '{key}' committed at line {line}")]
    DuplicateKey { key: String, line: usize },

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new key-not-found error.
    pub fn key_not_found(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Error::KeyNotFound {
            domain: domain.into(),
            key: key.into(),
        }
    }
}
