#![forbid(unsafe_code)]
//! Build-time localization by literal substitution.
//!
//! A language map file lists key → message records; langmap loads it into a
//! [`MessageStore`] under a domain and rewrites a text by replacing every occurrence of
//! each key with its message, in file order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langmap::{LoadOptions, MAIN_DOMAIN, substitute_file};
//!
//! let report = substitute_file("about.txt.in", "about.txt", "fr_FR.langmap", MAIN_DOMAIN, &LoadOptions::new())?;
//! for line in report.load.messages() {
//!     eprintln!("{}", line);
//! }
//! eprintln!("{}", report.substitution.summary("about.txt"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Language map format
//!
//! ```text
//! # Comment lines are allowed between records.
//! '''
//! Hello
//! '''
//! Bonjour
//! '''
//! ```
//!
//! See [`formats::langmap`] for the full grammar.

pub mod diagnostics;
pub mod error;
pub mod files;
pub mod formats;
pub mod load_options;
pub mod locale;
pub mod store;
pub mod substitute;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, LoadReport},
    error::Error,
    formats::LangmapFormat,
    load_options::LoadOptions,
    locale::current_locale,
    store::MessageStore,
    substitute::{FileReport, Substitution, substitute, substitute_file, substitute_file_with},
    types::{DomainTable, Entry, Fallback, MAIN_DOMAIN},
};
