//! CLI library for testing purposes

pub mod replace;

pub use replace::{ReplaceOptions, run_replace_command};
