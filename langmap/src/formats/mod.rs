//! File formats understood by langmap.
//!
//! Only the language map format exists today; it is re-exported here the way callers
//! usually reach it.

pub mod langmap;

// Reexporting the format for easier access
pub use langmap::{COMMENT_MARKER, DELIMITER, Format as LangmapFormat, Record};
