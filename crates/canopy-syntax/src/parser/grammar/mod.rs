//! Grammar productions, split by area.

mod declarations;
mod file;
mod patterns;
mod types;

/// Contextual keywords: lexed as identifiers, recognized by text so they
/// remain usable as ordinary names.
pub(crate) const RECORD_KEYWORD: &str = "record";
pub(crate) const WHEN_KEYWORD: &str = "when";
