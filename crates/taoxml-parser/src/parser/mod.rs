//! Parser module for tree construction.

/// Descent parser implementation.
pub mod core;

pub use self::core::{ParseIssue, ParseOutcome, XmlParser, parse, parse_document};
