//! Scanner and parser for a small XML-like markup dialect.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner** - a contextual tokenizer with two start conditions,
//!   [`ScanContext::Initial`] (between tags) and [`ScanContext::InTag`]
//!   (inside an open tag's header)
//! - **Entity decoding** for `&nbsp;`, `&quot;`/`&#34;`, `&apos;`/`&#39;`,
//!   `&lt;`, `&gt;` and `&amp;`; anything else is kept verbatim
//! - **Parser** - descent over scanner tokens with an explicit stack of open
//!   elements, building a [`taoxml_dom::DomTree`]
//!
//! # Not Supported
//!
//! - Comments, CDATA sections, processing instructions, DTDs
//! - Namespaces and validation
//! - Unquoted attribute values
//! - Streaming input

/// Structured parse errors.
pub mod error;
/// Tree construction from scanner tokens.
pub mod parser;
/// Contextual scanner producing tokens.
pub mod scanner;

pub use error::{ErrorKind, ParseError};
pub use parser::{ParseIssue, ParseOutcome, XmlParser, parse, parse_document};
pub use scanner::{ScanContext, Scanner, Token};
