//! Contextual scanner.
//!
//! The scanner is driven one token at a time by the parser, which names the
//! [`ScanContext`] it expects. Text runs and quoted attribute values are
//! entity-decoded as they are read.

/// Character classes that decide where runs start and stop.
pub mod helpers;
/// The fixed entity table and the decoder built on it.
pub mod entities;
/// Token types produced by the scanner.
pub mod token;
/// The scanner state machine.
pub mod core;

pub use self::core::Scanner;
pub use entities::decode_entities;
pub use token::{ScanContext, Token};
