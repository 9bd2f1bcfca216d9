//! Every error carries the byte offset it was detected at, resolved to a
//! line/column [`Position`] against the input it came from.

use taoxml_common::Position;
use thiserror::Error;

use crate::scanner::Token;

/// What went wrong while scanning or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input ended inside a tag header or right after `<`.
    #[error("unexpected end of input inside a tag")]
    UnexpectedEndOfInput,

    /// `<` followed by something that cannot start a tag name.
    #[error("expected a tag name after '<'")]
    MissingTagName,

    /// `</` not followed by a tag name.
    #[error("expected a tag name after '</'")]
    MissingClosingTagName,

    /// A closing tag name not followed by `>`.
    #[error("closing tag </{name}> is missing its '>'")]
    UnterminatedClosingTag {
        /// The name read so far.
        name: String,
    },

    /// `>` outside of any tag.
    #[error("stray '>' outside of a tag")]
    StrayGreaterThan,

    /// `/` inside a tag header not followed by `>`.
    #[error("expected '>' after '/' in tag")]
    MalformedSelfClose,

    /// A character that cannot appear in a tag header.
    #[error("unexpected character {0:?} inside tag")]
    UnexpectedCharacter(char),

    /// A quoted attribute value that never sees its closing quote.
    #[error("attribute value is missing its closing {quote} quote")]
    UnterminatedAttributeValue {
        /// The quote character that opened the value.
        quote: char,
    },

    /// An attribute name not followed by `=`.
    #[error("attribute `{attribute}` is missing '='")]
    MissingEquals {
        /// The attribute name.
        attribute: String,
    },

    /// An `=` not followed by a quoted value.
    #[error("attribute `{attribute}` is missing a quoted value")]
    MissingAttributeValue {
        /// The attribute name.
        attribute: String,
    },

    /// A token that is legal for the scanner but not where it appeared.
    #[error("unexpected {0} token")]
    UnexpectedToken(Token),

    /// A closing tag with no open element to close.
    #[error("closing tag </{name}> has no open element")]
    UnmatchedClosingTag {
        /// The closing tag's name.
        name: String,
    },
}

/// A fatal scan or parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset into the input.
    pub offset: usize,
    /// `offset` as a line/column pair.
    pub position: Position,
}

impl ParseError {
    /// Build an error for `offset` in `input`.
    #[must_use]
    pub fn new(kind: ErrorKind, input: &str, offset: usize) -> Self {
        Self {
            kind,
            offset,
            position: Position::locate(input, offset),
        }
    }
}
