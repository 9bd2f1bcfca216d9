use strum_macros::Display;

/// Start condition for the next scan.
///
/// The same characters mean different things between tags and inside a tag
/// header, so the parser tells the scanner which one it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScanContext {
    /// Between tags: expect an open tag, a closing tag, or text.
    Initial,
    /// Inside `<name ...`: expect attributes, whitespace, `>` or `/>`.
    InTag,
}

/// A token produced by one call to [`super::Scanner::next_token`].
///
/// Scan failures are reported as [`crate::ParseError`] rather than as a token.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Token {
    /// `<name`, the start of an element's header.
    OpenTagStart {
        /// The tag name.
        name: String,
    },
    /// `</name>`, a complete closing tag.
    CloseTag {
        /// The tag name.
        name: String,
    },
    /// `>` ending an open tag's header.
    TagHeaderEnd,
    /// `/>` ending a self-closing element.
    SelfCloseEnd,
    /// A run of whitespace inside a tag header.
    Whitespace,
    /// A run of character data with entities decoded.
    Text {
        /// The decoded text.
        data: String,
    },
    /// An attribute name inside a tag header.
    AttrName {
        /// The attribute name.
        name: String,
    },
    /// `=` between an attribute name and its value.
    Equals,
    /// A quoted attribute value with entities decoded, quotes removed.
    AttrValue {
        /// The decoded value.
        value: String,
    },
}
