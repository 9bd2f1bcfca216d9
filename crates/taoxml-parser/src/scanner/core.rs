use super::helpers::{is_alnum, is_text, is_whitespace};
use super::token::{ScanContext, Token};
use crate::error::{ErrorKind, ParseError};

/// A contextual tokenizer over an in-memory markup buffer.
///
/// Each call to [`Scanner::next_token`] reads exactly one token starting at
/// the current position and advances past it. The scanner never backtracks:
/// an error leaves the position where scanning stopped.
///
/// ```
/// use taoxml_parser::{ScanContext, Scanner, Token};
///
/// let mut scanner = Scanner::new("<a x='1'/>");
/// assert_eq!(
///     scanner.next_token(ScanContext::Initial),
///     Ok(Some(Token::OpenTagStart { name: "a".into() }))
/// );
/// assert_eq!(scanner.next_token(ScanContext::InTag), Ok(Some(Token::Whitespace)));
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    pub(super) input: &'a str,
    pub(super) current_pos: usize,
    /// Where the token being (or last) scanned began.
    pub(super) token_start: usize,
    /// Characters of the current name, text run or attribute value.
    pub(super) buffer: String,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            current_pos: 0,
            token_start: 0,
            buffer: String::new(),
        }
    }

    /// The full input buffer.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.current_pos
    }

    /// Byte offset where the most recent token began.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// Scan one token in the given start condition.
    ///
    /// Returns `Ok(None)` only for end of input in [`ScanContext::Initial`];
    /// end of input inside a tag header is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for any character sequence that is not a valid
    /// token in `context`.
    pub fn next_token(&mut self, context: ScanContext) -> Result<Option<Token>, ParseError> {
        match context {
            ScanContext::Initial => self.scan_initial(),
            ScanContext::InTag => self.scan_in_tag().map(Some),
        }
    }

    /// Scan between tags: an open tag start, a closing tag, or a text run.
    ///
    /// # Errors
    ///
    /// Fails on a stray `>`, on `<` not followed by a name or `/name>`, and on
    /// input ending right after `<`.
    pub fn scan_initial(&mut self) -> Result<Option<Token>, ParseError> {
        self.token_start = self.current_pos;
        match self.peek() {
            None => Ok(None),
            Some('<') => {
                self.current_pos += 1;
                self.scan_tag_open().map(Some)
            }
            Some('>') => Err(self.error(ErrorKind::StrayGreaterThan)),
            Some(_) => {
                let _ = self.read_run(is_text);
                Ok(Some(Token::Text {
                    data: self.take_buffer(),
                }))
            }
        }
    }

    /// Scan inside an open tag's header.
    ///
    /// # Errors
    ///
    /// Fails on end of input, an unterminated quoted value, `/` without `>`,
    /// and any character that cannot start a header token.
    pub fn scan_in_tag(&mut self) -> Result<Token, ParseError> {
        self.token_start = self.current_pos;
        let Some(c) = self.peek() else {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        };

        match c {
            c if is_whitespace(c) => {
                let _ = self.read_run(is_whitespace);
                self.buffer.clear();
                Ok(Token::Whitespace)
            }
            c if is_alnum(c) => {
                let _ = self.read_run(is_alnum);
                Ok(Token::AttrName {
                    name: self.take_buffer(),
                })
            }
            '=' => {
                self.current_pos += 1;
                Ok(Token::Equals)
            }
            '"' | '\'' => self.scan_attribute_value(c),
            '/' => {
                self.current_pos += 1;
                if self.peek() == Some('>') {
                    self.current_pos += 1;
                    Ok(Token::SelfCloseEnd)
                } else {
                    Err(self.error(ErrorKind::MalformedSelfClose))
                }
            }
            '>' => {
                self.current_pos += 1;
                Ok(Token::TagHeaderEnd)
            }
            other => Err(self.error(ErrorKind::UnexpectedCharacter(other))),
        }
    }

    /// After `<`: either `name` or `/name>`.
    fn scan_tag_open(&mut self) -> Result<Token, ParseError> {
        match self.peek() {
            Some(c) if is_alnum(c) => {
                let _ = self.read_run(is_alnum);
                Ok(Token::OpenTagStart {
                    name: self.take_buffer(),
                })
            }
            Some('/') => {
                self.current_pos += 1;
                if self.read_run(is_alnum) == 0 {
                    return Err(self.error(ErrorKind::MissingClosingTagName));
                }
                let name = self.take_buffer();
                if self.peek() == Some('>') {
                    self.current_pos += 1;
                    Ok(Token::CloseTag { name })
                } else {
                    Err(self.error(ErrorKind::UnterminatedClosingTag { name }))
                }
            }
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            Some(_) => Err(self.error(ErrorKind::MissingTagName)),
        }
    }

    /// From an opening quote up to and including the matching quote.
    fn scan_attribute_value(&mut self, quote: char) -> Result<Token, ParseError> {
        self.current_pos += quote.len_utf8();
        self.buffer.clear();
        loop {
            match self.peek() {
                None => {
                    return Err(self.error_at(
                        ErrorKind::UnterminatedAttributeValue { quote },
                        self.token_start,
                    ));
                }
                Some(c) if c == quote => {
                    self.current_pos += c.len_utf8();
                    return Ok(Token::AttrValue {
                        value: self.take_buffer(),
                    });
                }
                Some('&') => self.decode_entity(),
                Some(c) => {
                    self.buffer.push(c);
                    self.current_pos += c.len_utf8();
                }
            }
        }
    }

    /// Read the maximal run of characters accepted by `class` into the buffer,
    /// decoding entities when `&` belongs to the class.
    ///
    /// Returns the number of source characters or entities consumed.
    pub(super) fn read_run(&mut self, class: fn(char) -> bool) -> usize {
        self.buffer.clear();
        let mut count = 0;
        while let Some(c) = self.peek().filter(|&c| class(c)) {
            if c == '&' {
                self.decode_entity();
            } else {
                self.buffer.push(c);
                self.current_pos += c.len_utf8();
            }
            count += 1;
        }
        count
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub(super) fn remaining(&self) -> &'a str {
        &self.input[self.current_pos..]
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(kind, self.current_pos)
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.input, offset)
    }
}
