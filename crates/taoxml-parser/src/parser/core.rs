use taoxml_common::Position;
use taoxml_common::warning::warn_once;
use taoxml_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::error::{ErrorKind, ParseError};
use crate::scanner::helpers::is_whitespace_only;
use crate::scanner::{ScanContext, Scanner, Token};

/// A non-fatal observation made while parsing.
///
/// Issues record places where the parser accepted questionable input instead
/// of failing, so that leniency is never silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Byte offset the issue refers to.
    pub offset: usize,
    /// `offset` as a line/column pair.
    pub position: Position,
}

/// The result of a parse: the tree built so far, any issues, and the error
/// that stopped parsing, if one did.
///
/// The tree is kept even on failure. Elements completed before the error stay
/// attached; the element being parsed when it happened is not attached to
/// its parent.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The constructed tree.
    pub tree: DomTree,
    /// Non-fatal issues, in the order they were found.
    pub issues: Vec<ParseIssue>,
    /// The fatal error, if parsing did not complete.
    pub error: Option<ParseError>,
}

impl ParseOutcome {
    /// Whether the whole input parsed without a fatal error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a plain `Result`, dropping the partial tree on failure.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`ParseError`] if parsing did not complete.
    pub fn into_result(self) -> Result<DomTree, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tree),
        }
    }
}

/// What a single `parse_node` step produced.
enum Parsed {
    /// A self-closed element, allocated but not yet attached.
    Element(NodeId),
    /// An element whose header ended with `>`; its children follow.
    Opened(NodeId),
    /// Non-blank text, not yet allocated.
    Text(String),
    /// Whitespace-only text, which produces no node.
    Blank,
    /// A closing tag: the innermost open element is done.
    ParentClose { name: String, offset: usize },
    /// End of input between tags.
    EndOfInput,
}

/// Descent parser building a [`DomTree`] from scanner tokens.
///
/// ```text
/// Node    := Element | Text
/// Element := '<' Name Attr* ( '/>' | '>' Node* '</' Name '>' )
/// Attr    := Name '=' Quote Value Quote
/// ```
///
/// Open elements live on an explicit stack rather than the call stack, so
/// nesting depth is bounded by memory only. An element is attached to its
/// parent once it closes.
///
/// Closing tags are not checked against the element they close: any closing
/// tag ends the innermost open element. A mismatch is reported as a
/// [`ParseIssue`], not an error. End of input closes every open element.
pub struct XmlParser<'a> {
    scanner: Scanner<'a>,
    tree: DomTree,
    issues: Vec<ParseIssue>,
    /// Elements whose header has been read but whose closing tag has not.
    stack_of_open_elements: Vec<NodeId>,
}

impl<'a> XmlParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            tree: DomTree::new(),
            issues: Vec::new(),
            stack_of_open_elements: Vec::new(),
        }
    }

    /// Parse the whole input.
    ///
    /// Top-level elements are attached to the root in document order. Text at
    /// the top level is discarded with an issue, since the root holds
    /// elements only.
    #[must_use]
    pub fn run(mut self) -> ParseOutcome {
        let error = self.parse_nodes().err();
        ParseOutcome {
            tree: self.tree,
            issues: self.issues,
            error,
        }
    }

    fn parse_nodes(&mut self) -> Result<(), ParseError> {
        loop {
            match self.parse_node()? {
                Parsed::Element(id) => self.attach(id),
                Parsed::Opened(id) => self.stack_of_open_elements.push(id),
                Parsed::Text(data) => {
                    if let Some(parent) = self.current_node() {
                        let text = self.tree.alloc(NodeType::Text(data));
                        self.tree.append_child(parent, text);
                    } else {
                        let offset = self.scanner.token_start();
                        let _ = warn_once("Parser", "discarded text outside of any element");
                        self.record_issue(format!("discarded text outside of any element: {data:?}"), offset);
                    }
                }
                Parsed::Blank => {}
                Parsed::ParentClose { name, offset } => {
                    let Some(id) = self.stack_of_open_elements.pop() else {
                        return Err(self.error_at(ErrorKind::UnmatchedClosingTag { name }, offset));
                    };
                    let tag = self.tag_of(id);
                    if name != tag {
                        let message = format!("closing tag </{name}> closed <{tag}>");
                        let _ = warn_once("Parser", &message);
                        self.record_issue(message, offset);
                    }
                    self.attach(id);
                }
                Parsed::EndOfInput => {
                    let offset = self.scanner.offset();
                    while let Some(id) = self.stack_of_open_elements.pop() {
                        let tag = self.tag_of(id);
                        self.record_issue(format!("<{tag}> was closed by the end of input"), offset);
                        self.attach(id);
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Read one node in the initial context.
    fn parse_node(&mut self) -> Result<Parsed, ParseError> {
        let Some(token) = self.scanner.next_token(ScanContext::Initial)? else {
            return Ok(Parsed::EndOfInput);
        };
        let start = self.scanner.token_start();

        match token {
            Token::CloseTag { name } => Ok(Parsed::ParentClose {
                name,
                offset: start,
            }),
            Token::OpenTagStart { name } => self.parse_element(&name),
            Token::Text { data } if is_whitespace_only(&data) => Ok(Parsed::Blank),
            Token::Text { data } => Ok(Parsed::Text(data)),
            other => Err(self.error_at(ErrorKind::UnexpectedToken(other), start)),
        }
    }

    /// Parse the rest of an element header after `<name`.
    fn parse_element(&mut self, tag: &str) -> Result<Parsed, ParseError> {
        let id = self.tree.alloc(NodeType::Element(ElementData::new(tag)));

        loop {
            match self.scanner.scan_in_tag()? {
                Token::Whitespace => {}
                Token::AttrName { name } => {
                    let value = self.parse_attribute_value(&name)?;
                    if let Some(element) = self.tree.as_element_mut(id) {
                        element.set_attribute(name, value);
                    }
                }
                Token::SelfCloseEnd => return Ok(Parsed::Element(id)),
                Token::TagHeaderEnd => return Ok(Parsed::Opened(id)),
                other => {
                    let start = self.scanner.token_start();
                    return Err(self.error_at(ErrorKind::UnexpectedToken(other), start));
                }
            }
        }
    }

    /// `'=' Quote Value Quote`, with optional whitespace around the `=`.
    fn parse_attribute_value(&mut self, attribute: &str) -> Result<String, ParseError> {
        if self.scan_skipping_whitespace()? != Token::Equals {
            let start = self.scanner.token_start();
            return Err(self.error_at(
                ErrorKind::MissingEquals {
                    attribute: attribute.to_string(),
                },
                start,
            ));
        }

        match self.scan_skipping_whitespace()? {
            Token::AttrValue { value } => Ok(value),
            _ => {
                let start = self.scanner.token_start();
                Err(self.error_at(
                    ErrorKind::MissingAttributeValue {
                        attribute: attribute.to_string(),
                    },
                    start,
                ))
            }
        }
    }

    /// Scan an in-tag token, skipping one whitespace run if present.
    fn scan_skipping_whitespace(&mut self) -> Result<Token, ParseError> {
        match self.scanner.scan_in_tag()? {
            Token::Whitespace => self.scanner.scan_in_tag(),
            token => Ok(token),
        }
    }

    /// The innermost open element.
    fn current_node(&self) -> Option<NodeId> {
        self.stack_of_open_elements.last().copied()
    }

    /// Attach a finished element to the current node, or to the root when
    /// nothing is open.
    fn attach(&mut self, id: NodeId) {
        let parent = self.current_node().unwrap_or(NodeId::ROOT);
        self.tree.append_child(parent, id);
    }

    fn tag_of(&self, id: NodeId) -> String {
        self.tree
            .as_element(id)
            .map(|element| element.tag().to_string())
            .unwrap_or_default()
    }

    fn record_issue(&mut self, message: String, offset: usize) {
        self.issues.push(ParseIssue {
            message,
            offset,
            position: Position::locate(self.scanner.input(), offset),
        });
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.scanner.input(), offset)
    }
}

/// Parse `input`, keeping the partial tree and issues whatever the outcome.
#[must_use]
pub fn parse_document(input: &str) -> ParseOutcome {
    XmlParser::new(input).run()
}

/// Parse `input` into a tree, failing on the first fatal error.
///
/// # Errors
///
/// Returns the [`ParseError`] that stopped parsing.
pub fn parse(input: &str) -> Result<DomTree, ParseError> {
    parse_document(input).into_result()
}
