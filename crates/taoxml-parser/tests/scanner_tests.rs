//! Integration tests for the contextual scanner.

use taoxml_parser::{ErrorKind, ScanContext, Scanner, Token};

fn initial(scanner: &mut Scanner<'_>) -> Option<Token> {
    scanner
        .next_token(ScanContext::Initial)
        .expect("scan in initial context")
}

fn in_tag(scanner: &mut Scanner<'_>) -> Token {
    scanner
        .next_token(ScanContext::InTag)
        .expect("scan in tag context")
        .expect("in-tag scans always yield a token")
}

fn error_kind(input: &str, context: ScanContext) -> (ErrorKind, usize) {
    let mut scanner = Scanner::new(input);
    let error = scanner
        .next_token(context)
        .expect_err("expected a scan error");
    (error.kind, error.offset)
}

#[test]
fn test_self_closing_tag() {
    let mut scanner = Scanner::new("<a/>");
    assert_eq!(
        initial(&mut scanner),
        Some(Token::OpenTagStart {
            name: "a".to_string()
        })
    );
    assert_eq!(in_tag(&mut scanner), Token::SelfCloseEnd);
    assert_eq!(initial(&mut scanner), None);
    // End of input stays terminal.
    assert_eq!(initial(&mut scanner), None);
}

#[test]
fn test_close_tag() {
    let mut scanner = Scanner::new("</item2>");
    assert_eq!(
        initial(&mut scanner),
        Some(Token::CloseTag {
            name: "item2".to_string()
        })
    );
    assert_eq!(scanner.offset(), 8);
}

#[test]
fn test_attribute_tokens_with_whitespace() {
    let mut scanner = Scanner::new("<a x = \"v\" />");
    let _ = initial(&mut scanner);

    let tokens: Vec<Token> = (0..8).map(|_| in_tag(&mut scanner)).collect();
    assert_eq!(
        tokens,
        vec![
            Token::Whitespace,
            Token::AttrName {
                name: "x".to_string()
            },
            Token::Whitespace,
            Token::Equals,
            Token::Whitespace,
            Token::AttrValue {
                value: "v".to_string()
            },
            Token::Whitespace,
            Token::SelfCloseEnd,
        ]
    );
}

#[test]
fn test_tag_header_end() {
    let mut scanner = Scanner::new("<div>");
    let _ = initial(&mut scanner);
    assert_eq!(in_tag(&mut scanner), Token::TagHeaderEnd);
    assert_eq!(initial(&mut scanner), None);
}

#[test]
fn test_single_quoted_value_keeps_other_quotes_and_brackets() {
    let mut scanner = Scanner::new(r#"'a "b" > c'"#);
    assert_eq!(
        in_tag(&mut scanner),
        Token::AttrValue {
            value: r#"a "b" > c"#.to_string()
        }
    );
}

#[test]
fn test_attribute_value_decodes_entities() {
    let mut scanner = Scanner::new("\"1 &lt;&lt; 20 &#34;q&#34;\"");
    assert_eq!(
        in_tag(&mut scanner),
        Token::AttrValue {
            value: "1 << 20 \"q\"".to_string()
        }
    );
}

#[test]
fn test_text_run_stops_at_tag_and_decodes() {
    let mut scanner = Scanner::new("x &lt;y&gt; z<b>");
    assert_eq!(
        initial(&mut scanner),
        Some(Token::Text {
            data: "x <y> z".to_string()
        })
    );
    assert_eq!(scanner.offset(), 13);
    assert_eq!(scanner.token_start(), 0);
}

#[test]
fn test_text_mixed_known_and_unknown_entities() {
    let mut scanner = Scanner::new("a &lt; b &gt; c &amp; d &unknown e &#34; f &apos;");
    assert_eq!(
        initial(&mut scanner),
        Some(Token::Text {
            data: "a < b > c & d &unknown e \" f '".to_string()
        })
    );
}

#[test]
fn test_whitespace_between_tags_is_text() {
    let mut scanner = Scanner::new("\n  <a/>");
    assert_eq!(
        initial(&mut scanner),
        Some(Token::Text {
            data: "\n  ".to_string()
        })
    );
}

#[test]
fn test_unterminated_close_tag() {
    assert_eq!(
        error_kind("</a", ScanContext::Initial),
        (
            ErrorKind::UnterminatedClosingTag {
                name: "a".to_string()
            },
            3
        )
    );
    assert_eq!(
        error_kind("</a >", ScanContext::Initial).0,
        ErrorKind::UnterminatedClosingTag {
            name: "a".to_string()
        }
    );
}

#[test]
fn test_close_tag_without_name() {
    assert_eq!(
        error_kind("</>", ScanContext::Initial),
        (ErrorKind::MissingClosingTagName, 2)
    );
}

#[test]
fn test_lt_not_followed_by_name() {
    assert_eq!(
        error_kind("< a>", ScanContext::Initial),
        (ErrorKind::MissingTagName, 1)
    );
    assert_eq!(
        error_kind("<!-- note -->", ScanContext::Initial).0,
        ErrorKind::MissingTagName
    );
    assert_eq!(
        error_kind("<", ScanContext::Initial),
        (ErrorKind::UnexpectedEndOfInput, 1)
    );
}

#[test]
fn test_stray_greater_than() {
    assert_eq!(
        error_kind(">", ScanContext::Initial),
        (ErrorKind::StrayGreaterThan, 0)
    );
}

#[test]
fn test_in_tag_errors() {
    assert_eq!(
        error_kind("\"abc", ScanContext::InTag),
        (ErrorKind::UnterminatedAttributeValue { quote: '"' }, 0)
    );
    assert_eq!(
        error_kind("/x", ScanContext::InTag),
        (ErrorKind::MalformedSelfClose, 1)
    );
    assert_eq!(
        error_kind("!", ScanContext::InTag),
        (ErrorKind::UnexpectedCharacter('!'), 0)
    );
    assert_eq!(
        error_kind("", ScanContext::InTag),
        (ErrorKind::UnexpectedEndOfInput, 0)
    );
}

#[test]
fn test_error_reports_line_and_column() {
    let mut scanner = Scanner::new("text\nmore\n>");
    let _ = initial(&mut scanner);
    let error = scanner
        .next_token(ScanContext::Initial)
        .expect_err("stray '>'");
    assert_eq!(error.offset, 10);
    assert_eq!((error.position.line, error.position.column), (3, 1));
    assert_eq!(error.to_string(), "stray '>' outside of a tag at line 3, column 1");
}
