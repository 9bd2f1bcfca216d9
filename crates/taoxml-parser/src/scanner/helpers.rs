//! Character classification for the scanner.
//!
//! Names and attribute names are ASCII alphanumeric only. Text is anything
//! that does not open or close a tag.

/// Tag and attribute names: `[A-Za-z0-9]`.
#[must_use]
pub const fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Character data: everything except `<` and `>`.
#[must_use]
pub const fn is_text(c: char) -> bool {
    !matches!(c, '<' | '>')
}

/// Space, tab, line feed and carriage return.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// True if `s` is empty or made only of [`is_whitespace`] characters.
#[must_use]
pub fn is_whitespace_only(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_ascii_alphanumeric() {
        assert!(is_alnum('a') && is_alnum('Z') && is_alnum('7'));
        assert!(!is_alnum('-') && !is_alnum('_') && !is_alnum('é'));
    }

    #[test]
    fn text_excludes_only_angle_brackets() {
        assert!(is_text('&') && is_text(' ') && is_text('"') && is_text('é'));
        assert!(!is_text('<') && !is_text('>'));
    }

    #[test]
    fn form_feed_is_not_whitespace() {
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\x0C'));
        assert!(is_whitespace_only(" \n\t\r"));
        assert!(is_whitespace_only(""));
        assert!(!is_whitespace_only("  x "));
    }
}
