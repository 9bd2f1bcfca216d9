//! Entity decoding.
//!
//! Only a fixed handful of entities is recognized. An `&` that does not start
//! one of them is kept as a literal `&`, and only the `&` itself is consumed,
//! so the characters after it are scanned normally.

use super::core::Scanner;

/// Entity names (between `&` and `;`) and their replacements.
const ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("quot", "\""),
    ("#34", "\""),
    ("apos", "'"),
    ("#39", "'"),
    ("lt", "<"),
    ("gt", ">"),
    ("amp", "&"),
];

/// Match a known entity at the start of `input`, which must begin with `&`.
///
/// Returns the replacement and the number of bytes the whole `&name;`
/// sequence occupies.
#[must_use]
pub fn match_entity(input: &str) -> Option<(&'static str, usize)> {
    let rest = input.strip_prefix('&')?;
    ENTITIES.iter().find_map(|&(name, replacement)| {
        rest.strip_prefix(name)
            .filter(|after| after.starts_with(';'))
            .map(|_| (replacement, name.len() + 2))
    })
}

/// Decode every recognized entity in `input`, leaving anything else as is.
///
/// ```
/// use taoxml_parser::scanner::decode_entities;
///
/// assert_eq!(decode_entities("a &lt; b &bogus; c"), "a < b &bogus; c");
/// ```
#[must_use]
pub fn decode_entities(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match match_entity(rest) {
            Some((replacement, len)) => {
                decoded.push_str(replacement);
                rest = &rest[len..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

impl Scanner<'_> {
    /// Decode the entity at the current position into the token buffer.
    ///
    /// The caller must have peeked an `&`.
    pub(super) fn decode_entity(&mut self) {
        if let Some((replacement, len)) = match_entity(self.remaining()) {
            self.buffer.push_str(replacement);
            self.current_pos += len;
        } else {
            self.buffer.push('&');
            self.current_pos += 1;
        }
    }
}
