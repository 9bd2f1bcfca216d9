//! Line/column positions derived from byte offsets.
//!
//! The scanner only tracks a byte offset while it runs. Errors resolve that
//! offset to a human-readable position once, when they are created.

use core::fmt;

/// A 1-based line and column inside a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Resolve `offset` (a byte index into `input`) to a line/column pair.
    ///
    /// Offsets past the end of the input resolve to the position just after
    /// the last character. Offsets inside a multi-byte character count that
    /// character as already consumed.
    #[must_use]
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, c) in input.char_indices() {
            if index >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
