/**
 * Position representation in a pattern.
 */

use std::fmt;

/// Zero-based line and column of a character in the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub column: usize,
    pub line: usize,
}

impl Position {
    pub fn new() -> Position {
        Position{ column: 0, line: 0 }
    }

    pub fn newline(&mut self) {
        self.column = 0;
        self.line += 1;
    }

    pub fn advance_columns(&mut self, count: usize) {
        self.column += count;
    }

    /// Moves past every character of `text`.
    pub fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.newline();
            }
            else {
                self.advance_columns(1);
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
