/**
 * Token definition.
 */

use std::ops::Range;
use crate::position::Position;

/// Every kind of lexeme the pattern tokenizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Shared shorthands
    CommonEscape,
    Anchor,
    MetaChar,

    // Root
    Alternation,
    Quantifier,
    Char,
    Escape,
    StartOfString,
    EndOfString,
    ClassBeginNegated,
    ClassBegin,
    GroupBegin,

    // Escaped
    EscapedChar,

    // Character class
    ClassRange,
    PresetBegin,
    ClassEnd,
    ClassEscape,
    ClassChar,
    ClassEscapedChar,
    Preset,
    PresetEnd,

    // Group
    GroupName,
    GroupNonCapturing,
    GroupEnd,

    End,
}

impl TokenKind {
    pub fn is_end(&self) -> bool {
        *self == TokenKind::End
    }
}

/// A token returned by the lexer. The lexeme itself stays in the source,
/// `range` points into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: Range<usize>,
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}
