/**
 * Errors of the grammar builder.
 */

use regen_lexer::{LexError, Position};
use thiserror::Error;
use crate::quantifier::QuantifierError;

/// The tokens do not fit the pattern grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected {found:?} at {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        position: Position,
        expected: &'static str,
    },

    #[error("unexpected end of pattern at {position}, expected {expected}")]
    UnexpectedEnd {
        position: Position,
        expected: &'static str,
    },

    #[error("invalid quantifier {text:?} at {position}: {source}")]
    InvalidQuantifier {
        text: String,
        position: Position,
        source: QuantifierError,
    },

    #[error("empty character class at {position}")]
    EmptyClass {
        position: Position,
    },

    #[error("anchor {text:?} at {position} must be at the {edge} of an alternative")]
    MisplacedAnchor {
        text: String,
        position: Position,
        edge: &'static str,
    },

    #[error("unsupported zero-width assertion {text:?} at {position}")]
    UnsupportedAssertion {
        text: String,
        position: Position,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
