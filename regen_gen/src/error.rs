/**
 * Errors of compiling a pattern.
 */

use regen_lexer::LexError;
use regen_parse::{ParseError, SyntaxError};
use thiserror::Error;

/// The tree is well-formed but uses something the generator cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid quantifier range, expected from <= to, got (from={from}, to={to})")]
    InvalidQuantifier {
        from: usize,
        to: usize,
    },

    #[error("unimplemented meta char '{shorthand}'")]
    UnimplementedMetaChar {
        shorthand: &'static str,
    },

    #[error("invalid char class range, expected to >= from, got (from='{from}', to='{to}')")]
    InvalidRange {
        from: char,
        to: char,
    },

    #[error("unimplemented char class preset [:{name}:]")]
    UnimplementedPreset {
        name: &'static str,
    },

    #[error("char class {class} yields no characters")]
    EmptyClass {
        class: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("parse regex: {0}")]
    Lex(#[from] LexError),

    #[error("parse regex: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("invalid regex: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lex(e) => CompileError::Lex(e),
            ParseError::Syntax(e) => CompileError::Syntax(e),
        }
    }
}
