/**
 * Grammar builder for regen patterns: turns the token stream of
 * `regen_lexer` into a typed syntax tree.
 */

pub mod ast;
mod quantifier;
mod error;
mod parser;

pub use quantifier::QuantifierError;
pub use error::{ParseError, SyntaxError};
pub use parser::{parse, parse_tokens};
