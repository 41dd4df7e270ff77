/**
 * Tokenizer for regen patterns.
 *
 * The pattern dialect has several context-sensitive sub-languages (escapes,
 * character classes, presets, group headers) where the same glyph means
 * different things. The lexer keeps a stack of lexical modes, every mode
 * being a small ordered rule table, and pushes/pops as it enters and leaves
 * those sub-languages.
 */

mod position;
mod token;
mod mode;
mod lexer;

pub use position::Position;
pub use token::{Token, TokenKind};
pub use mode::{Action, Mode, Rule};
pub use lexer::{tokenize, LexError, Lexer, LexerState};
