/**
 * The mode-stack lexer.
 */

use log::trace;
use thiserror::Error;
use crate::mode::{Action, Mode};
use crate::position::Position;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected {found:?} at {position} in {mode}")]
    Unexpected {
        found: char,
        index: usize,
        position: Position,
        mode: Mode,
    },

    #[error("unterminated {mode} opened at {opened_at}")]
    Unterminated {
        mode: Mode,
        opened_at: Position,
    },
}

/**
 * Every lexer's minimal information it needs to carry.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerState {
    pub source_index: usize,
    pub position: Position,
    /// Entered modes with the position they were entered at. Never empty,
    /// the bottom is always `Mode::Root`.
    pub modes: Vec<(Mode, Position)>,
}

impl LexerState {
    pub fn new() -> Self {
        Self{ source_index: 0, position: Position::new(), modes: vec![(Mode::Root, Position::new())] }
    }

    pub fn mode(&self) -> Mode {
        self.modes.last().map(|(m, _)| *m).unwrap_or(Mode::Root)
    }

    fn apply(&mut self, action: Action, entered_at: Position) {
        match action {
            Action::Stay => {},
            Action::Push(mode) => self.modes.push((mode, entered_at)),
            Action::Pop => {
                if self.modes.len() > 1 {
                    self.modes.pop();
                }
            },
        }
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * Iterate over all tokens.
 */

pub struct Lexer<'a> {
    source: &'a str,
    state: LexerState,
    already_ended: bool,
}

impl <'a> Lexer<'a> {
    pub fn with_source(source: &'a str) -> Self {
        Self{ source, state: LexerState::new(), already_ended: false }
    }

    pub fn state(&self) -> &LexerState {
        &self.state
    }

    fn end_of_input(&mut self) -> Result<Token, LexError> {
        self.already_ended = true;
        if let Some((mode, opened_at)) = self.state.modes.last().copied() {
            if self.state.modes.len() > 1 {
                return Err(LexError::Unterminated{ mode, opened_at });
            }
        }
        let index = self.state.source_index;
        Ok(Token{ range: index..index, kind: TokenKind::End, position: self.state.position })
    }
}

impl <'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.already_ended {
            return None;
        }

        let rest = &self.source[self.state.source_index..];
        if rest.is_empty() {
            return Some(self.end_of_input());
        }

        let mode = self.state.mode();
        let matched = mode.rules().iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule, len)));

        match matched {
            Some((rule, len)) => {
                let start = self.state.source_index;
                let position = self.state.position;
                let range = start..(start + len);
                trace!("{:?} {:?} in {}", rule.kind, &self.source[range.clone()], mode);

                self.state.position.advance_over(&self.source[range.clone()]);
                self.state.source_index = range.end;
                self.state.apply(rule.action, position);
                Some(Ok(Token{ range, kind: rule.kind, position }))
            },

            None => {
                // Nothing sensible can follow an unmatched position
                self.already_ended = true;
                let found = rest.chars().next().unwrap_or('\0');
                Some(Err(LexError::Unexpected{
                    found,
                    index: self.state.source_index,
                    position: self.state.position,
                    mode,
                }))
            },
        }
    }
}

/// Lexes the whole pattern. The last token is always `TokenKind::End`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::with_source(source).collect()
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod lexer_tests {
    use super::*;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).unwrap().iter().map(|t| t.text(source).to_string()).collect()
    }

    #[test]
    fn empty() {
        assert_eq!(kinds(""), vec![End]);
    }

    #[test]
    fn literals_and_quantifiers() {
        assert_eq!(kinds("cats?"), vec![Char, Char, Char, Char, Quantifier, End]);
        assert_eq!(texts("a{2,}b"), vec!["a", "{2,}", "b", ""]);
    }

    #[test]
    fn alternation_and_anchors() {
        assert_eq!(kinds("^a|b$"), vec![StartOfString, Char, Alternation, Char, EndOfString, End]);
    }

    #[test]
    fn escapes_push_and_pop() {
        assert_eq!(kinds(r"\.\*x"), vec![Escape, EscapedChar, Escape, EscapedChar, Char, End]);
    }

    #[test]
    fn shorthands() {
        assert_eq!(kinds(r"\d\n\b."), vec![MetaChar, CommonEscape, Anchor, MetaChar, End]);
    }

    #[test]
    fn character_class() {
        assert_eq!(
            kinds(r"[^a-c\]x\s]+"),
            vec![ClassBeginNegated, ClassRange, ClassEscape, ClassEscapedChar, ClassChar, MetaChar, ClassEnd, Quantifier, End]);
    }

    #[test]
    fn class_symbols_lose_their_meaning() {
        assert_eq!(kinds("[(|*]"), vec![ClassBegin, ClassChar, ClassChar, ClassChar, ClassEnd, End]);
    }

    #[test]
    fn class_preset() {
        assert_eq!(kinds("[[:digit:]]"), vec![ClassBegin, PresetBegin, Preset, PresetEnd, ClassEnd, End]);
    }

    #[test]
    fn groups() {
        assert_eq!(
            kinds("(?P<n>a|(?:b))"),
            vec![GroupBegin, GroupName, Char, Alternation, GroupBegin, GroupNonCapturing, Char, GroupEnd, GroupEnd, End]);
    }

    #[test]
    fn positions_are_tracked() {
        let tokens = tokenize("ab\nc").unwrap();
        assert_eq!(tokens[3].position, Position{ column: 0, line: 1 });
    }

    #[test]
    fn stray_backslash_escape() {
        let err = tokenize(r"a\q").unwrap_err();
        assert_eq!(err, LexError::Unexpected{
            found: 'q',
            index: 2,
            position: Position{ column: 2, line: 0 },
            mode: Mode::Escaped,
        });
    }

    #[test]
    fn close_paren_outside_group() {
        assert!(matches!(tokenize("a)"), Err(LexError::Unexpected{ found: ')', mode: Mode::Root, .. })));
    }

    #[test]
    fn unterminated_group() {
        assert_eq!(
            tokenize("x(unterminated").unwrap_err(),
            LexError::Unterminated{ mode: Mode::Group, opened_at: Position{ column: 1, line: 0 } });
    }

    #[test]
    fn unterminated_class() {
        assert!(matches!(tokenize("[abc"), Err(LexError::Unterminated{ mode: Mode::CharClass, .. })));
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(tokenize("[[:foo:]]"), Err(LexError::Unexpected{ mode: Mode::CharClassPreset, .. })));
    }

    #[test]
    fn iteration_stops_after_error() {
        let mut lexer = Lexer::with_source("\\q");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
