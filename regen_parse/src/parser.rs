/**
 * A recursive-descent parser turning the token stream into a pattern AST.
 */

use log::debug;
use regen_lexer::{tokenize, Position, Token, TokenKind};
use crate::ast::*;
use crate::error::{ParseError, SyntaxError};

/*
 * Reference grammar for the parser:
 *
 * pattern      ::= alternatives END ;
 *
 * alternatives ::=
 *                | alternative '|' alternatives
 *                | alternative
 *                ;
 *
 * alternative  ::= START_OF_STRING? expression* END_OF_STRING? ;
 *
 * expression   ::= atom QUANTIFIER? ;
 *
 * atom         ::=
 *                | '(' GROUP_HEADER? alternatives ')'
 *                | ('[' | '[^') member+ ']'
 *                | CHAR
 *                | '\' ESCAPED_CHAR
 *                | COMMON_ESCAPE
 *                | META_CHAR
 *                ;
 *
 * member       ::=
 *                | CLASS_RANGE
 *                | '[:' PRESET ':]'
 *                | META_CHAR
 *                | COMMON_ESCAPE
 *                | '\' CLASS_ESCAPED_CHAR
 *                | CLASS_CHAR
 *                ;
 */

/// A small helper to ease the token slice interface a bit
#[derive(Clone, Copy)]
struct Tokens<'a> {
    source: &'a str,
    tokens: &'a [Token],
}

impl <'a> Tokens<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.first()
    }

    fn next(&self) -> Option<(&'a Token, Tokens<'a>)> {
        let (first, rest) = self.tokens.split_first()?;
        Some((first, Tokens{ source: self.source, tokens: rest }))
    }

    fn next_if(&self, kind: TokenKind) -> Option<(&'a Token, Tokens<'a>)> {
        self.next().filter(|(t, _)| t.kind == kind)
    }

    fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        match self.peek() {
            Some(t) if !t.kind.is_end() => SyntaxError::UnexpectedToken{
                found: self.text(t).into(),
                position: t.position,
                expected,
            },
            Some(t) => SyntaxError::UnexpectedEnd{ position: t.position, expected },
            None => SyntaxError::UnexpectedEnd{ position: Position::new(), expected },
        }
    }
}

/**
 * Actual parsing.
 */

/// Tokenizes and parses a pattern.
pub fn parse(source: &str) -> Result<Pattern, ParseError> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens from {:?}", tokens.len(), source);
    Ok(parse_tokens(source, &tokens)?)
}

/// Parses an already lexed pattern. `tokens` must come from `source`.
pub fn parse_tokens(source: &str, tokens: &[Token]) -> Result<Pattern, SyntaxError> {
    let it = Tokens{ source, tokens };
    let (alternatives, it) = parse_alternatives(it)?;
    match it.next() {
        Some((t, _)) if t.kind.is_end() => {
            debug!("parsed {} top-level alternatives", alternatives.len());
            Ok(Pattern{ alternatives })
        },
        _ => Err(it.unexpected("end of pattern")),
    }
}

type ParseResult<'a, T> = Result<(T, Tokens<'a>), SyntaxError>;

fn parse_alternatives(it: Tokens<'_>) -> ParseResult<'_, Vec<Alternative>> {
    let (first, mut it) = parse_alternative(it)?;
    let mut alternatives = vec![first];
    while let Some((_, rest)) = it.next_if(TokenKind::Alternation) {
        let (nth, rest) = parse_alternative(rest)?;
        alternatives.push(nth);
        it = rest;
    }
    Ok((alternatives, it))
}

fn ends_alternative(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Alternation | TokenKind::GroupEnd | TokenKind::End)
}

fn parse_alternative(it: Tokens<'_>) -> ParseResult<'_, Alternative> {
    let mut alternative = Alternative::default();
    let mut it = it;

    if let Some((_, rest)) = it.next_if(TokenKind::StartOfString) {
        alternative.start_of_string = true;
        it = rest;
    }

    while let Some(t) = it.peek() {
        match t.kind {
            kind if ends_alternative(kind) => break,

            TokenKind::StartOfString => {
                return Err(SyntaxError::MisplacedAnchor{
                    text: it.text(t).into(),
                    position: t.position,
                    edge: "start",
                });
            },

            TokenKind::EndOfString => {
                it = parse_end_anchor(it)?;
                alternative.end_of_string = true;
                break;
            },

            TokenKind::Anchor if it.text(t) == r"\z" => {
                it = parse_end_anchor(it)?;
                alternative.end_of_string = true;
                break;
            },

            TokenKind::Anchor => {
                return Err(SyntaxError::UnsupportedAssertion{
                    text: it.text(t).into(),
                    position: t.position,
                });
            },

            _ => {
                let (expression, rest) = parse_expression(it)?;
                alternative.expressions.push(expression);
                it = rest;
            },
        }
    }

    Ok((alternative, it))
}

/// Consumes an end-of-string anchor, which must close its alternative.
fn parse_end_anchor(it: Tokens<'_>) -> Result<Tokens<'_>, SyntaxError> {
    let (anchor, rest) = it.next().ok_or_else(|| it.unexpected("end-of-string anchor"))?;
    match rest.peek() {
        Some(t) if !ends_alternative(t.kind) => Err(SyntaxError::MisplacedAnchor{
            text: it.text(anchor).into(),
            position: anchor.position,
            edge: "end",
        }),
        _ => Ok(rest),
    }
}

fn parse_expression(it: Tokens<'_>) -> ParseResult<'_, Expression> {
    let (mut expression, it) = parse_atom(it)?;
    let (quantifier, it) = parse_quantifier(it)?;
    match &mut expression {
        Expression::Group(g) => g.quantifier = quantifier,
        Expression::Class(c) => c.quantifier = quantifier,
        Expression::Literal(l) => l.quantifier = quantifier,
        Expression::Meta(m) => m.quantifier = quantifier,
    }
    Ok((expression, it))
}

fn parse_quantifier(it: Tokens<'_>) -> ParseResult<'_, Option<Quantifier>> {
    match it.next_if(TokenKind::Quantifier) {
        Some((t, rest)) => {
            let text = it.text(t);
            let quantifier = text.parse::<Quantifier>().map_err(|source| SyntaxError::InvalidQuantifier{
                text: text.into(),
                position: t.position,
                source,
            })?;
            Ok((Some(quantifier), rest))
        },
        None => Ok((None, it)),
    }
}

fn parse_atom(it: Tokens<'_>) -> ParseResult<'_, Expression> {
    let (t, rest) = it.next().ok_or_else(|| it.unexpected("expression"))?;
    match t.kind {
        TokenKind::GroupBegin => {
            let (group, rest) = parse_group(rest)?;
            Ok((Expression::Group(group), rest))
        },

        TokenKind::ClassBegin | TokenKind::ClassBeginNegated => {
            let negated = t.kind == TokenKind::ClassBeginNegated;
            let (members, rest) = parse_class_members(rest, t)?;
            Ok((Expression::Class(CharClass{ negated, members, quantifier: None }), rest))
        },

        TokenKind::Char => {
            let value = single_char(it, t)?;
            Ok((Expression::Literal(Literal{ value, escaped: false, quantifier: None }), rest))
        },

        TokenKind::Escape => {
            let (escaped, rest) = rest.next_if(TokenKind::EscapedChar)
                .ok_or_else(|| rest.unexpected("escaped symbol"))?;
            let value = single_char(it, escaped)?;
            Ok((Expression::Literal(Literal{ value, escaped: true, quantifier: None }), rest))
        },

        TokenKind::CommonEscape => {
            let value = common_escape(it, t)?;
            Ok((Expression::Literal(Literal{ value, escaped: true, quantifier: None }), rest))
        },

        TokenKind::MetaChar => {
            let kind = meta_kind(it, t)?;
            Ok((Expression::Meta(MetaChar{ kind, quantifier: None }), rest))
        },

        _ => Err(it.unexpected("expression")),
    }
}

fn parse_group(it: Tokens<'_>) -> ParseResult<'_, Group> {
    let (kind, it) = match it.peek() {
        Some(t) if t.kind == TokenKind::GroupName || t.kind == TokenKind::GroupNonCapturing => {
            let text = it.text(t);
            let kind = GroupKind::from_header(text).ok_or_else(|| malformed(it, t, "group header"))?;
            (kind, Tokens{ source: it.source, tokens: &it.tokens[1..] })
        },
        _ => (GroupKind::Capturing, it),
    };

    let (alternatives, it) = parse_alternatives(it)?;
    let (_, it) = it.next_if(TokenKind::GroupEnd).ok_or_else(|| it.unexpected("')'"))?;
    Ok((Group{ kind, alternatives, quantifier: None }, it))
}

fn parse_class_members<'a>(it: Tokens<'a>, open: &Token) -> ParseResult<'a, Vec<ClassMember>> {
    let mut members = Vec::new();
    let mut it = it;

    loop {
        let (t, rest) = it.next().ok_or_else(|| it.unexpected("']'"))?;
        let member = match t.kind {
            TokenKind::ClassEnd => {
                if members.is_empty() {
                    return Err(SyntaxError::EmptyClass{ position: open.position });
                }
                return Ok((members, rest));
            },

            TokenKind::ClassRange => {
                let (from, to) = range_endpoints(it.text(t)).ok_or_else(|| malformed(it, t, "character range"))?;
                it = rest;
                ClassMember::Range{ from, to }
            },

            TokenKind::PresetBegin => {
                let (name, rest) = rest.next_if(TokenKind::Preset)
                    .ok_or_else(|| rest.unexpected("preset name"))?;
                let (_, rest) = rest.next_if(TokenKind::PresetEnd)
                    .ok_or_else(|| rest.unexpected("':]'"))?;
                let preset = Preset::from_name(it.text(name)).ok_or_else(|| it.unexpected("preset name"))?;
                it = rest;
                ClassMember::Preset(preset)
            },

            TokenKind::MetaChar => {
                let kind = meta_kind(it, t)?;
                it = rest;
                ClassMember::Meta(kind)
            },

            TokenKind::CommonEscape => {
                let value = common_escape(it, t)?;
                it = rest;
                ClassMember::Char{ value, escaped: true }
            },

            TokenKind::ClassEscape => {
                let (escaped, rest) = rest.next_if(TokenKind::ClassEscapedChar)
                    .ok_or_else(|| rest.unexpected("escaped symbol"))?;
                let value = single_char(it, escaped)?;
                it = rest;
                ClassMember::Char{ value, escaped: true }
            },

            TokenKind::ClassChar => {
                let value = single_char(it, t)?;
                it = rest;
                ClassMember::Char{ value, escaped: false }
            },

            TokenKind::Anchor => {
                return Err(SyntaxError::UnsupportedAssertion{
                    text: it.text(t).into(),
                    position: t.position,
                });
            },

            _ => return Err(it.unexpected("character class member")),
        };
        members.push(member);
    }
}

/**
 * Lexeme interpretation.
 */

/// A token of the right kind whose lexeme still cannot be interpreted.
fn malformed(it: Tokens<'_>, token: &Token, expected: &'static str) -> SyntaxError {
    SyntaxError::UnexpectedToken{
        found: it.text(token).into(),
        position: token.position,
        expected,
    }
}

fn single_char(it: Tokens<'_>, token: &Token) -> Result<char, SyntaxError> {
    let mut chars = it.text(token).chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(malformed(it, token, "a single character")),
    }
}

fn common_escape(it: Tokens<'_>, token: &Token) -> Result<char, SyntaxError> {
    match it.text(token) {
        r"\n" => Ok('\n'),
        r"\r" => Ok('\r'),
        r"\t" => Ok('\t'),
        _ => Err(malformed(it, token, "one of \\n, \\r, \\t")),
    }
}

fn meta_kind(it: Tokens<'_>, token: &Token) -> Result<MetaKind, SyntaxError> {
    MetaKind::from_shorthand(it.text(token)).ok_or_else(|| malformed(it, token, "meta character"))
}

/// Splits `x-y`, where either endpoint may be escaped.
fn range_endpoints(text: &str) -> Option<(char, char)> {
    fn endpoint(chars: &mut std::str::Chars<'_>) -> Option<char> {
        match chars.next()? {
            '\\' => chars.next(),
            c => Some(c),
        }
    }

    let mut chars = text.chars();
    let from = endpoint(&mut chars)?;
    if chars.next()? != '-' {
        return None;
    }
    let to = endpoint(&mut chars)?;
    match chars.next() {
        None => Some((from, to)),
        Some(_) => None,
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
