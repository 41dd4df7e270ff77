/**
 * Lexical modes and the rule table of each one.
 *
 * Every mode is an ordered list of rules. The first rule whose regex matches
 * at the current offset wins. `Include` splices the rules of another mode in
 * place, so shared shorthands are only spelled out once.
 */

use std::collections::HashMap;
use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Root,
    SpecChar,
    Escaped,
    CharClass,
    CharClassEscaped,
    CharClassPreset,
    Group,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Root,
        Mode::SpecChar,
        Mode::Escaped,
        Mode::CharClass,
        Mode::CharClassEscaped,
        Mode::CharClassPreset,
        Mode::Group,
    ];

    pub fn rules(self) -> &'static [Rule] {
        RULE_TABLES.get(&self).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Root => "pattern",
            Mode::SpecChar => "shorthand",
            Mode::Escaped => "escape sequence",
            Mode::CharClass => "character class",
            Mode::CharClassEscaped => "character class escape sequence",
            Mode::CharClassPreset => "character class preset",
            Mode::Group => "group",
        };
        f.write_str(name)
    }
}

/// What happens to the mode stack after a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Push(Mode),
    Pop,
}

#[derive(Debug)]
pub struct Rule {
    pub kind: TokenKind,
    pub action: Action,
    regex: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str, action: Action) -> Self {
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .unwrap_or_else(|e| panic!("lexer rule for {:?} does not compile: {}", kind, e));
        Self{ kind, action, regex }
    }

    /// Length in bytes of the lexeme this rule accepts at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end()).filter(|len| *len > 0)
    }
}

/**
 * Rule definitions.
 */

/// Symbols that may follow a backslash to stand for themselves.
const ESCAPABLE: &str = r#"[~!@#$;%^:&?*()\-_+={}\[\]'"\\/.,|<> ]"#;

const PRESETS: &str = "alnum|alpha|ascii|blank|cntrl|digit|graph|lower|print|punct|space|upper|word|xdigit";

enum RuleDef {
    Include(Mode),
    Token(TokenKind, String, Action),
}

fn token(kind: TokenKind, pattern: &str, action: Action) -> RuleDef {
    RuleDef::Token(kind, pattern.into(), action)
}

fn definition(mode: Mode) -> Vec<RuleDef> {
    use TokenKind::*;

    match mode {
        Mode::Root => vec![
            RuleDef::Include(Mode::SpecChar),
            token(Alternation, r"\|", Action::Stay),
            token(Quantifier, r"\{[0-9]+\}|\{[0-9]+,\}|\{[0-9]+,[0-9]+\}|\?|\*|\+", Action::Stay),
            token(Char, r"[^$^?*()+\[\\|]", Action::Stay),
            // Before the bare backslash, or `\A` could never match
            token(StartOfString, r"\^|\\A", Action::Stay),
            token(EndOfString, r"\$", Action::Stay),
            token(Escape, r"\\", Action::Push(Mode::Escaped)),
            token(ClassBeginNegated, r"\[\^", Action::Push(Mode::CharClass)),
            token(ClassBegin, r"\[", Action::Push(Mode::CharClass)),
            token(GroupBegin, r"\(", Action::Push(Mode::Group)),
        ],

        Mode::SpecChar => vec![
            token(CommonEscape, r"\\[nrt]", Action::Stay),
            token(Anchor, r"\\[zbB]", Action::Stay),
            token(MetaChar, r"\.|\\[sSdDwWv]", Action::Stay),
        ],

        Mode::Escaped => vec![
            token(EscapedChar, ESCAPABLE, Action::Pop),
        ],

        Mode::CharClass => {
            let endpoint = format!(r"(?:[^\\\]]|\\{})", ESCAPABLE);
            vec![
                RuleDef::Token(ClassRange, format!("{}-{}", endpoint, endpoint), Action::Stay),
                token(PresetBegin, r"\[:", Action::Push(Mode::CharClassPreset)),
                token(ClassEnd, r"\]", Action::Pop),
                RuleDef::Include(Mode::SpecChar),
                token(ClassEscape, r"\\", Action::Push(Mode::CharClassEscaped)),
                token(ClassChar, r"[^\\]", Action::Stay),
            ]
        },

        Mode::CharClassEscaped => vec![
            token(ClassEscapedChar, ESCAPABLE, Action::Pop),
        ],

        Mode::CharClassPreset => vec![
            token(Preset, PRESETS, Action::Stay),
            token(PresetEnd, r":\]", Action::Pop),
        ],

        Mode::Group => vec![
            token(GroupName, r"\?P?<[0-9A-Za-z_]+>", Action::Stay),
            token(GroupNonCapturing, r"\?:", Action::Stay),
            RuleDef::Include(Mode::Root),
            token(GroupEnd, r"\)", Action::Pop),
        ],
    }
}

fn flatten(mode: Mode, out: &mut Vec<Rule>) {
    for def in definition(mode) {
        match def {
            RuleDef::Include(included) => flatten(included, out),
            RuleDef::Token(kind, pattern, action) => out.push(Rule::new(kind, &pattern, action)),
        }
    }
}

static RULE_TABLES: Lazy<HashMap<Mode, Vec<Rule>>> = Lazy::new(|| {
    Mode::ALL.iter()
        .map(|mode| {
            let mut rules = Vec::new();
            flatten(*mode, &mut rules);
            (*mode, rules)
        })
        .collect()
});

// Tests ///////////////////////////////////////////////////////////////////////
