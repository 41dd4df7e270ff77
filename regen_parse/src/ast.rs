/**
 * All of the pattern syntax-tree (AST) data-structures.
 */

use std::fmt;
pub use crate::quantifier::Quantifier;

/// The root: one of the alternatives is chosen per generated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub alternatives: Vec<Alternative>,
}

/// A concatenation of expressions. The anchors are accepted but never
/// influence generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alternative {
    pub start_of_string: bool,
    pub expressions: Vec<Expression>,
    pub end_of_string: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Group(Group),
    Class(CharClass),
    Literal(Literal),
    Meta(MetaChar),
}

impl Expression {
    pub fn quantifier(&self) -> Option<&Quantifier> {
        match self {
            Expression::Group(g) => g.quantifier.as_ref(),
            Expression::Class(c) => c.quantifier.as_ref(),
            Expression::Literal(l) => l.quantifier.as_ref(),
            Expression::Meta(m) => m.quantifier.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    pub alternatives: Vec<Alternative>,
    pub quantifier: Option<Quantifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
}

impl GroupKind {
    /// Interprets a group header, `?:`, `?<name>` or `?P<name>`.
    pub fn from_header(header: &str) -> Option<GroupKind> {
        if header == "?:" {
            return Some(GroupKind::NonCapturing);
        }
        let rest = header.strip_prefix("?P<").or_else(|| header.strip_prefix("?<"))?;
        let name = rest.strip_suffix('>')?;
        if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Some(GroupKind::Named(name.into()))
        }
        else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub negated: bool,
    pub members: Vec<ClassMember>,
    pub quantifier: Option<Quantifier>,
}

/// Writes the class back in pattern syntax, for diagnostics.
impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negated { "[^" } else { "[" })?;
        for member in &self.members {
            write!(f, "{}", member)?;
        }
        f.write_str("]")?;
        if let Some(q) = &self.quantifier {
            write!(f, "{}", q)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMember {
    Char{
        value: char,
        escaped: bool,
    },

    Range{
        from: char,
        to: char,
    },

    Preset(Preset),
    Meta(MetaKind),
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char, escaped: bool) -> fmt::Result {
    match c {
        '\n' => f.write_str(r"\n"),
        '\r' => f.write_str(r"\r"),
        '\t' => f.write_str(r"\t"),
        ']' | '\\' | '-' | '[' => write!(f, "\\{}", c),
        c if escaped => write!(f, "\\{}", c),
        c => write!(f, "{}", c),
    }
}

impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassMember::Char{ value, escaped } => write_class_char(f, *value, *escaped),
            ClassMember::Range{ from, to } => {
                write_class_char(f, *from, false)?;
                f.write_str("-")?;
                write_class_char(f, *to, false)
            },
            ClassMember::Preset(preset) => write!(f, "[:{}:]", preset.name()),
            ClassMember::Meta(kind) => f.write_str(kind.shorthand()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub value: char,
    pub escaped: bool,
    pub quantifier: Option<Quantifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaChar {
    pub kind: MetaKind,
    pub quantifier: Option<Quantifier>,
}

/// The built-in character families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Any,
    Whitespace,
    NonWhitespace,
    Digit,
    NonDigit,
    Word,
    NonWord,
    VerticalWhitespace,
}

impl MetaKind {
    pub fn from_shorthand(text: &str) -> Option<MetaKind> {
        let kind = match text {
            "." => MetaKind::Any,
            r"\s" => MetaKind::Whitespace,
            r"\S" => MetaKind::NonWhitespace,
            r"\d" => MetaKind::Digit,
            r"\D" => MetaKind::NonDigit,
            r"\w" => MetaKind::Word,
            r"\W" => MetaKind::NonWord,
            r"\v" => MetaKind::VerticalWhitespace,
            _ => return None,
        };
        Some(kind)
    }

    pub fn shorthand(&self) -> &'static str {
        match self {
            MetaKind::Any => ".",
            MetaKind::Whitespace => r"\s",
            MetaKind::NonWhitespace => r"\S",
            MetaKind::Digit => r"\d",
            MetaKind::NonDigit => r"\D",
            MetaKind::Word => r"\w",
            MetaKind::NonWord => r"\W",
            MetaKind::VerticalWhitespace => r"\v",
        }
    }
}

/// Named classes written as `[:name:]` inside a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl Preset {
    pub const ALL: [Preset; 14] = [
        Preset::Alnum, Preset::Alpha, Preset::Ascii, Preset::Blank, Preset::Cntrl,
        Preset::Digit, Preset::Graph, Preset::Lower, Preset::Print, Preset::Punct,
        Preset::Space, Preset::Upper, Preset::Word, Preset::Xdigit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Alnum => "alnum",
            Preset::Alpha => "alpha",
            Preset::Ascii => "ascii",
            Preset::Blank => "blank",
            Preset::Cntrl => "cntrl",
            Preset::Digit => "digit",
            Preset::Graph => "graph",
            Preset::Lower => "lower",
            Preset::Print => "print",
            Preset::Punct => "punct",
            Preset::Space => "space",
            Preset::Upper => "upper",
            Preset::Word => "word",
            Preset::Xdigit => "xdigit",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.iter().copied().find(|p| p.name() == name)
    }
}
