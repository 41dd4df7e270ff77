/**
 * The built-in character families.
 *
 * These are literal ASCII tables rather than computed complements. Every
 * family and its negation partition `ANY` plus newline, which only the
 * whitespace-flavored tables contain.
 */

use std::collections::BTreeSet;
use regen_parse::ast::{CharClass, ClassMember, MetaKind};

pub const ANY: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ \t`~!@\"#$;%^:&?*()-_=+'<>,.1234567890";
pub const WORD: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890_";
pub const NON_WORD: &str = " \t\n`~!@\"#$;%^:&?*()-=+'<>,.";
pub const DIGIT: &str = "1234567890";
pub const NON_DIGIT: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ \t\n`~!@\"#$;%^:&?*()-_=+'<>,.";
pub const WHITESPACE: &str = " \t\n";
pub const NON_WHITESPACE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ`~!@\"#$;%^:&?*()-_=+'<>,.1234567890";

/// The characters of a family, `None` for the unimplemented ones.
pub fn family(kind: MetaKind) -> Option<&'static str> {
    match kind {
        MetaKind::Any => Some(ANY),
        MetaKind::Whitespace => Some(WHITESPACE),
        MetaKind::NonWhitespace => Some(NON_WHITESPACE),
        MetaKind::Digit => Some(DIGIT),
        MetaKind::NonDigit => Some(NON_DIGIT),
        MetaKind::Word => Some(WORD),
        MetaKind::NonWord => Some(NON_WORD),
        MetaKind::VerticalWhitespace => None,
    }
}

/// The effective, deduplicated character set of a class, ordered by code
/// point. Negated classes are complemented against `ANY`.
pub fn class_set(class: &CharClass) -> Vec<char> {
    let mut members = BTreeSet::new();
    for member in &class.members {
        match member {
            ClassMember::Char{ value, .. } => {
                members.insert(*value);
            },
            ClassMember::Range{ from, to } => {
                members.extend(*from..=*to);
            },
            ClassMember::Meta(kind) => {
                if let Some(chars) = family(*kind) {
                    members.extend(chars.chars());
                }
            },
            ClassMember::Preset(_) => {},
        }
    }

    if class.negated {
        let mut rest: Vec<char> = ANY.chars().filter(|c| !members.contains(c)).collect();
        rest.sort_unstable();
        rest
    }
    else {
        members.into_iter().collect()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod alphabet_tests {
    use super::*;

    fn set(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    fn assert_partition(family: &str, negation: &str) {
        let universe: BTreeSet<char> = set(ANY).into_iter().chain(Some('\n')).collect();
        let family = set(family);
        let negation = set(negation);
        assert!(family.is_disjoint(&negation), "overlap: {:?}", family.intersection(&negation).collect::<Vec<_>>());
        assert_eq!(family.union(&negation).copied().collect::<BTreeSet<_>>(), universe);
    }

    fn class(negated: bool, members: Vec<ClassMember>) -> CharClass {
        CharClass{ negated, members, quantifier: None }
    }

    #[test]
    fn families_are_ascii_without_duplicates() {
        for table in [ANY, WORD, NON_WORD, DIGIT, NON_DIGIT, WHITESPACE, NON_WHITESPACE].iter() {
            assert!(table.is_ascii());
            assert_eq!(set(table).len(), table.len());
        }
    }

    #[test]
    fn negations_partition_the_universe() {
        assert_partition(WORD, NON_WORD);
        assert_partition(DIGIT, NON_DIGIT);
        assert_partition(WHITESPACE, NON_WHITESPACE);
    }

    #[test]
    fn vertical_whitespace_is_unimplemented() {
        assert_eq!(family(MetaKind::VerticalWhitespace), None);
    }

    #[test]
    fn range_and_chars_are_merged() {
        let c = class(false, vec![
            ClassMember::Range{ from: 'a', to: 'c' },
            ClassMember::Char{ value: 'b', escaped: false },
            ClassMember::Char{ value: '-', escaped: true },
        ]);
        assert_eq!(class_set(&c), vec!['-', 'a', 'b', 'c']);
    }

    #[test]
    fn meta_members_expand() {
        let c = class(false, vec![ClassMember::Meta(MetaKind::Digit), ClassMember::Char{ value: 'x', escaped: false }]);
        assert_eq!(class_set(&c).len(), 11);
    }

    #[test]
    fn negation_subtracts_from_any() {
        let c = class(true, vec![ClassMember::Meta(MetaKind::Word)]);
        let got = class_set(&c);
        assert!(got.iter().all(|ch| ANY.contains(*ch) && !WORD.contains(*ch)));
        assert!(got.contains(&' '));
        assert!(!got.contains(&'\n'));
    }

    #[test]
    fn negated_any_is_empty() {
        assert!(class_set(&class(true, vec![ClassMember::Meta(MetaKind::Any)])).is_empty());
    }
}
