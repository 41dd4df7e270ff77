/**
 * Read-only validation of a parsed pattern.
 *
 * The walk is pre-order and stops at the first violation. It never alters
 * the tree, a pattern is either fully accepted or rejected.
 */

use regen_parse::ast::*;
use crate::alphabet;
use crate::error::ValidationError;

pub fn validate(pattern: &Pattern) -> Result<(), ValidationError> {
    validate_alternatives(&pattern.alternatives)
}

fn validate_alternatives(alternatives: &[Alternative]) -> Result<(), ValidationError> {
    for alternative in alternatives {
        for expression in &alternative.expressions {
            validate_expression(expression)?;
        }
    }
    Ok(())
}

fn validate_expression(expression: &Expression) -> Result<(), ValidationError> {
    validate_quantifier(expression.quantifier())?;
    match expression {
        Expression::Group(group) => validate_alternatives(&group.alternatives),
        Expression::Class(class) => validate_class(class),
        Expression::Literal(_) => Ok(()),
        Expression::Meta(meta) => validate_meta(meta.kind),
    }
}

fn validate_quantifier(quantifier: Option<&Quantifier>) -> Result<(), ValidationError> {
    match quantifier {
        Some(Quantifier{ from, to: Some(to) }) if to < from => {
            Err(ValidationError::InvalidQuantifier{ from: *from, to: *to })
        },
        _ => Ok(()),
    }
}

fn validate_meta(kind: MetaKind) -> Result<(), ValidationError> {
    match alphabet::family(kind) {
        Some(_) => Ok(()),
        None => Err(ValidationError::UnimplementedMetaChar{ shorthand: kind.shorthand() }),
    }
}

fn validate_class(class: &CharClass) -> Result<(), ValidationError> {
    for member in &class.members {
        match member {
            ClassMember::Char{ .. } => {},
            ClassMember::Range{ from, to } => {
                if to < from {
                    return Err(ValidationError::InvalidRange{ from: *from, to: *to });
                }
            },
            ClassMember::Preset(preset) => {
                return Err(ValidationError::UnimplementedPreset{ name: preset.name() });
            },
            ClassMember::Meta(kind) => validate_meta(*kind)?,
        }
    }

    if alphabet::class_set(class).is_empty() {
        return Err(ValidationError::EmptyClass{ class: class.to_string() });
    }
    Ok(())
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod validate_tests {
    use super::*;
    use regen_parse::parse;

    fn check(source: &str) -> Result<(), ValidationError> {
        validate(&parse(source).unwrap())
    }

    #[test]
    fn accepts_supported_constructs() {
        for source in ["", "abc", "a|b", "cats?", r"[a-zA-Z]{3,6}-[0-9]{3}", r"(?P<x>\d+|\w*){0,2}", r"[^\s_a-c]", "a{2}"].iter() {
            assert_eq!(check(source), Ok(()), "{}", source);
        }
    }

    #[test]
    fn inverted_quantifier() {
        assert_eq!(check("a{3,1}"), Err(ValidationError::InvalidQuantifier{ from: 3, to: 1 }));
    }

    #[test]
    fn inverted_quantifier_on_group_and_class() {
        assert!(matches!(check("(ab){2,1}"), Err(ValidationError::InvalidQuantifier{ .. })));
        assert!(matches!(check("[ab]{2,1}"), Err(ValidationError::InvalidQuantifier{ .. })));
    }

    #[test]
    fn inverted_range() {
        assert_eq!(check("[z-a]"), Err(ValidationError::InvalidRange{ from: 'z', to: 'a' }));
    }

    #[test]
    fn presets_are_unimplemented() {
        assert_eq!(check("[[:digit:]]"), Err(ValidationError::UnimplementedPreset{ name: "digit" }));
    }

    #[test]
    fn vertical_whitespace_is_unimplemented() {
        assert_eq!(check(r"\v"), Err(ValidationError::UnimplementedMetaChar{ shorthand: r"\v" }));
        assert_eq!(check(r"[a\v]"), Err(ValidationError::UnimplementedMetaChar{ shorthand: r"\v" }));
    }

    #[test]
    fn nested_violations_are_found() {
        assert!(matches!(check("x(y|(z{5,4}))"), Err(ValidationError::InvalidQuantifier{ from: 5, to: 4 })));
    }

    #[test]
    fn first_violation_wins() {
        assert_eq!(check(r"[z-a]\v"), Err(ValidationError::InvalidRange{ from: 'z', to: 'a' }));
        assert_eq!(check(r"\v[z-a]"), Err(ValidationError::UnimplementedMetaChar{ shorthand: r"\v" }));
    }

    #[test]
    fn class_without_characters() {
        assert_eq!(check("[^.]"), Err(ValidationError::EmptyClass{ class: "[^.]".into() }));
        assert_eq!(
            check(r"x[^\w\s\W]+").unwrap_err().to_string(),
            r"char class [^\w\s\W]+ yields no characters");
    }
}
