/**
 * Tree-recursive string generation.
 */

use rand::Rng;
use regen_parse::ast::*;
use crate::alphabet;
use crate::config::GeneratorConfig;
use crate::rnd::{push_rand_chars, rand_range, sample};

/// Walks a validated pattern once, appending one random string to `out`.
pub struct Generator<'a, R: ?Sized> {
    config: &'a GeneratorConfig,
    rng: &'a mut R,
}

impl <'a, R> Generator<'a, R> where R : Rng + ?Sized {
    pub fn new(config: &'a GeneratorConfig, rng: &'a mut R) -> Self {
        Self{ config, rng }
    }

    pub fn pattern(&mut self, pattern: &Pattern, out: &mut String) {
        self.choice(&pattern.alternatives, out);
    }

    /// Uniformly picks one alternative by index.
    fn choice(&mut self, alternatives: &[Alternative], out: &mut String) {
        if alternatives.is_empty() {
            return;
        }
        let alternative = sample(&mut *self.rng, alternatives);
        self.alternative(alternative, out);
    }

    fn alternative(&mut self, alternative: &Alternative, out: &mut String) {
        // Anchors contribute nothing
        for expression in &alternative.expressions {
            self.expression(expression, out);
        }
    }

    fn expression(&mut self, expression: &Expression, out: &mut String) {
        match expression {
            Expression::Group(group) => self.group(group, out),
            Expression::Class(class) => self.class(class, out),
            Expression::Literal(literal) => self.literal(literal, out),
            Expression::Meta(meta) => self.meta(meta, out),
        }
    }

    /// The alternative is chosen and rendered once, repetitions reuse it.
    fn group(&mut self, group: &Group, out: &mut String) {
        let mut rendered = String::new();
        self.choice(&group.alternatives, &mut rendered);
        let count = self.repetitions(group.quantifier.as_ref());
        if rendered.is_empty() {
            return;
        }
        for _ in 0..count {
            out.push_str(&rendered);
        }
    }

    fn class(&mut self, class: &CharClass, out: &mut String) {
        let chars = alphabet::class_set(class);
        let count = self.repetitions(class.quantifier.as_ref());
        if !chars.is_empty() {
            push_rand_chars(&mut *self.rng, out, count, &chars);
        }
    }

    fn literal(&mut self, literal: &Literal, out: &mut String) {
        let count = self.repetitions(literal.quantifier.as_ref());
        out.extend(std::iter::repeat(literal.value).take(count));
    }

    fn meta(&mut self, meta: &MetaChar, out: &mut String) {
        let count = self.repetitions(meta.quantifier.as_ref());
        if let Some(family) = alphabet::family(meta.kind) {
            let chars: Vec<char> = family.chars().collect();
            push_rand_chars(&mut *self.rng, out, count, &chars);
        }
    }

    /// Number of occurrences of a node. An explicit lower bound wins over a
    /// smaller configured upper bound.
    pub fn repetitions(&mut self, quantifier: Option<&Quantifier>) -> usize {
        match quantifier {
            None => 1,
            Some(q) => {
                let min = q.from;
                let max = q.to.unwrap_or(self.config.quantifier_upper_bound).max(min);
                rand_range(&mut *self.rng, min..=max)
            },
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
