/**
 * Compiling a pattern into a reusable generator.
 */

use log::debug;
use rand::Rng;
use regen_lexer::tokenize;
use regen_parse::ast::Pattern;
use regen_parse::parse_tokens;
use crate::config::GeneratorConfig;
use crate::error::CompileError;
use crate::generator::Generator;
use crate::rnd;
use crate::str_gen::StringGenStrategy;
use crate::validate::validate;

/// A validated pattern together with its configuration. Immutable, so it can
/// be shared between threads and invoked any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    pattern: Pattern,
    config: GeneratorConfig,
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One fresh string, drawn from the calling thread's random source.
    pub fn generate(&self) -> String {
        rnd::with_rng(|rng| self.generate_with(rng))
    }

    /// One fresh string, drawn from `rng`.
    pub fn generate_with<R>(&self, rng: &mut R) -> String where R : Rng + ?Sized {
        let mut out = String::new();
        Generator::new(&self.config, rng).pattern(&self.pattern, &mut out);
        out
    }
}

impl StringGenStrategy for CompiledPattern {
    fn generate(&self) -> String {
        CompiledPattern::generate(self)
    }
}

/// Lexes, parses and validates `source`. Fails on the first problem found.
pub fn compile(source: &str, config: GeneratorConfig) -> Result<CompiledPattern, CompileError> {
    let tokens = tokenize(source)?;
    let pattern = parse_tokens(source, &tokens)?;
    validate(&pattern)?;
    debug!("compiled {:?} into {} alternatives ({} tokens), {:?}",
        source, pattern.alternatives.len(), tokens.len(), config);
    Ok(CompiledPattern{ source: source.into(), pattern, config })
}
