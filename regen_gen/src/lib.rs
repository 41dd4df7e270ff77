/**
 * Validation and random generation for regen patterns.
 *
 * `compile` turns a pattern into a `CompiledPattern`, which then produces
 * one random string per `generate` call.
 */

pub mod alphabet;
pub mod rnd;
mod config;
mod error;
mod validate;
mod generator;
mod str_gen;
mod compiled;

pub use regen_parse::ast;
pub use config::{GeneratorConfig, DEFAULT_QUANTIFIER_UPPER_BOUND};
pub use error::{CompileError, ValidationError};
pub use validate::validate;
pub use generator::Generator;
pub use str_gen::StringGenStrategy;
pub use compiled::{compile, CompiledPattern};
