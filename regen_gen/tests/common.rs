#![allow(dead_code)]

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use regen_gen::{compile, CompiledPattern, GeneratorConfig};

pub fn compiled(source: &str, bound: usize) -> CompiledPattern {
    compile(source, GeneratorConfig::new().with_quantifier_upper_bound(bound))
        .unwrap_or_else(|e| panic!("{:?} failed to compile: {}", source, e))
}

/// `n` outputs from a fixed seed, so failures reproduce.
pub fn outputs(source: &str, bound: usize, n: usize) -> Vec<String> {
    let compiled = compiled(source, bound);
    let mut rng = Mcg128Xsl64::seed_from_u64(0x5eed);
    (0..n).map(|_| compiled.generate_with(&mut rng)).collect()
}
