/**
 * Generation settings.
 */

/// Upper bound used when the CLI is not told otherwise.
pub const DEFAULT_QUANTIFIER_UPPER_BOUND: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Stands in for the missing upper bound of `*`, `+` and `{n,}`.
    pub quantifier_upper_bound: usize,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self{ quantifier_upper_bound: DEFAULT_QUANTIFIER_UPPER_BOUND }
    }

    pub fn with_quantifier_upper_bound(mut self, bound: usize) -> Self {
        self.quantifier_upper_bound = bound;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
