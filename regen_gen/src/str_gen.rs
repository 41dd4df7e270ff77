/**
 * String generation strategies.
 */

pub trait StringGenStrategy {
    fn generate(&self) -> String;

    /// `n` independent strings.
    fn generate_many(&self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.generate()).collect()
    }
}
