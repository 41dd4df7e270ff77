/**
 * Random utilities.
 */

use std::cell::RefCell;
use std::ops::RangeInclusive;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static MY_RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::from_entropy());
}

/// Reseeds the random source of the calling thread.
pub fn set_seed(s: u64) {
    debug!("reseeding thread-local generator with {}", s);
    MY_RNG.with(|rng| {
        *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(s);
    });
}

/// Runs `f` with the random source of the calling thread.
pub fn with_rng<T, F>(f: F) -> T where F : FnOnce(&mut Mcg128Xsl64) -> T {
    MY_RNG.with(|rng| {
        f(&mut rng.borrow_mut())
    })
}

pub fn rand_range<R>(rng: &mut R, r: RangeInclusive<usize>) -> usize where R : Rng + ?Sized {
    rng.gen_range(r)
}

pub fn sample<'a, R, T>(rng: &mut R, s: &'a [T]) -> &'a T where R : Rng + ?Sized {
    assert!(!s.is_empty());
    let idx = rng.gen_range(0..s.len());
    &s[idx]
}

/// Appends `len` characters drawn independently from `charset`.
pub fn push_rand_chars<R>(rng: &mut R, out: &mut String, len: usize, charset: &[char]) where R : Rng + ?Sized {
    out.reserve(len);
    for _ in 0..len {
        out.push(*sample(rng, charset));
    }
}

#[cfg(test)]
mod rnd_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        set_seed(42);
        let a: Vec<usize> = (0..16).map(|_| with_rng(|r| rand_range(r, 0..=1000))).collect();
        set_seed(42);
        let b: Vec<usize> = (0..16).map(|_| with_rng(|r| rand_range(r, 0..=1000))).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn rand_range_is_inclusive() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[rand_range(&mut rng, 2..=4) - 2] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn push_rand_chars_stays_in_charset() {
        let mut rng = Mcg128Xsl64::seed_from_u64(3);
        let mut out = String::from(">");
        push_rand_chars(&mut rng, &mut out, 50, &['x', 'y']);
        assert_eq!(out.len(), 51);
        assert!(out[1..].chars().all(|c| c == 'x' || c == 'y'));
    }
}
