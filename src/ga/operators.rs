//! Genetic operators for radix-encoded chromosomes.
//!
//! Crossover and mutation for fixed-length symbol vectors over `[0, radix)`.
//! Both operate on mutable slices and are domain-agnostic: binary strings,
//! integer codes, and permutation-adjacent encodings (decoded downstream)
//! all use them.
//!
//! # Operators
//!
//! - [`exchange_crossover`]: multi-point tail exchange between two parents
//! - [`mutate`]: independent per-symbol replacement with fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong & Spears (1992), "A Formal Analysis of the Role of Multi-Point
//!   Crossover in Genetic Algorithms"

use rand::Rng;

/// Multi-point crossover by simultaneous tail exchange.
///
/// For each point `p`, the slices become `a[..p] ++ b[p..]` and
/// `b[..p] ++ a[p..]`, with both right-hand sides taken from the state
/// before that step — a single step is exactly a tail swap. Points apply
/// in sequence, so the recombination compounds across them; a duplicated
/// point reapplies the swap at the same locus and cancels itself out.
///
/// With an empty `points` iterator, both slices are left untouched.
///
/// # Complexity
/// O(points × n) time, O(1) space
///
/// # Panics
/// Panics if the slices have different lengths or a point exceeds them.
pub fn exchange_crossover(
    a: &mut [u32],
    b: &mut [u32],
    points: impl IntoIterator<Item = usize>,
) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");

    for p in points {
        assert!(p <= a.len(), "crossover point {p} out of range");
        a[p..].swap_with_slice(&mut b[p..]);
    }
}

/// Per-symbol mutation with fixed probability.
///
/// Each position is considered independently: with probability `rate` the
/// symbol is replaced by a fresh uniform draw from `[0, radix)`. One draw
/// per mutated position — draws are never shared across positions, and a
/// replacement may coincide with the original symbol.
///
/// # Panics
/// Panics if `radix == 0`.
pub fn mutate<R: Rng>(chromosome: &mut [u32], radix: u32, rate: f64, rng: &mut R) {
    assert!(radix > 0, "radix must be positive");

    for symbol in chromosome.iter_mut() {
        if rng.random::<f64>() < rate {
            *symbol = rng.random_range(0..radix);
        }
    }
}
