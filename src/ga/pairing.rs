//! Random pairing of the population for reproduction.
//!
//! Pairing ignores fitness entirely: every individual breeds exactly once
//! per generation, and elitism is the only fitness-aware pressure applied
//! before offspring are scored.

use crate::random::SymbolStream;
use rand::Rng;

/// Produces a random permutation of `[0, size)` by rejection sampling.
///
/// Draws uniformly from `[0, size)` and keeps first occurrences until all
/// indices have been seen; the insertion order is the permutation.
/// Consecutive pairs `(perm[2i], perm[2i + 1])` become the breeding pairs.
///
/// The expected number of draws is `size * H(size)` (coupon collector), so
/// this does not scale to large populations. It is kept over a
/// Fisher–Yates shuffle because the draw-consumption order is observable:
/// swapping algorithms would change which pseudo-random values the rest of
/// the generation consumes and break reproducibility against a fixed seed.
///
/// # Panics
/// Panics if `size` is zero or odd.
pub fn random_pairing<R: Rng>(size: usize, rng: &mut R) -> Vec<usize> {
    assert!(size > 0, "size must be positive");
    assert!(size % 2 == 0, "size must be even");

    let mut order = Vec::with_capacity(size);
    let mut seen = vec![false; size];
    let mut draws = SymbolStream::unbounded(rng, size as u32);

    while order.len() < size {
        let idx = draws.next().expect("unbounded stream never ends") as usize;
        if !seen[idx] {
            seen[idx] = true;
            order.push(idx);
        }
    }
    order
}
