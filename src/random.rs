//! Random number plumbing for the optimizer.
//!
//! Two things live here:
//!
//! - [`create_rng`] / [`rng_from_entropy`]: construction of the seedable
//!   generator used by every randomized component, so that a fixed seed
//!   yields a bit-identical run.
//! - [`SymbolStream`]: a lazy, pull-based stream of uniform integers in
//!   `[0, max)`, either unbounded or of a fixed count. Consumers that
//!   interleave draws with other logic (crossover point selection,
//!   population initialization) pull one value at a time; no draw happens
//!   before it is requested.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
///
/// Two RNGs created with the same seed produce identical draw sequences.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG seeded from OS entropy.
pub fn rng_from_entropy() -> StdRng {
    StdRng::from_os_rng()
}

/// A lazy stream of independent uniform draws in `[0, max)`.
///
/// Created via [`SymbolStream::unbounded`] (infinite; the consumer must
/// truncate) or [`SymbolStream::bounded`] (exactly `n` items, then `None`).
/// Advancing the stream is the only side effect; it borrows the RNG
/// mutably so draws stay interleaved with the owner's other uses once the
/// stream is dropped.
///
/// # Examples
///
/// ```
/// use radix_ga::random::{create_rng, SymbolStream};
///
/// let mut rng = create_rng(7);
/// let symbols: Vec<u32> = SymbolStream::bounded(&mut rng, 10, 5).collect();
/// assert_eq!(symbols.len(), 5);
/// assert!(symbols.iter().all(|&s| s < 10));
/// ```
#[derive(Debug)]
pub struct SymbolStream<'a, R: Rng> {
    rng: &'a mut R,
    max: u32,
    remaining: Option<usize>,
}

impl<'a, R: Rng> SymbolStream<'a, R> {
    /// An infinite stream of draws in `[0, max)`.
    ///
    /// # Panics
    /// Panics if `max == 0`.
    pub fn unbounded(rng: &'a mut R, max: u32) -> Self {
        assert!(max > 0, "max must be positive");
        Self {
            rng,
            max,
            remaining: None,
        }
    }

    /// A stream of exactly `n` draws in `[0, max)`.
    ///
    /// # Panics
    /// Panics if `max == 0`.
    pub fn bounded(rng: &'a mut R, max: u32, n: usize) -> Self {
        assert!(max > 0, "max must be positive");
        Self {
            rng,
            max,
            remaining: Some(n),
        }
    }
}

impl<R: Rng> Iterator for SymbolStream<'_, R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self.remaining {
            Some(0) => None,
            Some(ref mut n) => {
                *n -= 1;
                Some(self.rng.random_range(0..self.max))
            }
            None => Some(self.rng.random_range(0..self.max)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
