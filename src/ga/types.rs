//! Core types for the generational GA.
//!
//! [`FitnessFn`] is the single capability the caller supplies: anything
//! callable with a chromosome slice that returns a score. The engine is
//! polymorphic over it and never inspects chromosome contents itself.

/// A candidate solution: a fixed-length vector of symbols, each in
/// `[0, radix)`.
///
/// Length and radix are fixed for the lifetime of a run by
/// [`GaConfig`](super::GaConfig); new chromosomes are always produced by
/// copying and transforming, never edited after evaluation.
pub type Chromosome = Vec<u32>;

/// Scores a chromosome. Higher is better.
///
/// Implemented for any `Fn(&[u32]) -> f64`, so plain closures work:
///
/// ```
/// use radix_ga::ga::FitnessFn;
///
/// let symbol_sum = |c: &[u32]| c.iter().sum::<u32>() as f64;
/// assert_eq!(symbol_sum.evaluate(&[1, 2, 3]), 6.0);
/// ```
///
/// The function must be pure within one run: the same chromosome must
/// always yield the same fitness. It is called once per newly created
/// individual and once per elite carry-over per generation, so memoize
/// externally if evaluation is expensive. A panicking fitness function
/// aborts the current generation and unwinds to the caller; the engine
/// never retries or substitutes a default score.
pub trait FitnessFn {
    /// Returns the fitness of `chromosome`.
    fn evaluate(&self, chromosome: &[u32]) -> f64;
}

impl<F: Fn(&[u32]) -> f64> FitnessFn for F {
    fn evaluate(&self, chromosome: &[u32]) -> f64 {
        self(chromosome)
    }
}

/// A chromosome paired with its evaluated fitness.
///
/// Fitness is computed eagerly whenever the chromosome is created or
/// modified; it is never stale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The candidate solution.
    pub chromosome: Chromosome,

    /// Its fitness. Higher is better.
    pub fitness: f64,
}

/// Snapshot of the optimizer state after one generation.
///
/// Yielded by [`Generations`](super::Generations), one per pull.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index within the current
    /// [`run`](super::Optimizer::run) call.
    pub generation: usize,

    /// The full population after selection, sorted fitness-descending.
    pub population: Vec<Chromosome>,

    /// The best individual (`population[0]` with its fitness).
    pub best: Individual,
}
