//! Generational genetic algorithm over fixed-length radix-encoded
//! chromosomes.
//!
//! A general-purpose search primitive for any problem that can be encoded
//! as a fixed-length vector of small integers: binary GA, integer-coded GA,
//! or permutation-adjacent encodings via a decoding step in the fitness
//! function.
//!
//! - **[`ga`]**: the evolutionary loop — random pairing, multi-point
//!   crossover, per-symbol mutation, elitism, and truncation selection,
//!   exposed as a lazy per-generation iterator so the caller controls
//!   pacing and can stop between generations.
//! - **[`gray`]**: standalone reflected Gray-code enumeration over an
//!   arbitrary base, independent of the search loop.
//! - **[`random`]**: seedable RNG construction and the lazy uniform symbol
//!   stream the loop draws from; a fixed seed reproduces a run bit for bit.
//!
//! # Example
//!
//! ```
//! use radix_ga::ga::{GaConfig, Optimizer};
//!
//! // Maximize the symbol sum of a 10-digit base-10 chromosome.
//! let config = GaConfig::new(10, 10, 50).with_seed(42);
//! let mut opt = Optimizer::new(config, |c: &[u32]| {
//!     c.iter().sum::<u32>() as f64
//! })
//! .unwrap();
//!
//! let last = opt.run(50).last().unwrap();
//! assert!(last.best.fitness > 50.0);
//! ```

pub mod ga;
pub mod gray;
pub mod random;
