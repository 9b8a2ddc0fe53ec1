//! Generational genetic algorithm over radix-encoded chromosomes.
//!
//! A chromosome is a fixed-length vector of symbols in `[0, radix)`; the
//! caller supplies only a fitness function (higher is better) and the
//! population parameters. Each generation pairs the whole population at
//! random, breeds a fixed number of offspring per pair through multi-point
//! crossover and per-symbol mutation, carries one elite copy of the
//! incumbent best, and truncates back to the population size by fitness.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (length, radix, size, operator rates)
//! - [`Optimizer`]: owns the population and drives the loop
//! - [`Generations`]: lazy per-generation iterator returned by [`Optimizer::run`]
//! - [`GenerationReport`]: per-generation snapshot (population + best)
//!
//! # Submodules
//!
//! - [`operators`]: crossover and mutation on raw symbol slices
//! - [`pairing`]: rejection-sampling pairing permutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
pub mod pairing;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{Generations, Optimizer};
pub use types::{Chromosome, FitnessFn, GenerationReport, Individual};
