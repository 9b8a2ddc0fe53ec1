//! The generational evolutionary loop.
//!
//! [`Optimizer`] owns the population and drives
//! initialize → (reproduce → select → report) × generations. Generations
//! are exposed through [`Generations`], a pull-based iterator: no
//! generation's work happens before the consumer asks for it, so callers
//! can inspect or stop between generations simply by pacing the iterator.

use super::config::GaConfig;
use super::operators::{exchange_crossover, mutate};
use super::pairing::random_pairing;
use super::types::{Chromosome, FitnessFn, GenerationReport, Individual};
use crate::random::{create_rng, rng_from_entropy, SymbolStream};
use rand::rngs::StdRng;
use rand::Rng;

/// Generational genetic optimizer over radix-encoded chromosomes.
///
/// Each generation, the population is randomly paired (independent of
/// fitness), every pair produces [`children`](GaConfig::children) offspring
/// via multi-point crossover and per-symbol mutation, one elite copy of the
/// incumbent best is appended, and truncation selection keeps the top
/// [`size`](GaConfig::size) by fitness.
///
/// The population is owned exclusively by the optimizer; reports hand out
/// clones. Single-writer access is assumed throughout.
///
/// # Usage
///
/// ```
/// use radix_ga::ga::{GaConfig, Optimizer};
///
/// let config = GaConfig::new(10, 2, 20).with_seed(42);
/// let mut opt = Optimizer::new(config, |c: &[u32]| {
///     c.iter().sum::<u32>() as f64
/// })
/// .unwrap();
///
/// for report in opt.run(50) {
///     assert_eq!(report.population.len(), 20);
/// }
/// ```
pub struct Optimizer<F: FitnessFn> {
    config: GaConfig,
    fitness: F,
    population: Vec<Individual>,
    offspring: Vec<Individual>,
    rng: StdRng,
}

impl<F: FitnessFn> Optimizer<F> {
    /// Creates an optimizer from a configuration and a fitness function.
    ///
    /// Validates the configuration and returns `Err` with a description if
    /// any parameter is invalid; no population exists until the first run.
    /// An odd `size` is normalized to the next even integer here, so every
    /// individual can be paired.
    pub fn new(config: GaConfig, fitness: F) -> Result<Self, String> {
        config.validate()?;

        let mut config = config;
        if config.size % 2 != 0 {
            config.size += 1;
        }

        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => rng_from_entropy(),
        };

        Ok(Self {
            config,
            fitness,
            population: Vec::new(),
            offspring: Vec::new(),
            rng,
        })
    }

    /// The configuration in effect, with `size` normalized.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population, sorted fitness-descending.
    ///
    /// Empty until [`initialize`](Self::initialize) runs or the first
    /// generation is pulled from [`run`](Self::run).
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Fills the population with `size` random chromosomes, evaluated and
    /// sorted fitness-descending.
    ///
    /// Replaces any existing population. Called implicitly by the first
    /// pull of [`run`](Self::run) when the population is empty.
    pub fn initialize(&mut self) {
        let GaConfig {
            length,
            radix,
            size,
            ..
        } = self.config;

        self.population.clear();
        for _ in 0..size {
            let chromosome: Chromosome =
                SymbolStream::bounded(&mut self.rng, radix, length).collect();
            let fitness = self.fitness.evaluate(&chromosome);
            self.population.push(Individual { chromosome, fitness });
        }
        // Keeps the population[0]-is-best invariant before the first
        // reproduction, so the elite carry-over is meaningful from the
        // start and not just from generation 1 on.
        self.population
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// Runs the algorithm for `generations` generations, lazily.
    ///
    /// The returned iterator yields exactly `generations` reports; each
    /// pull performs one full reproduce + select cycle and nothing runs
    /// ahead of the consumer. Calling `run` again after exhaustion resumes
    /// evolving the same population — it does not reset — though the
    /// per-call `generation` index restarts at 0.
    pub fn run(&mut self, generations: usize) -> Generations<'_, F> {
        Generations {
            opt: self,
            remaining: generations,
            index: 0,
        }
    }

    /// Produces this generation's offspring pool.
    ///
    /// Pairs the population at random, breeds `children` offspring per
    /// pair, then appends one elite copy of `population[0]` with its
    /// fitness recomputed, so the best-known solution survives selection
    /// even if every offspring is worse.
    fn reproduce(&mut self) {
        let GaConfig {
            length,
            radix,
            size,
            children,
            mutation_rate,
            crossovers,
            ..
        } = self.config;

        let pairing = random_pairing(size, &mut self.rng);

        for pair in pairing.chunks_exact(2) {
            let parent_a = &self.population[pair[0]].chromosome;
            let parent_b = &self.population[pair[1]].chromosome;

            for _ in 0..children {
                let mut opt_a = parent_a.clone();
                let mut opt_b = parent_b.clone();

                let points = SymbolStream::bounded(&mut self.rng, length as u32, crossovers)
                    .map(|p| p as usize);
                exchange_crossover(&mut opt_a, &mut opt_b, points);

                let mut child = if self.rng.random_bool(0.5) { opt_a } else { opt_b };
                mutate(&mut child, radix, mutation_rate, &mut self.rng);

                let fitness = self.fitness.evaluate(&child);
                self.offspring.push(Individual {
                    chromosome: child,
                    fitness,
                });
            }
        }

        let elite = self.population[0].chromosome.clone();
        let fitness = self.fitness.evaluate(&elite);
        self.offspring.push(Individual {
            chromosome: elite,
            fitness,
        });
    }

    /// Truncation selection: keeps the top `size` of the offspring pool.
    ///
    /// The sort is stable and total (`f64::total_cmp`), so ties keep
    /// insertion order and behavior is deterministic under a fixed seed.
    /// The offspring pool is left empty for the next generation.
    fn select(&mut self) {
        debug_assert_eq!(
            self.offspring.len(),
            self.config.size / 2 * self.config.children + 1
        );

        self.offspring
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        self.offspring.truncate(self.config.size);
        self.population = std::mem::take(&mut self.offspring);
    }
}

/// Lazy per-generation iterator. Created by [`Optimizer::run`].
///
/// Each [`next`](Iterator::next) advances the optimizer by exactly one
/// generation and yields its [`GenerationReport`]. Dropping the iterator
/// early simply stops evolving; a generation is never partially applied.
pub struct Generations<'a, F: FitnessFn> {
    opt: &'a mut Optimizer<F>,
    remaining: usize,
    index: usize,
}

impl<F: FitnessFn> Iterator for Generations<'_, F> {
    type Item = GenerationReport;

    fn next(&mut self) -> Option<GenerationReport> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.opt.population.is_empty() {
            self.opt.initialize();
        }
        self.opt.reproduce();
        self.opt.select();

        let report = GenerationReport {
            generation: self.index,
            population: self
                .opt
                .population
                .iter()
                .map(|ind| ind.chromosome.clone())
                .collect(),
            best: self.opt.population[0].clone(),
        };
        self.index += 1;
        Some(report)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F: FitnessFn> ExactSizeIterator for Generations<'_, F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn symbol_sum(c: &[u32]) -> f64 {
        c.iter().sum::<u32>() as f64
    }

    fn optimizer(config: GaConfig) -> Optimizer<fn(&[u32]) -> f64> {
        Optimizer::new(config, symbol_sum as fn(&[u32]) -> f64).expect("valid config")
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let bad = GaConfig::new(0, 2, 10);
        assert!(Optimizer::new(bad, |_: &[u32]| 0.0).is_err());

        let bad = GaConfig::new(10, 2, 10).with_mutation_rate(1.5);
        assert!(Optimizer::new(bad, |_: &[u32]| 0.0).is_err());
    }

    #[test]
    fn test_construction_rejects_starving_children_count() {
        // One child per pair yields size/2 + 1 offspring; for size 8 the
        // pool would shrink each generation and index past the population
        // on a later pairing. Must be caught at construction.
        let config = GaConfig::new(4, 2, 8).with_children(1).with_seed(42);
        assert!(Optimizer::new(config, |_: &[u32]| 0.0).is_err());
    }

    #[test]
    fn test_population_size_invariant_with_single_child_pairs() {
        // size 2 is the one population a single child per pair sustains.
        let mut opt = optimizer(GaConfig::new(6, 2, 2).with_children(1).with_seed(42));
        for report in opt.run(3) {
            assert_eq!(report.population.len(), 2);
        }
        assert_eq!(opt.population().len(), 2);
    }

    #[test]
    fn test_odd_size_normalized_to_even() {
        let opt = optimizer(GaConfig::new(4, 2, 7).with_seed(42));
        assert_eq!(opt.config().size, 8);
    }

    #[test]
    fn test_population_size_invariant() {
        let mut opt = optimizer(GaConfig::new(6, 3, 9).with_seed(42));
        for report in opt.run(10) {
            assert_eq!(report.population.len(), 10); // 9 normalized to 10
        }
        assert_eq!(opt.population().len(), 10);
    }

    #[test]
    fn test_chromosome_domain_invariant() {
        let mut opt = optimizer(GaConfig::new(8, 3, 10).with_seed(42));
        for report in opt.run(20) {
            for chromosome in &report.population {
                assert_eq!(chromosome.len(), 8);
                assert!(chromosome.iter().all(|&s| s < 3));
            }
        }
    }

    #[test]
    fn test_selection_ordering() {
        let mut opt = optimizer(GaConfig::new(8, 2, 12).with_seed(42));
        for report in opt.run(10) {
            for w in report.population.windows(2) {
                assert!(
                    symbol_sum(&w[0]) >= symbol_sum(&w[1]),
                    "population not sorted fitness-descending"
                );
            }
        }
    }

    #[test]
    fn test_best_is_population_head() {
        let mut opt = optimizer(GaConfig::new(8, 2, 12).with_seed(42));
        for report in opt.run(5) {
            assert_eq!(report.best.chromosome, report.population[0]);
            assert_eq!(report.best.fitness, symbol_sum(&report.population[0]));
        }
    }

    #[test]
    fn test_elitism_best_never_regresses() {
        let mut opt = optimizer(GaConfig::new(16, 2, 10).with_seed(42));
        let mut previous = f64::NEG_INFINITY;
        for report in opt.run(50) {
            assert!(
                report.best.fitness >= previous,
                "best regressed from {previous} to {}",
                report.best.fitness
            );
            previous = report.best.fitness;
        }
    }

    #[test]
    fn test_elitism_covers_initial_population() {
        let mut opt = optimizer(GaConfig::new(10, 2, 20).with_seed(42));
        opt.initialize();
        let initial_best = opt.population()[0].fitness;

        let report = opt.run(1).next().expect("one generation");
        assert!(
            report.best.fitness >= initial_best,
            "generation 0 best {} below initial best {initial_best}",
            report.best.fitness
        );
    }

    #[test]
    fn test_initialize_sorts_descending() {
        let mut opt = optimizer(GaConfig::new(10, 4, 30).with_seed(42));
        opt.initialize();
        for w in opt.population().windows(2) {
            assert!(w[0].fitness >= w[1].fitness);
        }
    }

    #[test]
    fn test_determinism_under_fixed_seed() {
        let config = GaConfig::new(8, 4, 10)
            .with_children(3)
            .with_crossovers(2)
            .with_seed(1234);

        let reports_a: Vec<_> = optimizer(config.clone()).run(15).collect();
        let reports_b: Vec<_> = optimizer(config).run(15).collect();
        assert_eq!(reports_a, reports_b);
    }

    #[test]
    fn test_exact_generation_count() {
        let mut opt = optimizer(GaConfig::new(4, 2, 4).with_seed(42));
        assert_eq!(opt.run(7).count(), 7);
        assert_eq!(opt.run(0).count(), 0);
    }

    #[test]
    fn test_generation_indices_sequential() {
        let mut opt = optimizer(GaConfig::new(4, 2, 4).with_seed(42));
        let indices: Vec<usize> = opt.run(5).map(|r| r.generation).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_no_work_before_first_pull() {
        let mut opt = optimizer(GaConfig::new(4, 2, 4).with_seed(42));
        {
            let _unconsumed = opt.run(100);
        }
        assert!(opt.population().is_empty(), "work ran ahead of the consumer");
    }

    #[test]
    fn test_run_resumes_same_population() {
        let mut opt = optimizer(GaConfig::new(16, 2, 10).with_seed(42));
        let first_best = opt.run(10).last().expect("ten generations").best.fitness;

        // A second run continues evolving; it must not reset, so the best
        // cannot regress. Its generation index restarts at 0.
        let resumed: Vec<_> = opt.run(5).collect();
        assert_eq!(resumed[0].generation, 0);
        for report in &resumed {
            assert!(report.best.fitness >= first_best);
        }
    }

    #[test]
    fn test_zero_mutation_zero_crossover_copies_parents() {
        let mut opt = optimizer(
            GaConfig::new(6, 4, 8)
                .with_mutation_rate(0.0)
                .with_crossovers(0)
                .with_seed(42),
        );
        opt.initialize();
        let parents: Vec<Chromosome> = opt
            .population()
            .iter()
            .map(|ind| ind.chromosome.clone())
            .collect();

        let report = opt.run(1).next().expect("one generation");
        for chromosome in &report.population {
            assert!(
                parents.contains(chromosome),
                "offspring {chromosome:?} matches no parent"
            );
        }
    }

    #[test]
    fn test_zero_crossover_still_mutates() {
        // With crossover disabled and rate 1.0 over a large radix, the
        // population should not stay identical to the parents.
        let mut opt = Optimizer::new(
            GaConfig::new(12, 1000, 8)
                .with_mutation_rate(1.0)
                .with_crossovers(0)
                .with_seed(42),
            symbol_sum as fn(&[u32]) -> f64,
        )
        .expect("valid config");
        opt.initialize();
        let parents: Vec<Chromosome> = opt
            .population()
            .iter()
            .map(|ind| ind.chromosome.clone())
            .collect();

        let report = opt.run(1).next().expect("one generation");
        let fresh = report
            .population
            .iter()
            .filter(|c| !parents.contains(c))
            .count();
        assert!(fresh > 0, "mutation produced no new chromosomes");
    }

    #[test]
    fn test_concrete_scenario() {
        // length=4, radix=2, size=4, children=2, crossovers=1,
        // mutation_rate=0, fitness = symbol sum, one generation.
        let mut opt = optimizer(
            GaConfig::new(4, 2, 4)
                .with_children(2)
                .with_crossovers(1)
                .with_mutation_rate(0.0)
                .with_seed(42),
        );
        opt.initialize();
        let initial_best = opt.population()[0].fitness;

        let report = opt.run(1).next().expect("one generation");

        assert_eq!(report.population.len(), 4);
        for chromosome in &report.population {
            assert_eq!(chromosome.len(), 4);
            assert!(chromosome.iter().all(|&s| s < 2));
        }
        let max_sum = report
            .population
            .iter()
            .map(|c| symbol_sum(c))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(report.best.fitness, max_sum);
        assert!(report.best.fitness >= initial_best);
    }

    #[test]
    fn test_converges_on_symbol_sum() {
        // All-ones (sum = 20) should be found quickly on a 20-bit problem.
        let mut opt = optimizer(GaConfig::new(20, 2, 30).with_seed(42));
        let last = opt.run(100).last().expect("hundred generations");
        assert!(
            last.best.fitness >= 17.0,
            "expected near-optimal sum, got {}",
            last.best.fitness
        );
    }

    #[test]
    fn test_minimization_via_negation() {
        // Maximizing the negated sum drives symbols toward zero.
        let mut opt = Optimizer::new(
            GaConfig::new(12, 4, 20).with_seed(42),
            |c: &[u32]| -(c.iter().sum::<u32>() as f64),
        )
        .expect("valid config");
        let last = opt.run(100).last().expect("hundred generations");
        assert!(
            last.best.fitness >= -6.0,
            "expected sum near zero, got {}",
            -last.best.fitness
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_population_stays_in_domain(
            length in 1usize..10,
            radix in 2u32..6,
            half in 1usize..6,
            seed in any::<u64>(),
        ) {
            let config = GaConfig::new(length, radix, half * 2)
                .with_children(2)
                .with_crossovers(1)
                .with_seed(seed);
            let mut opt = optimizer(config);
            for report in opt.run(3) {
                prop_assert_eq!(report.population.len(), half * 2);
                for chromosome in &report.population {
                    prop_assert_eq!(chromosome.len(), length);
                    prop_assert!(chromosome.iter().all(|&s| s < radix));
                }
            }
        }
    }
}
