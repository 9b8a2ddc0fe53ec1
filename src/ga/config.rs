//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the generational genetic algorithm.
///
/// Fixed at [`Optimizer`](super::Optimizer) construction; parameters never
/// change mid-run. The fitness function is not part of the configuration —
/// it is passed to the optimizer directly, so the config stays plain data.
///
/// # Defaults
///
/// ```
/// use radix_ga::ga::GaConfig;
///
/// let config = GaConfig::new(10, 2, 50);
/// assert_eq!(config.children, 4);
/// assert!((config.mutation_rate - 0.05).abs() < 1e-10);
/// assert_eq!(config.crossovers, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use radix_ga::ga::GaConfig;
///
/// let config = GaConfig::new(10, 2, 50)
///     .with_children(6)
///     .with_mutation_rate(0.02)
///     .with_crossovers(2)
///     .with_seed(42);
/// ```
///
/// Builders store values as given; out-of-range parameters are rejected by
/// [`validate`](Self::validate) at optimizer construction rather than
/// silently clamped. The single documented exception is an odd `size`,
/// which the optimizer normalizes to the next even integer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of symbols per chromosome. Must be at least 1.
    pub length: usize,

    /// Alphabet size: every symbol lies in `[0, radix)`. Must be at least 2.
    pub radix: u32,

    /// Target population size. Must be at least 1; odd values are
    /// incremented to the next even integer when the optimizer is built,
    /// so breeding pairs always cover the whole population.
    pub size: usize,

    /// Offspring produced per mating pair. Must be at least 1.
    ///
    /// Each generation produces `size / 2 * children` offspring plus one
    /// elite carry-over before truncation back to `size`. That pool must
    /// hold at least `size` individuals or selection would shrink the
    /// population, so `validate` rejects combinations where
    /// `size / 2 * children + 1 < size`. Any `children >= 2` qualifies;
    /// `children = 1` only sustains a population of 2.
    pub children: usize,

    /// Per-symbol mutation probability, in `[0, 1]`.
    ///
    /// Applied independently at every position of every offspring; a
    /// mutated position is replaced by a fresh uniform draw from
    /// `[0, radix)`.
    pub mutation_rate: f64,

    /// Number of crossover points applied per offspring, in `[0, length]`.
    ///
    /// Each point exchanges the tails of the two working copies; points
    /// compound in sequence, and duplicate points reapply the exchange at
    /// the same locus. With 0, offspring are whole parents (still subject
    /// to mutation).
    pub crossovers: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration with the given chromosome length, radix,
    /// and population size, and default operator parameters.
    pub fn new(length: usize, radix: u32, size: usize) -> Self {
        Self {
            length,
            radix,
            size,
            children: 4,
            mutation_rate: 0.05,
            crossovers: 1,
            seed: None,
        }
    }

    /// Sets the number of offspring per mating pair.
    pub fn with_children(mut self, n: usize) -> Self {
        self.children = n;
        self
    }

    /// Sets the per-symbol mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of crossover points per offspring.
    pub fn with_crossovers(mut self, n: usize) -> Self {
        self.crossovers = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// An odd `size` is not an error (it is normalized at construction).
    pub fn validate(&self) -> Result<(), String> {
        if self.length == 0 {
            return Err("length must be at least 1".into());
        }
        if self.radix < 2 {
            return Err("radix must be at least 2".into());
        }
        if self.size == 0 {
            return Err("size must be at least 1".into());
        }
        if self.children == 0 {
            return Err("children must be at least 1".into());
        }
        // Offspring pool size is computed on the normalized (even) size,
        // matching what the optimizer will actually run with.
        let even_size = self.size + self.size % 2;
        if even_size / 2 * self.children + 1 < even_size {
            return Err(format!(
                "children ({}) yields only {} offspring per generation, fewer than size ({})",
                self.children,
                even_size / 2 * self.children + 1,
                even_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.crossovers > self.length {
            return Err(format!(
                "crossovers ({}) must not exceed length ({})",
                self.crossovers, self.length
            ));
        }
        Ok(())
    }
}
