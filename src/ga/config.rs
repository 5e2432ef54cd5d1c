//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_pmsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 300);
/// assert_eq!(config.restart_threshold, 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pmsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_max_generations(150)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of permutations in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// Without crossover both parents are cloned.
    pub crossover_rate: f64,

    /// Probability of applying a swap mutation to each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Consecutive generations without a new best that trigger a restart.
    ///
    /// Set to 0 to disable restarts.
    pub restart_threshold: usize,

    /// Fraction of the population kept on restart; at least one
    /// individual always survives.
    pub restart_elite_ratio: f64,

    /// Individuals copied unchanged into each new generation.
    pub elitism: usize,

    /// Individuals sampled (without replacement) per tournament.
    pub tournament_size: usize,

    /// Whether to evaluate the population in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 300,
            crossover_rate: 0.9,
            mutation_rate: 0.25,
            restart_threshold: 40,
            restart_elite_ratio: 0.1,
            elitism: 2,
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the restart threshold (0 to disable).
    pub fn with_restart_threshold(mut self, generations: usize) -> Self {
        self.restart_threshold = generations;
        self
    }

    /// Sets the fraction of the population kept on restart.
    pub fn with_restart_elite_ratio(mut self, ratio: f64) -> Self {
        self.restart_elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites carried between generations.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Individuals that survive a restart.
    pub fn restart_elite_count(&self) -> usize {
        ((self.population_size as f64 * self.restart_elite_ratio) as usize).max(1)
    }

    /// Validates the configuration.
    ///
    /// Returns [`ScheduleError::InvalidConfig`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.population_size < 2 {
            return Err(ScheduleError::config("population_size must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(ScheduleError::config("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ScheduleError::config("crossover_rate must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ScheduleError::config("mutation_rate must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restart_elite_ratio) {
            return Err(ScheduleError::config("restart_elite_ratio must be in [0, 1]"));
        }
        if self.elitism >= self.population_size {
            return Err(ScheduleError::config("elitism must be smaller than population_size"));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ScheduleError::config(
                "tournament_size must be between 1 and population_size",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 300);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert_eq!(config.restart_threshold, 40);
        assert_eq!(config.elitism, 2);
        assert_eq!(config.tournament_size, 3);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(10)
            .with_crossover_rate(0.7)
            .with_mutation_rate(2.0)
            .with_restart_threshold(0)
            .with_elitism(1)
            .with_tournament_size(5)
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 10);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10); // clamped
        assert_eq!(config.restart_threshold, 0);
        assert_eq!(config.elitism, 1);
        assert_eq!(config.tournament_size, 5);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_restart_elite_count() {
        assert_eq!(GaConfig::default().restart_elite_count(), 10);
        let small = GaConfig::default().with_population_size(5);
        assert_eq!(small.restart_elite_count(), 1);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
        assert!(GaConfig::default().with_elitism(100).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(101).validate().is_err());

        let mut config = GaConfig::default();
        config.mutation_rate = -0.1;
        assert!(matches!(config.validate(), Err(ScheduleError::InvalidConfig(_))));
    }
}
