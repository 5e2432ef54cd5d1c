//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_pmsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(300)
///     .with_tabu_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 300);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Number of iterations.
    pub max_iterations: usize,
    /// How many recent moves stay forbidden.
    pub tabu_tenure: usize,
    /// Random swap moves sampled per iteration.
    pub neighborhood_size: usize,
    /// Whether to use aspiration criterion (override tabu if the move
    /// produces a new global best).
    pub aspiration: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 20,
            neighborhood_size: 20,
            aspiration: true,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (length of the tabu list).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of neighbours sampled per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.neighborhood_size == 0 {
            return Err(ScheduleError::config("neighborhood_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 20);
        assert_eq!(config.neighborhood_size, 20);
        assert!(config.aspiration);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_neighbourhood_rejected() {
        assert!(TabuConfig::default().with_neighborhood_size(0).validate().is_err());
    }
}
