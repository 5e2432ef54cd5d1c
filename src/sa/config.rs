//! SA configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Configuration for simulated annealing with geometric cooling:
/// `T_{k+1} = cooling_rate * T_k`, once per iteration.
///
/// # Examples
///
/// ```
/// use u_pmsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(2000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1]. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Neighbour evaluations to perform.
    pub max_iterations: usize,

    /// At or below this temperature no worsening move is accepted.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            max_iterations: 5000,
            min_temperature: 1e-10,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ScheduleError::config("initial_temperature must be positive and finite"));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ScheduleError::config(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(ScheduleError::config("min_temperature must be non-negative"));
        }
        Ok(())
    }
}
