//! Brute-force configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Configuration for exhaustive search.
///
/// # Examples
///
/// ```
/// use u_pmsp::bruteforce::BruteForceConfig;
///
/// let config = BruteForceConfig::default().with_max_jobs(9).with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BruteForceConfig {
    /// Largest instance (job count) the solver accepts; `None` means no
    /// limit.
    ///
    /// The search space grows as `n! × partitions(n, m)`; setting a limit
    /// stops accidental runs on instances that would never finish.
    pub max_jobs: Option<usize>,

    /// Split the permutations across rayon workers.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            max_jobs: None,
            parallel: false,
        }
    }
}

impl BruteForceConfig {
    /// Sets the job-count limit.
    pub fn with_max_jobs(mut self, n: usize) -> Self {
        self.max_jobs = Some(n);
        self
    }

    /// Enables or disables parallel enumeration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        // 21! overflows the u64 permutation counter
        if self.max_jobs.is_some_and(|n| n > 20) {
            return Err(ScheduleError::config("max_jobs must be at most 20"));
        }
        Ok(())
    }
}
