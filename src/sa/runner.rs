//! SA execution loop.

use rand::Rng;
use tracing::instrument;

use super::config::SaConfig;
use crate::builder::ScheduleBuilder;
use crate::error::ScheduleError;
use crate::model::{ProblemInstance, Solution, Time};
use crate::random::{create_rng, distinct_pair, random_permutation};
use crate::solver::{SolveReport, Solver};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// The best schedule found.
    pub best: Solution,

    /// `best.objective()`.
    pub best_makespan: Time,

    /// Total iterations (neighbour evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Best-so-far objective after every iteration.
    pub history: Vec<Time>,
}

/// Simulated annealing over job orderings.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealingSolver {
    config: SaConfig,
}

impl SimulatedAnnealingSolver {
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Runs SA with a generator built from `config.seed`.
    pub fn run(&self, problem: &ProblemInstance) -> Result<SaResult, ScheduleError> {
        let mut rng = create_rng(self.config.seed);
        self.run_with_rng(problem, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    #[instrument(skip_all, fields(jobs = problem.job_count(), iterations = self.config.max_iterations))]
    pub fn run_with_rng<R: Rng>(&self, problem: &ProblemInstance, rng: &mut R) -> Result<SaResult, ScheduleError> {
        let config = &self.config;
        config.validate()?;

        let builder = ScheduleBuilder::new(problem);
        let n = problem.job_count();

        let mut current_order = random_permutation(n, rng);
        let mut current = builder.build_from_order(&current_order);
        let mut best = current.clone();

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut history = Vec::with_capacity(config.max_iterations);

        for _ in 0..config.max_iterations {
            if let Some((i, j)) = distinct_pair(n, rng) {
                let mut neighbor_order = current_order.clone();
                neighbor_order.swap(i, j);
                let neighbor = builder.build_from_order(&neighbor_order);
                let delta = neighbor.objective() as f64 - current.objective() as f64;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else if temperature > config.min_temperature {
                    rng.random::<f64>() < (-delta / temperature).exp()
                } else {
                    false
                };

                if accept {
                    current_order = neighbor_order;
                    current = neighbor;
                    accepted_moves += 1;
                    if current.objective() < best.objective() {
                        best = current.clone();
                    }
                }
            }

            temperature *= config.cooling_rate;
            history.push(best.objective());
        }

        tracing::info!(
            makespan = best.objective(),
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "annealing finished"
        );

        Ok(SaResult {
            best_makespan: best.objective(),
            best,
            iterations: config.max_iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            history,
        })
    }
}

impl Solver for SimulatedAnnealingSolver {
    fn name(&self) -> &str {
        "simulated-annealing"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        let result = self.run(problem)?;
        Ok(SolveReport {
            solution: result.best,
            history: result.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Job;
    use std::collections::BTreeMap;

    fn lpt_trap() -> ProblemInstance {
        ProblemInstance::new(
            2,
            BTreeMap::new(),
            vec![Job::new(1, 3), Job::new(2, 3), Job::new(3, 2), Job::new(4, 2), Job::new(5, 2)],
        )
    }

    #[test]
    fn test_finds_optimum_on_lpt_trap() {
        let problem = lpt_trap();
        let config = SaConfig::default().with_max_iterations(1000).with_seed(42);
        let result = SimulatedAnnealingSolver::new(config).run(&problem).unwrap();
        assert_eq!(result.best_makespan, 6);
        assert!(problem.validate_solution(&result.best));
    }

    #[test]
    fn test_history_and_counters() {
        let config = SaConfig::default().with_max_iterations(300).with_seed(3);
        let result = SimulatedAnnealingSolver::new(config).run(&lpt_trap()).unwrap();
        assert_eq!(result.iterations, 300);
        assert_eq!(result.history.len(), 300);
        assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= 300);
        let expected = 1000.0 * 0.995f64.powi(300);
        assert!((result.final_temperature - expected).abs() < 1e-6);
    }

    #[test]
    fn test_frozen_run_accepts_only_improvements() {
        let config = SaConfig::default()
            .with_initial_temperature(1e-12)
            .with_max_iterations(500)
            .with_seed(11);
        let result = SimulatedAnnealingSolver::new(config).run(&lpt_trap()).unwrap();
        assert_eq!(result.accepted_moves, result.improving_moves);
    }

    #[test]
    fn test_seed_reproducible() {
        let config = SaConfig::default().with_max_iterations(200).with_seed(5);
        let a = SimulatedAnnealingSolver::new(config.clone()).run(&lpt_trap()).unwrap();
        let b = SimulatedAnnealingSolver::new(config).run(&lpt_trap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_job() {
        let problem = ProblemInstance::new(2, BTreeMap::new(), vec![Job::new(1, 4)]);
        let config = SaConfig::default().with_max_iterations(10).with_seed(1);
        let result = SimulatedAnnealingSolver::new(config).run(&problem).unwrap();
        assert_eq!(result.best_makespan, 4);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.history, vec![4; 10]);
    }

    #[test]
    fn test_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        assert!(matches!(
            SimulatedAnnealingSolver::new(config).run(&lpt_trap()),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }
}
