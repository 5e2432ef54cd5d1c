//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random ordering
//! 2. At each iteration:
//!    a. Sample `neighborhood_size` random swaps
//!    b. Skip tabu moves unless they beat the global best (aspiration)
//!    c. Move to the best surviving neighbour, even if worse
//!    d. Append its key to the tabu list, evicting the oldest
//!    e. Update the global best if improved

use std::collections::VecDeque;

use rand::Rng;
use tracing::instrument;

use super::config::TabuConfig;
use crate::builder::ScheduleBuilder;
use crate::error::ScheduleError;
use crate::model::{JobId, ProblemInstance, Solution, Time};
use crate::random::{create_rng, distinct_pair, random_permutation};
use crate::solver::{SolveReport, Solver};

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuResult {
    /// Best schedule found.
    pub best: Solution,
    /// `best.objective()`.
    pub best_makespan: Time,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration (1-based) at which the best schedule was found; 0 means
    /// the initial ordering was never beaten.
    pub best_iteration: usize,
    /// Best-so-far objective after each iteration.
    pub history: Vec<Time>,
}

/// Move identity: the swapped job ids, smaller first.
type MoveKey = (JobId, JobId);

/// FIFO of recently applied moves, at most `tenure` long.
#[derive(Debug, Clone)]
struct TabuList {
    // tenure is small, so a linear scan is fine
    keys: VecDeque<MoveKey>,
    tenure: usize,
}

impl TabuList {
    fn new(tenure: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(tenure + 1),
            tenure,
        }
    }

    fn contains(&self, key: &MoveKey) -> bool {
        self.keys.contains(key)
    }

    /// Records `key`, evicting the oldest entry past the tenure.
    fn push(&mut self, key: MoveKey) {
        if self.tenure == 0 {
            return;
        }
        self.keys.push_back(key);
        if self.keys.len() > self.tenure {
            self.keys.pop_front();
        }
    }

    /// A move may be taken if it is not tabu, or if aspiration is on and
    /// it beats the global best.
    fn admits(&self, key: &MoveKey, objective: Time, best: Time, aspiration: bool) -> bool {
        !self.contains(key) || (aspiration && objective < best)
    }
}

/// Tabu search over job orderings.
#[derive(Debug, Clone, Default)]
pub struct TabuSearchSolver {
    config: TabuConfig,
}

impl TabuSearchSolver {
    pub fn new(config: TabuConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs Tabu Search with a generator built from `config.seed`.
    pub fn run(&self, problem: &ProblemInstance) -> Result<TabuResult, ScheduleError> {
        let mut rng = create_rng(self.config.seed);
        self.run_with_rng(problem, &mut rng)
    }

    /// Runs Tabu Search drawing all randomness from `rng`.
    #[instrument(skip_all, fields(jobs = problem.job_count(), iterations = self.config.max_iterations))]
    pub fn run_with_rng<R: Rng>(&self, problem: &ProblemInstance, rng: &mut R) -> Result<TabuResult, ScheduleError> {
        let config = &self.config;
        config.validate()?;

        let builder = ScheduleBuilder::new(problem);
        let n = problem.job_count();

        let mut current = random_permutation(n, rng);
        let mut best = builder.build_from_order(&current);
        let mut best_iteration = 0usize;

        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let mut chosen: Option<(Vec<usize>, Solution, MoveKey)> = None;

            for _ in 0..config.neighborhood_size {
                let Some((i, j)) = distinct_pair(n, rng) else {
                    break;
                };
                let (a, b) = (problem.jobs[current[i]].id, problem.jobs[current[j]].id);
                let key = (a.min(b), a.max(b));

                let mut order = current.clone();
                order.swap(i, j);
                let solution = builder.build_from_order(&order);

                if !tabu.admits(&key, solution.objective(), best.objective(), config.aspiration) {
                    continue;
                }

                if chosen
                    .as_ref()
                    .is_none_or(|(_, c, _)| solution.objective() < c.objective())
                {
                    chosen = Some((order, solution, key));
                }
            }

            if let Some((order, solution, key)) = chosen {
                current = order;
                if solution.objective() < best.objective() {
                    best = solution;
                    best_iteration = iteration + 1;
                    tracing::debug!(iteration, makespan = best.objective(), "new best");
                }
                tabu.push(key);
            }

            history.push(best.objective());
        }

        tracing::info!(makespan = best.objective(), best_iteration, "tabu search finished");

        Ok(TabuResult {
            best_makespan: best.objective(),
            best,
            iterations: config.max_iterations,
            best_iteration,
            history,
        })
    }
}

impl Solver for TabuSearchSolver {
    fn name(&self) -> &str {
        "tabu-search"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        let result = self.run(problem)?;
        Ok(SolveReport {
            solution: result.best,
            history: result.history,
        })
    }
}
