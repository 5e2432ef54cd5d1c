//! GA evolutionary loop execution.
//!
//! [`GeneticSolver`] orchestrates the complete evolutionary process:
//! evaluation → restart check → elitism → selection → crossover →
//! mutation → repeat.

use rand::Rng;
use tracing::instrument;

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::tournament;
use super::types::Individual;
use crate::builder::ScheduleBuilder;
use crate::error::ScheduleError;
use crate::model::{ProblemInstance, Solution, Time};
use crate::random::{create_rng, random_permutation};
use crate::solver::{SolveReport, Solver};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best schedule found during the entire run.
    pub best: Solution,

    /// `best.objective()`: the makespan, or `Time::MAX` if no feasible
    /// schedule was ever decoded.
    pub best_makespan: Time,

    /// Generations executed.
    pub generations: usize,

    /// Population restarts triggered by stagnation.
    pub restarts: usize,

    /// Best-so-far objective after each generation (non-increasing).
    pub history: Vec<Time>,

    /// Mean makespan of the feasible individuals in each generation
    /// (`f64::INFINITY` when none was feasible).
    pub average_history: Vec<f64>,
}

/// Genetic search over job orderings.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_pmsp::ga::{GaConfig, GeneticSolver};
/// use u_pmsp::model::{Job, ProblemInstance};
///
/// let problem = ProblemInstance::new(
///     2,
///     BTreeMap::new(),
///     vec![Job::new(1, 3), Job::new(2, 3), Job::new(3, 2), Job::new(4, 2), Job::new(5, 2)],
/// );
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(40)
///     .with_seed(42);
/// let result = GeneticSolver::new(config).run(&problem).unwrap();
/// assert_eq!(result.best_makespan, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticSolver {
    config: GaConfig,
}

impl GeneticSolver {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA with a generator built from `config.seed`.
    pub fn run(&self, problem: &ProblemInstance) -> Result<GaResult, ScheduleError> {
        let mut rng = create_rng(self.config.seed);
        self.run_with_rng(problem, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`] if the configuration is invalid.
    #[instrument(skip_all, fields(jobs = problem.job_count(), population = self.config.population_size))]
    pub fn run_with_rng<R: Rng>(&self, problem: &ProblemInstance, rng: &mut R) -> Result<GaResult, ScheduleError> {
        let config = &self.config;
        config.validate()?;

        let builder = ScheduleBuilder::new(problem);
        let n = problem.job_count();

        let mut orders: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_permutation(n, rng))
            .collect();

        let mut best = Solution::invalid();
        let mut history = Vec::with_capacity(config.max_generations);
        let mut average_history = Vec::with_capacity(config.max_generations);
        let mut stagnation = 0usize;
        let mut restarts = 0usize;
        let mut generations = 0usize;

        for generation in 0..config.max_generations {
            generations += 1;
            let mut population = evaluate_population(&builder, orders, config.parallel);

            for individual in &population {
                if individual.fitness() < best.objective() {
                    best = individual.solution.clone();
                    stagnation = 0;
                }
            }
            history.push(best.objective());
            average_history.push(average_makespan(&population));

            // Stable: equal fitness keeps evaluation order.
            population.sort_by_key(Individual::fitness);
            stagnation += 1;

            if config.restart_threshold > 0 && stagnation >= config.restart_threshold {
                let keep = config.restart_elite_count().min(population.len());
                orders = population.into_iter().take(keep).map(|ind| ind.order).collect();
                while orders.len() < config.population_size {
                    orders.push(random_permutation(n, rng));
                }
                stagnation = 0;
                restarts += 1;
                tracing::debug!(generation, best = best.objective(), kept = keep, "population restarted");
                continue;
            }

            if generation + 1 == config.max_generations {
                break;
            }
            orders = next_generation(&population, config, rng);
        }

        tracing::info!(
            makespan = best.objective(),
            generations,
            restarts,
            "genetic search finished"
        );
        if !best.valid {
            tracing::warn!("no feasible schedule decoded");
        }

        Ok(GaResult {
            best_makespan: best.objective(),
            best,
            generations,
            restarts,
            history,
            average_history,
        })
    }
}

impl Solver for GeneticSolver {
    fn name(&self) -> &str {
        "genetic"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        let result = self.run(problem)?;
        Ok(SolveReport {
            solution: result.best,
            history: result.history,
        })
    }
}

/// Decodes every ordering; the output keeps the input order.
fn evaluate_population(builder: &ScheduleBuilder<'_>, orders: Vec<Vec<usize>>, parallel: bool) -> Vec<Individual> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return orders
            .into_par_iter()
            .map(|order| Individual::evaluate(builder, order))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    orders
        .into_iter()
        .map(|order| Individual::evaluate(builder, order))
        .collect()
}

fn average_makespan(population: &[Individual]) -> f64 {
    let (sum, count) = population
        .iter()
        .filter(|ind| ind.solution.valid)
        .fold((0.0, 0usize), |(sum, count), ind| (sum + ind.solution.makespan as f64, count + 1));
    if count == 0 {
        f64::INFINITY
    } else {
        sum / count as f64
    }
}

/// Breeds the next population from one sorted by fitness.
fn next_generation<R: Rng>(population: &[Individual], config: &GaConfig, rng: &mut R) -> Vec<Vec<usize>> {
    let size = config.population_size;
    let fitness: Vec<Time> = population.iter().map(Individual::fitness).collect();

    let mut next: Vec<Vec<usize>> = population
        .iter()
        .take(config.elitism)
        .map(|ind| ind.order.clone())
        .collect();

    while next.len() < size {
        let p1 = &population[tournament(&fitness, config.tournament_size, rng)].order;
        let p2 = &population[tournament(&fitness, config.tournament_size, rng)].order;

        let (mut c1, mut c2) = if rng.random_bool(config.crossover_rate) {
            (order_crossover(p1, p2, rng), order_crossover(p2, p1, rng))
        } else {
            (p1.clone(), p2.clone())
        };

        if rng.random_bool(config.mutation_rate) {
            swap_mutation(&mut c1, rng);
        }
        next.push(c1);

        if next.len() < size {
            if rng.random_bool(config.mutation_rate) {
                swap_mutation(&mut c2, rng);
            }
            next.push(c2);
        }
    }
    next
}

// ============================================================================
// Tests
// ============================================================================
