//! Exhaustive search over orderings × machine partitions.

use std::collections::VecDeque;

use tracing::instrument;

use super::config::BruteForceConfig;
use super::enumerate::{Partitions, Permutations};
use crate::builder::{ScheduleBuilder, Slot};
use crate::error::ScheduleError;
use crate::model::{ProblemInstance, Solution};
use crate::solver::{SolveReport, Solver};

/// Result of an exhaustive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// Optimal schedule within the explored space, or
    /// [`Solution::invalid`] if no assignment was feasible.
    pub best: Solution,
    /// Job orderings enumerated.
    pub permutations: u64,
    /// (ordering, partition) pairs evaluated.
    pub assignments: u64,
    /// Pairs that merged into a complete schedule.
    pub feasible: u64,
}

/// Exhaustive solver: ground truth for small instances.
///
/// For every ordering of the jobs and every partition of the jobs over at
/// most `num_machines` interchangeable machines, each machine's queue keeps
/// the ordering's relative order and queues are merged by repeatedly
/// starting the queue head with the earliest event-time start. The first
/// strictly shortest schedule found is returned, with or without the
/// `parallel` feature.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_pmsp::bruteforce::{BruteForceConfig, BruteForceSolver};
/// use u_pmsp::model::{Job, ProblemInstance};
///
/// let problem = ProblemInstance::new(
///     2,
///     BTreeMap::new(),
///     vec![Job::new(1, 5), Job::new(2, 3), Job::new(3, 4)],
/// );
/// let result = BruteForceSolver::new(BruteForceConfig::default()).run(&problem).unwrap();
/// assert_eq!(result.best.makespan, 7);
/// assert_eq!(result.permutations, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForceSolver {
    config: BruteForceConfig,
}

impl BruteForceSolver {
    pub fn new(config: BruteForceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Enumerates the whole search space.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`] for a bad configuration, and
    /// [`ScheduleError::TooLarge`] if a `max_jobs` limit is set and the
    /// instance has more jobs.
    #[instrument(skip_all, fields(jobs = problem.job_count(), machines = problem.num_machines))]
    pub fn run(&self, problem: &ProblemInstance) -> Result<BruteForceResult, ScheduleError> {
        self.config.validate()?;
        let n = problem.job_count();
        if let Some(limit) = self.config.max_jobs.filter(|&limit| n > limit) {
            return Err(ScheduleError::TooLarge { jobs: n, limit });
        }

        let builder = ScheduleBuilder::new(problem);
        let search = if self.config.parallel {
            search_parallel(&builder)
        } else {
            search_sequential(&builder)
        };

        let best = match search.best {
            Some((_, solution)) => solution,
            None => {
                tracing::warn!(assignments = search.assignments, "no feasible assignment");
                Solution::invalid()
            }
        };
        tracing::info!(
            makespan = best.makespan,
            permutations = search.permutations,
            assignments = search.assignments,
            feasible = search.feasible,
            "brute force finished"
        );

        Ok(BruteForceResult {
            best,
            permutations: search.permutations,
            assignments: search.assignments,
            feasible: search.feasible,
        })
    }
}

impl Solver for BruteForceSolver {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        self.run(problem).map(|r| SolveReport::untraced(r.best))
    }
}

/// Partial search outcome; merging keeps the lowest (makespan, ordering index).
#[derive(Default)]
struct Search {
    best: Option<(usize, Solution)>,
    permutations: u64,
    assignments: u64,
    feasible: u64,
}

impl Search {
    fn merge(self, other: Search) -> Search {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => {
                if (b.1.makespan, b.0) < (a.1.makespan, a.0) {
                    Some(b)
                } else {
                    Some(a)
                }
            }
            (a, b) => a.or(b),
        };
        Search {
            best,
            permutations: self.permutations + other.permutations,
            assignments: self.assignments + other.assignments,
            feasible: self.feasible + other.feasible,
        }
    }
}

fn search_sequential(builder: &ScheduleBuilder<'_>) -> Search {
    Permutations::new(builder.problem().job_count())
        .enumerate()
        .map(|(index, order)| explore_ordering(builder, index, &order))
        .fold(Search::default(), Search::merge)
}

#[cfg(feature = "parallel")]
fn search_parallel(builder: &ScheduleBuilder<'_>) -> Search {
    use rayon::prelude::*;

    Permutations::new(builder.problem().job_count())
        .enumerate()
        .par_bridge()
        .map(|(index, order)| explore_ordering(builder, index, &order))
        .reduce(Search::default, Search::merge)
}

#[cfg(not(feature = "parallel"))]
fn search_parallel(builder: &ScheduleBuilder<'_>) -> Search {
    search_sequential(builder)
}

/// Tries every partition under one ordering.
fn explore_ordering(builder: &ScheduleBuilder<'_>, index: usize, order: &[usize]) -> Search {
    let machines = builder.problem().num_machines;
    let mut search = Search {
        permutations: 1,
        ..Search::default()
    };

    for partition in Partitions::new(order.len(), machines) {
        search.assignments += 1;
        let Some(solution) = merge_queues(builder, order, &partition) else {
            continue;
        };
        search.feasible += 1;
        if search
            .best
            .as_ref()
            .is_none_or(|(_, b)| solution.makespan < b.makespan)
        {
            search.best = Some((index, solution));
        }
    }
    search
}

/// Schedules one (ordering, partition) pair. `partition[j]` is the
/// zero-based machine slot of job `j`; slot `k` runs on machine `k + 1`.
///
/// Returns `None` when, at some step, no queue head can start at a known
/// event time.
fn merge_queues(builder: &ScheduleBuilder<'_>, order: &[usize], partition: &[usize]) -> Option<Solution> {
    let problem = builder.problem();
    let table = builder.table();

    let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); problem.num_machines];
    for &j in order {
        queues[partition[j]].push_back(j);
    }

    let mut state = builder.new_state();
    let mut placed = Vec::with_capacity(order.len());

    while queues.iter().any(|q| !q.is_empty()) {
        let mut chosen: Option<Slot> = None;
        for (slot, queue) in queues.iter().enumerate() {
            let Some(&j) = queue.front() else {
                continue;
            };
            let job = &problem.jobs[j];
            let machine = slot + 1;
            if let Some(start) = state.earliest_on_machine(machine, job.duration, &table.demand(job)) {
                if chosen.is_none_or(|c| start < c.start) {
                    chosen = Some(Slot { start, machine });
                }
            }
        }

        let chosen = chosen?;
        let j = queues[chosen.machine - 1].pop_front()?;
        let job = &problem.jobs[j];
        state.place(chosen, job.duration, &table.demand(job));
        placed.push(job.placed_at(chosen.start, chosen.machine));
    }

    Some(Solution::new(placed))
}
