//! Earliest-start list scheduling.
//!
//! Instead of fixing an order up front, every step asks each unplaced job
//! where it could start right now and commits the one that can start
//! soonest. This fills machine idle time eagerly and tends to keep the
//! resource pool busy.

use tracing::instrument;

use crate::builder::{ScheduleBuilder, Slot};
use crate::error::ScheduleError;
use crate::model::{Job, ProblemInstance, Solution, Time};
use crate::solver::{SolveReport, Solver};

/// Places, at each step, the unplaced job with the globally earliest
/// feasible start.
///
/// Ties go to the job that comes first in the instance's job list, then to
/// the lowest machine id. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarliestStartSolver;

impl EarliestStartSolver {
    pub fn new() -> Self {
        Self
    }

    /// Schedules `problem`.
    ///
    /// # Errors
    /// [`ScheduleError::Infeasible`] if some job demands more of a resource
    /// than its capacity (a resource missing from the instance counts as
    /// capacity 0).
    #[instrument(skip_all, fields(jobs = problem.job_count()))]
    pub fn run(&self, problem: &ProblemInstance) -> Result<Solution, ScheduleError> {
        if let Some((job_id, resource, required, capacity)) = problem.structural_violation() {
            return Err(ScheduleError::Infeasible {
                job_id,
                resource: resource.clone(),
                required,
                capacity,
            });
        }

        let builder = ScheduleBuilder::new(problem);
        let table = builder.table();
        let mut state = builder.new_state();

        let mut unplaced: Vec<&Job> = problem.jobs.iter().collect();
        let mut remaining: Time = problem.total_duration();
        let mut placed = Vec::with_capacity(unplaced.len());

        while !unplaced.is_empty() {
            let mut chosen: Option<(usize, Slot)> = None;
            for (i, job) in unplaced.iter().enumerate() {
                let demand = table.demand(job);
                if let Some(slot) = state.find_slot(job.duration, &demand, remaining) {
                    if chosen.is_none_or(|(_, best)| slot.start < best.start) {
                        chosen = Some((i, slot));
                    }
                }
            }

            let Some((i, slot)) = chosen else {
                tracing::warn!(unplaced = unplaced.len(), "no remaining job can be placed");
                return Ok(Solution::invalid());
            };

            let job = unplaced.remove(i);
            state.place(slot, job.duration, &table.demand(job));
            placed.push(job.placed_at(slot.start, slot.machine));
            remaining -= job.duration;
        }

        let solution = Solution::new(placed);
        tracing::info!(makespan = solution.makespan, "earliest-start finished");
        Ok(solution)
    }
}

impl Solver for EarliestStartSolver {
    fn name(&self) -> &str {
        "earliest-start"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        self.run(problem).map(SolveReport::untraced)
    }
}
