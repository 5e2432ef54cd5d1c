//! Solution model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Job, Time};

/// A concrete timetable produced by a solver.
///
/// `valid` is advisory: it is `false` only when a solver could not produce
/// any feasible schedule, in which case `jobs` is empty. Use
/// [`ProblemInstance::validate_solution`](super::ProblemInstance::validate_solution)
/// for an independent check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Scheduled jobs, each with `start_time` and `assigned_machine` set.
    pub jobs: Vec<Job>,
    /// Maximum completion time over all jobs (0 if none).
    pub makespan: Time,
    /// Whether a feasible schedule was found.
    pub valid: bool,
}

impl Solution {
    /// Creates a valid solution, computing the makespan from the jobs.
    pub fn new(jobs: Vec<Job>) -> Self {
        let makespan = jobs
            .iter()
            .filter_map(Job::completion_time)
            .max()
            .unwrap_or(0);
        Self {
            jobs,
            makespan,
            valid: true,
        }
    }

    /// The empty, invalid result returned when no feasible schedule exists.
    pub fn invalid() -> Self {
        Self {
            jobs: Vec::new(),
            makespan: 0,
            valid: false,
        }
    }

    /// Value to minimise when comparing candidates.
    ///
    /// Invalid solutions rank after every valid one.
    pub fn objective(&self) -> Time {
        if self.valid {
            self.makespan
        } else {
            Time::MAX
        }
    }

    /// Looks up a scheduled job by id.
    pub fn job(&self, id: super::JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Jobs assigned to `machine` (1-based), ordered by start time.
    pub fn machine_jobs(&self, machine: usize) -> Vec<&Job> {
        let mut jobs: Vec<&Job> = self
            .jobs
            .iter()
            .filter(|j| j.assigned_machine == Some(machine))
            .collect();
        jobs.sort_by_key(|j| j.start_time);
        jobs
    }
}
