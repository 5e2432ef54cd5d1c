//! Schedule Builder: list scheduling over event times.
//!
//! [`ScheduleBuilder`] turns any ordering of jobs into a feasible
//! [`Solution`] by placing each job, in order, at the earliest
//! `(time, machine)` slot where the machine is idle and every resource it
//! needs stays within capacity for the job's whole duration.
//!
//! Every solver funnels its candidates through this primitive, so all of
//! them share one feasibility semantics.
//!
//! # Algorithm
//!
//! 1. Candidate starts per machine are the machine's free time followed by
//!    every known event (`0` and each completion so far) after it.
//! 2. The first candidate whose window `[t, t + duration)` fits wins for
//!    that machine; across machines the earliest start wins, lowest
//!    machine id on ties.
//! 3. If no event works anywhere, every instant up to
//!    `last completion + remaining durations` is scanned instead.
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"
//! - Garey & Graham (1975), "Bounds for Multiprocessor Scheduling with
//!   Resource Constraints"

mod state;
mod timeline;

pub(crate) use state::{ScheduleState, Slot};
pub(crate) use timeline::{Demand, ResourceTable};

use crate::model::{Job, ProblemInstance, Solution, Time};

/// Builds schedules from job orderings for one problem instance.
///
/// The builder only borrows the instance; each call owns its own machine,
/// event and resource state, so one builder can serve many calls (and
/// many threads) at once.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_pmsp::builder::ScheduleBuilder;
/// use u_pmsp::model::{Job, ProblemInstance};
///
/// let problem = ProblemInstance::new(
///     2,
///     BTreeMap::new(),
///     vec![Job::new(1, 5), Job::new(2, 3), Job::new(3, 4)],
/// );
/// let builder = ScheduleBuilder::new(&problem);
/// let solution = builder.build_from_sequence(&problem.jobs);
/// assert_eq!(solution.makespan, 7);
/// assert!(problem.validate_solution(&solution));
/// ```
pub struct ScheduleBuilder<'a> {
    problem: &'a ProblemInstance,
    table: ResourceTable,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a builder for `problem`.
    pub fn new(problem: &'a ProblemInstance) -> Self {
        Self {
            problem,
            table: ResourceTable::new(problem),
        }
    }

    /// The instance this builder schedules.
    pub fn problem(&self) -> &'a ProblemInstance {
        self.problem
    }

    /// Schedules `sequence` in order.
    ///
    /// Returns [`Solution::invalid`] if some job has no feasible slot at
    /// all (e.g. it demands more than a resource's capacity).
    pub fn build_from_sequence(&self, sequence: &[Job]) -> Solution {
        let jobs: Vec<&Job> = sequence.iter().collect();
        self.build(&jobs)
    }

    /// Schedules the instance's jobs in the order given by indices into
    /// `problem.jobs`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn build_from_order(&self, order: &[usize]) -> Solution {
        let jobs: Vec<&Job> = order.iter().map(|&i| &self.problem.jobs[i]).collect();
        self.build(&jobs)
    }

    pub(crate) fn table(&self) -> &ResourceTable {
        &self.table
    }

    /// Fresh placement state sized for this instance.
    pub(crate) fn new_state(&self) -> ScheduleState<'_> {
        ScheduleState::new(&self.table, self.problem.num_machines)
    }

    fn build(&self, sequence: &[&Job]) -> Solution {
        let mut state = self.new_state();
        let mut remaining: Time = sequence.iter().map(|j| j.duration).sum();
        let mut placed = Vec::with_capacity(sequence.len());

        for job in sequence {
            let demand = self.table.demand(job);
            let Some(slot) = state.find_slot(job.duration, &demand, remaining) else {
                tracing::warn!(job_id = job.id, "no feasible slot within horizon");
                return Solution::invalid();
            };
            state.place(slot, job.duration, &demand);
            placed.push(job.placed_at(slot.start, slot.machine));
            remaining -= job.duration;
        }

        Solution::new(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn resources(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_plain_list_scheduling() {
        let problem = ProblemInstance::new(
            2,
            BTreeMap::new(),
            vec![Job::new(1, 5), Job::new(2, 3), Job::new(3, 4)],
        );
        let sol = ScheduleBuilder::new(&problem).build_from_sequence(&problem.jobs);

        assert_eq!(sol.makespan, 7);
        let j3 = sol.job(3).unwrap();
        assert_eq!((j3.start_time, j3.assigned_machine), (Some(3), Some(2)));
        assert!(problem.validate_solution(&sol));
    }

    #[test]
    fn test_resource_contention_serialises_jobs() {
        let problem = ProblemInstance::new(
            2,
            resources(&[("R", 1)]),
            vec![
                Job::new(1, 5).with_requirement("R", 1),
                Job::new(2, 5).with_requirement("R", 1),
            ],
        );
        let sol = ScheduleBuilder::new(&problem).build_from_sequence(&problem.jobs);

        let j2 = sol.job(2).unwrap();
        // machine 2 is idle at 0 but the tool is busy; machine 1 wins the tie at 5
        assert_eq!((j2.start_time, j2.assigned_machine), (Some(5), Some(1)));
        assert_eq!(sol.makespan, 10);
        assert!(problem.validate_solution(&sol));
    }

    #[test]
    fn test_free_jobs_fill_around_resource_jobs() {
        let problem = ProblemInstance::new(
            2,
            resources(&[("R", 1)]),
            vec![
                Job::new(1, 4).with_requirement("R", 1),
                Job::new(2, 4).with_requirement("R", 1),
                Job::new(3, 3),
            ],
        );
        let sol = ScheduleBuilder::new(&problem).build_from_order(&[0, 1, 2]);
        // job 2 waits for the tool on machine 1; job 3 runs at once on machine 2
        let j3 = sol.job(3).unwrap();
        assert_eq!((j3.start_time, j3.assigned_machine), (Some(0), Some(2)));
        assert_eq!(sol.makespan, 8);
        assert!(problem.validate_solution(&sol));
    }

    #[test]
    fn test_order_matters() {
        let problem = ProblemInstance::new(
            2,
            BTreeMap::new(),
            vec![Job::new(1, 3), Job::new(2, 3), Job::new(3, 2), Job::new(4, 2), Job::new(5, 2)],
        );
        let builder = ScheduleBuilder::new(&problem);
        assert_eq!(builder.build_from_order(&[0, 1, 2, 3, 4]).makespan, 7);
        assert_eq!(builder.build_from_order(&[0, 2, 3, 1, 4]).makespan, 6);
    }

    #[test]
    fn test_job_multiset_preserved() {
        let problem = ProblemInstance::new(
            3,
            resources(&[("A", 2)]),
            (1..=8)
                .map(|i| Job::new(i, (i as u64 % 4) + 1).with_requirement("A", (i as u64) % 3))
                .collect(),
        );
        let order: Vec<usize> = (0..8).rev().collect();
        let sol = ScheduleBuilder::new(&problem).build_from_order(&order);
        let mut ids: Vec<u32> = sol.jobs.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert!(problem.validate_solution(&sol));
    }

    #[test]
    fn test_problem_not_mutated() {
        let problem = ProblemInstance::new(1, BTreeMap::new(), vec![Job::new(1, 2), Job::new(2, 2)]);
        let before = problem.clone();
        let builder = ScheduleBuilder::new(&problem);
        let a = builder.build_from_order(&[0, 1]);
        let b = builder.build_from_order(&[0, 1]);
        assert_eq!(problem, before);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_sequence() {
        let problem = ProblemInstance::new(2, resources(&[("A", 1)]), Vec::new());
        let sol = ScheduleBuilder::new(&problem).build_from_sequence(&[]);
        assert!(sol.valid);
        assert_eq!(sol.makespan, 0);
        assert!(sol.jobs.is_empty());
    }

    #[test]
    fn test_unused_resources_do_not_constrain() {
        let jobs = vec![Job::new(1, 3), Job::new(2, 3)];
        let with = ProblemInstance::new(2, resources(&[("A", 0)]), jobs.clone());
        let without = ProblemInstance::new(2, BTreeMap::new(), jobs);
        let a = ScheduleBuilder::new(&with).build_from_order(&[0, 1]);
        let b = ScheduleBuilder::new(&without).build_from_order(&[0, 1]);
        assert_eq!(a, b);
        assert_eq!(a.makespan, 3);
    }

    #[test]
    fn test_demand_over_capacity_is_invalid() {
        let problem = ProblemInstance::new(
            2,
            resources(&[("R", 1)]),
            vec![Job::new(1, 2), Job::new(2, 2).with_requirement("R", 2)],
        );
        let sol = ScheduleBuilder::new(&problem).build_from_sequence(&problem.jobs);
        assert!(!sol.valid);
        assert!(sol.jobs.is_empty());
    }

    #[test]
    fn test_zero_duration_job() {
        let problem = ProblemInstance::new(1, BTreeMap::new(), vec![Job::new(1, 3), Job::new(2, 0)]);
        let sol = ScheduleBuilder::new(&problem).build_from_sequence(&problem.jobs);
        assert!(sol.valid);
        assert_eq!(sol.makespan, 3);
        assert_eq!(sol.job(2).and_then(|j| j.start_time), Some(3));
        assert!(problem.validate_solution(&sol));
    }
}
