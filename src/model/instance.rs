//! Problem instance model.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Job, JobId, ResourceId, Time};

/// A scheduling problem: identical machines, renewable resources, jobs.
///
/// Constructed without validation; malformed data (e.g. demand above
/// capacity) surfaces later as infeasibility. Solvers only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemInstance {
    /// Number of identical machines, addressed as `1..=num_machines`.
    pub num_machines: usize,
    /// Resource identifier → total capacity, constant over time.
    pub resources: BTreeMap<ResourceId, u64>,
    /// All jobs, in canonical reference order.
    pub jobs: Vec<Job>,
}

impl ProblemInstance {
    /// Creates an instance.
    pub fn new(num_machines: usize, resources: BTreeMap<ResourceId, u64>, jobs: Vec<Job>) -> Self {
        Self {
            num_machines,
            resources,
            jobs,
        }
    }

    /// Capacity of `resource`; unknown resources have capacity 0.
    pub fn capacity(&self, resource: &str) -> u64 {
        self.resources.get(resource).copied().unwrap_or(0)
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Looks up a job by id.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Sum of all job durations.
    pub fn total_duration(&self) -> Time {
        self.jobs.iter().map(|j| j.duration).sum()
    }

    /// Machine-only lower bound on the makespan:
    /// `max(longest job, ceil(total duration / machines))`.
    pub fn makespan_lower_bound(&self) -> Time {
        let longest = self.jobs.iter().map(|j| j.duration).max().unwrap_or(0);
        if self.num_machines == 0 {
            return longest;
        }
        let m = self.num_machines as Time;
        longest.max(self.total_duration().div_ceil(m))
    }

    /// First job whose demand on some resource exceeds that resource's
    /// capacity, as `(job id, resource, required, capacity)`.
    pub fn structural_violation(&self) -> Option<(JobId, &ResourceId, u64, u64)> {
        self.jobs.iter().find_map(|job| {
            job.resource_requirements
                .iter()
                .find_map(|(resource, &qty)| {
                    let capacity = self.capacity(resource);
                    (qty > capacity).then_some((job.id, resource, qty, capacity))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProblemInstance {
        ProblemInstance::new(
            2,
            BTreeMap::from([("A".to_string(), 2)]),
            vec![
                Job::new(1, 5).with_requirement("A", 1),
                Job::new(2, 3),
                Job::new(3, 4).with_requirement("A", 2),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let p = sample();
        assert_eq!(p.job_count(), 3);
        assert_eq!(p.capacity("A"), 2);
        assert_eq!(p.capacity("missing"), 0);
        assert_eq!(p.job(2).map(|j| j.duration), Some(3));
        assert_eq!(p.total_duration(), 12);
    }

    #[test]
    fn test_lower_bound() {
        let p = sample();
        // ceil(12 / 2) = 6 > longest 5
        assert_eq!(p.makespan_lower_bound(), 6);

        let single = ProblemInstance::new(4, BTreeMap::new(), vec![Job::new(1, 9), Job::new(2, 1)]);
        assert_eq!(single.makespan_lower_bound(), 9);

        let empty = ProblemInstance::new(2, BTreeMap::new(), Vec::new());
        assert_eq!(empty.makespan_lower_bound(), 0);
    }

    #[test]
    fn test_structural_violation() {
        assert!(sample().structural_violation().is_none());

        let mut p = sample();
        p.jobs.push(Job::new(4, 1).with_requirement("A", 3));
        let (id, resource, required, capacity) = p.structural_violation().unwrap();
        assert_eq!((id, resource.as_str(), required, capacity), (4, "A", 3, 2));
    }
}
