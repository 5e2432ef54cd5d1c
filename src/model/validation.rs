//! Ground-truth feasibility check for solutions.
//!
//! Independent of how a schedule was built: machine exclusivity is
//! recomputed by sorting each machine's intervals and resource usage by
//! scanning every integer instant from 0 to the makespan. Deliberately
//! unoptimised.

use std::collections::BTreeMap;

use thiserror::Error;

use super::{JobId, ProblemInstance, ResourceId, Solution, Time};

/// The first broken invariant found in a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A job is missing its start time or machine.
    #[error("job {job_id} is not assigned")]
    Unassigned { job_id: JobId },

    /// A job sits on a machine outside `1..=num_machines`.
    #[error("job {job_id} is assigned to unknown machine {machine}")]
    UnknownMachine { job_id: JobId, machine: usize },

    /// Two jobs overlap on the same machine.
    #[error("jobs {first} and {second} overlap on machine {machine}")]
    MachineOverlap {
        machine: usize,
        first: JobId,
        second: JobId,
    },

    /// The reported makespan differs from the latest completion time.
    #[error("reported makespan {reported} but latest completion is {actual}")]
    MakespanMismatch { reported: Time, actual: Time },

    /// Concurrent demand exceeds a resource's capacity.
    #[error("resource '{resource}' overloaded at time {time}: used {used}, capacity {capacity}")]
    ResourceOverload {
        resource: ResourceId,
        time: Time,
        used: u64,
        capacity: u64,
    },
}

impl ProblemInstance {
    /// Returns `true` iff every job is placed, no machine runs two jobs at
    /// once, no resource is ever over capacity, and the makespan is exact.
    ///
    /// Running it twice on the same solution yields the same answer.
    pub fn validate_solution(&self, solution: &Solution) -> bool {
        match self.check_solution(solution) {
            Ok(()) => true,
            Err(violation) => {
                tracing::debug!(%violation, "solution rejected");
                false
            }
        }
    }

    /// Like [`validate_solution`](Self::validate_solution), but reports
    /// which invariant failed first.
    pub fn check_solution(&self, solution: &Solution) -> Result<(), Violation> {
        // 1. Every job placed, on a known machine.
        let mut per_machine: BTreeMap<usize, Vec<(Time, Time, JobId)>> = BTreeMap::new();
        for job in &solution.jobs {
            let (Some(start), Some(machine)) = (job.start_time, job.assigned_machine) else {
                return Err(Violation::Unassigned { job_id: job.id });
            };
            if machine == 0 || machine > self.num_machines {
                return Err(Violation::UnknownMachine {
                    job_id: job.id,
                    machine,
                });
            }
            per_machine
                .entry(machine)
                .or_default()
                .push((start, start + job.duration, job.id));
        }

        // 2. Machine exclusivity.
        for (&machine, intervals) in per_machine.iter_mut() {
            intervals.sort_unstable();
            for pair in intervals.windows(2) {
                if pair[0].1 > pair[1].0 {
                    return Err(Violation::MachineOverlap {
                        machine,
                        first: pair[0].2,
                        second: pair[1].2,
                    });
                }
            }
        }

        // 3. Exact makespan.
        let actual = solution
            .jobs
            .iter()
            .filter_map(|j| j.completion_time())
            .max()
            .unwrap_or(0);
        if actual != solution.makespan {
            return Err(Violation::MakespanMismatch {
                reported: solution.makespan,
                actual,
            });
        }

        // 4. Resource capacity at every instant.
        for t in 0..=solution.makespan {
            let mut usage: BTreeMap<&str, u64> = BTreeMap::new();
            for job in &solution.jobs {
                let start = job.start_time.unwrap_or(0);
                if start <= t && t < start + job.duration {
                    for (resource, qty) in &job.resource_requirements {
                        *usage.entry(resource.as_str()).or_insert(0) += qty;
                    }
                }
            }
            for (resource, used) in usage {
                let capacity = self.capacity(resource);
                if used > capacity {
                    return Err(Violation::ResourceOverload {
                        resource: resource.to_string(),
                        time: t,
                        used,
                        capacity,
                    });
                }
            }
        }

        Ok(())
    }
}
