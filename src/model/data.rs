//! Plain-data exchange record for problem instances.
//!
//! Mirrors the structured record external tools produce:
//!
//! ```json
//! {
//!   "num_machines": 2,
//!   "resources": { "CriticalTool": 1 },
//!   "jobs": [
//!     { "id": 1, "duration": 5, "requirements": { "CriticalTool": 1 } },
//!     { "id": 2, "duration": 25 }
//!   ]
//! }
//! ```
//!
//! Integer resource identifiers must be normalised to strings by the caller.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Job, JobId, ProblemInstance, ResourceId, Time};

/// One job entry of an [`InstanceData`] record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobData {
    pub id: JobId,
    pub duration: Time,
    /// Absent or empty means the job needs no shared resource.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: BTreeMap<ResourceId, u64>,
}

/// External representation of a [`ProblemInstance`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstanceData {
    pub num_machines: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: BTreeMap<ResourceId, u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub jobs: Vec<JobData>,
}

impl From<JobData> for Job {
    fn from(data: JobData) -> Self {
        Job {
            id: data.id,
            duration: data.duration,
            resource_requirements: data.requirements,
            start_time: None,
            assigned_machine: None,
        }
    }
}

impl From<InstanceData> for ProblemInstance {
    fn from(data: InstanceData) -> Self {
        ProblemInstance::new(
            data.num_machines,
            data.resources,
            data.jobs.into_iter().map(Job::from).collect(),
        )
    }
}

impl From<&ProblemInstance> for InstanceData {
    fn from(problem: &ProblemInstance) -> Self {
        InstanceData {
            num_machines: problem.num_machines,
            resources: problem.resources.clone(),
            jobs: problem
                .jobs
                .iter()
                .map(|j| JobData {
                    id: j.id,
                    duration: j.duration,
                    requirements: j.resource_requirements.clone(),
                })
                .collect(),
        }
    }
}
