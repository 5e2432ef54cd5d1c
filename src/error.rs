//! Error types shared by all solvers.

use thiserror::Error;

use crate::model::{JobId, ResourceId};

/// Errors surfaced by solver entry points.
///
/// Search outcomes that merely fail to find a schedule are *not* errors:
/// they come back as [`Solution::invalid`](crate::model::Solution::invalid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A job demands more of a resource than its total capacity, so no
    /// start time can ever satisfy it.
    #[error("job {job_id} requires {required} of resource '{resource}', but capacity is {capacity}")]
    Infeasible {
        job_id: JobId,
        resource: ResourceId,
        required: u64,
        capacity: u64,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The instance is larger than an exhaustive solver accepts.
    #[error("instance has {jobs} jobs, but the solver accepts at most {limit}")]
    TooLarge { jobs: usize, limit: usize },

    /// No solver is registered under this name.
    #[error("unknown solver '{0}'")]
    UnknownSolver(String),
}

impl ScheduleError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ScheduleError::InvalidConfig(message.into())
    }
}
