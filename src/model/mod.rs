//! Domain model: jobs, problem instances, solutions and the validator.
//!
//! # Key Types
//!
//! - [`Job`]: a job with a duration and per-resource demand
//! - [`ProblemInstance`]: machines, resource capacities and jobs (read-only)
//! - [`Solution`]: a placed job collection with its makespan
//! - [`InstanceData`]: the plain exchange record external tools produce
//!
//! [`ProblemInstance::validate_solution`] is the ground-truth check every
//! solver's output can be held against.

mod data;
mod instance;
mod job;
mod solution;
mod validation;

pub use data::{InstanceData, JobData};
pub use instance::ProblemInstance;
pub use job::Job;
pub use solution::Solution;
pub use validation::Violation;

/// Job identifier.
pub type JobId = u32;

/// Resource identifier.
pub type ResourceId = String;

/// Discrete time instant / duration.
pub type Time = u64;
