//! Job model.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{JobId, ResourceId, Time};

/// A non-preemptive job to be placed on one machine.
///
/// `start_time` and `assigned_machine` stay `None` in a
/// [`ProblemInstance`](super::ProblemInstance); only the copies held by a
/// [`Solution`](super::Solution) carry a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Stable identifier, unique within an instance.
    pub id: JobId,
    /// Processing time in time units.
    pub duration: Time,
    /// Resource identifier → quantity held for the whole duration.
    pub resource_requirements: BTreeMap<ResourceId, u64>,
    /// Start instant, once placed.
    pub start_time: Option<Time>,
    /// 1-based machine index, once placed.
    pub assigned_machine: Option<usize>,
}

impl Job {
    /// Creates a job with no resource requirements.
    pub fn new(id: JobId, duration: Time) -> Self {
        Self {
            id,
            duration,
            resource_requirements: BTreeMap::new(),
            start_time: None,
            assigned_machine: None,
        }
    }

    /// Adds (or replaces) a resource requirement.
    pub fn with_requirement(mut self, resource: impl Into<ResourceId>, quantity: u64) -> Self {
        self.resource_requirements.insert(resource.into(), quantity);
        self
    }

    /// Quantity of `resource` this job holds while running (0 if none).
    pub fn requirement(&self, resource: &str) -> u64 {
        self.resource_requirements.get(resource).copied().unwrap_or(0)
    }

    /// Number of distinct resource types required.
    pub fn resource_type_count(&self) -> usize {
        self.resource_requirements.len()
    }

    /// Sum of all required quantities.
    pub fn total_requirement(&self) -> u64 {
        self.resource_requirements.values().sum()
    }

    /// Whether both placement fields are set.
    pub fn is_placed(&self) -> bool {
        self.start_time.is_some() && self.assigned_machine.is_some()
    }

    /// `start_time + duration`, once placed.
    pub fn completion_time(&self) -> Option<Time> {
        self.start_time.map(|s| s + self.duration)
    }

    /// A fresh copy carrying the given placement.
    pub(crate) fn placed_at(&self, start: Time, machine: usize) -> Job {
        Job {
            id: self.id,
            duration: self.duration,
            resource_requirements: self.resource_requirements.clone(),
            start_time: Some(start),
            assigned_machine: Some(machine),
        }
    }
}
