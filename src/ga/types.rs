//! Population members.

use crate::builder::ScheduleBuilder;
use crate::model::{Solution, Time};

/// A job ordering together with the schedule it decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Permutation of indices into `problem.jobs`.
    pub order: Vec<usize>,
    /// `order` scheduled by the builder.
    pub solution: Solution,
}

impl Individual {
    /// Decodes `order` through the builder.
    pub fn evaluate(builder: &ScheduleBuilder<'_>, order: Vec<usize>) -> Self {
        let solution = builder.build_from_order(&order);
        Self { order, solution }
    }

    /// Lower is better; invalid schedules rank last.
    pub fn fitness(&self) -> Time {
        self.solution.objective()
    }
}
