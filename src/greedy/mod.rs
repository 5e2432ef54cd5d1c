//! Greedy list scheduling driven by priority rules.
//!
//! Each [`PriorityRule`] ranks the jobs; the ranking is handed to the
//! [`ScheduleBuilder`](crate::builder::ScheduleBuilder) and the shortest
//! resulting schedule is kept. Rules are pluggable: the four
//! [`StandardRule`]s cover duration- and resource-based dispatching, and
//! callers may add their own.
//!
//! # References
//!
//! Dispatching rules: Pinedo (2016), "Scheduling: Theory, Algorithms, and
//! Systems"; LPT bound: Graham (1969), "Bounds on Multiprocessing Timing
//! Anomalies"

mod rules;
mod solver;

pub use rules::{priority_order, PriorityRule, StandardRule};
pub use solver::{GreedyResult, GreedySolver};
