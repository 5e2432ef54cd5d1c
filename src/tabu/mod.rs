//! Tabu Search over job orderings.
//!
//! Samples random swap moves around the current ordering and always moves
//! to the best admissible one, even when it is worse. Recently used moves,
//! identified by the unordered pair of job ids swapped, are forbidden for
//! `tabu_tenure` iterations unless they yield a new global best.
//!
//! # References
//!
//! - Glover (1989), "Tabu Search: Part I", *ORSA Journal on Computing* 1(3)
//! - Glover (1990), "Tabu Search: Part II", *ORSA Journal on Computing* 2(1)

mod config;
mod runner;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuSearchSolver};
