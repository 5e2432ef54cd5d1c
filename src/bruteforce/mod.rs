//! Exhaustive search for small instances.
//!
//! Explores every job ordering combined with every symmetry-reduced
//! partition of the jobs over the (interchangeable) machines. Exponential
//! in the number of jobs; intended as the optimality oracle for toy
//! instances and for checking the heuristics against.
//!
//! # Key Types
//!
//! - [`BruteForceConfig`]: size guard and parallelism
//! - [`BruteForceSolver`]: runs the enumeration
//! - [`Permutations`], [`Partitions`]: lazy, restartable enumerators

mod config;
mod enumerate;
mod solver;

pub use config::BruteForceConfig;
pub use enumerate::{Partitions, Permutations};
pub use solver::{BruteForceResult, BruteForceSolver};
