//! Genetic search over job orderings.
//!
//! Each individual is a permutation of the instance's jobs, decoded into a
//! schedule by the [`ScheduleBuilder`](crate::builder::ScheduleBuilder); its
//! fitness is the resulting makespan.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population, rates, restarts)
//! - [`GeneticSolver`]: executes the evolutionary loop
//! - [`GaResult`]: best schedule plus per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: order crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GeneticSolver};
pub use selection::tournament;
pub use types::Individual;
