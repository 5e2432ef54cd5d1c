//! Simulated Annealing over job orderings.
//!
//! A single trajectory through permutation space: each step swaps two
//! positions of the current ordering and accepts the neighbour by the
//! Metropolis criterion while the temperature cools geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical approach to the traveling salesman problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SimulatedAnnealingSolver};
