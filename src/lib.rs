//! Resource-constrained parallel-machine scheduling.
//!
//! Places jobs with fixed durations and renewable resource demands onto
//! identical machines, minimizing makespan without ever running two jobs on
//! one machine at once or exceeding a shared resource's capacity.
//!
//! - **Schedule Builder**: list scheduling over event times; every solver
//!   decodes its candidates through it, so all share one feasibility
//!   semantics.
//! - **Greedy**: one schedule per priority rule (LPT, SPT, resource-based
//!   or custom), best kept.
//! - **Earliest-Start**: dynamic list scheduling that always commits the
//!   job able to start soonest.
//! - **Brute Force**: every ordering × every symmetry-reduced machine
//!   partition; the optimality oracle for small instances.
//! - **Genetic Algorithm (GA)**: permutation population with order
//!   crossover, swap mutation, elitism and stagnation restarts.
//! - **Simulated Annealing (SA)**: swap-neighbourhood trajectory with
//!   geometric cooling.
//! - **Tabu Search (TS)**: sampled swap neighbourhood with a FIFO tabu list
//!   and aspiration.
//!
//! # Quick start
//!
//! ```
//! use std::collections::BTreeMap;
//! use u_pmsp::model::{Job, ProblemInstance};
//! use u_pmsp::solver::SolverKind;
//!
//! let problem = ProblemInstance::new(
//!     2,
//!     BTreeMap::from([("crane".to_string(), 1)]),
//!     vec![
//!         Job::new(1, 5).with_requirement("crane", 1),
//!         Job::new(2, 5).with_requirement("crane", 1),
//!         Job::new(3, 4),
//!     ],
//! );
//!
//! let solver = "greedy".parse::<SolverKind>().unwrap().create(None);
//! let solution = solver.solve(&problem).unwrap();
//! assert!(problem.validate_solution(&solution));
//! assert_eq!(solution.makespan, 10);
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` on the model and configs
//! - `parallel`: rayon-backed population evaluation and brute-force
//!   enumeration

pub mod bruteforce;
pub mod builder;
pub mod earliest;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod model;
pub mod random;
pub mod sa;
pub mod solver;
pub mod tabu;

pub use error::ScheduleError;
pub use model::{Job, ProblemInstance, Solution};
pub use solver::{SolveReport, Solver, SolverKind};
