//! Uniform entry point over every solver.
//!
//! External callers build a [`ProblemInstance`], pick a [`Solver`] (directly
//! or by name through [`SolverKind`]) and call [`Solver::solve`]. Iterative
//! solvers also expose their best-so-far trace through
//! [`Solver::solve_traced`]; the trace is always present, and empty for
//! solvers that do not iterate.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bruteforce::{BruteForceConfig, BruteForceSolver};
use crate::earliest::EarliestStartSolver;
use crate::error::ScheduleError;
use crate::ga::{GaConfig, GeneticSolver};
use crate::greedy::GreedySolver;
use crate::model::{ProblemInstance, Solution, Time};
use crate::sa::{SaConfig, SimulatedAnnealingSolver};
use crate::tabu::{TabuConfig, TabuSearchSolver};

/// A solution together with the search trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Best solution found.
    pub solution: Solution,
    /// Best-so-far makespan per iteration or generation (non-increasing).
    /// Empty for constructive solvers.
    pub history: Vec<Time>,
}

impl SolveReport {
    pub(crate) fn untraced(solution: Solution) -> Self {
        Self {
            solution,
            history: Vec::new(),
        }
    }
}

/// A scheduling algorithm.
pub trait Solver: Send + Sync {
    /// Short display name.
    fn name(&self) -> &str;

    /// Solves `problem`, returning the best solution and its trace.
    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError>;

    /// Solves `problem`, returning only the best solution.
    fn solve(&self, problem: &ProblemInstance) -> Result<Solution, ScheduleError> {
        self.solve_traced(problem).map(|report| report.solution)
    }
}

/// Named solver registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SolverKind {
    Greedy,
    EarliestStart,
    BruteForce,
    Genetic,
    SimulatedAnnealing,
    TabuSearch,
}

impl SolverKind {
    /// Every registered solver.
    pub const ALL: [SolverKind; 6] = [
        SolverKind::Greedy,
        SolverKind::EarliestStart,
        SolverKind::BruteForce,
        SolverKind::Genetic,
        SolverKind::SimulatedAnnealing,
        SolverKind::TabuSearch,
    ];

    /// Canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::EarliestStart => "earliest-start",
            SolverKind::BruteForce => "brute-force",
            SolverKind::Genetic => "genetic",
            SolverKind::SimulatedAnnealing => "simulated-annealing",
            SolverKind::TabuSearch => "tabu-search",
        }
    }

    /// Whether results depend on a random seed.
    pub fn is_stochastic(self) -> bool {
        matches!(
            self,
            SolverKind::Genetic | SolverKind::SimulatedAnnealing | SolverKind::TabuSearch
        )
    }

    /// Instantiates the solver with default parameters and the given seed.
    pub fn create(self, seed: Option<u64>) -> Box<dyn Solver> {
        match self {
            SolverKind::Greedy => Box::new(GreedySolver::new()),
            SolverKind::EarliestStart => Box::new(EarliestStartSolver::new()),
            SolverKind::BruteForce => Box::new(BruteForceSolver::new(BruteForceConfig::default())),
            SolverKind::Genetic => {
                let mut config = GaConfig::default();
                config.seed = seed;
                Box::new(GeneticSolver::new(config))
            }
            SolverKind::SimulatedAnnealing => {
                let mut config = SaConfig::default();
                config.seed = seed;
                Box::new(SimulatedAnnealingSolver::new(config))
            }
            SolverKind::TabuSearch => {
                let mut config = TabuConfig::default();
                config.seed = seed;
                Box::new(TabuSearchSolver::new(config))
            }
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "greedy" => SolverKind::Greedy,
            "earliest-start" | "earliest" | "est" => SolverKind::EarliestStart,
            "brute-force" | "bruteforce" | "exhaustive" => SolverKind::BruteForce,
            "genetic" | "ga" => SolverKind::Genetic,
            "simulated-annealing" | "annealing" | "sa" => SolverKind::SimulatedAnnealing,
            "tabu-search" | "tabu" | "ts" => SolverKind::TabuSearch,
            _ => return Err(ScheduleError::UnknownSolver(s.to_string())),
        };
        Ok(kind)
    }
}
