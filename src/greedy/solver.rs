//! Multi-rule greedy solver.

use tracing::instrument;

use super::rules::{priority_order, PriorityRule, StandardRule};
use crate::builder::ScheduleBuilder;
use crate::error::ScheduleError;
use crate::model::{ProblemInstance, Solution, Time};
use crate::solver::{SolveReport, Solver};

/// Outcome of a greedy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyResult {
    /// Best schedule over all rules tried.
    pub best: Solution,
    /// Name of the rule that produced `best`.
    pub best_rule: String,
    /// Makespan per rule, in the order tried; `None` when the rule's
    /// ordering could not be scheduled.
    pub rule_makespans: Vec<(String, Option<Time>)>,
}

/// Builds one schedule per priority rule and keeps the shortest.
///
/// With no rules configured, the four [`StandardRule`]s are tried.
/// Deterministic: equal makespans keep the first rule's schedule.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_pmsp::greedy::{GreedySolver, StandardRule};
/// use u_pmsp::model::{Job, ProblemInstance};
///
/// let problem = ProblemInstance::new(
///     2,
///     BTreeMap::new(),
///     vec![Job::new(1, 3), Job::new(2, 3), Job::new(3, 2), Job::new(4, 2), Job::new(5, 2)],
/// );
/// let result = GreedySolver::new().with_rules([StandardRule::Lpt]).run(&problem);
/// assert_eq!(result.best.makespan, 7);
/// assert_eq!(result.best_rule, "LPT");
/// ```
#[derive(Default)]
pub struct GreedySolver {
    rules: Vec<Box<dyn PriorityRule>>,
}

impl GreedySolver {
    /// Creates a solver that tries every standard rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given standard rules.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = StandardRule>) -> Self {
        for rule in rules {
            self.rules.push(Box::new(rule));
        }
        self
    }

    /// Adds a custom rule.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules this solver will try.
    pub fn rule_names(&self) -> Vec<String> {
        if self.rules.is_empty() {
            StandardRule::ALL.iter().map(|r| r.to_string()).collect()
        } else {
            self.rules.iter().map(|r| r.name().to_string()).collect()
        }
    }

    /// Schedules every rule's ordering and returns the best.
    #[instrument(skip_all, fields(jobs = problem.job_count()))]
    pub fn run(&self, problem: &ProblemInstance) -> GreedyResult {
        let builder = ScheduleBuilder::new(problem);
        let standard = StandardRule::ALL;
        let rules: Vec<&dyn PriorityRule> = if self.rules.is_empty() {
            standard.iter().map(|r| r as &dyn PriorityRule).collect()
        } else {
            self.rules.iter().map(|r| r.as_ref()).collect()
        };

        let mut best: Option<(Solution, String)> = None;
        let mut rule_makespans = Vec::with_capacity(rules.len());

        for rule in rules {
            let order = priority_order(rule, problem);
            let solution = builder.build_from_order(&order);
            tracing::debug!(rule = rule.name(), makespan = solution.makespan, valid = solution.valid);
            rule_makespans.push((rule.name().to_string(), solution.valid.then_some(solution.makespan)));

            let improves = best
                .as_ref()
                .is_none_or(|(b, _)| solution.objective() < b.objective());
            if improves {
                best = Some((solution, rule.name().to_string()));
            }
        }

        let (best, best_rule) = best.unwrap_or_else(|| (Solution::invalid(), String::new()));
        tracing::info!(rule = %best_rule, makespan = best.makespan, "greedy finished");
        GreedyResult {
            best,
            best_rule,
            rule_makespans,
        }
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &str {
        "greedy"
    }

    fn solve_traced(&self, problem: &ProblemInstance) -> Result<SolveReport, ScheduleError> {
        Ok(SolveReport::untraced(self.run(problem).best))
    }
}
