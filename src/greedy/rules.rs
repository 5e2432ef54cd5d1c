//! Priority rules for greedy list scheduling.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::model::{Job, ProblemInstance};

/// A scoring rule that ranks jobs for list scheduling.
///
/// Rules return `f64` scores where **lower is higher priority**. The
/// instance is passed as context so a rule may weigh a job's demand
/// against capacities.
///
/// # Examples
///
/// ```
/// use u_pmsp::greedy::PriorityRule;
/// use u_pmsp::model::{Job, ProblemInstance};
///
/// // Lowest identifier first
/// struct ById;
///
/// impl PriorityRule for ById {
///     fn name(&self) -> &str { "ById" }
///     fn score(&self, job: &Job, _problem: &ProblemInstance) -> f64 {
///         job.id as f64
///     }
/// }
/// ```
pub trait PriorityRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for `job`. Lower scores go first.
    fn score(&self, job: &Job, problem: &ProblemInstance) -> f64;
}

/// Indices into `problem.jobs` sorted by `rule`.
///
/// The sort is stable: jobs with equal scores keep their canonical order.
pub fn priority_order(rule: &dyn PriorityRule, problem: &ProblemInstance) -> Vec<usize> {
    let scores: Vec<f64> = problem.jobs.iter().map(|job| rule.score(job, problem)).collect();
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));
    indices
}

/// The four built-in dispatching rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StandardRule {
    /// Longest Processing Time first.
    Lpt,
    /// Shortest Processing Time first.
    Spt,
    /// Most distinct resource types first.
    MostResourceTypes,
    /// Largest summed resource quantity first.
    MostTotalResources,
}

impl StandardRule {
    /// All standard rules, in the order the greedy solver tries them.
    pub const ALL: [StandardRule; 4] = [
        StandardRule::Lpt,
        StandardRule::Spt,
        StandardRule::MostResourceTypes,
        StandardRule::MostTotalResources,
    ];
}

impl PriorityRule for StandardRule {
    fn name(&self) -> &str {
        match self {
            StandardRule::Lpt => "LPT",
            StandardRule::Spt => "SPT",
            StandardRule::MostResourceTypes => "HeavyResource",
            StandardRule::MostTotalResources => "MostTotalResources",
        }
    }

    fn score(&self, job: &Job, _problem: &ProblemInstance) -> f64 {
        // negate: larger value = lower score = higher priority
        match self {
            StandardRule::Lpt => -(job.duration as f64),
            StandardRule::Spt => job.duration as f64,
            StandardRule::MostResourceTypes => -(job.resource_type_count() as f64),
            StandardRule::MostTotalResources => -(job.total_requirement() as f64),
        }
    }
}

impl fmt::Display for StandardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardRule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lpt" => Ok(StandardRule::Lpt),
            "spt" => Ok(StandardRule::Spt),
            "heavyresource" | "mostresourcetypes" => Ok(StandardRule::MostResourceTypes),
            "mosttotalresources" => Ok(StandardRule::MostTotalResources),
            _ => Err(ScheduleError::config(format!("unknown priority rule '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn problem() -> ProblemInstance {
        ProblemInstance::new(
            2,
            BTreeMap::from([("A".to_string(), 3), ("B".to_string(), 3)]),
            vec![
                Job::new(1, 2).with_requirement("A", 3),
                Job::new(2, 5),
                Job::new(3, 2).with_requirement("A", 1).with_requirement("B", 1),
                Job::new(4, 5).with_requirement("B", 1),
            ],
        )
    }

    #[test]
    fn test_lpt_stable_on_ties() {
        let p = problem();
        assert_eq!(priority_order(&StandardRule::Lpt, &p), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_spt() {
        let p = problem();
        assert_eq!(priority_order(&StandardRule::Spt, &p), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_resource_rules() {
        let p = problem();
        assert_eq!(priority_order(&StandardRule::MostResourceTypes, &p), vec![2, 0, 3, 1]);
        assert_eq!(priority_order(&StandardRule::MostTotalResources, &p), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_parse_rule_names() {
        for rule in StandardRule::ALL {
            assert_eq!(rule.name().parse::<StandardRule>(), Ok(rule));
        }
        assert_eq!("lpt".parse::<StandardRule>(), Ok(StandardRule::Lpt));
        assert!(matches!(
            "EDD".parse::<StandardRule>(),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_instance() {
        let p = ProblemInstance::new(1, BTreeMap::new(), Vec::new());
        assert!(priority_order(&StandardRule::Lpt, &p).is_empty());
    }
}
