//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use tracing_subscriber::{fmt, EnvFilter};
use u_pmsp::model::{Job, ProblemInstance, Solution, Time};

/// Routes solver logs to the test harness; safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Two machines, no resources; LPT yields 7 while 6 is optimal.
pub fn lpt_trap() -> ProblemInstance {
    ProblemInstance::new(
        2,
        BTreeMap::new(),
        vec![Job::new(1, 3), Job::new(2, 3), Job::new(3, 2), Job::new(4, 2), Job::new(5, 2)],
    )
}

/// Five machines but only two units of the shared tool, needed by every job.
pub fn resource_bottleneck() -> ProblemInstance {
    ProblemInstance::new(
        5,
        BTreeMap::from([("R".to_string(), 2)]),
        [6, 8, 10, 12, 14, 15]
            .into_iter()
            .enumerate()
            .map(|(i, d)| Job::new(i as u32 + 1, d).with_requirement("R", 1))
            .collect(),
    )
}

/// One long free job next to three tool-bound jobs and two fillers.
pub fn long_job_with_tool() -> ProblemInstance {
    ProblemInstance::new(
        2,
        BTreeMap::from([("CriticalTool".to_string(), 1)]),
        vec![
            Job::new(1, 5).with_requirement("CriticalTool", 1),
            Job::new(2, 5).with_requirement("CriticalTool", 1),
            Job::new(3, 5).with_requirement("CriticalTool", 1),
            Job::new(4, 25),
            Job::new(5, 1),
            Job::new(6, 1),
        ],
    )
}

/// Peak concurrent demand on `resource` across the schedule.
pub fn peak_usage(solution: &Solution, resource: &str) -> u64 {
    let mut events: Vec<(Time, i64)> = Vec::new();
    for job in &solution.jobs {
        let qty = job.requirement(resource) as i64;
        if qty == 0 || job.duration == 0 {
            continue;
        }
        let start = job.start_time.unwrap_or(0);
        events.push((start, qty));
        events.push((start + job.duration, -qty));
    }
    // releases sort before acquisitions at the same instant
    events.sort();
    let mut used = 0i64;
    let mut peak = 0i64;
    for (_, delta) in events {
        used += delta;
        peak = peak.max(used);
    }
    peak as u64
}
