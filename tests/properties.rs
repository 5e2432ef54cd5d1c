//! Property checks over randomly generated instances.

use std::collections::BTreeMap;

use proptest::prelude::*;
use u_pmsp::builder::ScheduleBuilder;
use u_pmsp::bruteforce::{BruteForceConfig, BruteForceSolver};
use u_pmsp::greedy::GreedySolver;
use u_pmsp::model::{Job, ProblemInstance};

const RESOURCES: [&str; 2] = ["A", "B"];

/// Instances where every job fits its resources, with a shuffled order.
fn instance_and_order(max_jobs: usize) -> impl Strategy<Value = (ProblemInstance, Vec<usize>)> {
    (1usize..=4, 1u64..=3, 1u64..=3)
        .prop_flat_map(move |(machines, cap_a, cap_b)| {
            let job = (1u64..=10, 0..=cap_a, 0..=cap_b);
            (Just((machines, cap_a, cap_b)), prop::collection::vec(job, 0..=max_jobs))
        })
        .prop_flat_map(|((machines, cap_a, cap_b), specs)| {
            let jobs: Vec<Job> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (duration, a, b))| {
                    let mut job = Job::new(i as u32 + 1, duration);
                    if a > 0 {
                        job = job.with_requirement(RESOURCES[0], a);
                    }
                    if b > 0 {
                        job = job.with_requirement(RESOURCES[1], b);
                    }
                    job
                })
                .collect();
            let order: Vec<usize> = (0..jobs.len()).collect();
            let resources = BTreeMap::from([
                (RESOURCES[0].to_string(), cap_a),
                (RESOURCES[1].to_string(), cap_b),
            ]);
            (
                Just(ProblemInstance::new(machines, resources, jobs)),
                Just(order).prop_shuffle(),
            )
        })
}

fn no_resource_instance(max_jobs: usize) -> impl Strategy<Value = ProblemInstance> {
    (1usize..=3, prop::collection::vec(1u64..=9, 0..=max_jobs)).prop_map(|(machines, durations)| {
        let jobs = durations
            .into_iter()
            .enumerate()
            .map(|(i, d)| Job::new(i as u32 + 1, d))
            .collect();
        ProblemInstance::new(machines, BTreeMap::new(), jobs)
    })
}

proptest! {
    #[test]
    fn builder_places_every_job_once((problem, order) in instance_and_order(10)) {
        let solution = ScheduleBuilder::new(&problem).build_from_order(&order);
        prop_assert!(solution.valid);

        let mut placed: Vec<u32> = solution.jobs.iter().map(|j| j.id).collect();
        placed.sort_unstable();
        let expected: Vec<u32> = problem.jobs.iter().map(|j| j.id).collect();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn builder_output_is_feasible((problem, order) in instance_and_order(10)) {
        let solution = ScheduleBuilder::new(&problem).build_from_order(&order);
        prop_assert!(problem.validate_solution(&solution));
        // validation is a pure check
        prop_assert!(problem.validate_solution(&solution));

        let latest = solution
            .jobs
            .iter()
            .filter_map(|j| j.completion_time())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(solution.makespan, latest);
        prop_assert!(solution.makespan >= problem.makespan_lower_bound());
    }

    #[test]
    fn builder_is_deterministic((problem, order) in instance_and_order(8)) {
        let builder = ScheduleBuilder::new(&problem);
        prop_assert_eq!(builder.build_from_order(&order), builder.build_from_order(&order));
    }

    #[test]
    fn greedy_respects_lower_bound((problem, _order) in instance_and_order(10)) {
        let result = GreedySolver::new().run(&problem);
        prop_assert!(problem.validate_solution(&result.best));
        prop_assert!(result.best.makespan >= problem.makespan_lower_bound());
        prop_assert_eq!(result.rule_makespans.len(), 4);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn brute_force_never_loses_to_greedy(problem in no_resource_instance(5)) {
        let exact = BruteForceSolver::new(BruteForceConfig::default()).run(&problem).unwrap();
        let greedy = GreedySolver::new().run(&problem);
        prop_assert!(problem.validate_solution(&exact.best));
        prop_assert!(exact.best.makespan <= greedy.best.makespan);
        prop_assert!(exact.best.makespan >= problem.makespan_lower_bound());
    }
}
