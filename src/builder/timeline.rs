//! Resource usage over time.
//!
//! Usage is a step function stored as breakpoints: the vector at key `k`
//! holds per-resource usage on `[k, next key)`, and everything before the
//! first key is idle. Marking an interval touches only the breakpoints it
//! spans, and a feasibility check reads the step in force at the candidate
//! start plus every breakpoint inside the job's window. Results are the same
//! as a per-instant usage table.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Job, ProblemInstance, ResourceId, Time};

/// Dense `(resource index, quantity)` pairs for one job.
pub(crate) type Demand = Vec<(usize, u64)>;

/// Resource identifiers resolved to dense indices, with capacities.
///
/// Resources referenced by jobs but missing from the instance are kept
/// with capacity 0.
#[derive(Debug, Clone)]
pub(crate) struct ResourceTable {
    index: HashMap<ResourceId, usize>,
    capacity: Vec<u64>,
}

impl ResourceTable {
    pub(crate) fn new(problem: &ProblemInstance) -> Self {
        let mut index = HashMap::new();
        let mut capacity = Vec::new();
        for (id, &cap) in &problem.resources {
            index.insert(id.clone(), capacity.len());
            capacity.push(cap);
        }
        for job in &problem.jobs {
            for id in job.resource_requirements.keys() {
                if !index.contains_key(id) {
                    index.insert(id.clone(), capacity.len());
                    capacity.push(0);
                }
            }
        }
        Self { index, capacity }
    }

    pub(crate) fn len(&self) -> usize {
        self.capacity.len()
    }

    #[cfg(test)]
    pub(crate) fn capacities(&self) -> &[u64] {
        &self.capacity
    }

    /// Resolves a job's requirements; zero quantities are dropped.
    pub(crate) fn demand(&self, job: &Job) -> Demand {
        job.resource_requirements
            .iter()
            .filter(|&(_, &qty)| qty > 0)
            .map(|(id, &qty)| {
                let idx = match self.index.get(id.as_str()) {
                    Some(&i) => i,
                    // Jobs outside the instance (hand-built sequences) fall
                    // back to an out-of-table index with zero capacity.
                    None => self.capacity.len(),
                };
                (idx, qty)
            })
            .collect()
    }

    fn capacity_of(&self, idx: usize) -> u64 {
        self.capacity.get(idx).copied().unwrap_or(0)
    }
}

/// Exclusively owned usage timeline for a single build.
#[derive(Debug, Clone)]
pub(crate) struct ResourceTimeline {
    steps: BTreeMap<Time, Vec<u64>>,
    width: usize,
}

impl ResourceTimeline {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            steps: BTreeMap::new(),
            width,
        }
    }

    fn usage_at(&self, t: Time) -> Option<&Vec<u64>> {
        self.steps.range(..=t).next_back().map(|(_, usage)| usage)
    }

    /// Whether `demand` can be added on every instant of
    /// `[start, start + duration)` without exceeding capacity.
    pub(crate) fn fits(&self, start: Time, duration: Time, demand: &Demand, table: &ResourceTable) -> bool {
        if duration == 0 || demand.is_empty() {
            return true;
        }
        let within = |usage: Option<&Vec<u64>>| {
            demand.iter().all(|&(r, qty)| {
                let used = usage.and_then(|u| u.get(r)).copied().unwrap_or(0);
                used + qty <= table.capacity_of(r)
            })
        };
        if !within(self.usage_at(start)) {
            return false;
        }
        self.steps
            .range(start + 1..start + duration)
            .all(|(_, usage)| within(Some(usage)))
    }

    /// Adds `demand` on `[start, end)`.
    pub(crate) fn occupy(&mut self, start: Time, end: Time, demand: &Demand) {
        if start >= end || demand.is_empty() {
            return;
        }
        self.split_at(start);
        self.split_at(end);
        for (_, usage) in self.steps.range_mut(start..end) {
            for &(r, qty) in demand {
                if let Some(slot) = usage.get_mut(r) {
                    *slot += qty;
                }
            }
        }
    }

    fn split_at(&mut self, t: Time) {
        if self.steps.contains_key(&t) {
            return;
        }
        let carried = self
            .usage_at(t)
            .cloned()
            .unwrap_or_else(|| vec![0; self.width]);
        self.steps.insert(t, carried);
    }

    #[cfg(test)]
    pub(crate) fn used(&self, t: Time, resource: usize) -> u64 {
        self.usage_at(t)
            .and_then(|u| u.get(resource))
            .copied()
            .unwrap_or(0)
    }
}
