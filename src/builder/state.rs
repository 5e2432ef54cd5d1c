//! Incremental placement state shared by every constructive procedure.
//!
//! Tracks when each machine becomes free, the resource timeline, and the
//! event set `{0} ∪ {completion times}`. Resource availability only changes
//! at job starts and ends, so the earliest feasible start on a machine is
//! normally found among the events at or after the machine's free time.

use std::collections::BTreeSet;

use super::timeline::{Demand, ResourceTable, ResourceTimeline};
use crate::model::Time;

/// A start time on a 1-based machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub start: Time,
    pub machine: usize,
}

pub(crate) struct ScheduleState<'a> {
    table: &'a ResourceTable,
    machine_free: Vec<Time>,
    timeline: ResourceTimeline,
    events: BTreeSet<Time>,
}

impl<'a> ScheduleState<'a> {
    pub(crate) fn new(table: &'a ResourceTable, num_machines: usize) -> Self {
        Self {
            table,
            machine_free: vec![0; num_machines],
            timeline: ResourceTimeline::new(table.len()),
            events: BTreeSet::from([0]),
        }
    }

    /// Latest completion time placed so far (0 when empty).
    pub(crate) fn last_completion(&self) -> Time {
        self.events.last().copied().unwrap_or(0)
    }

    /// Earliest event-time start for a job on `machine` (1-based).
    pub(crate) fn earliest_on_machine(&self, machine: usize, duration: Time, demand: &Demand) -> Option<Time> {
        let free = self.machine_free[machine - 1];
        let lead = (!self.events.contains(&free)).then_some(free);
        lead.into_iter()
            .chain(self.events.range(free..).copied())
            .find(|&t| self.timeline.fits(t, duration, demand, self.table))
    }

    /// Earliest event-time slot over all machines; the lowest machine id
    /// wins ties.
    pub(crate) fn earliest_slot(&self, duration: Time, demand: &Demand) -> Option<Slot> {
        let mut best: Option<Slot> = None;
        for machine in 1..=self.machine_free.len() {
            if let Some(start) = self.earliest_on_machine(machine, duration, demand) {
                if best.is_none_or(|b| start < b.start) {
                    best = Some(Slot { start, machine });
                }
            }
        }
        best
    }

    /// Linear scan of every instant from each machine's free time up to
    /// `last completion + remaining`, for starts that fall strictly between
    /// known events.
    pub(crate) fn fallback_slot(&self, duration: Time, demand: &Demand, remaining: Time) -> Option<Slot> {
        let horizon = self.last_completion() + remaining;
        let mut best: Option<Slot> = None;
        for (i, &free) in self.machine_free.iter().enumerate() {
            let found = (free..=horizon).find(|&t| self.timeline.fits(t, duration, demand, self.table));
            if let Some(start) = found {
                if best.is_none_or(|b| start < b.start) {
                    best = Some(Slot {
                        start,
                        machine: i + 1,
                    });
                }
            }
        }
        best
    }

    /// Event times first, then the bounded linear scan.
    pub(crate) fn find_slot(&self, duration: Time, demand: &Demand, remaining: Time) -> Option<Slot> {
        self.earliest_slot(duration, demand)
            .or_else(|| self.fallback_slot(duration, demand, remaining))
    }

    /// Commits a placement and returns the completion time.
    pub(crate) fn place(&mut self, slot: Slot, duration: Time, demand: &Demand) -> Time {
        let finish = slot.start + duration;
        self.machine_free[slot.machine - 1] = finish;
        self.events.insert(finish);
        self.timeline.occupy(slot.start, finish, demand);
        finish
    }
}
