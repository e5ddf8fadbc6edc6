//! The derived per-(person, day) index of merged busy intervals.

use std::collections::HashMap;

use crate::block::Block;
use crate::day::Day;
use crate::interval::{merge_intervals, Interval};

/// Merged busy intervals keyed by `(person, day)`.
///
/// A pure function of the block collection: rebuild it after every mutation,
/// never patch it in place. Building it eagerly merges every group, so any
/// query that reads the index sees disjoint, sorted intervals.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    merged: HashMap<(String, Day), Vec<Interval>>,
}

impl ScheduleIndex {
    /// Group blocks by `(person, day)` and merge each group's intervals.
    pub fn build(blocks: &[Block]) -> Self {
        let mut raw: HashMap<(String, Day), Vec<Interval>> = HashMap::new();
        for block in blocks {
            raw.entry((block.person.clone(), block.day))
                .or_default()
                .push(block.interval());
        }

        let merged = raw
            .into_iter()
            .map(|(key, intervals)| (key, merge_intervals(&intervals)))
            .collect();

        ScheduleIndex { merged }
    }

    /// The person's merged intervals on `day`; empty when they have none.
    pub fn intervals_for(&self, person: &str, day: Day) -> &[Interval] {
        self.merged
            .get(&(person.to_string(), day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
