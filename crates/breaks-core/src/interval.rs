//! Half-open minute intervals and the merge/gap algebra built on them.
//!
//! Sorts intervals by start time, merges overlapping or touching spans into
//! maximal disjoint runs, then computes the gaps between adjacent runs. Every
//! availability query in the crate reduces to these two operations.

use serde::{Deserialize, Serialize};

use crate::clock::Minutes;

/// A half-open span `[start, end)` of minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: Minutes,
    pub end: Minutes,
}

impl Interval {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        Interval { start, end }
    }

    /// Half-open containment: the end minute itself is not inside.
    pub fn contains(&self, t: Minutes) -> bool {
        self.start <= t && t < self.end
    }

    pub fn duration_minutes(&self) -> Minutes {
        self.end.saturating_sub(self.start)
    }
}

/// Merge overlapping or touching intervals into maximal disjoint spans.
///
/// Returns a sorted list where each output interval is maximal and no two
/// outputs overlap or touch. Touching counts as overlap: `[9:00,10:00)` and
/// `[10:00,11:30)` merge into one span. Merging is idempotent and independent
/// of input order.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::new();
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent -- extend the current span.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Gaps strictly between merged intervals.
///
/// Free time before the first interval or after the last is deliberately not
/// reported; a break only exists between two occupied spans.
pub fn gaps_between(intervals: &[Interval]) -> Vec<Interval> {
    let merged = merge_intervals(intervals);

    merged
        .windows(2)
        .filter(|pair| pair[0].end < pair[1].start)
        .map(|pair| Interval::new(pair[0].end, pair[1].start))
        .collect()
}
