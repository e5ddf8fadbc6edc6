//! Availability queries over the block collection.
//!
//! Per-instant busy checks read raw blocks directly; break and common-free
//! computations go through merged intervals. All functions are pure -- they
//! take the blocks (or a prebuilt [`ScheduleIndex`]) and return plain data
//! for the caller to render.

use std::collections::BTreeSet;

use crate::block::Block;
use crate::clock::{ClockTime, Minutes};
use crate::day::Day;
use crate::interval::{gaps_between, Interval};
use crate::schedule::ScheduleIndex;

/// Fallback bounds for a free window with no busy neighbor on one side:
/// 00:00 below and 23:59 above. The upper bound is one minute short of
/// midnight, matching how full-day windows have always been reported.
const DAY_START: Minutes = 0;
const DAY_END: Minutes = 24 * 60 - 1;

/// Optional restriction applied to the free-people universe.
///
/// Both fields are existence filters on that day's blocks: a person passes
/// the room filter when they have *some* block in that room on the query day,
/// not when they are in it at the query time. Room codes compare
/// case-insensitively; the building is the room's leading letter.
#[derive(Debug, Clone, Default)]
pub struct FreeFilter {
    pub room: Option<String>,
    pub building: Option<char>,
}

impl FreeFilter {
    fn admits(&self, blocks: &[Block], person: &str, day: Day) -> bool {
        if let Some(room) = &self.room {
            let hit = blocks.iter().any(|b| {
                b.person == person
                    && b.day == day
                    && b.room
                        .as_deref()
                        .is_some_and(|r| r.eq_ignore_ascii_case(room))
            });
            if !hit {
                return false;
            }
        }
        if let Some(wanted) = self.building {
            let hit = blocks
                .iter()
                .any(|b| b.person == person && b.day == day && b.building() == Some(wanted));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// A person's next busy block after a query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextBlock {
    pub start: ClockTime,
    pub room: Option<String>,
}

/// One row of a common-free result: the bounding free window around the
/// query time for one free person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonFree {
    pub person: String,
    pub window: Interval,
}

/// Is the person inside some block's half-open interval at `(day, t)`?
///
/// A block ending exactly at `t` does not count; one starting at `t` does.
pub fn is_busy(blocks: &[Block], person: &str, day: Day, t: ClockTime) -> bool {
    blocks
        .iter()
        .filter(|b| b.person == person && b.day == day)
        .any(|b| b.interval().contains(t.minutes()))
}

/// Everyone known to the collection who is not busy at `(day, t)`, sorted,
/// after applying the room/building existence filter.
pub fn free_people(blocks: &[Block], day: Day, t: ClockTime, filter: &FreeFilter) -> Vec<String> {
    let everyone: BTreeSet<&str> = blocks.iter().map(|b| b.person.as_str()).collect();

    everyone
        .into_iter()
        .filter(|person| !is_busy(blocks, person, day, t))
        .filter(|person| filter.admits(blocks, person, day))
        .map(str::to_string)
        .collect()
}

/// The person's first block on `day` starting strictly after `t`, or `None`
/// when they are free for the remainder of the day.
pub fn next_window(blocks: &[Block], person: &str, day: Day, t: ClockTime) -> Option<NextBlock> {
    blocks
        .iter()
        .filter(|b| b.person == person && b.day == day && b.start > t)
        .min_by_key(|b| b.start)
        .map(|b| NextBlock {
            start: b.start,
            room: b.room.clone(),
        })
}

/// Gaps between the person's merged busy intervals on `day`.
pub fn person_breaks(blocks: &[Block], person: &str, day: Day) -> Vec<Interval> {
    let intervals: Vec<Interval> = blocks
        .iter()
        .filter(|b| b.person == person && b.day == day)
        .map(Block::interval)
        .collect();

    gaps_between(&intervals)
}

/// For each candidate free at `(day, t)`, the maximal free window around `t`
/// bounded by their merged busy intervals.
///
/// A person with no blocks on `day` gets the full day. With busy time on one
/// side only, the missing bound falls back to the day edge.
pub fn common_free_window(
    index: &ScheduleIndex,
    day: Day,
    t: ClockTime,
    people: &[String],
) -> Vec<CommonFree> {
    let t = t.minutes();
    let mut rows = Vec::new();

    for person in people {
        let merged = index.intervals_for(person, day);

        if merged.iter().any(|iv| iv.contains(t)) {
            continue;
        }
        if merged.is_empty() {
            rows.push(CommonFree {
                person: person.clone(),
                window: Interval::new(DAY_START, DAY_END),
            });
            continue;
        }

        let prev_end = merged.iter().filter(|iv| iv.end <= t).map(|iv| iv.end).max();
        let next_start = merged
            .iter()
            .filter(|iv| iv.start > t)
            .map(|iv| iv.start)
            .min();

        let window = match (prev_end, next_start) {
            (Some(lo), Some(hi)) => Interval::new(lo, hi),
            (None, Some(hi)) => Interval::new(DAY_START, hi),
            (Some(lo), None) => Interval::new(lo, DAY_END),
            // Unreachable: a non-empty merged list either contains t (the
            // person was skipped) or bounds it on at least one side.
            (None, None) => continue,
        };

        rows.push(CommonFree {
            person: person.clone(),
            window,
        });
    }

    rows
}
