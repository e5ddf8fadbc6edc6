//! The `Block` record -- one recurring occupied time range for one person.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::day::Day;
use crate::interval::Interval;

/// Opaque unique identifier for a block. Assigned monotonically by the
/// roster; never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One scheduled occupancy: a person is busy from `start` to `end` (half-open)
/// on `day`, every week. The optional room code only matters for filtering,
/// never for the availability math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub person: String,
    pub day: Day,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Block {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start.minutes(), self.end.minutes())
    }

    /// Building letter derived from this block's room, if any.
    pub fn building(&self) -> Option<char> {
        self.room.as_deref().and_then(building)
    }
}

/// The building a room code belongs to: the first character of the trimmed
/// code, uppercased, and only when it is an ASCII letter ("E102" -> 'E').
pub fn building(room: &str) -> Option<char> {
    room.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphabetic)
}

/// Canonical display order: person name, then day, then start time.
///
/// The collection itself is unordered; every listing and every batch import
/// goes through this comparator.
pub fn canonical_cmp(a: &Block, b: &Block) -> Ordering {
    a.person
        .cmp(&b.person)
        .then(a.day.cmp(&b.day))
        .then(a.start.cmp(&b.start))
}
