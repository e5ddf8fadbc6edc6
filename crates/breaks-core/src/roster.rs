//! The block collection: validated insertion, deletion, canonical listing,
//! and CSV interchange.
//!
//! Mutations are atomic from the caller's perspective: either a validated
//! block lands in a freshly re-sorted collection, or nothing changes. Every
//! derived view (sorted listing, people/rooms sets, the schedule index) is
//! recomputed from the current blocks rather than maintained incrementally.

use serde::{Deserialize, Serialize};

use crate::block::{canonical_cmp, Block, BlockId};
use crate::clock::ClockTime;
use crate::csv::{escape_field, field_at, split_row, ColumnMap};
use crate::day::Day;
use crate::error::{Result, ScheduleError};
use crate::schedule::ScheduleIndex;

pub const CSV_HEADER: &str = "Name,Day,Start,End,Room";

/// Outcome of a CSV import: rows that became blocks vs rows silently
/// skipped (missing fields, unknown day, bad clock, empty range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

/// The live block collection and its id counter.
///
/// Ids are assigned monotonically and never reused, so a snapshot that
/// round-trips through serde keeps deletion-safe ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    blocks: Vec<Block>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Validate and insert one block. On success the collection is re-sorted
    /// canonically and the new block's id is returned; on failure the
    /// collection is untouched.
    pub fn add(
        &mut self,
        name: &str,
        day: Day,
        start: &str,
        end: &str,
        room: Option<&str>,
    ) -> Result<BlockId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScheduleError::EmptyName);
        }
        let start: ClockTime = start.parse()?;
        let end: ClockTime = end.parse()?;
        if end <= start {
            return Err(ScheduleError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let room = room.map(str::trim).filter(|r| !r.is_empty()).map(String::from);
        let id = self.fresh_id();
        self.blocks.push(Block {
            id,
            person: name.to_string(),
            day,
            start,
            end,
            room,
        });
        self.blocks.sort_by(canonical_cmp);
        Ok(id)
    }

    /// Delete by id. Removing an unknown id is a no-op; returns whether a
    /// block was actually removed.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// All blocks in canonical order. The collection is kept sorted after
    /// every mutation, so this is just a view.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Distinct person names, sorted.
    pub fn people(&self) -> Vec<String> {
        let mut people: Vec<String> = self.blocks.iter().map(|b| b.person.clone()).collect();
        people.sort();
        people.dedup();
        people
    }

    /// Distinct non-empty room codes, sorted.
    pub fn rooms(&self) -> Vec<String> {
        let mut rooms: Vec<String> = self
            .blocks
            .iter()
            .filter_map(|b| b.room.clone())
            .collect();
        rooms.sort();
        rooms.dedup();
        rooms
    }

    /// Distinct building letters derived from room codes, sorted.
    pub fn buildings(&self) -> Vec<char> {
        let mut buildings: Vec<char> = self.blocks.iter().filter_map(Block::building).collect();
        buildings.sort_unstable();
        buildings.dedup();
        buildings
    }

    /// Derive the merged per-(person, day) index for the current blocks.
    pub fn index(&self) -> ScheduleIndex {
        ScheduleIndex::build(&self.blocks)
    }

    /// Additive CSV import: every row that validates is appended through
    /// [`Roster::add`] (no deduplication against existing blocks). Rows that
    /// don't validate are counted, not errors.
    pub fn import_csv(&mut self, text: &str) -> ImportReport {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let Some(header) = lines.next() else {
            return ImportReport::default();
        };
        let columns = ColumnMap::from_header(header);

        let mut report = ImportReport::default();
        for line in lines {
            let fields = split_row(line);
            let name = field_at(&fields, columns.name);
            let day = field_at(&fields, columns.day);
            let start = field_at(&fields, columns.start);
            let end = field_at(&fields, columns.end);
            let room = field_at(&fields, columns.room);

            let Ok(day) = day.parse::<Day>() else {
                report.skipped += 1;
                continue;
            };
            let room = (!room.is_empty()).then_some(room);
            match self.add(&name, day, &start, &end, room.as_deref()) {
                Ok(_) => report.added += 1,
                Err(_) => report.skipped += 1,
            }
        }
        report
    }

    /// Serialize the collection as `Name,Day,Start,End,Room` rows in the
    /// current collection order.
    pub fn export_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        for block in &self.blocks {
            out.push('\n');
            let row = [
                escape_field(&block.person),
                block.day.to_string(),
                block.start.to_string(),
                block.end.to_string(),
                escape_field(block.room.as_deref().unwrap_or_default()),
            ];
            out.push_str(&row.join(","));
        }
        out
    }

    fn fresh_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }
}
