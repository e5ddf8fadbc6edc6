//! # breaks-core
//!
//! Pure availability engine for a recurring weekly timetable.
//!
//! Records are flat `(person, day, start, end[, room])` blocks. The engine
//! merges each person's blocks into disjoint busy intervals per day and
//! answers the scheduling questions built on them: who is busy or free at an
//! instant, what breaks a person has, and the bounding free window several
//! people share around a query time. Everything is a deterministic,
//! synchronous function of the in-memory collection -- persistence and
//! presentation live in the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use breaks_core::{person_breaks, Day, Roster};
//!
//! let mut roster = Roster::new();
//! roster.add("Bob", Day::Monday, "09:00", "10:00", None).unwrap();
//! roster.add("Bob", Day::Monday, "11:00", "12:00", None).unwrap();
//!
//! let breaks = person_breaks(roster.blocks(), "Bob", Day::Monday);
//! assert_eq!(breaks.len(), 1);
//! assert_eq!((breaks[0].start, breaks[0].end), (600, 660)); // 10:00-11:00
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` parsing/formatting and minute arithmetic
//! - [`interval`] — half-open interval merge and gap algebra
//! - [`day`] — the weekday enumeration
//! - [`block`] — the `Block` record, ids, canonical ordering
//! - [`schedule`] — derived per-(person, day) merged-interval index
//! - [`query`] — busy/free/breaks/common-free queries
//! - [`roster`] — the validated collection plus CSV interchange
//! - [`error`] — error types

pub mod block;
pub mod clock;
mod csv;
pub mod day;
pub mod error;
pub mod interval;
pub mod query;
pub mod roster;
pub mod schedule;

pub use block::{building, canonical_cmp, Block, BlockId};
pub use clock::{format_duration, format_minutes, ClockTime, Minutes};
pub use day::Day;
pub use error::ScheduleError;
pub use interval::{gaps_between, merge_intervals, Interval};
pub use query::{
    common_free_window, free_people, is_busy, next_window, person_breaks, CommonFree, FreeFilter,
    NextBlock,
};
pub use roster::{ImportReport, Roster, CSV_HEADER};
pub use schedule::ScheduleIndex;
