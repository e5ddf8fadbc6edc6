//! Clock-time parsing and formatting.
//!
//! The engine works in integer minutes since midnight; `HH:MM` strings exist
//! only at the edges (user input, CSV, the persistence snapshot). Parsing is
//! the single validation gate for clock values -- anything that survives it
//! is a minute offset in [0, 1440).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Minutes since midnight.
pub type Minutes = u16;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Serializes as a zero-padded `HH:MM` string so snapshots and CSV rows stay
/// human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Minutes);

impl ClockTime {
    /// Build from a raw minute offset. The offset is taken modulo 1440, so
    /// callers doing arithmetic near the day boundary get a valid time back.
    pub fn from_minutes(minutes: Minutes) -> Self {
        ClockTime(minutes % MINUTES_PER_DAY)
    }

    pub fn minutes(self) -> Minutes {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    /// Accepts exactly `HH:MM` with two digits on each side, hour 0-23 and
    /// minute 0-59. Everything else is `ScheduleError::InvalidClock`.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit();
        if !shape_ok {
            return Err(ScheduleError::InvalidClock(s.to_string()));
        }

        let hour: Minutes = (bytes[0] - b'0') as Minutes * 10 + (bytes[1] - b'0') as Minutes;
        let minute: Minutes = (bytes[3] - b'0') as Minutes * 10 + (bytes[4] - b'0') as Minutes;
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidClock(s.to_string()));
        }

        Ok(ClockTime(hour * 60 + minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Format a minute offset as `HH:MM`. The offset is taken modulo 1440.
pub fn format_minutes(minutes: Minutes) -> String {
    ClockTime::from_minutes(minutes).to_string()
}

/// Human-readable duration: `"1h 5m"` at an hour or more, `"45 mins"` below.
pub fn format_duration(minutes: Minutes) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{} mins", rest)
    }
}
