//! Error types for schedule validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Clock string is not `HH:MM` or is outside the 24-hour range.
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    /// Person name is blank after trimming.
    #[error("Name must not be empty")]
    EmptyName,

    /// End time is not strictly after the start time.
    #[error("End time {end} must be after start time {start}")]
    InvalidRange { start: String, end: String },

    /// Day string is not one of the seven weekday names.
    #[error("Unknown day: {0}")]
    UnknownDay(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
