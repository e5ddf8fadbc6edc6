//! Best-effort JSON persistence for the roster.
//!
//! The snapshot is the serialized roster itself (blocks with `HH:MM` strings
//! plus the id counter). A missing, unreadable, or corrupt snapshot never
//! blocks startup -- the CLI falls back to an empty roster and the next
//! mutation rewrites the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use breaks_core::Roster;

/// Load the roster from `path`, substituting an empty roster when the file
/// is absent or does not parse.
pub fn load(path: &Path) -> Roster {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

/// Persist the full roster. Called after every successful mutation.
pub fn save(path: &Path, roster: &Roster) -> Result<()> {
    let json = serde_json::to_string_pretty(roster)?;
    fs::write(path, json).with_context(|| format!("Failed to write store: {}", path.display()))
}
