//! `breaks` CLI — record weekly lesson blocks and query who is free when.
//!
//! ## Usage
//!
//! ```sh
//! # Record a block (room is optional)
//! breaks add Alice Monday 09:00 10:10 --room E102
//!
//! # Who is free right now? (day/time default to the current local clock)
//! breaks free
//! breaks free --day Monday --time 10:30 --building E
//!
//! # A person's breaks on a day
//! breaks breaks Alice --day Monday
//!
//! # Who shares a free window at a time, and how big is it?
//! breaks common --day Monday --time 10:30
//!
//! # CSV interchange (Name,Day,Start,End,Room)
//! breaks import timetable.csv
//! breaks export timetable.csv
//! ```
//!
//! State lives in a JSON snapshot (`--store`, default `timetable.json`),
//! loaded at startup and rewritten after every mutation.

mod store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use clap::{Parser, Subcommand};

use breaks_core::{
    common_free_window, format_duration, free_people, next_window, person_breaks, ClockTime, Day,
    FreeFilter,
};

#[derive(Parser)]
#[command(name = "breaks", version, about = "Weekly timetable and break finder")]
struct Cli {
    /// Path of the JSON snapshot holding the block collection
    #[arg(long, global = true, default_value = "timetable.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a weekly lesson block
    Add {
        /// Person the block belongs to
        name: String,
        /// Day of the week (e.g. Monday)
        day: Day,
        /// Start time, HH:MM
        start: String,
        /// End time, HH:MM (must be after start)
        end: String,
        /// Room code (e.g. E102); its leading letter is the building
        #[arg(long)]
        room: Option<String>,
    },
    /// Delete one block by id
    Delete { id: u64 },
    /// Remove every block
    Clear,
    /// List all blocks in canonical order
    List,
    /// List everyone known to the timetable
    People,
    /// List every room code seen in the timetable
    Rooms,
    /// Show who is free at a day/time, with their next block
    Free {
        /// Day to query (defaults to today)
        #[arg(long)]
        day: Option<Day>,
        /// Time to query, HH:MM (defaults to now)
        #[arg(long)]
        time: Option<ClockTime>,
        /// Only people with a block in this room that day
        #[arg(long)]
        room: Option<String>,
        /// Only people with a block in this building that day
        #[arg(long)]
        building: Option<char>,
    },
    /// Show a person's breaks on a day
    Breaks {
        name: String,
        /// Day to query (defaults to today)
        #[arg(long)]
        day: Option<Day>,
    },
    /// Show each free person's bounding free window around a time
    Common {
        /// Day to query (defaults to today)
        #[arg(long)]
        day: Option<Day>,
        /// Time to query, HH:MM (defaults to now)
        #[arg(long)]
        time: Option<ClockTime>,
    },
    /// Append blocks from a CSV file (Name,Day,Start,End,Room)
    Import { file: PathBuf },
    /// Write the timetable as CSV (stdout if no file given)
    Export { file: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut roster = store::load(&cli.store);

    match cli.command {
        Commands::Add {
            name,
            day,
            start,
            end,
            room,
        } => {
            let id = roster.add(&name, day, &start, &end, room.as_deref())?;
            store::save(&cli.store, &roster)?;
            println!("Added block {}", id);
        }
        Commands::Delete { id } => {
            if roster.remove(breaks_core::BlockId(id)) {
                store::save(&cli.store, &roster)?;
                println!("Deleted block {}", id);
            } else {
                println!("No block with id {}", id);
            }
        }
        Commands::Clear => {
            roster.clear();
            store::save(&cli.store, &roster)?;
            println!("Cleared all blocks");
        }
        Commands::List => {
            if roster.is_empty() {
                println!("No blocks yet. Add some or import a CSV.");
            }
            for b in roster.blocks() {
                println!(
                    "{:>4}  {:<20} {:<9} {}–{}  {}",
                    b.id,
                    b.person,
                    b.day,
                    b.start,
                    b.end,
                    b.room.as_deref().unwrap_or("")
                );
            }
        }
        Commands::People => {
            for person in roster.people() {
                println!("{}", person);
            }
        }
        Commands::Rooms => {
            for room in roster.rooms() {
                println!("{}", room);
            }
        }
        Commands::Free {
            day,
            time,
            room,
            building,
        } => {
            let day = day.unwrap_or_else(today);
            let time = time.unwrap_or_else(now);
            let filter = FreeFilter {
                room,
                building: building.map(|b| b.to_ascii_uppercase()),
            };

            let free = free_people(roster.blocks(), day, time, &filter);
            if free.is_empty() {
                println!("No one free on {} at {}", day, time);
            }
            for person in free {
                match next_window(roster.blocks(), &person, day, time) {
                    Some(next) => match next.room.as_deref() {
                        Some(room) => println!("{} — next: {} {}", person, next.start, room),
                        None => println!("{} — next: {}", person, next.start),
                    },
                    None => println!("{} — free rest of day", person),
                }
            }
        }
        Commands::Breaks { name, day } => {
            let day = day.unwrap_or_else(today);
            let gaps = person_breaks(roster.blocks(), &name, day);
            if gaps.is_empty() {
                println!("No breaks for {} on {}", name, day);
            }
            for gap in gaps {
                println!(
                    "{}–{} ({})",
                    breaks_core::format_minutes(gap.start),
                    breaks_core::format_minutes(gap.end),
                    format_duration(gap.duration_minutes())
                );
            }
        }
        Commands::Common { day, time } => {
            let day = day.unwrap_or_else(today);
            let time = time.unwrap_or_else(now);
            let index = roster.index();
            let rows = common_free_window(&index, day, time, &roster.people());
            if rows.is_empty() {
                println!("No one free on {} at {}", day, time);
            }
            for row in rows {
                println!(
                    "{} — {}–{} ({})",
                    row.person,
                    breaks_core::format_minutes(row.window.start),
                    breaks_core::format_minutes(row.window.end),
                    format_duration(row.window.duration_minutes())
                );
            }
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let report = roster.import_csv(&text);
            store::save(&cli.store, &roster)?;
            println!(
                "Imported {} blocks ({} rows skipped)",
                report.added, report.skipped
            );
        }
        Commands::Export { file } => {
            let csv = roster.export_csv();
            match file {
                Some(path) => {
                    std::fs::write(&path, csv)
                        .with_context(|| format!("Failed to write file: {}", path.display()))?;
                }
                None => println!("{}", csv),
            }
        }
    }

    Ok(())
}

/// Today's weekday on the local clock.
fn today() -> Day {
    match Local::now().weekday() {
        chrono::Weekday::Mon => Day::Monday,
        chrono::Weekday::Tue => Day::Tuesday,
        chrono::Weekday::Wed => Day::Wednesday,
        chrono::Weekday::Thu => Day::Thursday,
        chrono::Weekday::Fri => Day::Friday,
        chrono::Weekday::Sat => Day::Saturday,
        chrono::Weekday::Sun => Day::Sunday,
    }
}

/// The current local time, truncated to the minute.
fn now() -> ClockTime {
    let now = Local::now();
    ClockTime::from_minutes((now.hour() * 60 + now.minute()) as u16)
}
