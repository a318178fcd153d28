//! `slots` CLI — resolve bookable appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve a barber's bookable slots for a date
//! slots resolve -s schedule.json --branch downtown --barber marco --date 2026-09-01
//!
//! # Reschedule flow: exclude the appointment being edited
//! slots resolve -s schedule.json --branch downtown --barber marco \
//!     --date 2026-09-01 --editing appt-42
//!
//! # Pin "now" for reproducible same-day results
//! slots resolve -s schedule.json --branch downtown --barber marco \
//!     --date 2026-08-25 --now 2026-08-25T10:07
//!
//! # Emit a JSON array instead of one slot per line
//! slots resolve -s schedule.json --branch downtown --barber marco \
//!     --date 2026-09-01 --json
//! ```

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use slot_engine::{resolve_availability, AvailabilityRequest, InMemoryStore};
use std::fs;

#[derive(Parser)]
#[command(name = "slots", version, about = "Barbershop appointment availability resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the bookable slots for one branch, barber, and date
    Resolve {
        /// JSON snapshot of scheduling data (branch hours, blocks,
        /// breaks, appointments)
        #[arg(short, long)]
        snapshot: String,
        /// Branch identifier
        #[arg(long)]
        branch: String,
        /// Barber identifier
        #[arg(long)]
        barber: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Appointment id being rescheduled; it will not block itself
        #[arg(long)]
        editing: Option<String>,
        /// Pin the current local date-time (YYYY-MM-DDTHH:MM) instead of
        /// reading the system clock
        #[arg(long)]
        now: Option<String>,
        /// Emit a JSON array instead of one slot per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            snapshot,
            branch,
            barber,
            date,
            editing,
            now,
            json,
        } => {
            let raw = fs::read_to_string(&snapshot)
                .with_context(|| format!("failed to read snapshot {snapshot}"))?;
            let store: InMemoryStore = serde_json::from_str(&raw)
                .with_context(|| format!("snapshot {snapshot} is not a valid schedule"))?;

            // The one place ambient time is read; --now overrides it.
            let now = match now.as_deref() {
                Some(s) => parse_now(s)?,
                None => Local::now().naive_local(),
            };

            let mut request = AvailabilityRequest::new(branch, barber, date);
            if let Some(id) = editing {
                request = request.editing(id);
            }

            let slots = resolve_availability(&store, &request, now)?;

            if json {
                println!("{}", serde_json::to_string(&slots)?);
            } else {
                for slot in &slots {
                    println!("{slot}");
                }
            }
        }
    }

    Ok(())
}

/// Parse a `--now` value, with or without seconds.
fn parse_now(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| anyhow!("invalid --now value {s:?}: expected YYYY-MM-DDTHH:MM"))
}
