//! `chairtime` CLI — compute bookable appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Available starts for a 30-minute service on a date
//! chairtime slots -s schedule.json -b bookings.json --date 2026-08-10 --duration 30
//!
//! # 24-hour output, 15-minute grid
//! chairtime slots -s schedule.json --date 2026-08-10 --duration 45 \
//!   --granularity 15 --format 24h
//!
//! # Require a 10-minute gap around existing bookings
//! chairtime slots -s schedule.json -b bookings.json --date 2026-08-10 \
//!   --duration 30 --buffer 10
//!
//! # Same-day bookings need one hour of notice, provider-local time
//! chairtime slots -s schedule.json --date 2026-08-10 --duration 30 \
//!   --min-lead 60 --timezone Africa/Lagos
//!
//! # Machine-readable output
//! chairtime slots -s schedule.json --date 2026-08-10 --duration 30 --json
//!
//! # Validate one proposed start time (exit 1 when taken)
//! chairtime check -s schedule.json -b bookings.json --date 2026-08-10 \
//!   --time 10:00 --duration 30
//! ```

use anyhow::{Context, Result};
use chairtime_engine::{
    compute_available_slots_with_policy, day_cutoff, find_conflicts, Booking, BookingPolicy,
    BookingStatus, DayCutoff, TimeOfDay, WeekSchedule,
};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::process;

#[derive(Parser)]
#[command(
    name = "chairtime",
    version,
    about = "Appointment slot availability from schedule and booking files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every bookable start time for a service on a date
    Slots {
        #[command(flatten)]
        inputs: SharedInputs,

        /// Clock style for the listing
        #[arg(long, value_enum, default_value = "12h")]
        format: ClockFormat,

        /// Emit a JSON array instead of one slot per line
        #[arg(long)]
        json: bool,
    },
    /// Validate one proposed start time; exits non-zero when unavailable
    Check {
        #[command(flatten)]
        inputs: SharedInputs,

        /// Proposed start time (e.g. "10:00" or "10:00 AM")
        #[arg(long)]
        time: TimeOfDay,
    },
}

#[derive(Args)]
struct SharedInputs {
    /// Provider schedule JSON file (object with a `working_hours` map)
    #[arg(short, long)]
    schedule: String,

    /// Bookings JSON file (array of booking rows; cancelled rows are ignored)
    #[arg(short, long)]
    bookings: Option<String>,

    /// Target calendar date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// Service duration in minutes
    #[arg(long)]
    duration: u32,

    /// Candidate grid step in minutes
    #[arg(long, default_value_t = 30)]
    granularity: u32,

    /// Minimum gap in minutes required around existing bookings
    #[arg(long, default_value_t = 0)]
    buffer: u32,

    /// Same-day lead time in minutes; slots before now + lead are dropped
    #[arg(long)]
    min_lead: Option<u32>,

    /// Provider IANA timezone for --min-lead (overrides the schedule file)
    #[arg(long)]
    timezone: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClockFormat {
    /// 12-hour display, e.g. "9:00 AM"
    #[value(name = "12h")]
    H12,
    /// 24-hour display, e.g. "09:00"
    #[value(name = "24h")]
    H24,
}

/// Provider profile row: the `working_hours` map plus an optional timezone.
#[derive(Deserialize)]
struct ProviderProfile {
    working_hours: WeekSchedule,
    #[serde(default)]
    timezone: Option<String>,
}

/// One booking row as stored by the backend. Cancelled rows keep their slot
/// free, so they are filtered out before the engine sees them.
#[derive(Deserialize)]
struct BookingRow {
    booking_time: TimeOfDay,
    duration_minutes: u32,
    #[serde(default)]
    status: BookingStatus,
}

#[derive(Serialize)]
struct SlotOutput {
    start: String,
    display: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            inputs,
            format,
            json,
        } => {
            let slots = available_slots(&inputs)?;

            if json {
                let out: Vec<SlotOutput> = slots
                    .iter()
                    .map(|s| SlotOutput {
                        start: s.format_24h(),
                        display: s.format_12h(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if slots.is_empty() {
                eprintln!("No available slots on {}", inputs.date);
            } else {
                for slot in &slots {
                    match format {
                        ClockFormat::H12 => println!("{}", slot.format_12h()),
                        ClockFormat::H24 => println!("{}", slot.format_24h()),
                    }
                }
            }
        }
        Commands::Check { inputs, time } => {
            let slots = available_slots(&inputs)?;

            if slots.contains(&time) {
                println!("Available: {}", time.format_12h());
            } else {
                println!("Unavailable: {}", time.format_12h());
                let candidate = Booking::new(time, inputs.duration);
                for conflict in find_conflicts(&candidate, &load_bookings(&inputs)?) {
                    println!(
                        "  conflicts with {} (+{} min) by {} min",
                        conflict.existing.start.format_12h(),
                        conflict.existing.duration_minutes,
                        conflict.overlap_minutes
                    );
                }
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Resolve the day's hours, load and filter bookings, and run the engine.
fn available_slots(inputs: &SharedInputs) -> Result<Vec<TimeOfDay>> {
    let profile = load_profile(&inputs.schedule)?;
    let hours = profile.working_hours.hours_on(inputs.date);
    let bookings = load_bookings(inputs)?;

    let cutoff = match inputs.min_lead {
        None => DayCutoff::Unrestricted,
        Some(lead) => {
            let tz = inputs
                .timezone
                .as_deref()
                .or(profile.timezone.as_deref())
                .unwrap_or("UTC");
            day_cutoff(Utc::now(), tz, inputs.date, lead)?
        }
    };
    let policy = BookingPolicy {
        buffer_minutes: inputs.buffer,
        cutoff,
    };

    let slots = compute_available_slots_with_policy(
        hours,
        &bookings,
        inputs.duration,
        inputs.granularity,
        &policy,
    )?;
    Ok(slots)
}

fn load_profile(path: &str) -> Result<ProviderProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse schedule file: {}", path))
}

/// Load booking rows and keep only the ones still occupying their slot.
fn load_bookings(inputs: &SharedInputs) -> Result<Vec<Booking>> {
    let Some(path) = inputs.bookings.as_deref() else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookings file: {}", path))?;
    let rows: Vec<BookingRow> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse bookings file: {}", path))?;

    Ok(rows
        .into_iter()
        .filter(|row| row.status.is_active())
        .map(|row| Booking::new(row.booking_time, row.duration_minutes))
        .collect())
}
