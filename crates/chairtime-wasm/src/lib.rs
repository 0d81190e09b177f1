//! WASM bindings for chairtime-engine.
//!
//! Exposes slot availability computation and booking conflict detection to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings, so a mobile or web booking screen can hand over the provider
//! profile and booking rows it already holds.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p chairtime-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/chairtime-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/chairtime_wasm.wasm
//! ```

use chairtime_engine::{
    compute_available_slots_with_policy, find_conflicts, Booking, BookingPolicy, BookingStatus,
    TimeOfDay, WeekSchedule,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    start: String,
    display: String,
}

#[derive(Serialize)]
struct ConflictDto {
    start: String,
    duration_minutes: u32,
    overlap_minutes: u32,
}

/// Input format for booking rows passed from JavaScript. Cancelled rows are
/// filtered out before the engine runs.
#[derive(Deserialize)]
struct BookingInput {
    booking_time: String,
    duration_minutes: u32,
    #[serde(default)]
    status: BookingStatus,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs into engine types
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid time '{}': {}", s, e)))
}

/// Convert a JSON array of booking rows into active engine bookings.
fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, JsValue> {
    let inputs: Vec<BookingInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))?;

    inputs
        .into_iter()
        .filter(|input| input.status.is_active())
        .map(|input| {
            let start = parse_time(&input.booking_time)?;
            Ok(Booking::new(start, input.duration_minutes))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute bookable start times for a service on a date.
///
/// Returns a JSON string containing an array of `{start, display}` objects,
/// where `start` is 24-hour ("09:00") and `display` is the 12-hour form
/// ("9:00 AM") booking screens render.
///
/// # Arguments
/// - `schedule_json` -- the provider's `working_hours` map (lowercase weekday
///   keys, `"9:00 AM - 5:00 PM"` / `"Closed"` values)
/// - `date` -- target calendar date ("2026-08-10")
/// - `bookings_json` -- JSON array of `{booking_time, duration_minutes, status}` rows
/// - `service_duration_minutes` -- length of the requested service
/// - `granularity_minutes` -- candidate grid step (e.g. 30)
/// - `buffer_minutes` -- optional minimum gap around existing bookings
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(
    schedule_json: &str,
    date: &str,
    bookings_json: &str,
    service_duration_minutes: u32,
    granularity_minutes: u32,
    buffer_minutes: Option<u32>,
) -> Result<String, JsValue> {
    let schedule: WeekSchedule = serde_json::from_str(schedule_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))?;
    let date: NaiveDate = date
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))?;
    let bookings = parse_bookings_json(bookings_json)?;

    let policy = BookingPolicy::with_buffer(buffer_minutes.unwrap_or(0));
    let slots = compute_available_slots_with_policy(
        schedule.hours_on(date),
        &bookings,
        service_duration_minutes,
        granularity_minutes,
        &policy,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<SlotDto> = slots
        .iter()
        .map(|s| SlotDto {
            start: s.format_24h(),
            display: s.format_12h(),
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find every existing booking that overlaps a proposed one.
///
/// `bookings_json` must be a JSON array of booking rows. Returns a JSON
/// string containing an array of `{start, duration_minutes, overlap_minutes}`
/// objects; an empty array means the proposed time is clear.
#[wasm_bindgen(js_name = "findBookingConflicts")]
pub fn find_booking_conflicts(
    start: &str,
    service_duration_minutes: u32,
    bookings_json: &str,
) -> Result<String, JsValue> {
    let candidate = Booking::new(parse_time(start)?, service_duration_minutes);
    let bookings = parse_bookings_json(bookings_json)?;

    let conflicts = find_conflicts(&candidate, &bookings);

    let dtos: Vec<ConflictDto> = conflicts
        .iter()
        .map(|c| ConflictDto {
            start: c.existing.start.format_24h(),
            duration_minutes: c.existing.duration_minutes,
            overlap_minutes: c.overlap_minutes,
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
