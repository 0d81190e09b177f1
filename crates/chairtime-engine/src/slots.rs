//! Compute bookable start times for a new service on a provider's day.
//!
//! Candidates are generated on a fixed granularity grid anchored at the
//! opening time, kept only while the full service fits before closing, then
//! filtered against existing bookings with a half-open overlap test. The
//! computation is pure: same inputs, same output, no I/O.

use crate::booking::Booking;
use crate::error::{Result, ScheduleError};
use crate::policy::{BookingPolicy, DayCutoff};
use crate::schedule::DayHours;
use crate::timeofday::TimeOfDay;

/// Compute every bookable start time for a service of the given duration.
///
/// Equivalent to [`compute_available_slots_with_policy`] with the default
/// policy (no buffer, no cutoff).
///
/// # Errors
/// Returns `ScheduleError::InvalidDuration` or `ScheduleError::InvalidGranularity`
/// when either parameter is zero. A closed day is not an error -- it simply
/// has no slots.
pub fn compute_available_slots(
    hours: &DayHours,
    bookings: &[Booking],
    service_duration_minutes: u32,
    granularity_minutes: u32,
) -> Result<Vec<TimeOfDay>> {
    compute_available_slots_with_policy(
        hours,
        bookings,
        service_duration_minutes,
        granularity_minutes,
        &BookingPolicy::default(),
    )
}

/// Compute bookable start times under a caller-supplied [`BookingPolicy`].
///
/// The result is sorted ascending with no duplicates, and every returned
/// slot's occupied interval `[start, start + duration)` is disjoint from
/// every booking's interval (separated by at least `policy.buffer_minutes`).
/// Bookings are trusted as-is: entries outside working hours, duplicated, or
/// mutually overlapping are all tolerated.
pub fn compute_available_slots_with_policy(
    hours: &DayHours,
    bookings: &[Booking],
    service_duration_minutes: u32,
    granularity_minutes: u32,
    policy: &BookingPolicy,
) -> Result<Vec<TimeOfDay>> {
    if service_duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(service_duration_minutes));
    }
    if granularity_minutes == 0 {
        return Err(ScheduleError::InvalidGranularity(granularity_minutes));
    }

    let (open, close) = match hours {
        DayHours::Closed => return Ok(Vec::new()),
        DayHours::Open { open, close } => (open.minutes(), close.minutes()),
    };
    // A degenerate window has no capacity.
    if open >= close {
        return Ok(Vec::new());
    }

    let not_before = match policy.cutoff {
        DayCutoff::Unrestricted => 0,
        DayCutoff::NotBefore(t) => t.minutes() as u64,
        DayCutoff::Unbookable => return Ok(Vec::new()),
    };

    // Widen once so caller-supplied durations and buffers can never overflow
    // the interval arithmetic below.
    let close = close as u64;
    let service = service_duration_minutes as u64;
    let granularity = granularity_minutes as u64;

    let mut slots = Vec::new();
    let mut candidate = open as u64;
    // The grid stays anchored at `open`; a cutoff only filters candidates.
    while candidate + service <= close {
        if candidate >= not_before && fits(candidate, service, bookings, policy) {
            slots.push(TimeOfDay::from_minutes(candidate as u32)?);
        }
        candidate += granularity;
    }

    Ok(slots)
}

/// Half-open overlap test against every booking, padded by the policy buffer.
///
/// A candidate survives a booking iff it ends at least `buffer` minutes before
/// the booking starts, or starts at least `buffer` minutes after it ends.
fn fits(
    candidate_start: u64,
    service_minutes: u64,
    bookings: &[Booking],
    policy: &BookingPolicy,
) -> bool {
    let candidate_end = candidate_start + service_minutes;
    let buffer = policy.buffer_minutes as u64;

    bookings.iter().all(|booked| {
        let booked_start = booked.start.minutes() as u64;
        let booked_end = booked_start + booked.duration_minutes as u64;
        candidate_end + buffer <= booked_start || candidate_start >= booked_end + buffer
    })
}
