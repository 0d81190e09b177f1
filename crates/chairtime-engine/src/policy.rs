//! Booking policy -- buffer between appointments and same-day cutoff.
//!
//! The slot computation itself has no notion of "now"; lead-time and
//! no-booking-in-the-past rules are expressed as a [`DayCutoff`] the caller
//! derives (typically via [`day_cutoff`]) and passes in with the policy.

use crate::error::{Result, ScheduleError};
use crate::timeofday::{TimeOfDay, MINUTES_PER_DAY};
use chrono::{DateTime, NaiveDate, Timelike, Utc};

/// Lower bound on candidate start times for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCutoff {
    /// Every in-hours candidate is eligible.
    #[default]
    Unrestricted,
    /// Only candidates starting at or after this time are eligible.
    NotBefore(TimeOfDay),
    /// No candidate is eligible (the date is wholly in the past).
    Unbookable,
}

/// Caller-configurable booking constraints.
///
/// The defaults reproduce exact back-to-back scheduling with no lead-time
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingPolicy {
    /// Minimum gap, in minutes, required between a new booking and every
    /// existing booking on the day.
    pub buffer_minutes: u32,
    /// Lower bound on candidate start times.
    pub cutoff: DayCutoff,
}

impl BookingPolicy {
    /// Policy requiring a fixed gap around existing bookings.
    pub fn with_buffer(buffer_minutes: u32) -> Self {
        BookingPolicy {
            buffer_minutes,
            ..Default::default()
        }
    }
}

/// Derive the cutoff for booking on `date`, given the current instant and the
/// provider's IANA timezone.
///
/// - `date` before the provider-local today: [`DayCutoff::Unbookable`].
/// - `date` after today: [`DayCutoff::Unrestricted`].
/// - today: [`DayCutoff::NotBefore`] the local time plus `min_lead_minutes`,
///   or [`DayCutoff::Unbookable`] when the lead spills past midnight.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` when `timezone` is not a valid
/// IANA identifier.
pub fn day_cutoff(
    now: DateTime<Utc>,
    timezone: &str,
    date: NaiveDate,
    min_lead_minutes: u32,
) -> Result<DayCutoff> {
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))?;

    let local = now.with_timezone(&tz);
    let today = local.date_naive();

    if date < today {
        return Ok(DayCutoff::Unbookable);
    }
    if date > today {
        return Ok(DayCutoff::Unrestricted);
    }

    let earliest = local.hour() * 60 + local.minute() + min_lead_minutes;
    if earliest >= MINUTES_PER_DAY {
        return Ok(DayCutoff::Unbookable);
    }
    Ok(DayCutoff::NotBefore(TimeOfDay::from_minutes(earliest)?))
}
