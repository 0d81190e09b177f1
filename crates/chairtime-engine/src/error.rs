//! Error types for chairtime-engine operations.

use crate::timeofday::TimeOfDay;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A time-of-day string or minute value was out of range or unparseable.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// A working-hours value was malformed (bad range string, or open >= close).
    #[error("Invalid working hours: {0}")]
    InvalidHours(String),

    /// Service duration must be a positive number of minutes.
    #[error("Invalid service duration: {0} minutes (must be positive)")]
    InvalidDuration(u32),

    /// Slot granularity must be a positive number of minutes.
    #[error("Invalid slot granularity: {0} minutes (must be positive)")]
    InvalidGranularity(u32),

    /// The timezone is not a valid IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Write-time re-validation found the requested slot already taken.
    #[error("Slot no longer available at {0}")]
    SlotUnavailable(TimeOfDay),

    /// The booking store lock was poisoned by a panicking writer.
    #[error("Booking store lock poisoned")]
    StorePoisoned,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
