//! Booking intervals and status.
//!
//! A booking occupies the half-open interval `[start, start + duration)` on a
//! provider's day. Cancelled bookings do not occupy their slot; callers filter
//! them out (via [`BookingStatus::is_active`]) before availability is computed.

use crate::timeofday::TimeOfDay;
use serde::{Deserialize, Serialize};

/// A reserved time interval on a provider's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start: TimeOfDay,
    pub duration_minutes: u32,
}

impl Booking {
    pub fn new(start: TimeOfDay, duration_minutes: u32) -> Self {
        Booking {
            start,
            duration_minutes,
        }
    }

    /// Exclusive end of the occupied interval, in minutes since midnight.
    /// May exceed the day boundary for bookings that run past midnight.
    pub fn end_minutes(&self) -> u32 {
        self.start.minutes() + self.duration_minutes
    }
}

/// Lifecycle status of a booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking with this status still occupies its time slot.
    pub fn is_active(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}
