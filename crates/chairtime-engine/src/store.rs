//! In-memory booking store with write-time re-validation.
//!
//! Availability computed by [`crate::slots`] is advisory: another customer can
//! book between the read and the submit. [`BookingStore::reserve`] closes that
//! race by recomputing availability under the store lock and rejecting the
//! insert when the requested start is no longer bookable -- the conditional
//! insert a production write path must perform.

use crate::booking::{Booking, BookingStatus};
use crate::error::{Result, ScheduleError};
use crate::policy::BookingPolicy;
use crate::schedule::DayHours;
use crate::slots::compute_available_slots_with_policy;
use crate::timeofday::TimeOfDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// A stored booking row for one provider-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub provider_id: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub duration_minutes: u32,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// The interval this record occupies, as an engine-level booking.
    pub fn booking(&self) -> Booking {
        Booking::new(self.start, self.duration_minutes)
    }
}

/// Thread-safe provider-day booking ledger.
#[derive(Debug, Default)]
pub struct BookingStore {
    inner: Mutex<HashMap<(String, NaiveDate), Vec<BookingRecord>>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-cancelled bookings for a provider-day, in insertion order.
    pub fn active_bookings(&self, provider_id: &str, date: NaiveDate) -> Result<Vec<Booking>> {
        let inner = self.inner.lock().map_err(|_| ScheduleError::StorePoisoned)?;
        Ok(inner
            .get(&(provider_id.to_string(), date))
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.status.is_active())
                    .map(BookingRecord::booking)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Atomically reserve a slot, re-validating availability under the lock.
    ///
    /// Recomputes the bookable slots from the current non-cancelled bookings
    /// and only inserts when `start` is still among them, so two concurrent
    /// callers can never both reserve the same or overlapping intervals.
    ///
    /// # Errors
    /// `ScheduleError::SlotUnavailable` when `start` is no longer bookable
    /// (taken, outside hours, off the granularity grid, or blocked by the
    /// policy). Invalid duration/granularity fail as in
    /// [`compute_available_slots_with_policy`].
    #[allow(clippy::too_many_arguments)]
    pub fn reserve(
        &self,
        provider_id: &str,
        date: NaiveDate,
        hours: &DayHours,
        start: TimeOfDay,
        service_duration_minutes: u32,
        granularity_minutes: u32,
        policy: &BookingPolicy,
    ) -> Result<BookingRecord> {
        let mut inner = self.inner.lock().map_err(|_| ScheduleError::StorePoisoned)?;
        let key = (provider_id.to_string(), date);

        let active: Vec<Booking> = inner
            .get(&key)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.status.is_active())
                    .map(BookingRecord::booking)
                    .collect()
            })
            .unwrap_or_default();

        let open_slots = compute_available_slots_with_policy(
            hours,
            &active,
            service_duration_minutes,
            granularity_minutes,
            policy,
        )?;
        if !open_slots.contains(&start) {
            return Err(ScheduleError::SlotUnavailable(start));
        }

        let record = BookingRecord {
            provider_id: provider_id.to_string(),
            date,
            start,
            duration_minutes: service_duration_minutes,
            status: BookingStatus::Confirmed,
        };
        inner.entry(key).or_default().push(record.clone());
        Ok(record)
    }

    /// Cancel the booking starting at `start`, freeing its slot.
    ///
    /// Returns whether an active booking was found and cancelled.
    pub fn cancel(&self, provider_id: &str, date: NaiveDate, start: TimeOfDay) -> Result<bool> {
        let mut inner = self.inner.lock().map_err(|_| ScheduleError::StorePoisoned)?;
        let Some(records) = inner.get_mut(&(provider_id.to_string(), date)) else {
            return Ok(false);
        };
        for record in records.iter_mut() {
            if record.start == start && record.status.is_active() {
                record.status = BookingStatus::Cancelled;
                return Ok(true);
            }
        }
        Ok(false)
    }
}
