//! Working-hours configuration -- per-weekday open/closed state and operating window.
//!
//! Provider profiles store hours as strings keyed by lowercase weekday name:
//! `"9:00 AM - 5:00 PM"` when open, `"Closed"` otherwise. `WeekSchedule`
//! deserializes that shape directly; days absent from the map default to
//! closed.

use crate::error::{Result, ScheduleError};
use crate::timeofday::TimeOfDay;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating hours for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayHours {
    #[default]
    Closed,
    Open { open: TimeOfDay, close: TimeOfDay },
}

impl DayHours {
    /// Construct an open window.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidHours` unless `open < close`.
    pub fn open(open: TimeOfDay, close: TimeOfDay) -> Result<Self> {
        if open >= close {
            return Err(ScheduleError::InvalidHours(format!(
                "{} - {} (open must precede close)",
                open, close
            )));
        }
        Ok(DayHours::Open { open, close })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DayHours::Closed)
    }

    /// Length of the operating window in minutes; 0 when closed or degenerate.
    pub fn span_minutes(&self) -> u32 {
        match self {
            DayHours::Closed => 0,
            DayHours::Open { open, close } => close.minutes().saturating_sub(open.minutes()),
        }
    }
}

impl FromStr for DayHours {
    type Err = ScheduleError;

    /// Parse `"Closed"` (case-insensitive) or a `"<start> - <end>"` range.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("closed") {
            return Ok(DayHours::Closed);
        }
        let (start, end) = trimmed
            .split_once(" - ")
            .or_else(|| trimmed.split_once('-'))
            .ok_or_else(|| ScheduleError::InvalidHours(trimmed.to_string()))?;
        let open: TimeOfDay = start.parse()?;
        let close: TimeOfDay = end.parse()?;
        DayHours::open(open, close)
    }
}

impl fmt::Display for DayHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayHours::Closed => f.write_str("Closed"),
            DayHours::Open { open, close } => {
                write!(f, "{} - {}", open.format_12h(), close.format_12h())
            }
        }
    }
}

impl TryFrom<String> for DayHours {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DayHours> for String {
    fn from(h: DayHours) -> Self {
        h.to_string()
    }
}

/// A provider's full weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSchedule {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl WeekSchedule {
    /// The hours configured for a weekday.
    pub fn hours_for(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// The hours that apply on a calendar date.
    pub fn hours_on(&self, date: NaiveDate) -> &DayHours {
        self.hours_for(date.weekday())
    }
}
