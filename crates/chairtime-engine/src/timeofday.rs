//! Time-of-day values -- minutes since midnight, scoped to a single calendar date.
//!
//! Parses both 24-hour ("09:00", "17:30") and 12-hour ("9:00 AM", "5:00 PM")
//! forms, the two shapes booking and working-hours data arrive in. The engine
//! itself computes in raw minutes; `TimeOfDay` guarantees the value stays
//! within a single day.

use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day as minutes since midnight, always `< 1440`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Construct from minutes since midnight.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTime` when `minutes >= 1440`.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTime(format!(
                "{} minutes is not within a single day",
                minutes
            )));
        }
        Ok(TimeOfDay {
            minutes: minutes as u16,
        })
    }

    /// Construct from an hour (0-23) and minute (0-59) pair.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::InvalidTime(format!(
                "{:02}:{:02} is not a valid time",
                hour, minute
            )));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.minutes as u32
    }

    /// 24-hour form, e.g. "09:00".
    pub fn format_24h(self) -> String {
        format!("{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }

    /// 12-hour display form, e.g. "9:00 AM". Midnight is "12:00 AM", noon "12:00 PM".
    pub fn format_12h(self) -> String {
        let hour = self.minutes / 60;
        let minute = self.minutes % 60;
        let period = if hour >= 12 { "PM" } else { "AM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, minute, period)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parse "HH:MM", "H:MM AM", or "H:MM PM" (meridiem case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || ScheduleError::InvalidTime(trimmed.to_string());

        // Split off an optional trailing meridiem.
        let (clock, meridiem) = match trimmed.rsplit_once(char::is_whitespace) {
            Some((clock, tail)) if tail.eq_ignore_ascii_case("AM") => (clock, Some(false)),
            Some((clock, tail)) if tail.eq_ignore_ascii_case("PM") => (clock, Some(true)),
            _ => (trimmed, None),
        };

        let (hour_str, minute_str) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour_str.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.trim().parse().map_err(|_| invalid())?;

        let hour = match meridiem {
            // 12-hour clock: hours run 1-12; 12 AM is midnight, 12 PM is noon.
            Some(pm) => {
                if hour == 0 || hour > 12 {
                    return Err(invalid());
                }
                match (hour, pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, false) => h,
                    (h, true) => h + 12,
                }
            }
            None => hour,
        };

        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_24h())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.format_24h()
    }
}
