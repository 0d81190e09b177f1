//! Tests for the same-day cutoff derivation.

use chairtime_engine::{day_cutoff, DayCutoff, ScheduleError, TimeOfDay};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn t(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

#[test]
fn past_date_is_unbookable() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
    let cutoff = day_cutoff(now, "UTC", date(2026, 8, 6), 0).unwrap();
    assert_eq!(cutoff, DayCutoff::Unbookable);
}

#[test]
fn future_date_is_unrestricted() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
    let cutoff = day_cutoff(now, "UTC", date(2026, 8, 8), 0).unwrap();
    assert_eq!(cutoff, DayCutoff::Unrestricted);
}

#[test]
fn same_day_cuts_off_at_local_now_plus_lead() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
    let cutoff = day_cutoff(now, "UTC", date(2026, 8, 7), 60).unwrap();
    assert_eq!(cutoff, DayCutoff::NotBefore(t(11, 0)));
}

#[test]
fn zero_lead_cuts_off_at_local_now() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 14, 25, 0).unwrap();
    let cutoff = day_cutoff(now, "UTC", date(2026, 8, 7), 0).unwrap();
    assert_eq!(cutoff, DayCutoff::NotBefore(t(14, 25)));
}

#[test]
fn lead_spilling_past_midnight_is_unbookable() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 23, 30, 0).unwrap();
    let cutoff = day_cutoff(now, "UTC", date(2026, 8, 7), 60).unwrap();
    assert_eq!(cutoff, DayCutoff::Unbookable);
}

#[test]
fn cutoff_is_resolved_in_the_provider_timezone() {
    // 23:30 UTC is already 00:30 the next day in Lagos (UTC+1), so
    // 2026-08-07 is in the past there while 2026-08-08 is today.
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 23, 30, 0).unwrap();

    let yesterday = day_cutoff(now, "Africa/Lagos", date(2026, 8, 7), 0).unwrap();
    assert_eq!(yesterday, DayCutoff::Unbookable);

    let today = day_cutoff(now, "Africa/Lagos", date(2026, 8, 8), 0).unwrap();
    assert_eq!(today, DayCutoff::NotBefore(t(0, 30)));
}

#[test]
fn invalid_timezone_is_rejected() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
    let err = day_cutoff(now, "Mars/Olympus_Mons", date(2026, 8, 7), 0).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidTimezone(_)));
}
