//! Tests for the re-validating booking store.

use chairtime_engine::{
    BookingPolicy, BookingStatus, BookingStore, DayCutoff, DayHours, ScheduleError, TimeOfDay,
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::thread;

fn t(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

fn hours() -> DayHours {
    DayHours::open(t(9, 0), t(17, 0)).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
}

const POLICY: BookingPolicy = BookingPolicy {
    buffer_minutes: 0,
    cutoff: DayCutoff::Unrestricted,
};

#[test]
fn reserve_inserts_a_confirmed_record() {
    let store = BookingStore::new();

    let record = store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    assert_eq!(record.status, BookingStatus::Confirmed);
    assert_eq!(record.start, t(10, 0));

    let active = store.active_bookings("barber-1", day()).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].duration_minutes, 60);
}

#[test]
fn double_booking_the_same_slot_is_rejected() {
    let store = BookingStore::new();
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    let err = store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap_err();

    assert!(matches!(err, ScheduleError::SlotUnavailable(start) if start == t(10, 0)));
}

#[test]
fn overlapping_reservation_is_rejected() {
    let store = BookingStore::new();
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    // 10:30 falls inside the 10:00-11:00 booking.
    let err = store
        .reserve("barber-1", day(), &hours(), t(10, 30), 30, 30, &POLICY)
        .unwrap_err();
    assert!(matches!(err, ScheduleError::SlotUnavailable(_)));
}

#[test]
fn back_to_back_reservation_is_accepted() {
    let store = BookingStore::new();
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    // Starts exactly when the previous booking ends.
    store
        .reserve("barber-1", day(), &hours(), t(11, 0), 30, 30, &POLICY)
        .unwrap();
}

#[test]
fn reservation_outside_working_hours_is_rejected() {
    let store = BookingStore::new();
    let err = store
        .reserve("barber-1", day(), &hours(), t(8, 0), 30, 30, &POLICY)
        .unwrap_err();
    assert!(matches!(err, ScheduleError::SlotUnavailable(_)));
}

#[test]
fn reservation_off_the_granularity_grid_is_rejected() {
    let store = BookingStore::new();
    // 10:15 is not on the 30-minute grid anchored at 09:00.
    let err = store
        .reserve("barber-1", day(), &hours(), t(10, 15), 30, 30, &POLICY)
        .unwrap_err();
    assert!(matches!(err, ScheduleError::SlotUnavailable(_)));
}

#[test]
fn providers_and_dates_are_isolated() {
    let store = BookingStore::new();
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    // Same slot, different provider.
    store
        .reserve("barber-2", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    // Same slot, same provider, different date.
    let next_day = NaiveDate::from_ymd_opt(2026, 8, 11).unwrap();
    store
        .reserve("barber-1", next_day, &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();
}

#[test]
fn cancel_frees_the_slot_for_rebooking() {
    let store = BookingStore::new();
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();

    assert!(store.cancel("barber-1", day(), t(10, 0)).unwrap());
    assert!(store.active_bookings("barber-1", day()).unwrap().is_empty());

    // The slot is bookable again.
    store
        .reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
        .unwrap();
}

#[test]
fn cancel_of_unknown_booking_reports_false() {
    let store = BookingStore::new();
    assert!(!store.cancel("barber-1", day(), t(10, 0)).unwrap());
}

#[test]
fn concurrent_reservations_admit_exactly_one_winner() {
    let store = Arc::new(BookingStore::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.reserve("barber-1", day(), &hours(), t(10, 0), 60, 30, &POLICY)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(wins, 1, "exactly one concurrent caller may take the slot");
    assert_eq!(store.active_bookings("barber-1", day()).unwrap().len(), 1);
}
