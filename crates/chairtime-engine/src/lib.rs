//! # chairtime-engine
//!
//! Deterministic appointment slot availability computation for booking apps.
//!
//! Given a provider's working hours for a day, the non-cancelled bookings on
//! that day, and a requested service duration, the engine computes every
//! bookable start time on a fixed granularity grid -- the single source of
//! truth that booking screens would otherwise each reimplement ad hoc.
//!
//! ## Quick start
//!
//! ```rust
//! use chairtime_engine::{compute_available_slots, Booking, DayHours, TimeOfDay};
//!
//! let hours: DayHours = "9:00 AM - 5:00 PM".parse().unwrap();
//! let booked = vec![Booking::new("10:00".parse().unwrap(), 60)];
//!
//! // 30-minute service on a 30-minute grid: every half hour except
//! // 10:00 and 10:30, which overlap the 10:00-11:00 booking.
//! let slots = compute_available_slots(&hours, &booked, 30, 30).unwrap();
//! assert_eq!(slots[0], TimeOfDay::from_hm(9, 0).unwrap());
//! assert!(!slots.contains(&TimeOfDay::from_hm(10, 0).unwrap()));
//! assert!(slots.contains(&TimeOfDay::from_hm(11, 0).unwrap()));
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — the availability computation
//! - [`schedule`] — working-hours configuration ([`DayHours`], [`WeekSchedule`])
//! - [`booking`] — booking intervals and status
//! - [`conflict`] — overlap detection between bookings
//! - [`policy`] — buffer and same-day cutoff policy
//! - [`store`] — in-memory booking store with write-time re-validation
//! - [`timeofday`] — time-of-day parsing and 12h/24h formatting
//! - [`error`] — error types

pub mod booking;
pub mod conflict;
pub mod error;
pub mod policy;
pub mod schedule;
pub mod slots;
pub mod store;
pub mod timeofday;

pub use booking::{Booking, BookingStatus};
pub use conflict::{conflicts_with_any, find_conflicts, Conflict};
pub use error::ScheduleError;
pub use policy::{day_cutoff, BookingPolicy, DayCutoff};
pub use schedule::{DayHours, WeekSchedule};
pub use slots::{compute_available_slots, compute_available_slots_with_policy};
pub use store::{BookingRecord, BookingStore};
pub use timeofday::TimeOfDay;
