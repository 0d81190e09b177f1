//! Detect overlaps between a proposed booking and existing bookings.
//!
//! Pairwise comparison on half-open intervals. Adjacent bookings (one ends
//! exactly when the next starts) are NOT conflicts, so a schedule can be
//! packed back-to-back.

use crate::booking::Booking;

/// A detected conflict with an existing booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub existing: Booking,
    pub overlap_minutes: u32,
}

/// Find every existing booking whose interval overlaps the candidate's.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(candidate: &Booking, existing: &[Booking]) -> Vec<Conflict> {
    let cand_start = candidate.start.minutes();
    let cand_end = candidate.end_minutes();

    let mut conflicts = Vec::new();
    for booked in existing {
        let booked_start = booked.start.minutes();
        let booked_end = booked.end_minutes();

        if cand_start < booked_end && booked_start < cand_end {
            let overlap_start = cand_start.max(booked_start);
            let overlap_end = cand_end.min(booked_end);

            conflicts.push(Conflict {
                existing: *booked,
                overlap_minutes: overlap_end - overlap_start,
            });
        }
    }

    conflicts
}

/// Short-circuiting form of [`find_conflicts`] for write-time re-checks.
pub fn conflicts_with_any(candidate: &Booking, existing: &[Booking]) -> bool {
    let cand_start = candidate.start.minutes();
    let cand_end = candidate.end_minutes();

    existing
        .iter()
        .any(|b| cand_start < b.end_minutes() && b.start.minutes() < cand_end)
}
