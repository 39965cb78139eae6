use chrono::{DateTime, Utc};

use crate::model::id::ReservationId;
use crate::model::reservation::Reservation;

/// Half-open interval intersection: [a_start, a_end) and [b_start, b_end)
/// share at least one instant. A stay ending exactly when another begins
/// is not an intersection.
pub fn ranges_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    b_end > a_start && b_start < a_end
}

/// True when any ACTIVE reservation in `existing` intersects the candidate
/// range. `exclude` removes the reservation being updated from the
/// comparison set so it cannot conflict with itself.
pub fn has_conflict(
    existing: &[Reservation],
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    exclude: Option<ReservationId>,
) -> bool {
    existing.iter().any(|r| {
        r.status.is_active()
            && exclude != Some(r.reservation_id)
            && ranges_overlap(check_in, check_out, r.check_in, r.check_out)
    })
}
