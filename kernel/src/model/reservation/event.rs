use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{ReservationId, RoomId};

#[derive(Debug, new)]
pub struct CreateReservation {
    pub guest_name: String,
    pub room_number: RoomId,
    pub contact_number: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

/// Overwrites the mutable fields of an existing reservation. Status is
/// not part of the event; only checkout may change it.
#[derive(Debug, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub room_number: RoomId,
    pub contact_number: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}
