use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::id::{ReservationId, RoomId};

pub mod event;

/// Lifecycle of a reservation. ACTIVE blocks its room for the booked
/// range; CHECKED_OUT is terminal and never blocks new bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "CHECKED_OUT")]
    CheckedOut,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "ACTIVE",
            ReservationStatus::CheckedOut => "CHECKED_OUT",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ReservationStatus::Active)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub room_number: RoomId,
    pub contact_number: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: ReservationStatus,
}

/// Listing scope. The UI defaults to current (ACTIVE) reservations and
/// can switch to the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationFilter {
    All,
    ActiveOnly,
}
