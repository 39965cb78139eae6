use rust_decimal::Decimal;

use crate::model::id::RoomId;

/// Reference data for a single hotel room. The catalog is owned by an
/// administrative process; the reservation flow only reads it.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_number: RoomId,
    pub room_type: String,
    pub price_per_night: Decimal,
}
