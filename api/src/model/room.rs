use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::id::RoomId;
use kernel::model::room::Room;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_number: RoomId,
    pub room_type: String,
    pub price_per_night: Decimal,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_number,
            room_type,
            price_per_night,
        } = value;
        Self {
            room_number,
            room_type,
            price_per_night,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableRoomsQuery {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}
