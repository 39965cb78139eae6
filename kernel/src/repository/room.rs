use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::RoomId;
use crate::model::room::Room;

/// Read-only view of the room catalog.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All rooms, ordered by ascending room number.
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_number: RoomId) -> AppResult<Option<Room>>;
}
