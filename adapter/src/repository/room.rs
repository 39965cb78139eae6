use async_trait::async_trait;
use derive_new::new;

use kernel::model::id::RoomId;
use kernel::model::room::Room;
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use crate::store::InMemoryStore;

#[derive(new)]
pub struct RoomRepositoryImpl {
    store: InMemoryStore,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rooms = self.store.rooms.read().await;
        // BTreeMap iteration yields ascending room numbers
        Ok(rooms.values().cloned().collect())
    }

    async fn find_by_id(&self, room_number: RoomId) -> AppResult<Option<Room>> {
        let rooms = self.store.rooms.read().await;
        Ok(rooms.get(&room_number).cloned())
    }
}
