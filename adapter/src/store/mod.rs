use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::Reservation;
use kernel::model::room::Room;

/// Process-local stand-in for the durable store behind the repository
/// traits. Records become visible only after the table's write lock is
/// released, so a concurrent reader never observes a half-written record.
///
/// Rooms live in a BTreeMap keyed by room number, which keeps catalog
/// listings in ascending room order for free.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub(crate) rooms: Arc<RwLock<BTreeMap<RoomId, Room>>>,
    pub(crate) reservations: Arc<RwLock<HashMap<ReservationId, Reservation>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog is owned by an administrative process; seeding is its
    /// only write path. The reservation flow never touches it.
    pub async fn seed_rooms(&self, rooms: Vec<Room>) {
        let mut table = self.rooms.write().await;
        for room in rooms {
            table.insert(room.room_number, room);
        }
    }
}
