use std::sync::Arc;

use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::store::InMemoryStore;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::room::RoomRepository;
use kernel::service::reservation::ReservationManager;

/// Wires the store, the repository implementations and the manager, and
/// is handed to the HTTP layer as shared state.
#[derive(Clone)]
pub struct AppRegistry {
    room_repository: Arc<dyn RoomRepository>,
    reservation_manager: Arc<ReservationManager>,
}

impl AppRegistry {
    pub fn new(store: InMemoryStore) -> Self {
        let room_repository: Arc<dyn RoomRepository> =
            Arc::new(RoomRepositoryImpl::new(store.clone()));
        let reservation_repository: Arc<dyn ReservationRepository> =
            Arc::new(ReservationRepositoryImpl::new(store));
        let reservation_manager = Arc::new(ReservationManager::new(
            reservation_repository,
            room_repository.clone(),
        ));
        Self {
            room_repository,
            reservation_manager,
        }
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn reservation_manager(&self) -> Arc<ReservationManager> {
        self.reservation_manager.clone()
    }
}
