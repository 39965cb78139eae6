use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::{ReservationId, RoomId};
use crate::model::reservation::event::UpdateReservation;
use crate::model::reservation::{Reservation, ReservationFilter, ReservationStatus};

/// Narrow interface over the durable reservation store. Implementations
/// must make each record atomically visible: a concurrent reader never
/// observes a partially written reservation.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn insert(&self, reservation: Reservation) -> AppResult<ReservationId>;
    /// Overwrites the mutable fields, leaving status untouched.
    /// Returns false when no record matches the id.
    async fn update(&self, event: UpdateReservation) -> AppResult<bool>;
    /// Hard delete. Returns false when no record matches the id.
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<bool>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// ACTIVE reservations claiming the given room, in no particular order.
    async fn find_active_for_room(&self, room_number: RoomId) -> AppResult<Vec<Reservation>>;
    /// All reservations in scope, ordered by check-in descending.
    async fn find_all(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>>;
    /// Returns false when no record matches the id.
    async fn set_status(
        &self,
        reservation_id: ReservationId,
        status: ReservationStatus,
    ) -> AppResult<bool>;
}
