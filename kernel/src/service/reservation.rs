use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};

use shared::error::{AppError, AppResult};

use crate::model::id::{ReservationId, RoomId};
use crate::model::reservation::event::{CreateReservation, UpdateReservation};
use crate::model::reservation::{Reservation, ReservationFilter, ReservationStatus};
use crate::model::room::Room;
use crate::repository::reservation::ReservationRepository;
use crate::repository::room::RoomRepository;
use crate::service::billing::{nights_between, Bill};
use crate::service::overlap::{has_conflict, ranges_overlap};

/// Bill breakdown handed to the caller for confirmation before a checkout
/// is completed.
#[derive(Debug, Clone)]
pub struct CheckoutSummary {
    pub reservation: Reservation,
    pub bill: Bill,
}

/// Per-room exclusive locks. A guard is held across the overlap check and
/// the following write so two concurrent bookings for the same room cannot
/// both pass the check. Unrelated rooms never contend.
#[derive(Default)]
struct RoomLocks(Mutex<HashMap<RoomId, Arc<Mutex<()>>>>);

impl RoomLocks {
    async fn acquire(&self, room_number: RoomId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.0.lock().await;
            locks
                .entry(room_number)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

/// Orchestrates the reservation lifecycle. All invariants are enforced
/// here, before anything is written; the repositories stay dumb.
pub struct ReservationManager {
    reservation_repository: Arc<dyn ReservationRepository>,
    room_repository: Arc<dyn RoomRepository>,
    room_locks: RoomLocks,
}

impl ReservationManager {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepository>,
        room_repository: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            reservation_repository,
            room_repository,
            room_locks: RoomLocks::default(),
        }
    }

    pub async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        validate_fields(
            &event.guest_name,
            &event.contact_number,
            event.check_in,
            event.check_out,
        )?;
        self.require_room(event.room_number).await?;

        let _guard = self.room_locks.acquire(event.room_number).await;
        self.ensure_no_overlap(event.room_number, event.check_in, event.check_out, None)
            .await?;

        let reservation = Reservation {
            reservation_id: ReservationId::new(),
            guest_name: event.guest_name,
            room_number: event.room_number,
            contact_number: event.contact_number,
            check_in: event.check_in,
            check_out: event.check_out,
            status: ReservationStatus::Active,
        };
        self.reservation_repository.insert(reservation).await
    }

    pub async fn update(&self, event: UpdateReservation) -> AppResult<()> {
        validate_fields(
            &event.guest_name,
            &event.contact_number,
            event.check_in,
            event.check_out,
        )?;
        self.require_room(event.room_number).await?;
        // Resolve the target first so an unknown id reports not-found
        // rather than a spurious conflict.
        self.get(event.reservation_id).await?;

        let _guard = self.room_locks.acquire(event.room_number).await;
        self.ensure_no_overlap(
            event.room_number,
            event.check_in,
            event.check_out,
            Some(event.reservation_id),
        )
        .await?;

        let reservation_id = event.reservation_id;
        let found = self.reservation_repository.update(event).await?;
        if !found {
            return Err(not_found(reservation_id));
        }
        Ok(())
    }

    pub async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let found = self.reservation_repository.delete(reservation_id).await?;
        if !found {
            return Err(not_found(reservation_id));
        }
        Ok(())
    }

    pub async fn list(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
        self.reservation_repository.find_all(filter).await
    }

    pub async fn get(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| not_found(reservation_id))
    }

    /// Computes the bill without mutating anything. The caller shows the
    /// breakdown and, on confirmation, calls [`complete_checkout`].
    ///
    /// [`complete_checkout`]: ReservationManager::complete_checkout
    pub async fn prepare_checkout(&self, reservation_id: ReservationId) -> AppResult<CheckoutSummary> {
        let reservation = self.get(reservation_id).await?;
        self.summarize(reservation).await
    }

    /// Re-runs the checkout checks and transitions ACTIVE -> CHECKED_OUT.
    /// A reservation that is already checked out is rejected, so a repeated
    /// confirmation can never bill twice.
    pub async fn complete_checkout(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<CheckoutSummary> {
        let reservation = self.get(reservation_id).await?;

        // The status check and the transition form a read-check-write unit,
        // serialized per room like create/update.
        let _guard = self.room_locks.acquire(reservation.room_number).await;
        let reservation = self.get(reservation_id).await?;
        let mut summary = self.summarize(reservation).await?;

        let found = self
            .reservation_repository
            .set_status(reservation_id, ReservationStatus::CheckedOut)
            .await?;
        if !found {
            return Err(not_found(reservation_id));
        }
        summary.reservation.status = ReservationStatus::CheckedOut;
        Ok(summary)
    }

    /// Rooms with no ACTIVE reservation intersecting [start, end),
    /// ascending by room number. An empty result is a valid outcome.
    pub async fn available_rooms(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Room>> {
        if end <= start {
            return Err(AppError::Validation(
                "checkout date must be after check-in date".into(),
            ));
        }
        let active = self
            .reservation_repository
            .find_all(ReservationFilter::ActiveOnly)
            .await?;
        let rooms = self.room_repository.find_all().await?;
        Ok(rooms
            .into_iter()
            .filter(|room| {
                !active.iter().any(|r| {
                    r.room_number == room.room_number
                        && ranges_overlap(start, end, r.check_in, r.check_out)
                })
            })
            .collect())
    }

    async fn summarize(&self, reservation: Reservation) -> AppResult<CheckoutSummary> {
        if !reservation.status.is_active() {
            return Err(AppError::InvalidState(format!(
                "reservation {} is not ACTIVE (current status: {})",
                reservation.reservation_id, reservation.status
            )));
        }
        let room = self
            .room_repository
            .find_by_id(reservation.room_number)
            .await?
            .ok_or_else(|| {
                AppError::DataIntegrity(format!(
                    "room {} referenced by reservation {} does not exist",
                    reservation.room_number, reservation.reservation_id
                ))
            })?;
        if reservation.check_out <= reservation.check_in {
            return Err(AppError::DataIntegrity(format!(
                "invalid check-in/checkout dates stored for reservation {}",
                reservation.reservation_id
            )));
        }
        let nights = nights_between(reservation.check_in, reservation.check_out);
        let bill = Bill::compute(nights, room.price_per_night);
        Ok(CheckoutSummary { reservation, bill })
    }

    async fn require_room(&self, room_number: RoomId) -> AppResult<Room> {
        self.room_repository
            .find_by_id(room_number)
            .await?
            .ok_or_else(|| AppError::Validation(format!("room {room_number} does not exist")))
    }

    async fn ensure_no_overlap(
        &self,
        room_number: RoomId,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        exclude: Option<ReservationId>,
    ) -> AppResult<()> {
        let existing = self
            .reservation_repository
            .find_active_for_room(room_number)
            .await?;
        if has_conflict(&existing, check_in, check_out, exclude) {
            return Err(AppError::Conflict(format!(
                "room {} is not available between {} and {}",
                room_number,
                check_in.format("%Y-%m-%d"),
                check_out.format("%Y-%m-%d")
            )));
        }
        Ok(())
    }
}

fn validate_fields(
    guest_name: &str,
    contact_number: &str,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> AppResult<()> {
    if guest_name.trim().is_empty() {
        return Err(AppError::Validation("guest name must not be empty".into()));
    }
    if contact_number.trim().is_empty() {
        return Err(AppError::Validation(
            "contact number must not be empty".into(),
        ));
    }
    if check_out <= check_in {
        return Err(AppError::Validation(
            "checkout date must be after check-in date".into(),
        ));
    }
    Ok(())
}

fn not_found(reservation_id: ReservationId) -> AppError {
    AppError::EntityNotFound(format!("no reservation found with id {reservation_id}"))
}
