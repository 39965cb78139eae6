use async_trait::async_trait;
use derive_new::new;

use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::event::UpdateReservation;
use kernel::model::reservation::{Reservation, ReservationFilter, ReservationStatus};
use kernel::repository::reservation::ReservationRepository;
use shared::error::AppResult;

use crate::store::InMemoryStore;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    store: InMemoryStore,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn insert(&self, reservation: Reservation) -> AppResult<ReservationId> {
        let mut table = self.store.reservations.write().await;
        let reservation_id = reservation.reservation_id;
        table.insert(reservation_id, reservation);
        Ok(reservation_id)
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<bool> {
        let mut table = self.store.reservations.write().await;
        match table.get_mut(&event.reservation_id) {
            None => Ok(false),
            Some(existing) => {
                existing.guest_name = event.guest_name;
                existing.room_number = event.room_number;
                existing.contact_number = event.contact_number;
                existing.check_in = event.check_in;
                existing.check_out = event.check_out;
                // status stays as-is; only checkout transitions it
                Ok(true)
            }
        }
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<bool> {
        let mut table = self.store.reservations.write().await;
        Ok(table.remove(&reservation_id).is_some())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let table = self.store.reservations.read().await;
        Ok(table.get(&reservation_id).cloned())
    }

    async fn find_active_for_room(&self, room_number: RoomId) -> AppResult<Vec<Reservation>> {
        let table = self.store.reservations.read().await;
        Ok(table
            .values()
            .filter(|r| r.room_number == room_number && r.status.is_active())
            .cloned()
            .collect())
    }

    async fn find_all(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
        let table = self.store.reservations.read().await;
        let mut items: Vec<Reservation> = table
            .values()
            .filter(|r| match filter {
                ReservationFilter::All => true,
                ReservationFilter::ActiveOnly => r.status.is_active(),
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.check_in.cmp(&a.check_in));
        Ok(items)
    }

    async fn set_status(
        &self,
        reservation_id: ReservationId,
        status: ReservationStatus,
    ) -> AppResult<bool> {
        let mut table = self.store.reservations.write().await;
        match table.get_mut(&reservation_id) {
            None => Ok(false),
            Some(existing) => {
                existing.status = status;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).unwrap()
    }

    fn reservation(room: u32, check_in: u32, check_out: u32) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            guest_name: "Asha Rao".into(),
            room_number: RoomId::new(room),
            contact_number: "9876500000".into(),
            check_in: day(check_in),
            check_out: day(check_out),
            status: ReservationStatus::Active,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id_round_trips() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        let id = repo.insert(reservation(101, 1, 3)).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.reservation_id, id);
        assert_eq!(found.guest_name, "Asha Rao");
        assert_eq!(found.status, ReservationStatus::Active);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_status() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        let id = repo.insert(reservation(101, 1, 3)).await.unwrap();
        repo.set_status(id, ReservationStatus::CheckedOut)
            .await
            .unwrap();

        let found = repo
            .update(UpdateReservation::new(
                id,
                "Dev Mehta".into(),
                RoomId::new(201),
                "9876511111".into(),
                day(2),
                day(5),
            ))
            .await
            .unwrap();
        assert!(found);

        let updated = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.guest_name, "Dev Mehta");
        assert_eq!(updated.room_number, RoomId::new(201));
        assert_eq!(updated.check_out, day(5));
        // update never touches the lifecycle
        assert_eq!(updated.status, ReservationStatus::CheckedOut);
    }

    #[tokio::test]
    async fn update_reports_missing_record() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        let found = repo
            .update(UpdateReservation::new(
                ReservationId::new(),
                "Dev Mehta".into(),
                RoomId::new(101),
                "9876511111".into(),
                day(1),
                day(2),
            ))
            .await
            .unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        let id = repo.insert(reservation(101, 1, 3)).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        // second delete finds nothing
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn find_active_for_room_skips_other_rooms_and_checked_out() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        let in_room = repo.insert(reservation(101, 1, 3)).await.unwrap();
        let checked_out = repo.insert(reservation(101, 5, 7)).await.unwrap();
        repo.set_status(checked_out, ReservationStatus::CheckedOut)
            .await
            .unwrap();
        repo.insert(reservation(201, 1, 3)).await.unwrap();

        let active = repo.find_active_for_room(RoomId::new(101)).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].reservation_id, in_room);
    }

    #[tokio::test]
    async fn find_all_orders_by_check_in_descending() {
        let repo = ReservationRepositoryImpl::new(InMemoryStore::new());
        repo.insert(reservation(101, 1, 3)).await.unwrap();
        let latest = repo.insert(reservation(201, 10, 12)).await.unwrap();
        let middle = repo.insert(reservation(301, 5, 7)).await.unwrap();
        repo.set_status(middle, ReservationStatus::CheckedOut)
            .await
            .unwrap();

        let all = repo.find_all(ReservationFilter::All).await.unwrap();
        let check_ins: Vec<DateTime<Utc>> = all.iter().map(|r| r.check_in).collect();
        assert_eq!(check_ins, vec![day(10), day(5), day(1)]);

        let active = repo.find_all(ReservationFilter::ActiveOnly).await.unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].reservation_id, latest);
    }
}
