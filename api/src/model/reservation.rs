use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::event::{CreateReservation, UpdateReservation};
use kernel::model::reservation::{Reservation, ReservationFilter};
use kernel::service::reservation::CheckoutSummary;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(length(min = 1))]
    pub guest_name: String,
    #[garde(skip)]
    pub room_number: RoomId,
    #[garde(length(min = 1))]
    pub contact_number: String,
    #[garde(skip)]
    pub check_in: DateTime<Utc>,
    #[garde(skip)]
    pub check_out: DateTime<Utc>,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            guest_name,
            room_number,
            contact_number,
            check_in,
            check_out,
        } = value;
        CreateReservation::new(guest_name, room_number, contact_number, check_in, check_out)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(length(min = 1))]
    pub guest_name: String,
    #[garde(skip)]
    pub room_number: RoomId,
    #[garde(length(min = 1))]
    pub contact_number: String,
    #[garde(skip)]
    pub check_in: DateTime<Utc>,
    #[garde(skip)]
    pub check_out: DateTime<Utc>,
}

#[derive(new)]
pub struct UpdateReservationRequestWithId(ReservationId, UpdateReservationRequest);

impl From<UpdateReservationRequestWithId> for UpdateReservation {
    fn from(value: UpdateReservationRequestWithId) -> Self {
        let UpdateReservationRequestWithId(reservation_id, req) = value;
        UpdateReservation::new(
            reservation_id,
            req.guest_name,
            req.room_number,
            req.contact_number,
            req.check_in,
            req.check_out,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationView {
    Active,
    All,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub view: Option<ReservationView>,
}

impl From<ReservationListQuery> for ReservationFilter {
    fn from(value: ReservationListQuery) -> Self {
        // the dashboard shows current reservations unless asked for all
        match value.view.unwrap_or(ReservationView::Active) {
            ReservationView::Active => ReservationFilter::ActiveOnly,
            ReservationView::All => ReservationFilter::All,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub room_number: RoomId,
    pub contact_number: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            guest_name,
            room_number,
            contact_number,
            check_in,
            check_out,
            status,
        } = value;
        Self {
            reservation_id,
            guest_name,
            room_number,
            contact_number,
            check_in,
            check_out,
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReservationResponse {
    pub reservation_id: ReservationId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummaryResponse {
    pub reservation: ReservationResponse,
    pub nights: i64,
    pub price_per_night: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl From<CheckoutSummary> for CheckoutSummaryResponse {
    fn from(value: CheckoutSummary) -> Self {
        let CheckoutSummary { reservation, bill } = value;
        Self {
            reservation: reservation.into(),
            nights: bill.nights,
            price_per_night: bill.price_per_night,
            subtotal: bill.subtotal,
            tax: bill.tax,
            total: bill.total,
        }
    }
}
