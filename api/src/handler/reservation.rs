use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;

use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::reservation::{
    CheckoutSummaryResponse, CreateReservationRequest, CreatedReservationResponse,
    ReservationListQuery, ReservationResponse, ReservationsResponse, UpdateReservationRequest,
    UpdateReservationRequestWithId,
};

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    registry
        .reservation_manager()
        .create(req.into())
        .await
        .map(|reservation_id| {
            (
                StatusCode::CREATED,
                Json(CreatedReservationResponse { reservation_id }),
            )
        })
}

pub async fn show_reservation_list(
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_manager()
        .list(query.into())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_manager()
        .get(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn update_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    let update = UpdateReservationRequestWithId::new(reservation_id, req);
    registry
        .reservation_manager()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_manager()
        .delete(reservation_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

/// Bill preview. Nothing is mutated; the caller confirms the breakdown
/// and then posts to the checkout endpoint.
pub async fn show_checkout_bill(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutSummaryResponse>> {
    registry
        .reservation_manager()
        .prepare_checkout(reservation_id)
        .await
        .map(CheckoutSummaryResponse::from)
        .map(Json)
}

pub async fn checkout_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutSummaryResponse>> {
    registry
        .reservation_manager()
        .complete_checkout(reservation_id)
        .await
        .map(CheckoutSummaryResponse::from)
        .map(Json)
}
