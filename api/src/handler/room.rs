use axum::extract::{Query, State};
use axum::Json;

use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::room::{AvailableRoomsQuery, RoomsResponse};

pub async fn show_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_available_rooms(
    Query(query): Query<AvailableRoomsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .reservation_manager()
        .available_rooms(query.check_in, query.check_out)
        .await
        .map(RoomsResponse::from)
        .map(Json)
}
