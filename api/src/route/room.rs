use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::room::{show_available_rooms, show_room_list};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", get(show_room_list))
        .route("/available", get(show_available_rooms));

    Router::new().nest("/rooms", room_routers)
}
