use axum::Router;
use registry::AppRegistry;

use super::{reservation::build_reservation_routers, room::build_room_routers};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_reservation_routers())
        .merge(build_room_routers());
    Router::new().nest("/api/v1", router)
}
