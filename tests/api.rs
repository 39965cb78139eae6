use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use adapter::store::InMemoryStore;
use api::route::{health::build_health_check_routers, v1};
use kernel::model::id::RoomId;
use kernel::model::room::Room;
use registry::AppRegistry;

async fn app() -> Router {
    let store = InMemoryStore::new();
    store
        .seed_rooms(vec![
            Room {
                room_number: RoomId::new(101),
                room_type: "Single".into(),
                price_per_night: dec!(1000.00),
            },
            Room {
                room_number: RoomId::new(201),
                room_type: "Double".into(),
                price_per_night: dec!(1800.00),
            },
        ])
        .await;
    Router::new()
        .merge(build_health_check_routers())
        .merge(v1::routes())
        .with_state(AppRegistry::new(store))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking(room: u32, check_in: &str, check_out: &str) -> Value {
    json!({
        "guestName": "Asha Rao",
        "roomNumber": room,
        "contactNumber": "9876500000",
        "checkIn": format!("{check_in}T12:00:00Z"),
        "checkOut": format!("{check_out}T12:00:00Z"),
    })
}

#[tokio::test]
async fn health_check_works() {
    let app = app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_conflict_and_boundary_touch_map_to_http_statuses() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-01", "2024-01-03"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert!(created["reservationId"].is_string());

    let conflict = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-02", "2024-01-04"),
        ))
        .await
        .unwrap();
    assert_eq!(conflict.status(), StatusCode::CONFLICT);

    let touching = app
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-03", "2024-01-05"),
        ))
        .await
        .unwrap();
    assert_eq!(touching.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn empty_guest_name_is_a_bad_request() {
    let app = app().await;
    let mut body = booking(101, "2024-01-01", "2024-01-03");
    body["guestName"] = json!("");

    let response = app
        .oneshot(post_json("/api/v1/reservations", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_previews_then_confirms_then_rejects_repeat() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-01", "2024-01-03"),
        ))
        .await
        .unwrap();
    let id = json_body(created).await["reservationId"]
        .as_str()
        .unwrap()
        .to_owned();

    let preview = app
        .clone()
        .oneshot(get(&format!("/api/v1/reservations/{id}/bill")))
        .await
        .unwrap();
    assert_eq!(preview.status(), StatusCode::OK);
    let bill = json_body(preview).await;
    assert_eq!(bill["nights"], 2);
    assert_eq!(bill["subtotal"], "2000.00");
    assert_eq!(bill["tax"], "360.00");
    assert_eq!(bill["total"], "2360.00");
    assert_eq!(bill["reservation"]["status"], "ACTIVE");

    let confirmed = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/reservations/{id}/checkout"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(confirmed.status(), StatusCode::OK);
    let summary = json_body(confirmed).await;
    assert_eq!(summary["reservation"]["status"], "CHECKED_OUT");

    let repeated = app
        .oneshot(post_json(
            &format!("/api/v1/reservations/{id}/checkout"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(repeated.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-01", "2024-01-03"),
        ))
        .await
        .unwrap();
    let id = json_body(created).await["reservationId"]
        .as_str()
        .unwrap()
        .to_owned();

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/reservations/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app
        .oneshot(get(&format!("/api/v1/reservations/{id}")))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_defaults_to_active_view() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-01", "2024-01-03"),
        ))
        .await
        .unwrap();
    let id = json_body(created).await["reservationId"]
        .as_str()
        .unwrap()
        .to_owned();
    app.clone()
        .oneshot(post_json(
            &format!("/api/v1/reservations/{id}/checkout"),
            json!({}),
        ))
        .await
        .unwrap();

    let current = app
        .clone()
        .oneshot(get("/api/v1/reservations"))
        .await
        .unwrap();
    assert_eq!(json_body(current).await["items"].as_array().unwrap().len(), 0);

    let all = app
        .oneshot(get("/api/v1/reservations?view=all"))
        .await
        .unwrap();
    assert_eq!(json_body(all).await["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn available_rooms_reflect_active_bookings() {
    let app = app().await;

    app.clone()
        .oneshot(post_json(
            "/api/v1/reservations",
            booking(101, "2024-01-01", "2024-01-05"),
        ))
        .await
        .unwrap();

    let available = app
        .clone()
        .oneshot(get(
            "/api/v1/rooms/available?checkIn=2024-01-02T12:00:00Z&checkOut=2024-01-04T12:00:00Z",
        ))
        .await
        .unwrap();
    assert_eq!(available.status(), StatusCode::OK);
    let rooms = json_body(available).await;
    let numbers: Vec<u64> = rooms["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["roomNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![201]);

    let bad_range = app
        .oneshot(get(
            "/api/v1/rooms/available?checkIn=2024-01-04T12:00:00Z&checkOut=2024-01-04T12:00:00Z",
        ))
        .await
        .unwrap();
    assert_eq!(bad_range.status(), StatusCode::BAD_REQUEST);
}
