use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use adapter::store::InMemoryStore;
use api::route::{health::build_health_check_routers, v1};
use kernel::model::id::RoomId;
use kernel::model::room::Room;
use registry::AppRegistry;
use rust_decimal_macros::dec;
use shared::config::AppConfig;
use shared::env::{which, Environment};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;

    let store = InMemoryStore::new();
    store.seed_rooms(room_catalog()).await;
    let registry = AppRegistry::new(store);

    let app = Router::new()
        .merge(build_health_check_routers())
        .merge(v1::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    let addr = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), app_config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })
}

// Stand-in for the administrative process that owns the room catalog.
// The reservation flow itself never creates or removes rooms.
fn room_catalog() -> Vec<Room> {
    let room = |number: u32, room_type: &str, price| Room {
        room_number: RoomId::new(number),
        room_type: room_type.into(),
        price_per_night: price,
    };
    vec![
        room(101, "Single", dec!(1000.00)),
        room(102, "Single", dec!(1000.00)),
        room(201, "Double", dec!(1800.00)),
        room(202, "Double", dec!(1800.00)),
        room(301, "Deluxe", dec!(2500.00)),
        room(401, "Suite", dec!(4000.00)),
    ]
}
