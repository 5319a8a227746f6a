mod itinerary;
mod map;
mod ride;
mod state;

use crate::itinerary::routes::itinerary_routes;
use crate::map::map_handler;
use crate::ride::ride_handler;
use crate::state::AppState;
use axum::http::Method;
use axum::routing::get;
use axum::{Router, serve};
use ride_config::ride_file::RideFile;
use ride_itinerary::gemini_client::GeminiClient;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, error, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const API_ADDR_ENV_VAR: &str = "RIDE_API_ADDR";
const DEFAULT_API_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let ride_file = RideFile::from_env()?;
    let gemini = GeminiClient::default();
    info!(
        "Planning {} on {} with {}",
        ride_file.ride.route_go.join(" -> "),
        ride_file.ride.date,
        gemini.model()
    );

    let state = Arc::new(AppState::new(ride_file, gemini));

    // the page is served once per process start, this is its load
    state.itinerary.load();

    let addr = std::env::var(API_ADDR_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    run_server(listener, state, shutdown_signal()).await?;
    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ride", get(ride_handler))
        .route("/map", get(map_handler))
        .merge(itinerary_routes())
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

/// Serves until `shutdown` resolves, then detaches the itinerary view even
/// when serving failed.
async fn run_server<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = serve(listener, app(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown)
        .await;

    state.itinerary.unmount();
    info!("Shut down");

    served
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ride_itinerary::loader::ItineraryState;
    use tokio::net::TcpListener;

    use super::run_server;
    use crate::state::test_state;

    #[tokio::test]
    async fn test_shutdown_unmounts_itinerary() {
        let state = Arc::new(test_state());
        state.itinerary.load();
        assert_eq!(state.itinerary.state(), ItineraryState::Loading);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        run_server(listener, Arc::clone(&state), async {})
            .await
            .unwrap();

        assert_eq!(state.itinerary.state(), ItineraryState::Idle);
    }
}
