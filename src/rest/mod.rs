use std::net::SocketAddr;

use axum::{routing::get, Router};

use crate::{climate::QueryWindows, storage::Storage};

mod error;
mod handlers;
pub mod models;

use handlers::{
    health, not_found, precipitation, stations, temps_between, temps_from, tobs, welcome,
};

#[derive(Clone)]
pub struct AppState<S: Storage> {
    pub storage: S,
    pub started_at: std::time::SystemTime,
    pub windows: QueryWindows,
}

pub fn router<S: Storage + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::<S>))
        .route("/api/v1.0/precipitation", get(precipitation::<S>))
        .route("/api/v1.0/stations", get(stations::<S>))
        .route("/api/v1.0/tobs", get(tobs::<S>))
        .route("/api/v1.0/:start", get(temps_from::<S>))
        .route("/api/v1.0/:start/:end", get(temps_between::<S>))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<S: Storage + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    storage: S,
    windows: QueryWindows,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    log::info!("🌐 REST service on http://{}", addr);

    let app = router(AppState {
        storage,
        started_at: std::time::SystemTime::now(),
        windows,
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
