//! HTTP layer exposing the analytics pipelines.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::data::Dataset;

/// Shared read-only state handed to every handler. The dataset is loaded
/// once before the listener binds and never mutated, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

/// Build the route table. Split out from [`serve`] so tests can drive the
/// router without a socket.
pub fn router(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/summary", get(routes::summary))
        .route("/top_advertisers", get(routes::top_advertisers))
        .route("/trend", get(routes::trend))
        .route("/predict", get(routes::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { dataset })
}

pub async fn serve(dataset: Arc<Dataset>, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, rows = dataset.len(), "serving adpulse API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(dataset).into_make_service()).await?;
    Ok(())
}
