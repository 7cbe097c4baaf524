//! HTTP JSON API over a network store
//!
//! Routes:
//! - `GET  /api/ping`
//! - `POST /api/save-network`
//! - `GET  /api/load-network?name=`
//! - `GET  /api/networks`
//! - `POST /api/shortest-path`

mod error;
mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use netpath_core::error::Result;
use netpath_core::store::NetworkStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn NetworkStore>,
}

/// Build the API router around `store`
pub fn router(store: Arc<dyn NetworkStore>) -> Router {
    // TraceLayer logs all HTTP requests with method, path, status, and latency
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/ping", get(handlers::ping))
        .route("/api/save-network", post(handlers::save_network))
        .route("/api/load-network", get(handlers::load_network))
        .route("/api/networks", get(handlers::list_networks))
        .route("/api/shortest-path", post(handlers::shortest_path))
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(AppState { store })
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, store: Arc<dyn NetworkStore>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
