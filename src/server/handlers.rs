//! Route handlers for the JSON API

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use netpath_core::error::NetpathError;
use netpath_core::graph::{Network, NodeId, RawEdge, RawNetwork};
use netpath_core::query::PathQuery;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ApiError, AppState};

type ApiResult = std::result::Result<Json<Value>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct SaveNetworkRequest {
    network_name: Option<String>,
    nodes: Option<Vec<NodeId>>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    #[serde(default)]
    source: String,
    #[serde(default)]
    destination: String,
    network_name: Option<String>,
    nodes: Option<Vec<NodeId>>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
pub struct LoadParams {
    name: Option<String>,
}

/// Run store and graph work off the async workers
async fn run_blocking<T, F>(work: F) -> std::result::Result<T, ApiError>
where
    F: FnOnce() -> netpath_core::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| NetpathError::Other(format!("worker task failed: {}", e)))?
        .map_err(ApiError::from)
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

pub async fn save_network(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveNetworkRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let name = request
        .network_name
        .ok_or_else(|| ApiError::bad_request("missing network_name field"))?;
    let nodes = request
        .nodes
        .ok_or_else(|| ApiError::bad_request("missing nodes field"))?;
    let raw = RawNetwork {
        nodes,
        edges: request.edges,
    };

    let store = state.store.clone();
    run_blocking(move || {
        let network = Network::from_raw(&raw)?;
        store.put(&name, &network)?;
        tracing::info!(
            network = %name,
            nodes = network.nodes.len(),
            edges = network.edges.len(),
            "network saved"
        );
        Ok(())
    })
    .await?;

    Ok(Json(json!({ "message": "Network saved successfully." })))
}

pub async fn load_network(
    State(state): State<AppState>,
    params: std::result::Result<Query<LoadParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params?;
    let name = params
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing network name parameter"))?;

    let store = state.store.clone();
    let network = run_blocking(move || store.get(&name)).await?;
    let body = serde_json::to_value(&network).map_err(NetpathError::from)?;
    Ok(Json(body))
}

pub async fn list_networks(State(state): State<AppState>) -> ApiResult {
    let store = state.store.clone();
    let names = run_blocking(move || store.list()).await?;
    Ok(Json(json!({ "networks": names })))
}

pub async fn shortest_path(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortestPathRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;

    let query = match request.network_name {
        Some(name) => PathQuery::named(name, request.source, request.destination),
        None => {
            let nodes = request
                .nodes
                .ok_or_else(|| ApiError::bad_request("missing nodes field"))?;
            let raw = RawNetwork {
                nodes,
                edges: request.edges,
            };
            PathQuery::inline(raw, request.source, request.destination)
        }
    };

    let store = state.store.clone();
    let result = run_blocking(move || query.execute(store.as_ref())).await?;
    Ok(Json(result.to_json()))
}
