//! Liveness and basic graph statistics.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

/// GET /health
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let graph = state.graph.read().await;
    Json(json!({
        "status": "ok",
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
    }))
}
