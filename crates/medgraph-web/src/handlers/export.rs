//! Graph export for visualization.

use axum::{extract::State, response::IntoResponse, Json};

use crate::state::SharedState;

/// GET /graph_data - full node/edge listing.
pub async fn graph_data(State(state): State<SharedState>) -> impl IntoResponse {
    let graph = state.graph.read().await;
    Json(graph.snapshot())
}
