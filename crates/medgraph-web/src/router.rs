//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    export::graph_data,
    ingest::{add_concept, upload_data},
    query::{query_diagnosis, query_specialists, query_treatments},
    system::health,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Ingestion
        .route("/add_concept", post(add_concept))
        .route("/upload_data", post(upload_data))
        // Queries
        .route("/query_diagnosis", get(query_diagnosis))
        .route("/query_treatments", get(query_treatments))
        .route("/query_specialists", get(query_specialists))
        // Export
        .route("/graph_data", get(graph_data))
        // Liveness
        .route("/health", get(health))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
