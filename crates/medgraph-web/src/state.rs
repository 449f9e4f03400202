//! Shared application state for the web server.

use medgraph_core::{MedicalGraph, SIMILARITY_THRESHOLD};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state injected into every Axum handler.
///
/// One graph per process. Ingestion handlers take the write lock so inserts
/// never interleave partially; query and export handlers take the read lock,
/// so a write that has returned is visible to every read that starts after
/// it.
pub struct AppState {
    pub graph: RwLock<MedicalGraph>,
    /// Fuzzy acceptance threshold applied to every query
    /// (`MEDGRAPH_THRESHOLD` via [`crate::config::ServerConfig`]).
    pub threshold: f64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_threshold(SIMILARITY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            graph: RwLock::new(MedicalGraph::new()),
            threshold,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
