//! API error rendering.
//!
//! Maps the core error taxonomy onto HTTP statuses so callers can tell an
//! unrecognized term (404) apart from a resolved term with zero
//! relationships (200 with an empty result list), and a malformed record
//! (400) from a type conflict (409).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medgraph_common::MedgraphError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] MedgraphError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(e) => match e {
                MedgraphError::Validation(_) | MedgraphError::Serialization(_) => {
                    StatusCode::BAD_REQUEST
                }
                MedgraphError::Conflict { .. } => StatusCode::CONFLICT,
                MedgraphError::UnresolvedTerm(_) => StatusCode::NOT_FOUND,
                MedgraphError::Io(_) | MedgraphError::Other(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
