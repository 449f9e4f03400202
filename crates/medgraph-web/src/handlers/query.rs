//! Domain query endpoints.
//!
//! Each handler extracts one term from the query string and renders the
//! core's `QueryAnswer` as JSON. An unrecognized term surfaces as 404 via
//! `ApiError`; a recognized term with no matching relationships is a 200
//! with an empty `results` list.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct DiagnosisParams {
    pub symptom: String,
}

#[derive(Debug, Deserialize)]
pub struct TreatmentParams {
    pub disease: String,
}

#[derive(Debug, Deserialize)]
pub struct SpecialistParams {
    pub condition: String,
}

/// GET /query_diagnosis?symptom=...
pub async fn query_diagnosis(
    State(state): State<SharedState>,
    Query(params): Query<DiagnosisParams>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;
    let answer = graph.diagnoses_for_symptom_with_threshold(&params.symptom, state.threshold)?;
    Ok(Json(answer))
}

/// GET /query_treatments?disease=...
pub async fn query_treatments(
    State(state): State<SharedState>,
    Query(params): Query<TreatmentParams>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;
    let answer = graph.treatments_for_disease_with_threshold(&params.disease, state.threshold)?;
    Ok(Json(answer))
}

/// GET /query_specialists?condition=...
pub async fn query_specialists(
    State(state): State<SharedState>,
    Query(params): Query<SpecialistParams>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;
    let answer = graph.specialists_for_entity_with_threshold(&params.condition, state.threshold)?;
    Ok(Json(answer))
}
