//! Ingestion endpoints: single-record insert and bulk file upload.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use medgraph_ingestion::{apply_records, parse_upload, BulkReport, RelationRecord, UploadFormat};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AddConceptResponse {
    pub status: &'static str,
    /// `false` when the triple already existed and was deduplicated.
    pub inserted: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub report: BulkReport,
}

/// POST /add_concept - insert one relationship.
///
/// The body is extracted as a `Result` so a missing or malformed field is a
/// 400 validation failure, not the extractor's default 422.
pub async fn add_concept(
    State(state): State<SharedState>,
    payload: Result<Json<RelationRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    record.validate()?;

    let mut graph = state.graph.write().await;
    let inserted = graph.add_edge(
        &record.source,
        record.source_type(),
        &record.relation,
        &record.target,
        record.target_type(),
    )?;

    tracing::info!(
        source = %record.source,
        relation = %record.relation,
        target = %record.target,
        inserted,
        "concept added"
    );
    Ok(Json(AddConceptResponse {
        status: "success",
        inserted,
    }))
}

/// POST /upload_data - bulk upload of a `.json` or `.csv` file.
pub async fn upload_data(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) =
        file.ok_or_else(|| ApiError::BadRequest("no file uploaded".to_string()))?;
    let format = UploadFormat::from_filename(&filename)?;
    let records = parse_upload(format, &data)?;

    let report = {
        let mut graph = state.graph.write().await;
        apply_records(&mut graph, &records)
    };

    Ok(Json(UploadResponse {
        message: "file processed successfully",
        report,
    }))
}
