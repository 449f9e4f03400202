//! Bulk upload parsing and application.
//!
//! Supports the two upload formats the original corpus ships in:
//! - JSON: an array of [`RelationRecord`] objects
//! - CSV: header row `source,relation,target,source_type,target_type`
//!
//! Parsing never touches the graph. [`apply_records`] inserts record by
//! record under the caller's write lock; per-record validation and type
//! conflicts skip the offending record and are reported, so one bad row does
//! not abort a bulk load.

use crate::models::RelationRecord;
use medgraph_common::{MedgraphError, Result};
use medgraph_core::MedicalGraph;
use serde::Serialize;

/// Upload format, decided by file extension as the uploader names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Json,
    Csv,
}

impl UploadFormat {
    /// Pick a format from a filename. Unsupported extensions are a
    /// validation failure, mirroring the upload endpoint's 400.
    pub fn from_filename(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".json") {
            Ok(UploadFormat::Json)
        } else if lower.ends_with(".csv") {
            Ok(UploadFormat::Csv)
        } else {
            Err(MedgraphError::Validation(format!(
                "unsupported file type: {name:?} (expected .json or .csv)"
            )))
        }
    }
}

/// Outcome of applying a bulk upload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    /// Zero-based index of the record in the upload.
    pub index: usize,
    pub reason: String,
}

/// Parse an uploaded file body into records.
pub fn parse_upload(format: UploadFormat, data: &[u8]) -> Result<Vec<RelationRecord>> {
    match format {
        UploadFormat::Json => parse_json(data),
        UploadFormat::Csv => parse_csv(data),
    }
}

fn parse_json(data: &[u8]) -> Result<Vec<RelationRecord>> {
    let records: Vec<RelationRecord> = serde_json::from_slice(data)?;
    Ok(records)
}

fn parse_csv(data: &[u8]) -> Result<Vec<RelationRecord>> {
    let mut reader = csv::Reader::from_reader(data);
    let mut records = Vec::new();
    for row in reader.deserialize::<RelationRecord>() {
        let record =
            row.map_err(|e| MedgraphError::Validation(format!("CSV parse error: {e}")))?;
        records.push(record);
    }
    Ok(records)
}

/// Insert parsed records into the graph, skipping invalid or conflicting
/// ones and counting deduplicated triples separately.
pub fn apply_records(graph: &mut MedicalGraph, records: &[RelationRecord]) -> BulkReport {
    let mut report = BulkReport::default();
    for (index, record) in records.iter().enumerate() {
        let outcome = record.validate().and_then(|()| {
            graph.add_edge(
                &record.source,
                record.source_type(),
                &record.relation,
                &record.target,
                record.target_type(),
            )
        });
        match outcome {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping record");
                report.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }
    tracing::info!(
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        "bulk upload applied"
    );
    report
}
