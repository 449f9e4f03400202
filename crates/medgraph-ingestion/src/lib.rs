//! medgraph-ingestion — Record shapes and bulk parsing for graph ingestion.
//!
//! Validation happens here, at the boundary: a record that reaches
//! `MedicalGraph::add_edge` always has five non-blank string fields.

pub mod bulk;
pub mod models;

pub use bulk::{apply_records, parse_upload, BulkReport, UploadFormat};
pub use models::RelationRecord;
