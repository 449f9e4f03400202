//! Ingestion record shape.

use medgraph_common::{ConceptType, MedgraphError, Result};
use serde::{Deserialize, Serialize};

/// One relationship record as supplied by the ingestion collaborator
/// (JSON body, JSON array element, or CSV row). All five fields are
/// required; [`RelationRecord::validate`] additionally rejects blank values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationRecord {
    pub source: String,
    pub relation: String,
    pub target: String,
    pub source_type: String,
    pub target_type: String,
}

impl RelationRecord {
    /// Shape check performed before the record reaches the core.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("source", &self.source),
            ("relation", &self.relation),
            ("target", &self.target),
            ("source_type", &self.source_type),
            ("target_type", &self.target_type),
        ] {
            if value.trim().is_empty() {
                return Err(MedgraphError::Validation(format!(
                    "missing or blank field '{field}'"
                )));
            }
        }
        Ok(())
    }

    pub fn source_type(&self) -> ConceptType {
        ConceptType::from(self.source_type.as_str())
    }

    pub fn target_type(&self) -> ConceptType {
        ConceptType::from(self.target_type.as_str())
    }
}
