use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedgraphError {
    /// Malformed ingestion record; rejected before any graph mutation.
    #[error("Invalid record: {0}")]
    Validation(String),

    /// A label was registered under one concept type and re-registered under
    /// another. The first registration wins; the offending record is rejected.
    #[error("Label '{label}' is already registered as {existing}, refusing to re-register as {requested}")]
    Conflict {
        label: String,
        existing: String,
        requested: String,
    },

    /// Fuzzy resolution found no candidate above the acceptance threshold.
    /// Distinct from a resolved term with zero matching relationships.
    #[error("Term not recognized: '{0}'")]
    UnresolvedTerm(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MedgraphError>;
