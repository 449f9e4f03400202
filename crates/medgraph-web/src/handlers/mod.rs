pub mod export;
pub mod ingest;
pub mod query;
pub mod system;
