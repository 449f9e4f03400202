//! medgraph-common — Shared types and errors used across all MedGraph crates.

pub mod concepts;
pub mod error;

pub use concepts::ConceptType;
pub use error::{MedgraphError, Result};
