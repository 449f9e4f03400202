//! medgraph-core — Query resolution engine for the medical concept graph.
//!
//! Raw term → [`normalise::normalize`] → [`resolver::resolve`] (consults the
//! [`index::NodeIndex`]) → canonical node → [`graph::MedicalGraph`] traversal
//! filtered by relation → ranked answer. Everything here is synchronous and
//! in-memory; the HTTP layer in `medgraph-web` owns locking and I/O.

pub mod graph;
pub mod index;
pub mod normalise;
pub mod query;
pub mod resolver;

pub use graph::{Direction, Edge, GraphSnapshot, MedicalGraph};
pub use index::{NodeId, NodeIndex};
pub use query::{QueryAnswer, QueryHit};
pub use resolver::{MatchKind, Resolution, SIMILARITY_THRESHOLD};
