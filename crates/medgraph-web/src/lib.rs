//! medgraph-web — HTTP surface over the medical concept graph.
//! Thin plumbing only: routing, upload parsing, CORS, and response
//! rendering; all graph semantics live in `medgraph-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
