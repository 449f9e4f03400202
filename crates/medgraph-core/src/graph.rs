//! Directed multigraph of medical concepts.
//!
//! Owns the node index and the insertion-ordered edge list. Mutation goes
//! through [`MedicalGraph::add_edge`] only; a write that returns is visible
//! to every subsequent read (the web layer serialises writers with a lock).

use crate::index::{NodeId, NodeIndex};
use crate::normalise::{normalize, normalize_relation};
use medgraph_common::{ConceptType, MedgraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A directed, typed relationship between two canonical nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub relation: String,
    pub target: NodeId,
}

/// Traversal direction relative to the queried node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
}

/// Full materialised view of the graph for export/visualisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub links: Vec<SnapshotLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ConceptType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotLink {
    pub source: String,
    pub label: String,
    pub target: String,
}

/// In-memory concept graph. One instance per process, lifetime = server
/// lifetime; tests construct their own isolated instances.
#[derive(Debug, Default)]
pub struct MedicalGraph {
    index: NodeIndex,
    edges: Vec<Edge>,
    seen: HashSet<(NodeId, String, NodeId)>,
}

impl MedicalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    /// Insert one relationship, registering both endpoints as needed.
    ///
    /// Labels and the relation are normalised here; blank-after-normalisation
    /// fields are rejected with `Validation` before any mutation. A type
    /// conflict on either endpoint fails with `Conflict`. Duplicate
    /// (source, relation, target) triples are deduplicated; the return value
    /// is `true` when a new edge was actually inserted.
    pub fn add_edge(
        &mut self,
        source_label: &str,
        source_type: ConceptType,
        relation: &str,
        target_label: &str,
        target_type: ConceptType,
    ) -> Result<bool> {
        let source = normalize(source_label);
        let target = normalize(target_label);
        let relation = normalize_relation(relation);

        if source.is_empty() || target.is_empty() || relation.is_empty() {
            return Err(MedgraphError::Validation(format!(
                "empty field after normalisation in ({source_label:?}, {relation:?}, {target_label:?})"
            )));
        }

        let source_id = self.index.register(&source, source_type)?;
        let target_id = self.index.register(&target, target_type)?;

        let key = (source_id, relation.clone(), target_id);
        if !self.seen.insert(key) {
            tracing::debug!(%source, %relation, %target, "duplicate edge skipped");
            return Ok(false);
        }

        self.edges.push(Edge {
            source: source_id,
            relation,
            target: target_id,
        });
        Ok(true)
    }

    /// Typed-neighbor query in edge insertion order.
    ///
    /// `relations` filters by relation name (already-normalised constants);
    /// an empty slice means any relation. `Direction::Out` follows edges
    /// leaving `node`, `Direction::In` edges arriving at it.
    pub fn neighbors(
        &self,
        node: NodeId,
        relations: &[&str],
        direction: Direction,
    ) -> Vec<(NodeId, &str)> {
        self.edges
            .iter()
            .filter(|e| match direction {
                Direction::Out => e.source == node,
                Direction::In => e.target == node,
            })
            .filter(|e| relations.is_empty() || relations.contains(&e.relation.as_str()))
            .map(|e| {
                let other = match direction {
                    Direction::Out => e.target,
                    Direction::In => e.source,
                };
                (other, e.relation.as_str())
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Materialise the whole graph for export. Nodes and links come out in
    /// insertion order.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .index
            .iter()
            .map(|(_, e)| SnapshotNode {
                id: e.label.clone(),
                kind: e.kind.clone(),
            })
            .collect();
        let links = self
            .edges
            .iter()
            .map(|e| SnapshotLink {
                source: self.index.get(e.source).label.clone(),
                label: e.relation.clone(),
                target: self.index.get(e.target).label.clone(),
            })
            .collect();
        GraphSnapshot { nodes, links }
    }
}
