//! Node index — canonical label → node id, with insertion-ordered listing.
//!
//! Build once per graph; labels passed in must already be normalised (see
//! [`crate::normalise::normalize`]). The index is the candidate source for
//! the fuzzy resolver, so label enumeration order is the insertion order and
//! is stable across calls.

use medgraph_common::{ConceptType, MedgraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque handle to a node in the arena. Ids are dense and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A registered canonical node.
#[derive(Debug, Clone)]
pub struct NodeEntry {
    pub label: String,
    pub kind: ConceptType,
}

/// Insertion-ordered arena of canonical nodes plus an exact-lookup map.
#[derive(Debug, Default)]
pub struct NodeIndex {
    entries: Vec<NodeEntry>,
    by_label: HashMap<String, NodeId>,
}

impl NodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label or confirm an existing registration.
    ///
    /// Policy: a label maps to exactly one type for its lifetime. Registering
    /// an existing label under a different type fails with
    /// [`MedgraphError::Conflict`] and leaves the first registration intact.
    pub fn register(&mut self, label: &str, kind: ConceptType) -> Result<NodeId> {
        if let Some(&id) = self.by_label.get(label) {
            let existing = &self.entries[id.0];
            if existing.kind != kind {
                return Err(MedgraphError::Conflict {
                    label: label.to_string(),
                    existing: existing.kind.to_string(),
                    requested: kind.to_string(),
                });
            }
            return Ok(id);
        }

        let id = NodeId(self.entries.len());
        self.entries.push(NodeEntry {
            label: label.to_string(),
            kind,
        });
        self.by_label.insert(label.to_string(), id);
        Ok(id)
    }

    /// Exact lookup of an already-normalised label.
    pub fn exact_lookup(&self, normalized_label: &str) -> Option<NodeId> {
        self.by_label.get(normalized_label).copied()
    }

    pub fn get(&self, id: NodeId) -> &NodeEntry {
        &self.entries[id.0]
    }

    /// All labels in insertion order, optionally filtered by concept type.
    /// This is the fuzzy resolver's candidate set.
    pub fn labels<'a>(
        &'a self,
        scope: Option<&'a ConceptType>,
    ) -> impl Iterator<Item = (NodeId, &'a str)> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| scope.map_or(true, |s| &e.kind == s))
            .map(|(i, e)| (NodeId(i), e.label.as_str()))
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (NodeId(i), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
