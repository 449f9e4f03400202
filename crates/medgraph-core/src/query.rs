//! Domain queries — fuzzy resolution composed with graph traversal.
//!
//! Direction convention, applied uniformly: every domain relation is stored
//! as an outgoing edge from the entity it describes —
//! symptom →`indicates`→ disease, disease →`treated_by`→ treatment,
//! entity →`managed_by`/`prescribed_by`→ specialist.

use crate::graph::{Direction, MedicalGraph};
use crate::resolver::{self, MatchKind, SIMILARITY_THRESHOLD};
use medgraph_common::{ConceptType, MedgraphError, Result};
use serde::Serialize;

pub const REL_INDICATES: &str = "indicates";
pub const REL_TREATED_BY: &str = "treated_by";
pub const REL_MANAGED_BY: &str = "managed_by";
pub const REL_PRESCRIBED_BY: &str = "prescribed_by";

/// One traversal hit, in edge insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct QueryHit {
    pub label: String,
    pub relation: String,
    #[serde(rename = "type")]
    pub kind: ConceptType,
}

/// Answer to a domain query. `resolved`/`match_kind`/`score` describe how the
/// raw term mapped to its canonical node, so callers can surface a
/// "did you mean" hint on corrected and fuzzy matches. An empty `results`
/// list is a valid answer; an unresolvable term never produces one.
#[derive(Debug, Clone, Serialize)]
pub struct QueryAnswer {
    pub term: String,
    pub resolved: String,
    pub match_kind: MatchKind,
    pub score: f64,
    pub results: Vec<QueryHit>,
}

impl MedicalGraph {
    /// Diseases indicated by a symptom. Resolution is scoped to symptom
    /// labels; traversal follows outgoing `indicates` edges.
    pub fn diagnoses_for_symptom(&self, raw_symptom: &str) -> Result<QueryAnswer> {
        self.diagnoses_for_symptom_with_threshold(raw_symptom, SIMILARITY_THRESHOLD)
    }

    /// [`Self::diagnoses_for_symptom`] with an explicit acceptance threshold.
    pub fn diagnoses_for_symptom_with_threshold(
        &self,
        raw_symptom: &str,
        threshold: f64,
    ) -> Result<QueryAnswer> {
        self.resolve_then_traverse(
            raw_symptom,
            Some(&ConceptType::Symptom),
            &[REL_INDICATES],
            Direction::Out,
            threshold,
        )
    }

    /// Treatments recorded for a disease (outgoing `treated_by` edges).
    pub fn treatments_for_disease(&self, raw_disease: &str) -> Result<QueryAnswer> {
        self.treatments_for_disease_with_threshold(raw_disease, SIMILARITY_THRESHOLD)
    }

    /// [`Self::treatments_for_disease`] with an explicit acceptance threshold.
    pub fn treatments_for_disease_with_threshold(
        &self,
        raw_disease: &str,
        threshold: f64,
    ) -> Result<QueryAnswer> {
        self.resolve_then_traverse(
            raw_disease,
            Some(&ConceptType::Disease),
            &[REL_TREATED_BY],
            Direction::Out,
            threshold,
        )
    }

    /// Specialists managing or prescribing for an entity. The entity may be a
    /// disease or a symptom, so resolution is unscoped.
    pub fn specialists_for_entity(&self, raw_entity: &str) -> Result<QueryAnswer> {
        self.specialists_for_entity_with_threshold(raw_entity, SIMILARITY_THRESHOLD)
    }

    /// [`Self::specialists_for_entity`] with an explicit acceptance threshold.
    pub fn specialists_for_entity_with_threshold(
        &self,
        raw_entity: &str,
        threshold: f64,
    ) -> Result<QueryAnswer> {
        self.resolve_then_traverse(
            raw_entity,
            None,
            &[REL_MANAGED_BY, REL_PRESCRIBED_BY],
            Direction::Out,
            threshold,
        )
    }

    fn resolve_then_traverse(
        &self,
        raw_term: &str,
        scope: Option<&ConceptType>,
        relations: &[&str],
        direction: Direction,
        threshold: f64,
    ) -> Result<QueryAnswer> {
        let resolution = resolver::resolve_with_threshold(self.index(), raw_term, scope, threshold)
            .ok_or_else(|| MedgraphError::UnresolvedTerm(raw_term.to_string()))?;

        let resolved = self.index().get(resolution.node).label.clone();
        let results = self
            .neighbors(resolution.node, relations, direction)
            .into_iter()
            .map(|(id, relation)| {
                let entry = self.index().get(id);
                QueryHit {
                    label: entry.label.clone(),
                    relation: relation.to_string(),
                    kind: entry.kind.clone(),
                }
            })
            .collect();

        Ok(QueryAnswer {
            term: raw_term.to_string(),
            resolved,
            match_kind: resolution.kind,
            score: resolution.score,
            results,
        })
    }
}
