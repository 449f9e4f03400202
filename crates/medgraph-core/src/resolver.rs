//! Fuzzy term resolution — raw, possibly misspelled input → canonical node.
//!
//! Resolution runs three passes over the node index:
//! 1. exact lookup of the normalised term;
//! 2. token-level spelling correction (each token may be replaced by a label
//!    token at Levenshtein distance ≤ 1), then exact lookup of the corrected
//!    string;
//! 3. full-scan normalised-Levenshtein similarity against every candidate
//!    label, accepted at or above [`SIMILARITY_THRESHOLD`].
//!
//! The exact and corrected passes are unscoped so that a verbatim label
//! always wins with score 1.0; only the similarity scan is restricted to the
//! caller's candidate type. The scan is O(term_length × candidate_count) per
//! query, which is fine for tens to low thousands of labels; n-gram or trie
//! pruning is the indexing route if that ever stops being true.

use crate::index::{NodeId, NodeIndex};
use crate::normalise::normalize;
use medgraph_common::ConceptType;
use serde::Serialize;
use strsim::{levenshtein, normalized_levenshtein};

/// Minimum normalised similarity ([0,1]) for a fuzzy match to be accepted.
/// Chosen so a single-character typo in a word of length ≥ 4 passes while
/// unrelated terms do not.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Maximum per-token edit distance for the spelling-correction pass.
const MAX_TOKEN_CORRECTION_DISTANCE: usize = 1;

/// How a term was matched to its canonical node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Corrected,
    Fuzzy,
}

/// Transient result of resolving one raw term. Never persisted.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub node: NodeId,
    /// Similarity confidence in [0,1]; 1.0 for exact and corrected matches.
    pub score: f64,
    pub kind: MatchKind,
}

/// Resolve a raw term against the index at the default acceptance threshold.
/// Returns `None` when nothing clears the threshold; callers decide whether
/// that surfaces as an unresolved-term error.
pub fn resolve(index: &NodeIndex, raw_term: &str, scope: Option<&ConceptType>) -> Option<Resolution> {
    resolve_with_threshold(index, raw_term, scope, SIMILARITY_THRESHOLD)
}

/// [`resolve`] with an explicit threshold. Raising the threshold never makes
/// more terms resolve (monotonicity, covered by tests).
pub fn resolve_with_threshold(
    index: &NodeIndex,
    raw_term: &str,
    scope: Option<&ConceptType>,
    threshold: f64,
) -> Option<Resolution> {
    let term = normalize(raw_term);
    if term.is_empty() {
        return None;
    }

    if let Some(node) = index.exact_lookup(&term) {
        return Some(Resolution {
            node,
            score: 1.0,
            kind: MatchKind::Exact,
        });
    }

    if let Some(corrected) = correct_tokens(index, &term) {
        if let Some(node) = index.exact_lookup(&corrected) {
            tracing::debug!(term = %term, corrected = %corrected, "spelling correction hit");
            return Some(Resolution {
                node,
                score: 1.0,
                kind: MatchKind::Corrected,
            });
        }
    }

    // Full scan. Best candidate by similarity, ties broken by smaller
    // absolute edit distance, then earliest insertion order (strict `>`
    // comparisons keep the first-seen winner).
    let mut best: Option<(NodeId, f64, usize)> = None;
    for (id, label) in index.labels(scope) {
        let sim = normalized_levenshtein(&term, label);
        let dist = levenshtein(&term, label);
        let better = match best {
            None => true,
            Some((_, best_sim, best_dist)) => {
                sim > best_sim || (sim == best_sim && dist < best_dist)
            }
        };
        if better {
            best = Some((id, sim, dist));
        }
    }

    match best {
        Some((node, score, _)) if score >= threshold => {
            tracing::debug!(
                term = %term,
                label = %index.get(node).label,
                score,
                "fuzzy match accepted"
            );
            Some(Resolution {
                node,
                score,
                kind: MatchKind::Fuzzy,
            })
        }
        _ => None,
    }
}

/// Dictionary-agnostic token correction: the dictionary is the token set of
/// the labels already in the index. Returns the corrected string only if at
/// least one token changed.
fn correct_tokens(index: &NodeIndex, term: &str) -> Option<String> {
    let vocab: Vec<&str> = index
        .labels(None)
        .flat_map(|(_, label)| label.split(' '))
        .collect();

    let mut changed = false;
    let corrected: Vec<&str> = term
        .split(' ')
        .map(|token| {
            if vocab.contains(&token) {
                return token;
            }
            let mut best: Option<(&str, usize)> = None;
            for &word in &vocab {
                let dist = levenshtein(token, word);
                if dist <= MAX_TOKEN_CORRECTION_DISTANCE
                    && best.map_or(true, |(_, d)| dist < d)
                {
                    best = Some((word, dist));
                }
            }
            match best {
                Some((word, _)) => {
                    changed = true;
                    word
                }
                None => token,
            }
        })
        .collect();

    changed.then(|| corrected.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medgraph_common::ConceptType;

    fn sample_index() -> NodeIndex {
        let mut idx = NodeIndex::new();
        idx.register("headache", ConceptType::Symptom).unwrap();
        idx.register("migraine", ConceptType::Disease).unwrap();
        idx.register("chest pain", ConceptType::Symptom).unwrap();
        idx.register("ibuprofen", ConceptType::Treatment).unwrap();
        idx
    }

    #[test]
    fn test_exact_match_wins_with_score_one() {
        let idx = sample_index();
        let r = resolve(&idx, "Migraine", None).unwrap();
        assert_eq!(r.kind, MatchKind::Exact);
        assert_eq!(r.score, 1.0);
        assert_eq!(idx.get(r.node).label, "migraine");
    }

    #[test]
    fn test_exact_wins_over_near_duplicate() {
        let mut idx = sample_index();
        // A near-duplicate of an existing label must not shadow the verbatim one.
        idx.register("headaches", ConceptType::Symptom).unwrap();
        let r = resolve(&idx, "headache", None).unwrap();
        assert_eq!(r.kind, MatchKind::Exact);
        assert_eq!(idx.get(r.node).label, "headache");
    }

    #[test]
    fn test_single_typo_corrected() {
        let idx = sample_index();
        let r = resolve(&idx, "Headach", None).unwrap();
        assert!(matches!(r.kind, MatchKind::Corrected | MatchKind::Fuzzy));
        assert_eq!(idx.get(r.node).label, "headache");
    }

    #[test]
    fn test_multiword_token_correction() {
        let idx = sample_index();
        let r = resolve(&idx, "chest paon", None).unwrap();
        assert_eq!(r.kind, MatchKind::Corrected);
        assert_eq!(r.score, 1.0);
        assert_eq!(idx.get(r.node).label, "chest pain");
    }

    #[test]
    fn test_scope_restricts_fuzzy_candidates() {
        let idx = sample_index();
        // "mgrain" is two edits from "migraine": too far for the token
        // correction pass, so only the scoped similarity scan applies.
        let r = resolve(&idx, "mgrain", Some(&ConceptType::Treatment));
        assert!(r.is_none());
        // Unscoped it resolves to the disease.
        let r = resolve(&idx, "mgrain", None).unwrap();
        assert_eq!(r.kind, MatchKind::Fuzzy);
        assert_eq!(idx.get(r.node).label, "migraine");
    }

    #[test]
    fn test_unknown_term_not_resolved() {
        let idx = sample_index();
        assert!(resolve(&idx, "xyzzycough", None).is_none());
        assert!(resolve(&idx, "", None).is_none());
        assert!(resolve(&idx, "  !? ", None).is_none());
    }

    #[test]
    fn test_fuzzy_score_below_one() {
        let idx = sample_index();
        // Two edits away from "ibuprofen": too far for token correction,
        // close enough for the similarity scan.
        let r = resolve(&idx, "ibuprufin", None).unwrap();
        assert_eq!(r.kind, MatchKind::Fuzzy);
        assert!(r.score >= SIMILARITY_THRESHOLD && r.score < 1.0);
        assert_eq!(idx.get(r.node).label, "ibuprofen");
    }

    #[test]
    fn test_threshold_monotonicity() {
        let idx = sample_index();
        let terms = ["headache", "Headach", "migrainz", "ibuprufin", "xyzzycough", "chest pian"];
        let resolved_at = |t: f64| {
            terms
                .iter()
                .filter(|term| resolve_with_threshold(&idx, term, None, t).is_some())
                .count()
        };
        let mut prev = usize::MAX;
        for t in [0.0, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let n = resolved_at(t);
            assert!(n <= prev, "raising threshold to {t} resolved more terms");
            prev = n;
        }
    }

    #[test]
    fn test_tie_break_prefers_smaller_edit_distance_then_insertion_order() {
        let mut idx = NodeIndex::new();
        idx.register("aaaa", ConceptType::Symptom).unwrap();
        idx.register("aaab", ConceptType::Symptom).unwrap();
        // "aaab" matches itself exactly; against "aaac" both known labels are
        // one edit away and the earlier insertion must win.
        let r = resolve_with_threshold(&idx, "aaac", None, 0.5).unwrap();
        assert_eq!(idx.get(r.node).label, "aaaa");
    }
}
