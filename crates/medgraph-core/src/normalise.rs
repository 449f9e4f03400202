//! Term and relation normalisation.
//!
//! Two normalisers are provided:
//! - [`normalize`]: concept labels and query terms → lookup keys
//! - [`normalize_relation`]: edge relation names → canonical snake_case
//!
//! Both are pure and idempotent; an empty output is valid (and will simply
//! never match anything).

/// Normalise a concept label or query term into its canonical lookup form.
///
/// Lowercases, trims, collapses internal whitespace runs to a single space,
/// and drops every character outside `[a-z0-9 -]`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_space = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

/// Normalise a relation name: lowercase, whitespace runs become a single `_`,
/// characters outside `[a-z0-9_-]` are dropped.
///
/// This is deliberately a separate rule from [`normalize`]: label
/// normalisation strips underscores, but "treated by" and "treated_by" must
/// name the same relation.
pub fn normalize_relation(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_sep = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_sep = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Migraine "), "migraine");
        assert_eq!(normalize("CHEST PAIN"), "chest pain");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize("chest \t  pain"), "chest pain");
    }

    #[test]
    fn test_strips_punctuation_keeps_hyphen() {
        assert_eq!(normalize("Crohn's disease!"), "crohns disease");
        assert_eq!(normalize("beta-blocker"), "beta-blocker");
        assert_eq!(normalize("type_2 diabetes"), "type2 diabetes");
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  !?  "), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["  Migraine ", "Crohn's disease!", "chest \t Pain", "", "a  b c"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_relation_whitespace_to_underscore() {
        assert_eq!(normalize_relation("treated by"), "treated_by");
        assert_eq!(normalize_relation("Managed  By"), "managed_by");
        assert_eq!(normalize_relation("treated_by"), "treated_by");
    }

    #[test]
    fn test_relation_idempotent() {
        for s in ["treated by", "MANAGED_BY", " prescribed  by "] {
            let once = normalize_relation(s);
            assert_eq!(normalize_relation(&once), once);
        }
    }
}
