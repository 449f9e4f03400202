//! Concept type vocabulary for graph nodes.
//!
//! The type set is open: the four core clinical categories are first-class,
//! anything else ingested round-trips through `Other` unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category of a medical concept node.
/// A canonical label maps to exactly one `ConceptType` for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConceptType {
    Symptom,
    Disease,
    Treatment,
    Specialist,
    Other(String),
}

impl ConceptType {
    /// The snake_case string stored and served for this type.
    pub fn as_str(&self) -> &str {
        match self {
            ConceptType::Symptom => "symptom",
            ConceptType::Disease => "disease",
            ConceptType::Treatment => "treatment",
            ConceptType::Specialist => "specialist",
            ConceptType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ConceptType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "symptom" => ConceptType::Symptom,
            "disease" => ConceptType::Disease,
            "treatment" => ConceptType::Treatment,
            "specialist" => ConceptType::Specialist,
            other => ConceptType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ConceptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConceptType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConceptType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ConceptType::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_round_trip() {
        for s in ["symptom", "disease", "treatment", "specialist"] {
            assert_eq!(ConceptType::from(s).as_str(), s);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ConceptType::from("Disease"), ConceptType::Disease);
        assert_eq!(ConceptType::from(" SYMPTOM "), ConceptType::Symptom);
    }

    #[test]
    fn test_unknown_type_preserved() {
        let t = ConceptType::from("lab_test");
        assert_eq!(t, ConceptType::Other("lab_test".to_string()));
        assert_eq!(t.as_str(), "lab_test");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ConceptType::Disease).unwrap();
        assert_eq!(json, "\"disease\"");
        let back: ConceptType = serde_json::from_str("\"symptom\"").unwrap();
        assert_eq!(back, ConceptType::Symptom);
    }
}
