use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use super::{describe, split_envelope, Ttl};

/// Array-of-entries TTL layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArrayDocument {
    /// RDAP object class (usually "domain")
    #[serde(rename = "objectClassName", skip_serializing_if = "Option::is_none")]
    pub object_class_name: Option<String>,

    /// Domain the TTL table belongs to
    #[serde(rename = "ldhName", skip_serializing_if = "Option::is_none")]
    pub ldh_name: Option<String>,

    /// TTL entries, in document order
    #[serde(rename = "ttl0_data")]
    pub entries: Vec<ArrayEntry>,
}

/// One entry of the array layout: a TTL shared by several record types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayEntry {
    /// Record types this TTL applies to (A, AAAA, MX, ...)
    pub types: Vec<String>,

    /// TTL in seconds
    #[serde(deserialize_with = "super::deserialize_ttl")]
    pub value: Ttl,
}

impl ArrayEntry {
    /// Returns true if this entry covers the record type
    #[must_use]
    pub fn covers(&self, record_type: &str) -> bool {
        self.types.iter().any(|t| t == record_type)
    }
}

impl ArrayDocument {
    /// Build a bare document from entries
    #[must_use]
    pub const fn new(entries: Vec<ArrayEntry>) -> Self {
        Self {
            object_class_name: None,
            ldh_name: None,
            entries,
        }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan for the first entry covering `record_type`.
    ///
    /// Entry order matters: if two entries list the same type, the earlier
    /// one wins.
    #[must_use]
    pub fn find(&self, record_type: &str) -> Option<&ArrayEntry> {
        self.entries.iter().find(|entry| entry.covers(record_type))
    }

    /// Distinct record types, in first-seen order
    #[must_use]
    pub fn record_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|entry| entry.types.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Record types listed by more than one entry, in first-seen order.
    ///
    /// Lookups still resolve these (first match), but the later entries are
    /// unreachable for that type.
    #[must_use]
    pub fn overlapping_types(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            // A type repeated inside one entry is not an overlap
            let distinct: HashSet<&str> = entry.types.iter().map(String::as_str).collect();
            for t in distinct {
                *counts.entry(t).or_default() += 1;
            }
        }

        self.record_types()
            .into_iter()
            .filter(|t| counts.get(t).copied().unwrap_or_default() > 1)
            .collect()
    }
}

impl<'de> Deserialize<'de> for ArrayDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl ArrayDocument {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let (envelope, payload) = split_envelope(value)?;
        let items = match payload {
            Value::Array(items) => items,
            other => {
                return Err(de::Error::custom(format!(
                    "expected a list of TTL entries, found {}",
                    describe(&other)
                )))
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value::<ArrayEntry>(item)
                    .map_err(|e| de::Error::custom(format!("entry {i}: {e}")))
            })
            .collect::<Result<Vec<ArrayEntry>, serde_json::Error>>()?;

        Ok(Self {
            object_class_name: envelope.object_class_name,
            ldh_name: envelope.ldh_name,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(types: &[&str], value: Ttl) -> ArrayEntry {
        ArrayEntry {
            types: types.iter().map(ToString::to_string).collect(),
            value,
        }
    }

    #[test]
    fn test_parse_bare() {
        let doc: ArrayDocument =
            serde_json::from_str(r#"[{"types":["A","AAAA"],"value":300}]"#).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.ldh_name.is_none());
        assert_eq!(doc.entries[0], entry(&["A", "AAAA"], 300));
    }

    #[test]
    fn test_parse_enveloped_ignores_extra_fields() {
        let json = r#"{
            "objectClassName": "domain",
            "ldhName": "example.com",
            "ttl0_data": [
                {"types": ["MX"], "value": 3600, "comment": "mail"},
                {"types": ["A", "AAAA"], "value": 300}
            ]
        }"#;
        let doc: ArrayDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.object_class_name.as_deref(), Some("domain"));
        assert_eq!(doc.ldh_name.as_deref(), Some("example.com"));
        assert_eq!(doc.find("MX").map(|e| e.value), Some(3600));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = serde_json::from_str::<ArrayDocument>(r#"{"A":{"value":300}}"#).unwrap_err();
        assert!(err.to_string().contains("found an object"), "{err}");

        let err = serde_json::from_str::<ArrayDocument>(r#"{"ttl0_data":{"A":{"value":1}}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("list of TTL entries"), "{err}");
    }

    #[test]
    fn test_parse_error_names_entry() {
        let json = r#"[{"types":["A"],"value":300},{"types":"MX","value":1}]"#;
        let msg = serde_json::from_str::<ArrayDocument>(json).unwrap_err().to_string();
        assert!(msg.starts_with("entry 1: "), "{msg}");
        assert!(msg.contains("sequence"), "{msg}");

        let json = r#"{"ttl0_data":[{"types":["A"],"value":-300}]}"#;
        let msg = serde_json::from_str::<ArrayDocument>(json).unwrap_err().to_string();
        assert!(msg.contains("entry 0: `value` must be non-negative"), "{msg}");

        let json = r#"[{"types":["A"]}]"#;
        let msg = serde_json::from_str::<ArrayDocument>(json).unwrap_err().to_string();
        assert!(msg.contains("missing field `value`"), "{msg}");
    }

    #[test]
    fn test_parse_whole_float_ttl() {
        let doc: ArrayDocument = serde_json::from_str(r#"[{"types":["A"],"value":300.0}]"#).unwrap();
        assert_eq!(doc.find("A").map(|e| e.value), Some(300));
    }

    #[test]
    fn test_find_first_match_wins() {
        let doc = ArrayDocument::new(vec![
            entry(&["NS"], 86400),
            entry(&["A", "AAAA"], 300),
            entry(&["A"], 60),
        ]);
        assert_eq!(doc.find("A").map(|e| e.value), Some(300));
        assert_eq!(doc.find("NS").map(|e| e.value), Some(86400));
        assert!(doc.find("MX").is_none());
    }

    #[test]
    fn test_record_types_dedup_in_order() {
        let doc = ArrayDocument::new(vec![
            entry(&["A", "AAAA"], 300),
            entry(&["MX", "A"], 60),
        ]);
        assert_eq!(doc.record_types(), vec!["A", "AAAA", "MX"]);
    }

    #[test]
    fn test_overlapping_types() {
        let doc = ArrayDocument::new(vec![
            entry(&["A", "AAAA"], 300),
            entry(&["MX", "MX"], 3600),
            entry(&["TXT", "A"], 60),
        ]);
        assert_eq!(doc.overlapping_types(), vec!["A"]);

        let clean = ArrayDocument::new(vec![entry(&["A"], 300), entry(&["MX"], 3600)]);
        assert!(clean.overlapping_types().is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc: ArrayDocument = serde_json::from_str("[]").unwrap();
        assert!(doc.is_empty());
        assert!(doc.find("A").is_none());
    }
}
