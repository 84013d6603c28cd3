//! TTL lookup strategies.

use crate::types::{ArrayDocument, ObjectDocument, Ttl};

/// A document layout that can answer "what is the TTL for this record type".
///
/// A miss is `None`, never an error.
pub trait TtlLookup {
    /// Short strategy name used in logs and reports
    const STRATEGY: &'static str;

    /// TTL for `record_type`, if the document has one
    fn ttl(&self, record_type: &str) -> Option<Ttl>;
}

impl TtlLookup for ArrayDocument {
    const STRATEGY: &'static str = "array";

    /// Linear scan, first covering entry wins.
    fn ttl(&self, record_type: &str) -> Option<Ttl> {
        self.find(record_type).map(|entry| entry.value)
    }
}

impl TtlLookup for ObjectDocument {
    const STRATEGY: &'static str = "object";

    /// Hash lookup; an empty record counts as a miss.
    fn ttl(&self, record_type: &str) -> Option<Ttl> {
        self.get(record_type).and_then(|record| record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArrayEntry, ObjectRecord};
    use std::collections::HashMap;

    fn fixtures() -> (ArrayDocument, ObjectDocument) {
        let array: ArrayDocument = serde_json::from_str(
            r#"[
                {"types": ["A", "AAAA"], "value": 300},
                {"types": ["MX"], "value": 3600},
                {"types": ["NS", "SOA"], "value": 86400},
                {"types": ["TXT"], "value": 0}
            ]"#,
        )
        .unwrap();
        let object: ObjectDocument = serde_json::from_str(
            r#"{
                "A": {"value": 300},
                "AAAA": {"value": 300},
                "MX": {"value": 3600},
                "NS": {"value": 86400},
                "SOA": {"value": 86400},
                "TXT": {"value": 0}
            }"#,
        )
        .unwrap();
        (array, object)
    }

    #[test]
    fn test_strategies_agree_on_every_type() {
        let (array, object) = fixtures();
        for record_type in array.record_types() {
            assert_eq!(
                array.ttl(record_type),
                object.ttl(record_type),
                "mismatch for {record_type}"
            );
            assert!(array.ttl(record_type).is_some());
        }
        assert_eq!(array.record_types().len(), object.len());
    }

    #[test]
    fn test_absent_type_is_none_for_both() {
        let (array, object) = fixtures();
        for record_type in ["CNAME", "", "a", "SRV"] {
            assert_eq!(array.ttl(record_type), None);
            assert_eq!(object.ttl(record_type), None);
        }
    }

    #[test]
    fn test_zero_ttl_is_a_hit() {
        let (array, object) = fixtures();
        assert_eq!(array.ttl("TXT"), Some(0));
        assert_eq!(object.ttl("TXT"), Some(0));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let (array, object) = fixtures();
        let first = (array.ttl("MX"), object.ttl("MX"));
        for _ in 0..100 {
            assert_eq!((array.ttl("MX"), object.ttl("MX")), first);
        }
    }

    #[test]
    fn test_empty_object_record_is_miss() {
        let mut records = HashMap::new();
        records.insert("A".to_string(), ObjectRecord::default());
        let object = ObjectDocument::new(records);
        assert_eq!(object.ttl("A"), None);
    }

    #[test]
    fn test_minimal_example() {
        let array = ArrayDocument::new(vec![ArrayEntry {
            types: vec!["A".into(), "AAAA".into()],
            value: 300,
        }]);
        let object: ObjectDocument = [("A".to_string(), 300)].into_iter().collect();

        assert_eq!(array.ttl("A"), Some(300));
        assert_eq!(object.ttl("A"), Some(300));
        assert_eq!(array.ttl("MX"), None);
        assert_eq!(object.ttl("MX"), None);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(ArrayDocument::STRATEGY, "array");
        assert_eq!(ObjectDocument::STRATEGY, "object");
    }
}
