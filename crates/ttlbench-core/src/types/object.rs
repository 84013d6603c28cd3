use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{describe, split_envelope, Ttl};

/// Keyed-object TTL layout: record type -> record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectDocument {
    /// RDAP object class (usually "domain")
    #[serde(rename = "objectClassName", skip_serializing_if = "Option::is_none")]
    pub object_class_name: Option<String>,

    /// Domain the TTL table belongs to
    #[serde(rename = "ldhName", skip_serializing_if = "Option::is_none")]
    pub ldh_name: Option<String>,

    /// Records keyed by record type
    #[serde(rename = "ttl0_data")]
    pub records: HashMap<String, ObjectRecord>,
}

/// TTL record of the object layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// TTL in seconds; a record without one is empty
    #[serde(
        default,
        deserialize_with = "super::deserialize_opt_ttl",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Ttl>,

    /// Any other fields the fixture carries
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ObjectRecord {
    /// Record holding only a TTL
    #[must_use]
    pub fn with_value(value: Ttl) -> Self {
        Self {
            value: Some(value),
            extra: serde_json::Map::new(),
        }
    }

    /// Returns true if the record carries no TTL
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl ObjectDocument {
    /// Build a bare document from records
    #[must_use]
    pub const fn new(records: HashMap<String, ObjectRecord>) -> Self {
        Self {
            object_class_name: None,
            ldh_name: None,
            records,
        }
    }

    /// Number of record types
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the document has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Direct key lookup
    #[must_use]
    pub fn get(&self, record_type: &str) -> Option<&ObjectRecord> {
        self.records.get(record_type)
    }

    /// Record types, sorted
    #[must_use]
    pub fn record_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.records.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl FromIterator<(String, Ttl)> for ObjectDocument {
    fn from_iter<I: IntoIterator<Item = (String, Ttl)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k, ObjectRecord::with_value(v)))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for ObjectDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl ObjectDocument {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let (envelope, payload) = split_envelope(value)?;
        let map = match payload {
            Value::Object(map) => map,
            other => {
                return Err(de::Error::custom(format!(
                    "expected an object keyed by record type, found {}",
                    describe(&other)
                )))
            }
        };

        let records = map
            .into_iter()
            .map(|(record_type, record)| {
                let parsed: Result<ObjectRecord, serde_json::Error> = match record {
                    // A null record is present but empty
                    Value::Null => Ok(ObjectRecord::default()),
                    other => serde_json::from_value(other).map_err(|e| {
                        de::Error::custom(format!("record `{record_type}`: {e}"))
                    }),
                };
                parsed.map(|r| (record_type, r))
            })
            .collect::<Result<HashMap<String, ObjectRecord>, serde_json::Error>>()?;

        Ok(Self {
            object_class_name: envelope.object_class_name,
            ldh_name: envelope.ldh_name,
            records,
        })
    }
}
