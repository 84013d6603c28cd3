//! Fixture document types.
//!
//! Both layouts are accepted either bare or wrapped in the RDAP-style
//! envelope the fixtures ship in:
//!
//! ```json
//! { "objectClassName": "domain", "ldhName": "example.com", "ttl0_data": ... }
//! ```
//!
//! Documents are parsed in two steps (JSON value, then entries one by one)
//! so a bad entry is reported with its position in the table.

mod array;
mod object;

pub use array::*;
pub use object::*;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// DNS time-to-live, in seconds
pub type Ttl = u32;

/// Envelope fields carried next to `ttl0_data`
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(rename = "objectClassName", default)]
    object_class_name: Option<String>,
    #[serde(rename = "ldhName", default)]
    ldh_name: Option<String>,
}

/// Split a document into its envelope and TTL payload. A document without
/// `ttl0_data` is the bare payload.
fn split_envelope(value: Value) -> Result<(Envelope, Value), serde_json::Error> {
    match value {
        Value::Object(mut map) if map.contains_key("ttl0_data") => {
            let payload = map.remove("ttl0_data").unwrap_or(Value::Null);
            let envelope = serde_json::from_value(Value::Object(map))?;
            Ok((envelope, payload))
        }
        bare => Ok((Envelope::default(), bare)),
    }
}

/// Short description of a JSON value's kind, for error messages
const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

struct TtlVisitor;

impl<'de> Visitor<'de> for TtlVisitor {
    type Value = Ttl;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`value` as a whole, non-negative number of seconds")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Ttl, E> {
        Ttl::try_from(v)
            .map_err(|_| E::custom(format!("`value` {v} does not fit in a 32-bit TTL")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Ttl, E> {
        let v = u64::try_from(v)
            .map_err(|_| E::custom(format!("`value` must be non-negative, found {v}")))?;
        self.visit_u64(v)
    }

    // Whole floats such as `300.0` are accepted; fractions are not
    #[allow(
        clippy::float_cmp,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Ttl, E> {
        if v.trunc() == v && (0.0..=f64::from(Ttl::MAX)).contains(&v) {
            Ok(v as Ttl)
        } else {
            Err(E::custom(format!(
                "`value` must be a whole, non-negative number of seconds, found {v}"
            )))
        }
    }
}

/// Deserialize a TTL from any JSON number holding a whole count of seconds
fn deserialize_ttl<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Ttl, D::Error> {
    deserializer.deserialize_any(TtlVisitor)
}

/// Like [`deserialize_ttl`], with `null` as no TTL
fn deserialize_opt_ttl<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Ttl>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => deserialize_ttl(other).map(Some).map_err(de::Error::custom),
    }
}
