//! Fixture loading.

use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{BenchError, Result};
use crate::types::{ArrayDocument, ObjectDocument};

/// Read and parse a JSON fixture.
///
/// The file is read fully and closed before parsing starts.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BenchError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BenchError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read fixture");

    serde_json::from_slice(&bytes).map_err(|source| BenchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the array-layout fixture.
///
/// Record types listed by more than one entry are logged; lookups resolve
/// them to the first entry.
pub fn load_array(path: &Path) -> Result<ArrayDocument> {
    let doc: ArrayDocument = read_document(path)?;
    debug!(
        path = %path.display(),
        domain = doc.ldh_name.as_deref().unwrap_or("-"),
        entries = doc.len(),
        "loaded array document"
    );

    for record_type in doc.overlapping_types() {
        warn!(
            path = %path.display(),
            record_type,
            "record type listed by several entries, first match wins"
        );
    }

    Ok(doc)
}

/// Load the object-layout fixture.
pub fn load_object(path: &Path) -> Result<ObjectDocument> {
    let doc: ObjectDocument = read_document(path)?;
    let empty = doc.records.values().filter(|record| record.is_empty()).count();
    debug!(
        path = %path.display(),
        domain = doc.ldh_name.as_deref().unwrap_or("-"),
        records = doc.len(),
        empty,
        types = ?doc.record_types(),
        "loaded object document"
    );
    Ok(doc)
}
