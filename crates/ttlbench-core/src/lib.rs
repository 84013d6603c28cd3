//! Core types and timing harness for the ttlbench micro-benchmark.
//!
//! This crate compares two JSON layouts for the same TTL table:
//!
//! - **Array layout**: a list of entries, each carrying a set of record
//!   types and a TTL. Lookup is a linear scan, first match wins.
//! - **Object layout**: a map keyed by record type. Lookup is a hash probe.
//!
//! Both layouts implement [`TtlLookup`], so [`bench::run`] times either one
//! the same way and [`Report`] compares the two [`Measurement`]s.
//!
//! # Example
//!
//! ```rust
//! use ttlbench_core::{bench, ArrayDocument, ObjectDocument, Report};
//!
//! let array: ArrayDocument =
//!     serde_json::from_str(r#"[{"types":["A","AAAA"],"value":300}]"#).unwrap();
//! let object: ObjectDocument =
//!     serde_json::from_str(r#"{"A":{"value":300}}"#).unwrap();
//!
//! let started_at = chrono::Utc::now();
//! let array_run = bench::run(&array, "A", 1_000);
//! let object_run = bench::run(&object, "A", 1_000);
//! assert_eq!(array_run.result, Some(300));
//! assert_eq!(object_run.result, Some(300));
//!
//! let report = Report::new("A", started_at, array_run, object_run);
//! println!("{report}");
//! ```

pub mod bench;
mod error;
pub mod load;
pub mod lookup;
pub mod report;
pub mod types;

pub use bench::Measurement;
pub use error::{BenchError, Result};
pub use lookup::TtlLookup;
pub use report::{Report, Speedup};
pub use types::*;
