//! Timing harness.

use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::lookup::TtlLookup;
use crate::types::Ttl;

/// Outcome of timing one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Strategy name ("array" or "object")
    pub strategy: &'static str,

    /// Number of lookups performed
    pub iterations: u64,

    /// Total elapsed time on a monotonic clock
    pub elapsed: Duration,

    /// Result of the last lookup; `None` on a miss or with zero iterations
    pub result: Option<Ttl>,
}

impl Measurement {
    /// Total time in milliseconds
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    /// Mean time per lookup in microseconds, zero when nothing ran
    #[must_use]
    pub fn avg_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e6 / self.iterations as f64
    }
}

/// Look up `record_type` in `doc` `iterations` times and time the loop.
///
/// Only the last result is kept. Inputs and results pass through
/// [`black_box`] so the lookup cannot be hoisted out of the loop.
pub fn run<L: TtlLookup>(doc: &L, record_type: &str, iterations: u64) -> Measurement {
    let mut result = None;

    let start = Instant::now();
    for _ in 0..iterations {
        result = black_box(doc.ttl(black_box(record_type)));
    }
    let elapsed = start.elapsed();

    debug!(
        strategy = L::STRATEGY,
        record_type,
        iterations,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "benchmark finished"
    );

    Measurement {
        strategy: L::STRATEGY,
        iterations,
        elapsed,
        result,
    }
}
