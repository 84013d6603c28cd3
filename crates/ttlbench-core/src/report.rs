//! Comparison report: per-strategy summaries, speedup, fixed text layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::bench::Measurement;
use crate::types::Ttl;

/// Report banner title
pub const TITLE: &str = "RUST PERFORMANCE TEST";

/// Width of the `=` rules framing the report
pub const RULE_WIDTH: usize = 60;

/// Summary of one strategy's run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// TTL returned by the last lookup
    pub ttl: Option<Ttl>,
    /// Total time in milliseconds
    pub total_ms: f64,
    /// Mean time per lookup in microseconds
    pub avg_us: f64,
}

impl From<&Measurement> for StrategySummary {
    fn from(m: &Measurement) -> Self {
        Self {
            ttl: m.result,
            total_ms: m.total_ms(),
            avg_us: m.avg_us(),
        }
    }
}

/// Array time over object time.
///
/// Undefined when either side measured zero, so the report never prints
/// `inf` or `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Speedup {
    /// `array_time / object_time`
    Ratio(f64),
    /// One of the timings was zero
    Undefined,
}

impl Speedup {
    /// Compare two elapsed times
    #[must_use]
    pub fn between(array: Duration, object: Duration) -> Self {
        if array.is_zero() || object.is_zero() {
            return Self::Undefined;
        }
        Self::Ratio(array.as_secs_f64() / object.as_secs_f64())
    }

    /// Raw ratio, if defined
    #[must_use]
    pub const fn ratio(self) -> Option<f64> {
        match self {
            Self::Ratio(r) => Some(r),
            Self::Undefined => None,
        }
    }
}

impl From<Speedup> for Option<f64> {
    fn from(s: Speedup) -> Self {
        s.ratio()
    }
}

impl From<Option<f64>> for Speedup {
    fn from(ratio: Option<f64>) -> Self {
        ratio.map_or(Self::Undefined, Self::Ratio)
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Ratio(r) if r >= 1.0 => write!(f, "{r:.2}x (object is {r:.2}x faster)"),
            Self::Ratio(r) => write!(f, "{r:.2}x (array is {:.2}x faster)", 1.0 / r),
            Self::Undefined => write!(f, "n/a (timings too small to compare)"),
        }
    }
}

/// Side-by-side comparison of the two strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Record type that was looked up
    pub record_type: String,
    /// Lookups per strategy
    pub iterations: u64,
    /// Array layout results
    pub array: StrategySummary,
    /// Object layout results
    pub object: StrategySummary,
    /// Array time over object time
    pub speedup: Speedup,
    /// When the benchmark run started
    pub started_at: DateTime<Utc>,
}

impl Report {
    /// Build a report from the two measurements of a run started at
    /// `started_at`
    #[must_use]
    pub fn new(
        record_type: &str,
        started_at: DateTime<Utc>,
        array: Measurement,
        object: Measurement,
    ) -> Self {
        debug_assert_eq!(array.iterations, object.iterations);
        Self {
            record_type: record_type.to_string(),
            iterations: array.iterations,
            array: StrategySummary::from(&array),
            object: StrategySummary::from(&object),
            speedup: Speedup::between(array.elapsed, object.elapsed),
            started_at,
        }
    }

    /// Returns true if both strategies returned the same TTL
    #[must_use]
    pub fn results_agree(&self) -> bool {
        self.array.ttl == self.object.ttl
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Record Type: {}", self.record_type)?;
        writeln!(f, "Iterations: {}", group_thousands(self.iterations))?;
        write_section(f, "Array Approach", &self.array)?;
        write_section(f, "Object Approach", &self.object)?;
        writeln!(f)?;
        writeln!(f, "Speedup: {}", self.speedup)?;
        writeln!(f, "{rule}")
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, s: &StrategySummary) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}:")?;
    writeln!(f, "  TTL Retrieved: {}", display_ttl(s.ttl))?;
    writeln!(f, "  Total Time: {:.2} ms", s.total_ms)?;
    writeln!(f, "  Avg Time: {:.4} µs/op", s.avg_us)
}

/// TTL as printed in the report; a miss prints as `null`
#[must_use]
pub fn display_ttl(ttl: Option<Ttl>) -> String {
    ttl.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Format with `,` every three digits: `10000000` -> `10,000,000`
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
