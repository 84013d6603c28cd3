//! Report rendering.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use ttlbench_core::Report;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text report
    #[default]
    Pretty,
    /// JSON document
    Json,
}

/// Report plus the fixtures it was measured on, for JSON output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    array_path: &'a Path,
    object_path: &'a Path,
}

/// Render a report in the requested format.
///
/// The text form ends with a blank line after the closing rule.
pub fn render(
    report: &Report,
    format: OutputFormat,
    array_path: &Path,
    object_path: &Path,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Pretty => Ok(format!("{report}\n")),
        OutputFormat::Json => {
            let doc = JsonReport {
                report,
                array_path,
                object_path,
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}
