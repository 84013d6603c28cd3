//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::output::OutputFormat;

/// Default array-layout fixture
pub const DEFAULT_ARRAY_PATH: &str = "/data/array_data.json";

/// Default object-layout fixture
pub const DEFAULT_OBJECT_PATH: &str = "/data/object_data.json";

/// Default record type under test
pub const DEFAULT_RECORD_TYPE: &str = "A";

/// Default lookups per strategy
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Array-layout fixture.
    #[serde(default = "default_array_path")]
    pub array_path: PathBuf,

    /// Object-layout fixture.
    #[serde(default = "default_object_path")]
    pub object_path: PathBuf,

    /// Record type to look up.
    #[serde(default = "default_record_type")]
    pub record_type: String,

    /// Lookups per strategy.
    #[serde(default = "default_iterations")]
    pub iterations: u64,

    /// Report format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            array_path: default_array_path(),
            object_path: default_object_path(),
            record_type: default_record_type(),
            iterations: default_iterations(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Default config file path, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "ttlbench", "ttlbench")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional: when it
    /// is absent, built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply command-line and environment overrides.
    #[must_use]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.array {
            self.array_path.clone_from(path);
        }
        if let Some(path) = &cli.object {
            self.object_path.clone_from(path);
        }
        if let Some(record_type) = &cli.record_type {
            self.record_type.clone_from(record_type);
        }
        if let Some(iterations) = cli.iterations {
            self.iterations = iterations;
        }
        if let Some(format) = cli.output {
            self.output_format = format;
        }
        self
    }
}

// Default value functions for serde.
fn default_array_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARRAY_PATH)
}

fn default_object_path() -> PathBuf {
    PathBuf::from(DEFAULT_OBJECT_PATH)
}

fn default_record_type() -> String {
    String::from(DEFAULT_RECORD_TYPE)
}

const fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}
