//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Compare array-of-entries and keyed-object TTL lookups
///
/// Loads both fixture layouts, looks up the same record type repeatedly
/// with each, and prints the timings side by side. Every option is
/// optional; with none given the built-in defaults (or the config file)
/// are used.
#[derive(Parser, Debug, Default)]
#[command(name = "ttlbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Array-layout fixture
    #[arg(long, value_name = "PATH", env = "TTLBENCH_ARRAY_PATH")]
    pub array: Option<PathBuf>,

    /// Object-layout fixture
    #[arg(long, value_name = "PATH", env = "TTLBENCH_OBJECT_PATH")]
    pub object: Option<PathBuf>,

    /// Record type to look up (e.g., A, AAAA, MX)
    #[arg(short = 't', long, env = "TTLBENCH_RECORD_TYPE")]
    pub record_type: Option<String>,

    /// Lookups per strategy
    #[arg(short = 'n', long, env = "TTLBENCH_ITERATIONS")]
    pub iterations: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH", env = "TTLBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,
}
