//! # ttlbench-cli
//!
//! Command-line runner for the ttlbench micro-benchmark.
//!
//! ## Features
//!
//! - **Zero-argument run**: `ttlbench` benchmarks `/data/array_data.json`
//!   against `/data/object_data.json` for record type `A`
//! - **Overrides**: flags, `TTLBENCH_*` environment variables, or a TOML
//!   config file
//! - **Output formats**: the fixed text report, or JSON

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
