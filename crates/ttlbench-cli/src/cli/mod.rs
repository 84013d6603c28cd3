//! CLI argument parsing and the benchmark run.

pub mod args;

use anyhow::Result;
use args::Cli;
use chrono::Utc;
use clap::Parser;
use std::io::IsTerminal;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use ttlbench_core::{bench, load, Report};

use crate::config::Config;
use crate::output;

/// Run the CLI application.
///
/// Both fixtures are loaded before anything is written to stdout, so a
/// failed load never leaves a partial report behind.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; only color them on a terminal
    let color = !cli.no_color && std::io::stderr().is_terminal();
    if !color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose, color);

    let config = Config::load(cli.config.as_deref())?.merge_cli(&cli);
    info!(
        array = %config.array_path.display(),
        object = %config.object_path.display(),
        record_type = %config.record_type,
        iterations = config.iterations,
        "starting benchmark"
    );

    let array = load::load_array(&config.array_path)?;
    let object = load::load_object(&config.object_path)?;

    let started_at = Utc::now();
    let array_run = bench::run(&array, &config.record_type, config.iterations);
    let object_run = bench::run(&object, &config.record_type, config.iterations);

    let report = Report::new(&config.record_type, started_at, array_run, object_run);
    if !report.results_agree() {
        warn!(
            record_type = %config.record_type,
            array = ?report.array.ttl,
            object = ?report.object.ttl,
            "strategies returned different TTLs"
        );
    }

    let rendered = output::render(
        &report,
        config.output_format,
        &config.array_path,
        &config.object_path,
    )?;
    print!("{rendered}");
    if config.output_format == output::OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `-v`/`-vv` set the level outright. Without them `RUST_LOG` is used
/// as-is, falling back to `warn`.
fn init_tracing(verbose: u8, ansi: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str())),
        1 => EnvFilter::new(Level::INFO.as_str()),
        _ => EnvFilter::new(Level::DEBUG.as_str()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
