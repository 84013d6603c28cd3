//! ttlbench - array vs. object TTL lookup benchmark
//!
//! Loads the two fixture layouts, times both lookups and prints the
//! comparison.

use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    match ttlbench_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
