//! admet-eval CLI
//!
//! Scores ADMET prediction submissions against a held-out test set.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a submission
//! admet-eval evaluate predictions.csv test.csv
//!
//! # Fewer samples, JSON to a file
//! admet-eval evaluate predictions.csv test.csv --samples 200 --format json --output report.json
//!
//! # Check a submission without scoring
//! admet-eval validate predictions.csv test.csv
//!
//! # Rank several submissions by MA-RAE
//! admet-eval rank test.csv team-a.csv team-b.csv
//! ```

use admet_eval::cli::{run_command, Cli, LogLevel};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.filter().to_string()),
    )
    .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
