//! CLI command implementations

mod endpoints;
mod evaluate;
mod rank;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::cli::ResampleArgs;
use crate::config::{apply_overrides, load_or_default, validate_config, Cli, Command};
use crate::eval::EvalConfig;
use crate::io::{read_table, Table};
use admet_eval_common::Result;
use std::path::Path;

/// Dataset name for the submitted predictions in diagnostics.
pub const PREDICTIONS_NAME: &str = "Results file";

/// Dataset name for the ground truth in diagnostics.
pub const TEST_NAME: &str = "Test file";

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> std::result::Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    let result = match cli.command {
        Command::Evaluate(args) => evaluate::run_evaluate(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Endpoints(args) => endpoints::run_endpoints(args, log_level),
        Command::Rank(args) => rank::run_rank(args, log_level),
    };
    result.map_err(|e| e.to_string())
}

/// Config from `--config` (or defaults) with CLI overrides applied and re-validated.
fn resolve_config(path: Option<&Path>, overrides: &ResampleArgs) -> Result<EvalConfig> {
    let mut config = load_or_default(path)?;
    apply_overrides(&mut config, overrides);
    validate_config(&config)?;
    Ok(config)
}

fn read_predictions(path: &Path) -> Result<Table> {
    Ok(read_table(path)?.with_name(PREDICTIONS_NAME))
}

fn read_ground_truth(path: &Path) -> Result<Table> {
    Ok(read_table(path)?.with_name(TEST_NAME))
}
