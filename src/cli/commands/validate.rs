//! Validate command implementation

use super::{read_ground_truth, read_predictions, resolve_config};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::{ResampleArgs, ValidateArgs};
use crate::eval::{EndpointCheck, SubmissionEvaluator};
use admet_eval_common::Result;

/// One line per endpoint: pair count, dropped rows and transform.
pub fn format_checks(checks: &[EndpointCheck]) -> String {
    let width = checks.iter().map(|c| c.endpoint.len()).max().unwrap_or(0);
    checks
        .iter()
        .map(|c| {
            format!(
                "  {:width$}  {:>5} pairs  {:>4} dropped  {}",
                c.endpoint,
                c.pairs,
                c.dropped,
                c.transform.describe()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Validating {} against {}",
            args.predictions.display(),
            args.test.display()
        ),
    );

    let config = resolve_config(args.config.as_deref(), &ResampleArgs::default())?;
    let predictions = read_predictions(&args.predictions)?;
    let ground_truth = read_ground_truth(&args.test)?;

    let checks = SubmissionEvaluator::new(config).check(&predictions, &ground_truth)?;

    log(level, LogLevel::Normal, "✓ Submission is valid");
    log(level, LogLevel::Normal, &format_checks(&checks));

    Ok(())
}
