//! Evaluate command implementation

use super::{read_ground_truth, read_predictions, resolve_config};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::EvaluateArgs;
use crate::eval::SubmissionEvaluator;
use crate::io::{render_report, save_report};
use admet_eval_common::Result;

pub fn run_evaluate(args: EvaluateArgs, level: LogLevel) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), &args.resample)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Evaluating {} against {} ({} endpoints, {} bootstrap samples, seed {})",
            args.predictions.display(),
            args.test.display(),
            config.endpoints.len(),
            config.resample.n_samples,
            config.resample.seed
        ),
    );

    let predictions = read_predictions(&args.predictions)?;
    let ground_truth = read_ground_truth(&args.test)?;

    let report = SubmissionEvaluator::new(config).evaluate(&predictions, &ground_truth)?;

    match &args.output {
        Some(path) => {
            save_report(&report, path, args.format)?;
            log(
                level,
                LogLevel::Normal,
                &format!("✓ Report written to {}", path.display()),
            );
        }
        None => print!("{}", render_report(&report, args.format)?),
    }

    Ok(())
}
