//! Rank command implementation

use super::{read_ground_truth, read_predictions, resolve_config};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::RankArgs;
use crate::eval::{Leaderboard, SubmissionEvaluator};
use admet_eval_common::{OutputFormat, Result};
use std::path::Path;

/// Board name for a submission file: its stem, or the full path if it has none.
pub fn submission_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

pub fn run_rank(args: RankArgs, level: LogLevel) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), &args.resample)?;
    let ground_truth = read_ground_truth(&args.test)?;
    let evaluator = SubmissionEvaluator::new(config);

    let mut board = Leaderboard::new();
    for path in &args.submissions {
        let name = submission_name(path);
        log(level, LogLevel::Verbose, &format!("Scoring {name}"));

        let predictions = read_predictions(path)?;
        let report = evaluator.evaluate(&predictions, &ground_truth)?;
        board.add(name, report);
    }

    match args.format {
        OutputFormat::Markdown => print!("{}", board.to_markdown()),
        _ => print!("{board}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_name() {
        assert_eq!(submission_name(Path::new("runs/team-a.csv")), "team-a");
        assert_eq!(submission_name(Path::new("plain")), "plain");
    }
}
