//! Submission evaluator for the ADMET leaderboard
//!
//! Provides SubmissionEvaluator for scoring a predictions table against
//! ground truth, the FinalReport it produces, and leaderboards ranking
//! several submissions.

mod config;
mod leaderboard;
mod report;
mod submission_evaluator;


pub use config::{EvalConfig, ENDPOINTS, LOG_SCALE_ENDPOINTS, MACRO_AVERAGE, MOLECULE_COLUMN};
pub use leaderboard::{board_cells, format_mean_std, report_to_markdown, Board, Entry, Leaderboard};
pub use report::{FinalReport, ReportRow, ENDPOINT_COLUMN};
pub use submission_evaluator::{calculate_metrics, EndpointCheck, SubmissionEvaluator};
