//! Bootstrap evaluation of ADMET property predictions.
//!
//! Scores a submission (one predicted value per molecule and endpoint) against
//! held-out measurements. Every endpoint is log-transformed unless its assay is
//! already log-scale, scored with MAE, RAE, R2, Spearman R and Kendall's Tau over
//! a fixed-seed bootstrap, and summarised as mean and standard deviation. A
//! `Macro Average` row closes the report.
//!
//! - `eval`: validation, transform, resampling, scoring, aggregation, reports
//! - `io`: CSV tables in, table/JSON/CSV/Markdown reports out
//! - `config`: YAML configuration, validation and CLI arguments
//! - `cli`: command handlers for the `admet-eval` binary
//!
//! # Example
//!
//! ```no_run
//! use admet_eval::{calculate_metrics, read_table, Metric};
//!
//! let predictions = read_table("predictions.csv")?.with_name("Results file");
//! let ground_truth = read_table("test.csv")?.with_name("Test file");
//!
//! let report = calculate_metrics(&predictions, &ground_truth)?;
//! for row in report.rows() {
//!     println!("{:<30} RAE {:.3}", row.endpoint, row.mean[Metric::Rae]);
//! }
//! # Ok::<(), admet_eval::AdmetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod eval;
pub mod io;

pub use admet_eval_common::{AdmetError, ErrorCategory, OutputFormat, Result};
pub use config::load_config;
pub use eval::{
    calculate_metrics, EvalConfig, FinalReport, Leaderboard, Metric, MetricSet, ResampleConfig,
    SubmissionEvaluator,
};
pub use io::{read_table, save_report, Table};
