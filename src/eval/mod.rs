//! Leaderboard evaluation
//!
//! Scores a predictions table against ground truth with bootstrap
//! uncertainty estimates.
//!
//! ## Architecture
//!
//! - `align`: required-column, coverage and duplicate checks; key join
//! - `transform`: `log10(clip(x, 0) + 1)` for linear-scale endpoints
//! - `resample`: fixed-seed bootstrap index generator
//! - `scoring`: MAE, RAE, R2, Spearman R and Kendall's Tau for one sample
//! - `bootstrap`: per-endpoint aggregation into mean and std
//! - `evaluator`: orchestration, FinalReport and leaderboards
//!
//! ## Example
//!
//! ```no_run
//! use admet_eval::eval::{EvalConfig, Metric, SubmissionEvaluator};
//! use admet_eval::io::read_table;
//!
//! let predictions = read_table("predictions.csv")?.with_name("Results file");
//! let ground_truth = read_table("test.csv")?.with_name("Test file");
//!
//! let evaluator = SubmissionEvaluator::new(EvalConfig::default().with_samples(500));
//! let report = evaluator.evaluate(&predictions, &ground_truth)?;
//! println!("MA-RAE: {:.3}", report.macro_average().mean[Metric::Rae]);
//! # Ok::<(), admet_eval::AdmetError>(())
//! ```

pub mod align;
pub mod bootstrap;
pub mod evaluator;
pub mod metric;
pub mod resample;
pub mod scoring;
pub mod transform;

pub use align::{check_required_columns, AlignedTable, EndpointPairs};
pub use bootstrap::{bootstrap_metrics, nan_mean, nan_std, BootstrapResult, EndpointSummary, MetricRecord};
pub use evaluator::{
    calculate_metrics, format_mean_std, report_to_markdown, Board, EndpointCheck, EvalConfig,
    FinalReport, Leaderboard, ReportRow, SubmissionEvaluator, ENDPOINTS, LOG_SCALE_ENDPOINTS,
    MACRO_AVERAGE, MOLECULE_COLUMN,
};
pub use metric::{Metric, MetricSet};
pub use resample::{ResampleConfig, Resampler, DEFAULT_N_SAMPLES, DEFAULT_SEED};
pub use scoring::{
    average_ranks, kendall_tau, mean_absolute_error, r2_score, relative_absolute_error,
    score_sample, spearman_r,
};
pub use transform::{clip_and_log_transform, Transform};
