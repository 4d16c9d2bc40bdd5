//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! admet-eval evaluate predictions.csv test.csv
//! admet-eval evaluate predictions.csv test.csv --samples 200 --format json
//! admet-eval validate predictions.csv test.csv
//! admet-eval rank test.csv team-a.csv team-b.csv --format markdown
//! admet-eval endpoints
//! ```

mod core;

pub use core::{
    apply_overrides, parse_args, Cli, Command, EndpointsArgs, EvaluateArgs, RankArgs,
    ResampleArgs, ValidateArgs,
};

#[cfg(test)]
mod tests;
