//! Core CLI types - Cli, Command, and argument structs

use admet_eval_common::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::eval::EvalConfig;

/// admet-eval: bootstrap scoring of ADMET prediction submissions
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "admet-eval")]
#[command(version)]
#[command(about = "Score ADMET predictions against ground truth with bootstrap uncertainty")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate a predictions file against the test set
    Evaluate(EvaluateArgs),

    /// Check a predictions file without scoring it
    Validate(ValidateArgs),

    /// List configured endpoints and their transforms
    Endpoints(EndpointsArgs),

    /// Evaluate several submissions and rank them by MA-RAE
    Rank(RankArgs),
}

/// Bootstrap overrides shared by scoring commands
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ResampleArgs {
    /// Override the bootstrap seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of bootstrap samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Score only these endpoints (repeatable)
    #[arg(long = "endpoint", value_name = "NAME")]
    pub endpoints: Vec<String>,
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Predictions CSV
    #[arg(value_name = "PREDICTIONS")]
    pub predictions: PathBuf,

    /// Ground-truth CSV
    #[arg(value_name = "TEST")]
    pub test: PathBuf,

    /// YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub resample: ResampleArgs,

    /// Output format (table, json, csv, markdown)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Predictions CSV
    #[arg(value_name = "PREDICTIONS")]
    pub predictions: PathBuf,

    /// Ground-truth CSV
    #[arg(value_name = "TEST")]
    pub test: PathBuf,

    /// YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the endpoints command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EndpointsArgs {
    /// YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the rank command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RankArgs {
    /// Ground-truth CSV
    #[arg(value_name = "TEST")]
    pub test: PathBuf,

    /// Predictions CSVs, named on the board by file stem
    #[arg(value_name = "SUBMISSION", required = true)]
    pub submissions: Vec<PathBuf>,

    /// YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub resample: ResampleArgs,

    /// Output format (table, markdown)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EvalConfig
pub fn apply_overrides(config: &mut EvalConfig, args: &ResampleArgs) {
    if let Some(seed) = args.seed {
        config.resample.seed = seed;
    }
    if let Some(samples) = args.samples {
        config.resample.n_samples = samples;
    }
    if !args.endpoints.is_empty() {
        config.endpoints = args.endpoints.clone();
    }
}
