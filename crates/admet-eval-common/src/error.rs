//! Error types with actionable diagnostics.
//!
//! Submission problems (missing columns, missing molecules, empty endpoints)
//! are reported back to the submitter verbatim, so every message names the
//! offending dataset, column or endpoint and says how to fix it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for admet-eval operations.
pub type Result<T> = std::result::Result<T, AdmetError>;

/// Broad grouping of [`AdmetError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Required columns are absent from an input table.
    Schema,
    /// Molecule keys do not line up between predictions and ground truth.
    Coverage,
    /// One endpoint has no usable data.
    EndpointData,
    /// Configuration could not be loaded or is invalid.
    Config,
    /// Reading or writing tables failed.
    Io,
    /// Unexpected condition inside the evaluator.
    Internal,
}

/// Errors that can occur while evaluating a submission.
#[derive(Error, Debug)]
pub enum AdmetError {
    /// An input table lacks required columns.
    #[error("{dataset} is missing required columns: {missing:?}\n  → Add the listed columns to the header row")]
    MissingColumns { dataset: String, missing: Vec<String> },

    /// Molecules present in the test set are absent from the predictions.
    #[error("The predictions file is missing some molecules present in the test set ({count} missing, e.g. {examples:?}). Please ensure all molecules are included.")]
    MissingMolecules { count: usize, examples: Vec<String> },

    /// The predictions table lists a molecule more than once.
    #[error("The predictions file contains duplicated molecules ({count} duplicated, e.g. {examples:?}). Please ensure each molecule is only listed once.")]
    DuplicateMolecules { count: usize, examples: Vec<String> },

    /// Every prediction for an endpoint is missing or non-numeric.
    #[error("All predictions are missing for endpoint {endpoint}. Please provide valid predictions.")]
    AllPredictionsMissing { endpoint: String },

    /// No (predicted, true) pair survives missing-value filtering.
    #[error("No valid data available for endpoint {endpoint} after removing NaNs.")]
    NoValidPairs { endpoint: String },

    /// A table row has a different number of cells than the header.
    #[error("Row {row} of {dataset} has {actual} cells, expected {expected}\n  → Check for stray delimiters in that row")]
    RaggedRow { dataset: String, row: usize, expected: usize, actual: usize },

    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create a config file or drop --config to use the built-in defaults")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV could not be parsed or written.
    #[error("CSV error: {context}\n  Cause: {source}")]
    Csv {
        context: String,
        #[source]
        source: csv::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic error for unexpected conditions.
    #[error("Internal error: {message}\n  → Please report this as a bug in admet-eval")]
    Internal { message: String },
}

impl AdmetError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a CSV error with context.
    pub fn csv(context: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv { context: context.into(), source }
    }

    /// Which part of the error taxonomy this belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingColumns { .. } | Self::RaggedRow { .. } => ErrorCategory::Schema,
            Self::MissingMolecules { .. } | Self::DuplicateMolecules { .. } => {
                ErrorCategory::Coverage
            }
            Self::AllPredictionsMissing { .. } | Self::NoValidPairs { .. } => {
                ErrorCategory::EndpointData
            }
            Self::ConfigNotFound { .. } | Self::ConfigParsing { .. } | Self::ConfigValue { .. } => {
                ErrorCategory::Config
            }
            Self::Io { .. } | Self::Csv { .. } | Self::Serialization { .. } => ErrorCategory::Io,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error should be shown to the submitter as-is.
    ///
    /// Coverage and endpoint-data failures are caused by the uploaded file,
    /// not by the evaluator, and carry a message written for the submitter.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Coverage | ErrorCategory::EndpointData
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingColumns { .. } => "E001",
            Self::RaggedRow { .. } => "E002",
            Self::MissingMolecules { .. } => "E010",
            Self::DuplicateMolecules { .. } => "E011",
            Self::AllPredictionsMissing { .. } => "E020",
            Self::NoValidPairs { .. } => "E021",
            Self::ConfigNotFound { .. } => "E030",
            Self::ConfigParsing { .. } => "E031",
            Self::ConfigValue { .. } => "E032",
            Self::Io { .. } => "E050",
            Self::Csv { .. } => "E051",
            Self::Serialization { .. } => "E052",
            Self::Internal { .. } => "E999",
        }
    }
}
