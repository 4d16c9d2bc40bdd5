//! Validation error types

use admet_eval_common::AdmetError;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid sample count: {0} (must be > 0)")]
    InvalidSampleCount(usize),

    #[error("Endpoint list cannot be empty")]
    EmptyEndpoints,

    #[error("Endpoint listed more than once: {0}")]
    DuplicateEndpoint(String),

    #[error("Endpoint name cannot be blank")]
    BlankEndpoint,

    #[error("Molecule column cannot be empty")]
    EmptyMoleculeColumn,

    #[error("Endpoint {0} is also the molecule column")]
    EndpointIsKey(String),
}

impl ValidationError {
    /// Configuration field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidSampleCount(_) => "resample.n_samples",
            Self::EmptyEndpoints
            | Self::DuplicateEndpoint(_)
            | Self::BlankEndpoint
            | Self::EndpointIsKey(_) => "endpoints",
            Self::EmptyMoleculeColumn => "molecule_column",
        }
    }

    /// How to fix it.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidSampleCount(_) => "Use at least 1 bootstrap sample (default 1000)",
            Self::EmptyEndpoints => "List at least one endpoint, or omit the field for the defaults",
            Self::DuplicateEndpoint(_) => "Remove the repeated entry",
            Self::BlankEndpoint => "Remove the empty entry",
            Self::EmptyMoleculeColumn => "Set molecule_column to the key column name, e.g. \"Molecule Name\"",
            Self::EndpointIsKey(_) => "Remove the key column from the endpoint list",
        }
    }
}

impl From<ValidationError> for AdmetError {
    fn from(err: ValidationError) -> Self {
        AdmetError::ConfigValue {
            field: err.field().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion().to_string(),
        }
    }
}
