//! Configuration validation logic

use super::error::ValidationError;
use crate::eval::EvalConfig;
use std::collections::HashSet;

/// Validate an evaluation configuration
///
/// Checks:
/// - At least one bootstrap sample
/// - A non-empty molecule column
/// - A non-empty endpoint list without blanks or repeats
/// - No endpoint doubling as the molecule column
pub fn validate_config(config: &EvalConfig) -> Result<(), ValidationError> {
    if config.resample.n_samples == 0 {
        return Err(ValidationError::InvalidSampleCount(config.resample.n_samples));
    }

    if config.molecule_column.trim().is_empty() {
        return Err(ValidationError::EmptyMoleculeColumn);
    }

    if config.endpoints.is_empty() {
        return Err(ValidationError::EmptyEndpoints);
    }

    let mut seen = HashSet::with_capacity(config.endpoints.len());
    for endpoint in &config.endpoints {
        if endpoint.trim().is_empty() {
            return Err(ValidationError::BlankEndpoint);
        }
        if endpoint == &config.molecule_column {
            return Err(ValidationError::EndpointIsKey(endpoint.clone()));
        }
        if !seen.insert(endpoint.as_str()) {
            return Err(ValidationError::DuplicateEndpoint(endpoint.clone()));
        }
    }

    Ok(())
}
