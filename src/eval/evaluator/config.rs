//! Evaluation configuration

use crate::eval::resample::ResampleConfig;
use crate::eval::transform::Transform;
use serde::{Deserialize, Serialize};

/// Key column shared by predictions and ground truth.
pub const MOLECULE_COLUMN: &str = "Molecule Name";

/// Challenge endpoints, in report order.
pub const ENDPOINTS: [&str; 9] = [
    "LogD",
    "KSOL",
    "MLM CLint",
    "HLM CLint",
    "Caco-2 Permeability Efflux",
    "Caco-2 Permeability Papp A>B",
    "MPPB",
    "MBPB",
    "MGMB",
];

/// Endpoints whose assay already reports on a log scale.
pub const LOG_SCALE_ENDPOINTS: [&str; 1] = ["LogD"];

/// Label of the synthetic last report row.
pub const MACRO_AVERAGE: &str = "Macro Average";

/// Configuration for submission evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Molecule key column
    pub molecule_column: String,
    /// Endpoints to score, in report order
    pub endpoints: Vec<String>,
    /// Endpoints exempt from the log transform (case-insensitive)
    pub log_scale_endpoints: Vec<String>,
    /// Bootstrap seed and sample count
    pub resample: ResampleConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            molecule_column: MOLECULE_COLUMN.to_string(),
            endpoints: ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            log_scale_endpoints: LOG_SCALE_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            resample: ResampleConfig::default(),
        }
    }
}

impl EvalConfig {
    /// Score only the given endpoints.
    pub fn with_endpoints<S: Into<String>>(mut self, endpoints: impl IntoIterator<Item = S>) -> Self {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set the bootstrap seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.resample.seed = seed;
        self
    }

    /// Set the number of bootstrap samples
    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.resample.n_samples = n_samples;
        self
    }

    /// Transform applied to `endpoint` before scoring.
    pub fn transform_for(&self, endpoint: &str) -> Transform {
        let log_native = self
            .log_scale_endpoints
            .iter()
            .any(|e| e.eq_ignore_ascii_case(endpoint));
        if log_native {
            Transform::Identity
        } else {
            Transform::ClipLog10
        }
    }
}
