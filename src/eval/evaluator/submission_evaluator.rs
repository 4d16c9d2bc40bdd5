//! Submission evaluator: validation, transform and bootstrap per endpoint

use super::config::EvalConfig;
use super::report::FinalReport;
use crate::config::validate_config;
use crate::eval::align::AlignedTable;
use crate::eval::bootstrap::{bootstrap_metrics, EndpointSummary};
use crate::eval::resample::Resampler;
use crate::eval::transform::Transform;
use crate::io::Table;
use admet_eval_common::Result;
use std::time::Instant;

/// Outcome of the data checks for one endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointCheck {
    /// Endpoint name
    pub endpoint: String,
    /// Complete (predicted, true) pairs available for scoring
    pub pairs: usize,
    /// Aligned rows dropped for a missing value
    pub dropped: usize,
    /// Transform that will be applied
    pub transform: Transform,
}

/// Evaluates a predictions table against ground truth.
pub struct SubmissionEvaluator {
    config: EvalConfig,
}

impl SubmissionEvaluator {
    /// Create a new evaluator with given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Run every check that `evaluate` would, without bootstrapping.
    pub fn check(&self, predictions: &Table, ground_truth: &Table) -> Result<Vec<EndpointCheck>> {
        validate_config(&self.config)?;
        let aligned = AlignedTable::new(
            predictions,
            ground_truth,
            &self.config.molecule_column,
            &self.config.endpoints,
        )?;

        self.config
            .endpoints
            .iter()
            .map(|endpoint| {
                let pairs = aligned.endpoint_pairs(endpoint)?;
                Ok(EndpointCheck {
                    endpoint: endpoint.clone(),
                    pairs: pairs.len(),
                    dropped: pairs.dropped,
                    transform: self.config.transform_for(endpoint),
                })
            })
            .collect()
    }

    /// Evaluate a submission.
    ///
    /// Endpoints are scored in configuration order and the first failing
    /// endpoint aborts the whole evaluation.
    pub fn evaluate(&self, predictions: &Table, ground_truth: &Table) -> Result<FinalReport> {
        validate_config(&self.config)?;
        let start = Instant::now();

        let aligned = AlignedTable::new(
            predictions,
            ground_truth,
            &self.config.molecule_column,
            &self.config.endpoints,
        )?;
        let resampler = Resampler::new(self.config.resample);

        let mut summaries: Vec<EndpointSummary> = Vec::with_capacity(self.config.endpoints.len());
        for endpoint in &self.config.endpoints {
            let pairs = aligned.endpoint_pairs(endpoint)?;
            if pairs.dropped > 0 {
                log::debug!("{endpoint}: dropped {} incomplete rows", pairs.dropped);
            }

            let transform = self.config.transform_for(endpoint);
            let pred = transform.apply(&pairs.pred);
            let truth = transform.apply(&pairs.truth);

            let result = bootstrap_metrics(&pred, &truth, endpoint, &resampler);
            summaries.push(result.summarize());
        }

        let report = FinalReport::from_summaries(summaries);
        log::info!(
            "evaluated {} endpoints over {} molecules in {:.2?}",
            self.config.endpoints.len(),
            aligned.len(),
            start.elapsed()
        );
        Ok(report)
    }
}

impl Default for SubmissionEvaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

/// Evaluate with the default endpoints, seed and sample count.
pub fn calculate_metrics(predictions: &Table, ground_truth: &Table) -> Result<FinalReport> {
    SubmissionEvaluator::default().evaluate(predictions, ground_truth)
}
