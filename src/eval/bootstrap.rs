//! Bootstrap aggregation of per-sample metrics for one endpoint

use super::metric::{Metric, MetricSet};
use super::resample::Resampler;
use super::scoring::score_sample;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

/// One metric value for one bootstrap sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Bootstrap sample index
    pub sample: usize,
    /// Endpoint name
    pub endpoint: String,
    /// Metric
    pub metric: Metric,
    /// Value (may be NaN)
    pub value: f64,
}

/// Mean and standard deviation of each metric across bootstrap samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointSummary {
    /// Endpoint name
    pub endpoint: String,
    /// Bootstrap mean per metric
    pub mean: MetricSet,
    /// Bootstrap standard deviation per metric
    pub std: MetricSet,
}

/// Per-sample metric values for one endpoint, `n_samples × 5`.
#[derive(Clone, Debug)]
pub struct BootstrapResult {
    endpoint: String,
    values: Array2<f64>,
}

impl BootstrapResult {
    /// Endpoint these samples were drawn for.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of bootstrap samples.
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Raw `n_samples × 5` buffer, columns in [`Metric::ALL`] order.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Values of one metric across samples.
    pub fn metric_values(&self, metric: Metric) -> ArrayView1<'_, f64> {
        self.values.column(metric.index())
    }

    /// Long-form `(sample, endpoint, metric, value)` records, sample-major.
    pub fn records(&self) -> impl Iterator<Item = MetricRecord> + '_ {
        self.values
            .outer_iter()
            .enumerate()
            .flat_map(move |(sample, row)| {
                Metric::ALL.iter().map(move |&metric| MetricRecord {
                    sample,
                    endpoint: self.endpoint.clone(),
                    metric,
                    value: row[metric.index()],
                })
            })
    }

    /// Reduce to mean and sample standard deviation, skipping NaN values.
    pub fn summarize(&self) -> EndpointSummary {
        let mut mean = MetricSet::nan();
        let mut std = MetricSet::nan();
        for metric in Metric::ALL {
            let column = self.metric_values(metric);
            mean[metric] = nan_mean(column.iter().copied());
            std[metric] = nan_std(column.iter().copied());
        }
        EndpointSummary {
            endpoint: self.endpoint.clone(),
            mean,
            std,
        }
    }
}

/// Score every bootstrap resample of `(pred, truth)`.
///
/// `pred` and `truth` must already be transformed, equal in length and NaN-free.
pub fn bootstrap_metrics(
    pred: &Array1<f64>,
    truth: &Array1<f64>,
    endpoint: &str,
    resampler: &Resampler,
) -> BootstrapResult {
    debug_assert_eq!(pred.len(), truth.len());
    let samples = resampler.samples(truth.len());
    let mut values = Array2::from_elem((samples.nrows(), Metric::COUNT), f64::NAN);

    for (indices, mut row) in samples.outer_iter().zip(values.axis_iter_mut(Axis(0))) {
        let pred_k: Array1<f64> = indices.iter().map(|&i| pred[i]).collect();
        let truth_k: Array1<f64> = indices.iter().map(|&i| truth[i]).collect();
        let scores = score_sample(pred_k.view(), truth_k.view());
        for (metric, value) in scores.iter() {
            row[metric.index()] = value;
        }
    }

    log::debug!(
        "{endpoint}: scored {} bootstrap samples of {} pairs",
        values.nrows(),
        truth.len()
    );

    BootstrapResult {
        endpoint: endpoint.to_string(),
        values,
    }
}

/// Mean over non-NaN values; NaN when there are none.
pub fn nan_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Sample standard deviation (ddof = 1) over non-NaN values; NaN with fewer than two.
pub fn nan_std(values: impl IntoIterator<Item = f64>) -> f64 {
    let kept: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if kept.len() < 2 {
        return f64::NAN;
    }
    let n = kept.len() as f64;
    let mean = kept.iter().sum::<f64>() / n;
    let variance = kept.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}
