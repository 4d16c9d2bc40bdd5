//! Final evaluation report

use super::config::MACRO_AVERAGE;
use crate::eval::bootstrap::{nan_mean, EndpointSummary};
use crate::eval::metric::{Metric, MetricSet};
use admet_eval_common::{Table, TableBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the first report column.
pub const ENDPOINT_COLUMN: &str = "Endpoint";

/// One report row: bootstrap mean and std of every metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Endpoint name, or [`MACRO_AVERAGE`]
    pub endpoint: String,
    /// Mean per metric
    pub mean: MetricSet,
    /// Standard deviation per metric
    pub std: MetricSet,
}

impl ReportRow {
    /// Cell values in [`FinalReport::columns`] order, excluding the endpoint.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.mean
            .values()
            .iter()
            .chain(self.std.values().iter())
            .copied()
    }
}

impl From<EndpointSummary> for ReportRow {
    fn from(summary: EndpointSummary) -> Self {
        Self {
            endpoint: summary.endpoint,
            mean: summary.mean,
            std: summary.std,
        }
    }
}

/// Per-endpoint rows followed by the macro average.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    rows: Vec<ReportRow>,
}

impl FinalReport {
    /// Build the report from endpoint summaries, in the order given.
    ///
    /// The macro average is the unweighted, NaN-skipping mean across endpoints
    /// of each metric's mean and of each metric's std. Averaging standard
    /// deviations is not a pooled estimate; it is what the leaderboard reports.
    pub fn from_summaries(summaries: impl IntoIterator<Item = EndpointSummary>) -> Self {
        let mut rows: Vec<ReportRow> = summaries.into_iter().map(ReportRow::from).collect();

        let mut mean = MetricSet::nan();
        let mut std = MetricSet::nan();
        for metric in Metric::ALL {
            mean[metric] = nan_mean(rows.iter().map(|r| r.mean[metric]));
            std[metric] = nan_mean(rows.iter().map(|r| r.std[metric]));
        }
        rows.push(ReportRow {
            endpoint: MACRO_AVERAGE.to_string(),
            mean,
            std,
        });

        Self { rows }
    }

    /// Column names: `Endpoint`, every `mean_*`, every `std_*`.
    pub fn columns() -> Vec<String> {
        std::iter::once(ENDPOINT_COLUMN.to_string())
            .chain(Metric::ALL.iter().map(|m| m.mean_column()))
            .chain(Metric::ALL.iter().map(|m| m.std_column()))
            .collect()
    }

    /// All rows, macro average last.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Per-endpoint rows only.
    pub fn endpoint_rows(&self) -> &[ReportRow] {
        &self.rows[..self.rows.len() - 1]
    }

    /// The macro-average row.
    pub fn macro_average(&self) -> &ReportRow {
        &self.rows[self.rows.len() - 1]
    }

    /// Row for a named endpoint (or [`MACRO_AVERAGE`]).
    pub fn row(&self, endpoint: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.endpoint == endpoint)
    }

    /// Render as a terminal table with `precision` decimals.
    pub fn to_table(&self, precision: usize) -> Table {
        let mut builder = TableBuilder::new().headers(Self::columns());
        for row in &self.rows {
            let cells = std::iter::once(row.endpoint.clone())
                .chain(row.values().map(|v| format!("{v:.precision$}")));
            builder = builder.row(cells);
        }
        builder.build()
    }

    /// Rows as JSON objects keyed by column name; NaN becomes `null`.
    pub fn to_json_value(&self) -> serde_json::Value {
        let columns = Self::columns();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                object.insert(columns[0].clone(), row.endpoint.clone().into());
                for (column, value) in columns[1..].iter().zip(row.values()) {
                    object.insert(column.clone(), serde_json::Value::from(value));
                }
                serde_json::Value::Object(object)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table(4))
    }
}
