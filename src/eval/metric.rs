//! Leaderboard metric definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Metrics reported for every endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Mean Absolute Error
    Mae,
    /// Relative Absolute Error (MAE over mean absolute deviation of the truth)
    Rae,
    /// R² coefficient of determination
    R2,
    /// Spearman rank correlation
    SpearmanR,
    /// Kendall rank correlation (tau-b)
    KendallTau,
}

impl Metric {
    /// All metrics in report column order.
    pub const ALL: [Metric; 5] = [
        Metric::Mae,
        Metric::Rae,
        Metric::R2,
        Metric::SpearmanR,
        Metric::KendallTau,
    ];

    /// Number of metrics per bootstrap sample.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this metric in [`Metric::ALL`].
    pub fn index(self) -> usize {
        match self {
            Metric::Mae => 0,
            Metric::Rae => 1,
            Metric::R2 => 2,
            Metric::SpearmanR => 3,
            Metric::KendallTau => 4,
        }
    }

    /// Whether higher values are better for this metric
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Metric::Mae | Metric::Rae)
    }

    /// Identifier used in report column names (`mean_<key>`, `std_<key>`).
    pub fn key(self) -> &'static str {
        match self {
            Metric::Mae => "MAE",
            Metric::Rae => "RAE",
            Metric::R2 => "R2",
            Metric::SpearmanR => "SpearmanR",
            Metric::KendallTau => "KendallTau",
        }
    }

    /// Human-readable name shown on the leaderboard.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Mae => "MAE",
            Metric::Rae => "RAE",
            Metric::R2 => "R2",
            Metric::SpearmanR => "Spearman R",
            Metric::KendallTau => "Kendall's Tau",
        }
    }

    /// Report column holding the bootstrap mean.
    pub fn mean_column(self) -> String {
        format!("mean_{}", self.key())
    }

    /// Report column holding the bootstrap standard deviation.
    pub fn std_column(self) -> String {
        format!("std_{}", self.key())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`Metric`], stored in column order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSet([f64; Metric::COUNT]);

impl MetricSet {
    /// Build from values in [`Metric::ALL`] order.
    pub fn new(values: [f64; Metric::COUNT]) -> Self {
        Self(values)
    }

    /// Every metric set to NaN.
    pub fn nan() -> Self {
        Self([f64::NAN; Metric::COUNT])
    }

    /// Value for `metric`.
    pub fn get(&self, metric: Metric) -> f64 {
        self.0[metric.index()]
    }

    /// Values in [`Metric::ALL`] order.
    pub fn values(&self) -> &[f64; Metric::COUNT] {
        &self.0
    }

    /// `(metric, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.iter().map(move |&m| (m, self.get(m)))
    }
}

impl Index<Metric> for MetricSet {
    type Output = f64;

    fn index(&self, metric: Metric) -> &f64 {
        &self.0[metric.index()]
    }
}

impl IndexMut<Metric> for MetricSet {
    fn index_mut(&mut self, metric: Metric) -> &mut f64 {
        &mut self.0[metric.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_metric_higher_is_better() {
        assert!(!Metric::Mae.higher_is_better());
        assert!(!Metric::Rae.higher_is_better());
        assert!(Metric::R2.higher_is_better());
        assert!(Metric::SpearmanR.higher_is_better());
        assert!(Metric::KendallTau.higher_is_better());
    }

    #[test]
    fn test_column_names() {
        assert_eq!(Metric::SpearmanR.mean_column(), "mean_SpearmanR");
        assert_eq!(Metric::KendallTau.std_column(), "std_KendallTau");
        assert_eq!(Metric::KendallTau.to_string(), "Kendall's Tau");
    }

    #[test]
    fn test_metric_set_indexing() {
        let mut set = MetricSet::nan();
        set[Metric::R2] = 0.5;
        assert_eq!(set.get(Metric::R2), 0.5);
        assert!(set[Metric::Mae].is_nan());
        assert_eq!(set.iter().count(), Metric::COUNT);
    }
}
