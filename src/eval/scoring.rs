//! Per-sample regression metrics
//!
//! All functions expect equal-length, non-empty, NaN-free inputs; callers
//! filter missing values before scoring. Degenerate inputs follow IEEE
//! arithmetic except where noted (R² and the rank correlations return NaN
//! when the relevant array is constant).

use super::metric::{Metric, MetricSet};
use ndarray::{ArrayView1, Zip};
use std::cmp::Ordering;

/// Score one (predicted, true) pair on every leaderboard metric.
pub fn score_sample(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> MetricSet {
    let mae = mean_absolute_error(pred, truth);
    let mut scores = MetricSet::nan();
    scores[Metric::Mae] = mae;
    scores[Metric::Rae] = mae / mean_absolute_deviation(truth);
    scores[Metric::R2] = r2_score(pred, truth);
    scores[Metric::SpearmanR] = spearman_r(pred, truth);
    scores[Metric::KendallTau] = kendall_tau(pred, truth);
    scores
}

/// Mean absolute difference.
pub fn mean_absolute_error(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> f64 {
    let total = Zip::from(&pred)
        .and(&truth)
        .fold(0.0, |acc, &p, &t| acc + (p - t).abs());
    total / pred.len() as f64
}

/// Mean absolute deviation of `values` from their own mean.
///
/// Exactly zero for constant input.
pub fn mean_absolute_deviation(values: ArrayView1<'_, f64>) -> f64 {
    if is_constant(values) {
        return 0.0;
    }
    let mean = mean(values);
    values.iter().map(|v| (v - mean).abs()).sum::<f64>() / values.len() as f64
}

/// Relative absolute error: MAE divided by the mean absolute deviation of the truth.
pub fn relative_absolute_error(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> f64 {
    mean_absolute_error(pred, truth) / mean_absolute_deviation(truth)
}

/// Coefficient of determination, NaN when `truth` has zero variance.
pub fn r2_score(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> f64 {
    if is_constant(truth) {
        return f64::NAN;
    }
    let mean = mean(truth);
    let ss_tot: f64 = truth.iter().map(|t| (t - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return f64::NAN;
    }
    let ss_res = Zip::from(&pred)
        .and(&truth)
        .fold(0.0, |acc, &p, &t| acc + (t - p).powi(2));
    1.0 - ss_res / ss_tot
}

/// Spearman rank correlation with average ranks for ties.
pub fn spearman_r(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> f64 {
    if pred.len() < 2 {
        return f64::NAN;
    }
    let rank_pred = average_ranks(pred);
    let rank_truth = average_ranks(truth);
    pearson_r(&rank_pred, &rank_truth)
}

/// Kendall's tau-b, with tie correction on both sides.
///
/// Uses Knight's O(n log n) algorithm: sort by `truth` then `pred`, count
/// discordant pairs as merge-sort inversions of `pred`.
pub fn kendall_tau(pred: ArrayView1<'_, f64>, truth: ArrayView1<'_, f64>) -> f64 {
    let n = truth.len();
    if n < 2 {
        return f64::NAN;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| cmp_f64(truth[a], truth[b]).then(cmp_f64(pred[a], pred[b])));

    // Pairs tied on truth, and pairs tied on both.
    let mut tied_truth = 0u64;
    let mut tied_joint = 0u64;
    for group in runs(&order, |&a, &b| truth[a] == truth[b]) {
        tied_truth += pairs(group.len());
        for sub in runs(group, |&a, &b| pred[a] == pred[b]) {
            tied_joint += pairs(sub.len());
        }
    }

    let mut ys: Vec<f64> = order.iter().map(|&i| pred[i]).collect();
    let mut buffer = vec![0.0; n];
    let discordant = count_inversions(&mut ys, &mut buffer);

    let tied_pred: u64 = runs(&ys, |a, b| a == b).map(|r| pairs(r.len())).sum();

    let total = pairs(n);
    let untied_truth = total - tied_truth;
    let untied_pred = total - tied_pred;
    if untied_truth == 0 || untied_pred == 0 {
        return f64::NAN;
    }

    // concordant + discordant = total - tied_truth - tied_pred + tied_joint
    let numerator =
        total as f64 - tied_truth as f64 - tied_pred as f64 + tied_joint as f64
            - 2.0 * discordant as f64;
    let denominator = (untied_truth as f64 * untied_pred as f64).sqrt();
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Average (1-based) ranks; tied values share the mean of their ranks.
pub fn average_ranks(values: ArrayView1<'_, f64>) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| cmp_f64(values[a], values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0usize;
    for group in runs(&order, |&a, &b| values[a] == values[b]) {
        let end = start + group.len();
        let avg_rank = (start + 1 + end) as f64 * 0.5;
        for &idx in group {
            ranks[idx] = avg_rank;
        }
        start = end;
    }
    ranks
}

/// Pearson correlation, NaN when either side is constant.
fn pearson_r(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

fn mean(values: ArrayView1<'_, f64>) -> f64 {
    values.sum() / values.len() as f64
}

fn is_constant(values: ArrayView1<'_, f64>) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&v| v == first),
        None => true,
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn pairs(k: usize) -> u64 {
    let k = k as u64;
    k * k.saturating_sub(1) / 2
}

/// Maximal runs of consecutive elements that compare equal.
fn runs<'a, T>(
    items: &'a [T],
    mut same: impl FnMut(&T, &T) -> bool + 'a,
) -> impl Iterator<Item = &'a [T]> + 'a {
    let mut rest = items;
    std::iter::from_fn(move || {
        let first = rest.first()?;
        let len = 1 + rest[1..].iter().take_while(|x| same(first, *x)).count();
        let (run, tail) = rest.split_at(len);
        rest = tail;
        Some(run)
    })
}

/// Sort `values` ascending in place and return the number of strict inversions.
fn count_inversions(values: &mut [f64], buffer: &mut [f64]) -> u64 {
    let n = values.len();
    if n < 2 {
        return 0;
    }
    let mid = n / 2;
    let mut swaps = {
        let (left, right) = values.split_at_mut(mid);
        let (buf_left, buf_right) = buffer.split_at_mut(mid);
        count_inversions(left, buf_left) + count_inversions(right, buf_right)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        if values[i] <= values[j] {
            buffer[k] = values[i];
            i += 1;
        } else {
            buffer[k] = values[j];
            swaps += (mid - i) as u64;
            j += 1;
        }
        k += 1;
    }
    buffer[k..k + mid - i].copy_from_slice(&values[i..mid]);
    k += mid - i;
    buffer[k..k + n - j].copy_from_slice(&values[j..n]);
    values.copy_from_slice(&buffer[..n]);
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    /// O(n²) tau-b used to cross-check the merge-sort version.
    fn kendall_naive(pred: &Array1<f64>, truth: &Array1<f64>) -> f64 {
        let n = truth.len();
        let (mut c, mut d, mut tx, mut ty) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = truth[i] - truth[j];
                let dy = pred[i] - pred[j];
                if dx == 0.0 && dy == 0.0 {
                    continue;
                } else if dx == 0.0 {
                    tx += 1.0;
                } else if dy == 0.0 {
                    ty += 1.0;
                } else if dx * dy > 0.0 {
                    c += 1.0;
                } else {
                    d += 1.0;
                }
            }
        }
        (c - d) / ((c + d + tx) * (c + d + ty)).sqrt()
    }

    #[test]
    fn test_perfect_predictions() {
        let y = array![0.5, 1.2, 2.0, 3.3, 4.1];
        let scores = score_sample(y.view(), y.view());
        assert_eq!(scores[Metric::Mae], 0.0);
        assert_eq!(scores[Metric::Rae], 0.0);
        assert_eq!(scores[Metric::R2], 1.0);
        assert_abs_diff_eq!(scores[Metric::SpearmanR], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scores[Metric::KendallTau], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mae_and_rae() {
        let pred = array![1.0, 2.0, 4.0];
        let truth = array![1.0, 3.0, 5.0];
        // |diffs| = 0, 1, 1
        assert_abs_diff_eq!(mean_absolute_error(pred.view(), truth.view()), 2.0 / 3.0);
        // mean(truth) = 3, mean |dev| = (2 + 0 + 2) / 3
        assert_abs_diff_eq!(
            relative_absolute_error(pred.view(), truth.view()),
            (2.0 / 3.0) / (4.0 / 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_r2_known_value() {
        let pred = array![2.5, 0.0, 2.0, 8.0];
        let truth = array![3.0, -0.5, 2.0, 7.0];
        // sklearn.metrics.r2_score reference
        assert_abs_diff_eq!(
            r2_score(pred.view(), truth.view()),
            0.948_608_137_044_967_9,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_r2_nan_for_constant_truth() {
        let truth = array![0.1, 0.1, 0.1, 0.1];
        for pred in [array![0.1, 0.1, 0.1, 0.1], array![5.0, -2.0, 0.0, 1.0]] {
            assert!(r2_score(pred.view(), truth.view()).is_nan());
        }
    }

    #[test]
    fn test_rae_infinite_for_constant_truth() {
        let pred = array![1.0, 2.0];
        let truth = array![3.0, 3.0];
        assert!(relative_absolute_error(pred.view(), truth.view()).is_infinite());
        assert!(relative_absolute_error(truth.view(), truth.view()).is_nan());
    }

    #[test]
    fn test_average_ranks_with_ties() {
        let ranks = average_ranks(array![10.0, 20.0, 10.0, 30.0].view());
        assert_eq!(ranks, vec![1.5, 3.0, 1.5, 4.0]);
    }

    #[test]
    fn test_spearman_reversed() {
        let pred = array![5.0, 4.0, 3.0, 2.0, 1.0];
        let truth = array![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(spearman_r(pred.view(), truth.view()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spearman_with_ties_matches_scipy() {
        let pred = array![1.0, 2.0, 2.0, 3.0, 5.0];
        let truth = array![1.0, 3.0, 2.0, 2.0, 4.0];
        // ranks: pred [1, 2.5, 2.5, 4, 5], truth [1, 4, 2.5, 2.5, 5]
        assert_abs_diff_eq!(spearman_r(pred.view(), truth.view()), 7.25 / 9.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rank_correlations_nan_for_constant() {
        let pred = array![1.0, 2.0, 3.0];
        let truth = array![4.0, 4.0, 4.0];
        assert!(spearman_r(pred.view(), truth.view()).is_nan());
        assert!(kendall_tau(pred.view(), truth.view()).is_nan());
        assert!(kendall_tau(truth.view(), pred.view()).is_nan());
    }

    #[test]
    fn test_kendall_reversed() {
        let pred = array![4.0, 3.0, 2.0, 1.0];
        let truth = array![1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(kendall_tau(pred.view(), truth.view()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kendall_matches_naive_with_ties() {
        let pred = array![1.0, 2.0, 2.0, 3.0, 5.0, 0.5, 2.0, 7.0];
        let truth = array![1.0, 3.0, 2.0, 2.0, 4.0, 1.0, 3.0, 0.0];
        assert_abs_diff_eq!(
            kendall_tau(pred.view(), truth.view()),
            kendall_naive(&pred, &truth),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_count_inversions() {
        let mut values = vec![3.0, 1.0, 2.0, 2.0, 0.0];
        let mut buffer = vec![0.0; values.len()];
        // (3,1) (3,2) (3,2) (3,0) (1,0) (2,0) (2,0)
        assert_eq!(count_inversions(&mut values, &mut buffer), 7);
        assert_eq!(values, vec![0.0, 1.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_element() {
        let y = array![2.0];
        let scores = score_sample(y.view(), y.view());
        assert_eq!(scores[Metric::Mae], 0.0);
        assert!(scores[Metric::R2].is_nan());
        assert!(scores[Metric::SpearmanR].is_nan());
        assert!(scores[Metric::KendallTau].is_nan());
    }
}
