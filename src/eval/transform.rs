//! Value transforms applied before scoring.
//!
//! Assay readouts for most endpoints span several orders of magnitude, so both
//! predicted and true values are compressed with `log10(max(x, 0) + 1)`.
//! Endpoints whose assay already reports on a log scale pass through unchanged.

use ndarray::Array1;

/// Clip to a detection limit of zero, no ceiling.
pub fn clip_non_negative(values: &Array1<f64>) -> Array1<f64> {
    values.mapv(|v| v.max(0.0))
}

/// Clip to zero and transform to `log10(x + 1)`.
pub fn clip_and_log_transform(values: &Array1<f64>) -> Array1<f64> {
    values.mapv(|v| (v.max(0.0) + 1.0).log10())
}

/// Transform policy for a single endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Values are already on a log scale
    Identity,
    /// `log10(max(x, 0) + 1)`
    ClipLog10,
}

impl Transform {
    /// Apply the transform.
    pub fn apply(self, values: &Array1<f64>) -> Array1<f64> {
        match self {
            Transform::Identity => values.clone(),
            Transform::ClipLog10 => clip_and_log_transform(values),
        }
    }

    /// Short description for CLI listings.
    pub fn describe(self) -> &'static str {
        match self {
            Transform::Identity => "none (log-scale native)",
            Transform::ClipLog10 => "log10(clip(x, 0) + 1)",
        }
    }
}
