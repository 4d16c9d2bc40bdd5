//! Fixed-seed bootstrap resampling

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seed used by the leaderboard so reported uncertainty bands are reproducible.
pub const DEFAULT_SEED: u64 = 0;

/// Bootstrap samples drawn per endpoint.
pub const DEFAULT_N_SAMPLES: usize = 1000;

/// Resampling configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Random seed for the index stream
    pub seed: u64,
    /// Number of bootstrap samples (K)
    pub n_samples: usize,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            n_samples: DEFAULT_N_SAMPLES,
        }
    }
}

impl ResampleConfig {
    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of bootstrap samples
    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }
}

/// Bootstrap index generator
///
/// Every call starts a fresh generator from the configured seed, so the output
/// is a pure function of `(seed, n_samples, size)`. Samples are drawn row by
/// row from a single stream, which makes a shorter run a prefix of a longer one.
#[derive(Clone, Debug)]
pub struct Resampler {
    config: ResampleConfig,
}

impl Resampler {
    /// Create a resampler
    pub fn new(config: ResampleConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Draw `n_samples × size` indices uniformly from `0..size` with replacement.
    ///
    /// Row `k` is the k-th bootstrap sample.
    pub fn samples(&self, size: usize) -> Array2<usize> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut indices = Array2::zeros((self.config.n_samples, size));
        if size == 0 {
            return indices;
        }
        for idx in &mut indices {
            *idx = rng.random_range(0..size);
        }
        indices
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(ResampleConfig::default())
    }
}
