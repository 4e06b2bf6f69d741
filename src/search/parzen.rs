//! Sequential model-based search using per-parameter Parzen estimators.

use parking_lot::Mutex;

use crate::acquisition::norm_pdf;
use crate::rng_util;
use crate::search::{Evaluation, SearchStrategy};
use crate::space::SearchSpace;
use crate::types::Candidate;

/// The preferred search engine: a univariate Parzen-estimator strategy.
///
/// Completed evaluations are split into a "good" group (the top `gamma`
/// fraction by objective value) and a "bad" group. For each parameter a
/// Gaussian kernel density estimate is fitted to both groups, candidate
/// values are drawn from the good density, and the draw maximizing the
/// density ratio `l(x) / g(x)` is proposed. Parameters are modeled
/// independently.
///
/// During the startup phase (fewer than `n_startup_trials` completed
/// evaluations) the strategy falls back to uniform random draws to gather
/// initial data. Only feasible evaluations ever reach the model: the
/// [`Optimizer`](crate::Optimizer) discards infeasible proposals before
/// they are evaluated.
///
/// # Examples
///
/// ```
/// use leachopt::ModelBasedSearch;
///
/// // Create with default settings
/// let strategy = ModelBasedSearch::new();
///
/// // Create with custom settings using the builder
/// let strategy = ModelBasedSearch::builder()
///     .gamma(0.15)
///     .n_startup_trials(20)
///     .n_candidates(32)
///     .seed(42)
///     .build();
/// ```
pub struct ModelBasedSearch {
    /// Fraction of evaluations considered "good".
    gamma: f64,
    /// Number of evaluations before the model kicks in.
    n_startup_trials: usize,
    /// Number of candidate draws scored per proposal.
    n_candidates: usize,
    /// Thread-safe RNG for sampling.
    rng: Mutex<fastrand::Rng>,
}

impl ModelBasedSearch {
    /// Creates a model-based strategy with default settings.
    ///
    /// Defaults:
    /// - `gamma`: 0.25 (top 25% of evaluations are "good")
    /// - `n_startup_trials`: 10 (uniform random for the first 10)
    /// - `n_candidates`: 24 (draws scored per proposal)
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a model-based strategy with a fixed seed and default
    /// settings otherwise.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::builder().seed(seed).build()
    }

    /// Creates a builder for configuring the strategy.
    #[must_use]
    pub fn builder() -> ModelBasedSearchBuilder {
        ModelBasedSearchBuilder::new()
    }

}

/// Uniform draw inside the box, used during the startup phase.
fn uniform_draw(space: &SearchSpace, rng: &mut fastrand::Rng) -> Candidate {
    space
        .bounds()
        .iter()
        .map(|(name, &(low, high))| (name.clone(), rng_util::f64_range(rng, low, high)))
        .collect()
}

impl Default for ModelBasedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for ModelBasedSearch {
    fn propose(&self, space: &SearchSpace, history: &[Evaluation]) -> Candidate {
        let mut rng = self.rng.lock();
        if history.len() < self.n_startup_trials.max(2) {
            return uniform_draw(space, &mut rng);
        }

        // Split history at the gamma quantile, best values first.
        let mut order: Vec<usize> = (0..history.len()).collect();
        order.sort_by(|&a, &b| {
            history[b]
                .value
                .partial_cmp(&history[a].value)
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let n_good = ((self.gamma * history.len() as f64).ceil() as usize)
            .clamp(1, history.len() - 1);
        let (good_idx, bad_idx) = order.split_at(n_good);

        let mut proposal = Candidate::new();
        for (name, &(low, high)) in space.bounds() {
            if (high - low).abs() < f64::EPSILON {
                proposal.insert(name.clone(), low);
                continue;
            }
            let collect = |idx: &[usize]| -> Vec<f64> {
                idx.iter()
                    .filter_map(|&i| history[i].params.get(name).copied())
                    .collect()
            };
            let good = collect(good_idx);
            let bad = collect(bad_idx);
            if good.is_empty() {
                proposal.insert(name.clone(), rng_util::f64_range(&mut rng, low, high));
                continue;
            }

            let bw_good = bandwidth(&good, low, high);
            let bw_bad = bandwidth(&bad, low, high);

            // Draw from the good density, keep the draw with the highest
            // l(x)/g(x) ratio.
            let mut best_x = good[0];
            let mut best_ratio = f64::NEG_INFINITY;
            for _ in 0..self.n_candidates.max(1) {
                let center = good[rng.usize(0..good.len())];
                let x = (center + bw_good * rng_util::standard_normal(&mut rng)).clamp(low, high);
                let l = kde_density(&good, x, bw_good);
                let g = if bad.is_empty() {
                    1.0 / (high - low)
                } else {
                    kde_density(&bad, x, bw_bad)
                };
                let ratio = l.max(f64::MIN_POSITIVE).ln() - g.max(f64::MIN_POSITIVE).ln();
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best_x = x;
                }
            }
            proposal.insert(name.clone(), best_x);
        }
        proposal
    }
}

/// Gaussian KDE bandwidth via Scott's rule, floored so degenerate sample
/// sets still produce a usable kernel.
fn bandwidth(values: &[f64], low: f64, high: f64) -> f64 {
    let span = high - low;
    if values.len() < 2 {
        return span / 4.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sigma = var.sqrt();
    let scott = sigma * n.powf(-0.2);
    if scott.is_finite() && scott > span * 1e-3 {
        scott
    } else {
        span * 1e-3
    }
}

/// Mean Gaussian kernel density of `x` over the sample `values`.
fn kde_density(values: &[f64], x: f64, bw: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().map(|v| norm_pdf((x - v) / bw) / bw).sum::<f64>() / n
}

/// A builder for configuring [`ModelBasedSearch`].
///
/// Created via [`ModelBasedSearch::builder`].
#[derive(Debug)]
pub struct ModelBasedSearchBuilder {
    gamma: f64,
    n_startup_trials: usize,
    n_candidates: usize,
    seed: Option<u64>,
}

impl ModelBasedSearchBuilder {
    fn new() -> Self {
        Self {
            gamma: 0.25,
            n_startup_trials: 10,
            n_candidates: 24,
            seed: None,
        }
    }

    /// Fraction of evaluations treated as "good". Values outside
    /// `(0.0, 1.0)` are clamped into it at build time.
    #[must_use]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Number of uniform-random startup evaluations before the model is
    /// consulted.
    #[must_use]
    pub fn n_startup_trials(mut self, n: usize) -> Self {
        self.n_startup_trials = n;
        self
    }

    /// Number of candidate draws scored per proposal.
    #[must_use]
    pub fn n_candidates(mut self, n: usize) -> Self {
        self.n_candidates = n;
        self
    }

    /// Fixed RNG seed for reproducible proposals.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the strategy.
    #[must_use]
    pub fn build(self) -> ModelBasedSearch {
        let rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        ModelBasedSearch {
            gamma: self.gamma.clamp(1e-3, 1.0 - 1e-3),
            n_startup_trials: self.n_startup_trials,
            n_candidates: self.n_candidates,
            rng: Mutex::new(rng),
        }
    }
}
