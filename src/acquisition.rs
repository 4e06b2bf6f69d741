//! Acquisition functions turning a probabilistic benefit estimate into a
//! scalar "value of running this experiment next".
//!
//! Two strategies are provided: closed-form Gaussian Expected Improvement
//! and the Upper Confidence Bound. Both consume a `(mean, std)` belief about
//! the benefit of a candidate; EI additionally needs the best outcome
//! observed so far as its reference point.

use core::str::FromStr;

use statrs::function::erf::erf;

use crate::error::Error;

/// Which acquisition function a [`Scheduler`](crate::Scheduler) uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcquisitionStrategy {
    /// Closed-form Gaussian Expected Improvement (the default).
    #[default]
    ExpectedImprovement,
    /// Upper Confidence Bound: `mean + kappa * std`.
    UpperConfidenceBound,
}

impl FromStr for AcquisitionStrategy {
    type Err = Error;

    /// Parse the configuration strings `"ei"` and `"ucb"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ei" => Ok(Self::ExpectedImprovement),
            "ucb" => Ok(Self::UpperConfidenceBound),
            other => Err(Error::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Standard normal probability density function.
#[inline]
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution function, via the error function:
/// `Phi(x) = 0.5 * (1 + erf(x / sqrt(2)))`.
#[inline]
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / core::f64::consts::SQRT_2))
}

/// Expected Improvement of a candidate over `best_observed`, under a
/// Gaussian belief `N(mean, std^2)` about its benefit.
///
/// `xi` inflates the improvement threshold, biasing toward exploration.
/// With `std <= 0` the belief is treated as noiseless and the improvement is
/// the deterministic excess over the incumbent plus margin, clamped at zero.
#[must_use]
pub fn expected_improvement(mean: f64, std: f64, best_observed: f64, xi: f64) -> f64 {
    let improvement = mean - best_observed - xi;
    if std <= 0.0 {
        return improvement.max(0.0);
    }
    let z = improvement / std;
    improvement * norm_cdf(z) + std * norm_pdf(z)
}

/// Upper Confidence Bound: `mean + kappa * std`.
///
/// Larger `kappa` favors higher-variance (less-explored) candidates.
#[inline]
#[must_use]
pub fn ucb(mean: f64, std: f64, kappa: f64) -> f64 {
    mean + kappa * std
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_pdf_at_zero() {
        // 1 / sqrt(2 pi)
        assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        for &x in &[0.1, 0.7, 1.5, 3.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_known_values() {
        // Phi(1.96) ~ 0.975, Phi(-1.6449) ~ 0.05
        assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-9);
        assert!((norm_cdf(-1.644_853_626_951) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_ei_matches_closed_form() {
        let (mean, std, best, xi) = (2.0, 0.5, 1.2, 0.01);
        let improvement = mean - best - xi;
        let z = improvement / std;
        let expected = improvement * norm_cdf(z) + std * norm_pdf(z);
        assert_eq!(expected_improvement(mean, std, best, xi), expected);
    }

    #[test]
    fn test_ei_degenerate_std() {
        assert_eq!(expected_improvement(3.0, 0.0, 1.0, 0.01), 1.99);
        assert_eq!(expected_improvement(1.0, 0.0, 3.0, 0.01), 0.0);
        // Negative std is treated the same as zero.
        assert_eq!(expected_improvement(3.0, -1.0, 1.0, 0.01), 1.99);
    }

    #[test]
    fn test_ei_nonnegative_and_increasing_in_mean() {
        let mut last = -1.0;
        for i in 0..20 {
            let mean = -2.0 + f64::from(i) * 0.5;
            let v = expected_improvement(mean, 1.0, 0.0, 0.01);
            assert!(v >= 0.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_ucb_monotone_in_mean_and_std() {
        assert!(ucb(1.0, 1.0, 2.0) < ucb(2.0, 1.0, 2.0));
        assert!(ucb(1.0, 1.0, 2.0) < ucb(1.0, 2.0, 2.0));
        assert_eq!(ucb(1.5, 0.25, 2.0), 2.0);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "ei".parse::<AcquisitionStrategy>().unwrap(),
            AcquisitionStrategy::ExpectedImprovement
        );
        assert_eq!(
            "ucb".parse::<AcquisitionStrategy>().unwrap(),
            AcquisitionStrategy::UpperConfidenceBound
        );
        assert!("thompson".parse::<AcquisitionStrategy>().is_err());
    }
}
