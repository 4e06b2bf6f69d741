//! Numerical properties of the acquisition functions.

use leachopt::acquisition::{expected_improvement, norm_cdf, norm_pdf, ucb};
use statrs::function::erf::erf;

// =============================================================================
// Test: normal helpers agree with their closed forms
// =============================================================================

#[test]
fn test_norm_pdf_matches_closed_form() {
    for i in -40..=40 {
        let x = f64::from(i) * 0.25;
        let expected = (1.0 / (2.0 * std::f64::consts::PI).sqrt()) * (-0.5 * x * x).exp();
        assert!(
            (norm_pdf(x) - expected).abs() < 1e-15,
            "pdf mismatch at x = {x}"
        );
    }
}

#[test]
fn test_norm_cdf_matches_erf_form() {
    for i in -40..=40 {
        let x = f64::from(i) * 0.25;
        let expected = 0.5 * (1.0 + erf(x / 2.0_f64.sqrt()));
        assert!(
            (norm_cdf(x) - expected).abs() < 1e-15,
            "cdf mismatch at x = {x}"
        );
    }
}

// =============================================================================
// Test: EI equals the closed-form Gaussian integral
// =============================================================================

#[test]
fn test_ei_closed_form_grid() {
    let means = [-2.0, -0.5, 0.0, 0.3, 1.0, 4.0];
    let stds = [0.1, 0.5, 1.0, 2.5];
    let bests = [-1.0, 0.0, 2.0];
    let xis = [0.0, 0.01, 0.2];

    for &mean in &means {
        for &std in &stds {
            for &best in &bests {
                for &xi in &xis {
                    let improvement = mean - best - xi;
                    let z = improvement / std;
                    let expected = improvement * norm_cdf(z) + std * norm_pdf(z);
                    let got = expected_improvement(mean, std, best, xi);
                    assert!(
                        (got - expected).abs() < 1e-12,
                        "EI mismatch at mean={mean} std={std} best={best} xi={xi}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_ei_zero_std_is_clamped_excess() {
    assert!((expected_improvement(5.0, 0.0, 3.0, 0.5) - 1.5).abs() < 1e-15);
    assert_eq!(expected_improvement(2.0, 0.0, 3.0, 0.5), 0.0);
}

#[test]
fn test_ei_xi_discourages_marginal_candidates() {
    // A larger exploration margin lowers the score of a candidate barely
    // above the incumbent.
    let tight = expected_improvement(1.05, 0.2, 1.0, 0.0);
    let loose = expected_improvement(1.05, 0.2, 1.0, 0.5);
    assert!(loose < tight);
}

// =============================================================================
// Test: UCB monotonicity
// =============================================================================

#[test]
fn test_ucb_monotone_grid() {
    let kappa = 2.0;
    let mut prev_by_mean = f64::NEG_INFINITY;
    for i in 0..50 {
        let mean = f64::from(i) * 0.1;
        let v = ucb(mean, 1.0, kappa);
        assert!(v > prev_by_mean);
        prev_by_mean = v;
    }
    let mut prev_by_std = f64::NEG_INFINITY;
    for i in 0..50 {
        let std = f64::from(i) * 0.1;
        let v = ucb(0.0, std, kappa);
        assert!(v >= prev_by_std);
        prev_by_std = v;
    }
}
