/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Draw from the standard normal distribution via Box-Muller.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    // u1 must be strictly positive for the log.
    let mut u1 = rng.f64();
    while u1 <= f64::EPSILON {
        u1 = rng.f64();
    }
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (core::f64::consts::TAU * u2).cos()
}
