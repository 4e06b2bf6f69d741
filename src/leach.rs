//! Default search space, feasibility constraints, and composite objective
//! for acid-leach extraction campaigns.
//!
//! These presets encode the process-engineering defaults the rest of the
//! platform starts from: a three-parameter operating window and the hard
//! constraints that keep a proposed run inside safe chemistry. Real
//! deployments swap in a surrogate model for [`objective`]; the linear
//! proxies here exist so the optimizer is exercisable end to end without
//! laboratory data.

use crate::error::Result;
use crate::space::SearchSpace;
use crate::types::Candidate;

/// Temperature bounds in degrees Celsius.
pub const TEMPERATURE_BOUNDS: (f64, f64) = (60.0, 120.0);
/// Acid concentration bounds in percent w/w.
pub const ACID_CONCENTRATION_BOUNDS: (f64, f64) = (0.0, 10.0);
/// Extraction time bounds in hours.
pub const EXTRACTION_TIME_BOUNDS: (f64, f64) = (1.0, 8.0);

/// The default leach operating window with its hard constraints.
///
/// Constraints:
/// - acid concentration must not exceed twice the extraction time;
/// - below 70 degrees, acid concentration above 5 is disallowed.
///
/// # Errors
///
/// Never fails in practice; the signature carries `Result` because bounds
/// pass through the same validation as caller-built spaces.
pub fn search_space() -> Result<SearchSpace> {
    Ok(SearchSpace::new()
        .param(
            "temperature",
            TEMPERATURE_BOUNDS.0,
            TEMPERATURE_BOUNDS.1,
        )?
        .param(
            "acid_concentration",
            ACID_CONCENTRATION_BOUNDS.0,
            ACID_CONCENTRATION_BOUNDS.1,
        )?
        .param(
            "extraction_time",
            EXTRACTION_TIME_BOUNDS.0,
            EXTRACTION_TIME_BOUNDS.1,
        )?
        .constraint(|c| c["acid_concentration"] <= 2.0 * c["extraction_time"])
        .constraint(|c| !(c["temperature"] < 70.0 && c["acid_concentration"] > 5.0)))
}

/// Combine extraction, acid consumption, and arsenic content into a single
/// score: extraction is maximized, acid and arsenic are penalized.
fn combine_metrics(extraction: f64, acid: f64, arsenic: f64) -> f64 {
    extraction - 0.5 * acid - 0.2 * arsenic
}

/// Composite objective over the leach parameters.
///
/// Derives linear proxies for extraction yield, acid consumption, and
/// arsenic co-dissolution from the operating point, then combines them via
/// [`combine_metrics`]. Expects the three parameters declared by
/// [`search_space`]; missing parameters default to zero.
#[must_use]
pub fn objective(params: &Candidate) -> f64 {
    let temperature = params.get("temperature").copied().unwrap_or_default();
    let acid_conc = params.get("acid_concentration").copied().unwrap_or_default();
    let time = params.get("extraction_time").copied().unwrap_or_default();

    let extraction = 0.8 * temperature - 0.3 * acid_conc - 2.0 * time;
    let acid = acid_conc;
    let arsenic = 0.1 * temperature + 0.4 * time;
    combine_metrics(extraction, acid, arsenic)
}
