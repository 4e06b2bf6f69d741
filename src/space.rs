//! Parameter bounds and hard feasibility constraints for optimization.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::Candidate;

type ConstraintFn = Box<dyn Fn(&Candidate) -> bool + Send + Sync>;

/// A static search space: named closed intervals plus hard constraints.
///
/// Bounds are validated at insertion — `low` must not exceed `high` and
/// both endpoints must be finite. Constraints are pure predicates evaluated
/// independently per candidate; a candidate is feasible only if every
/// registered constraint accepts it.
///
/// # Examples
///
/// ```
/// use leachopt::SearchSpace;
///
/// let space = SearchSpace::new()
///     .param("temperature", 60.0, 120.0)
///     .unwrap()
///     .param("acid_concentration", 0.0, 10.0)
///     .unwrap()
///     .constraint(|c| c["acid_concentration"] <= c["temperature"] / 10.0);
///
/// assert_eq!(space.len(), 2);
/// ```
#[derive(Default)]
pub struct SearchSpace {
    bounds: BTreeMap<String, (f64, f64)>,
    constraints: Vec<ConstraintFn>,
}

impl core::fmt::Debug for SearchSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SearchSpace")
            .field("bounds", &self.bounds)
            .field("n_constraints", &self.constraints.len())
            .finish()
    }
}

impl SearchSpace {
    /// Create an empty search space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter with the closed interval `[low, high]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBounds`] when `low > high` or either endpoint is not
    /// finite.
    pub fn param(mut self, name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        let name = name.into();
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(Error::InvalidBounds { name, low, high });
        }
        self.bounds.insert(name, (low, high));
        Ok(self)
    }

    /// Register a hard feasibility constraint.
    ///
    /// Constraints must be pure and stateless: they are evaluated once per
    /// candidate with no cross-candidate memory.
    #[must_use]
    pub fn constraint(mut self, pred: impl Fn(&Candidate) -> bool + Send + Sync + 'static) -> Self {
        self.constraints.push(Box::new(pred));
        self
    }

    /// Whether a parameter set satisfies every registered constraint.
    #[must_use]
    pub fn feasible(&self, params: &Candidate) -> bool {
        self.constraints.iter().all(|pred| pred(params))
    }

    /// Bounds per parameter, in name order.
    #[must_use]
    pub fn bounds(&self) -> &BTreeMap<String, (f64, f64)> {
        &self.bounds
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether the space declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether a parameter set assigns every declared parameter a value
    /// inside its bounds.
    #[must_use]
    pub fn contains(&self, params: &Candidate) -> bool {
        self.bounds.iter().all(|(name, &(low, high))| {
            params
                .get(name)
                .is_some_and(|&v| (low..=high).contains(&v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = SearchSpace::new().param("x", 5.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { name, .. } if name == "x"));
        assert!(SearchSpace::new().param("x", f64::NAN, 1.0).is_err());
        assert!(SearchSpace::new().param("x", 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_degenerate_interval_allowed() {
        let space = SearchSpace::new().param("x", 2.0, 2.0).unwrap();
        assert_eq!(space.bounds()["x"], (2.0, 2.0));
    }

    #[test]
    fn test_feasibility_requires_all_constraints() {
        let space = SearchSpace::new()
            .param("a", 0.0, 10.0)
            .unwrap()
            .constraint(|c| c["a"] > 1.0)
            .constraint(|c| c["a"] < 9.0);

        let mid = Candidate::from([("a".to_owned(), 5.0)]);
        let low = Candidate::from([("a".to_owned(), 0.5)]);
        let high = Candidate::from([("a".to_owned(), 9.5)]);
        assert!(space.feasible(&mid));
        assert!(!space.feasible(&low));
        assert!(!space.feasible(&high));
    }

    #[test]
    fn test_unconstrained_space_is_always_feasible() {
        let space = SearchSpace::new().param("a", 0.0, 1.0).unwrap();
        assert!(space.feasible(&Candidate::from([("a".to_owned(), 0.3)])));
    }

    #[test]
    fn test_contains_checks_bounds() {
        let space = SearchSpace::new().param("a", 0.0, 1.0).unwrap();
        assert!(space.contains(&Candidate::from([("a".to_owned(), 0.5)])));
        assert!(!space.contains(&Candidate::from([("a".to_owned(), 1.5)])));
        assert!(!space.contains(&Candidate::new()));
    }
}
