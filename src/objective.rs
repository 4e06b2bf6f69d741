//! The [`Objective`] trait defines what gets optimized.
//!
//! For simple cases a closure works directly:
//!
//! ```
//! use leachopt::prelude::*;
//!
//! let space = SearchSpace::new().param("x", -10.0, 10.0).unwrap();
//! let optimizer = Optimizer::builder(50).seed(42).build();
//! let result = optimizer
//!     .optimize(
//!         |c: &Candidate| Ok::<_, Error>(-(c["x"] - 3.0).powi(2)),
//!         &space,
//!     )
//!     .unwrap();
//! assert!(result.best_value <= 0.0);
//! ```

use crate::error::Result;
use crate::types::Candidate;

/// A scalar scoring function over a parameter set, treated as a black box
/// by the [`Optimizer`](crate::Optimizer).
///
/// The optimizer maximizes this value. Implementations are expected to be
/// pure — the optimizer may call them in any order and never retries.
pub trait Objective {
    /// Evaluate the objective at `params`.
    ///
    /// # Errors
    ///
    /// Failures propagate unmodified out of
    /// [`Optimizer::optimize`](crate::Optimizer::optimize); wrap foreign
    /// errors with [`Error::upstream`](crate::Error::upstream).
    fn evaluate(&self, params: &Candidate) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&Candidate) -> Result<f64>,
{
    fn evaluate(&self, params: &Candidate) -> Result<f64> {
        self(params)
    }
}
