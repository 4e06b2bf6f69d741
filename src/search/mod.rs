//! Search strategies and the optimization driver.
//!
//! The [`Optimizer`] repeatedly asks a [`SearchStrategy`] for a candidate
//! inside the [`SearchSpace`](crate::SearchSpace) bounds, discards
//! infeasible proposals without evaluating them, scores the rest through
//! the caller's [`Objective`](crate::Objective), and tracks the best
//! feasible result. Two strategies ship with the crate:
//!
//! - [`ModelBasedSearch`] (the default) — sequential model-based search
//!   using per-parameter Parzen estimators over the evaluation history.
//! - [`RandomSearch`] — independent uniform draws within each bound, the
//!   always-available baseline.
//!
//! Both expose identical externally observable semantics: maximize the
//! objective subject to feasibility over the trial budget.

pub mod parzen;
pub mod random;

pub use parzen::ModelBasedSearch;
pub use random::RandomSearch;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::space::SearchSpace;
use crate::types::Candidate;

/// A feasible, completed evaluation: the strategy's view of history.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// The evaluated parameter set.
    pub params: Candidate,
    /// The objective value it scored.
    pub value: f64,
}

/// Outcome of one [`Optimizer::optimize`] call.
///
/// `best_params` is `None` — and `best_value` negative infinity — when no
/// feasible candidate was evaluated within the trial budget. Callers must
/// handle that case; it is a result, not an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudyResult {
    /// The best feasible parameter set found, if any.
    pub best_params: Option<Candidate>,
    /// The objective value at `best_params`, or negative infinity.
    pub best_value: f64,
}

impl StudyResult {
    /// Whether any feasible candidate was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.best_params.is_some()
    }
}

/// Strategy for proposing the next point to evaluate.
///
/// Proposals must respect the space's bounds; feasibility is the
/// [`Optimizer`]'s concern — infeasible proposals are discarded before
/// evaluation and never enter `history`.
pub trait SearchStrategy: Send + Sync {
    /// Propose a candidate within `space`'s bounds.
    ///
    /// `history` holds every feasible evaluation completed so far in this
    /// `optimize` call, in evaluation order.
    fn propose(&self, space: &SearchSpace, history: &[Evaluation]) -> Candidate;
}

/// Maximizes an [`Objective`](crate::Objective) over a
/// [`SearchSpace`](crate::SearchSpace), subject to its feasibility
/// constraints.
///
/// Each `optimize` call is independent: the optimizer carries no state
/// across calls beyond its strategy's RNG position.
///
/// # Examples
///
/// ```
/// use leachopt::prelude::*;
///
/// let space = SearchSpace::new()
///     .param("x", 0.0, 1.0)
///     .unwrap()
///     .constraint(|c| c["x"] >= 0.25);
///
/// let optimizer = Optimizer::builder(80)
///     .strategy(RandomSearch::with_seed(42))
///     .build();
/// let result = optimizer
///     .optimize(|c: &Candidate| Ok::<_, Error>(c["x"]), &space)
///     .unwrap();
///
/// let best = result.best_params.expect("feasible points exist");
/// assert!(best["x"] >= 0.25);
/// ```
pub struct Optimizer {
    strategy: Box<dyn SearchStrategy>,
    n_trials: usize,
}

impl core::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Optimizer")
            .field("n_trials", &self.n_trials)
            .finish_non_exhaustive()
    }
}

impl Optimizer {
    /// Create an optimizer with the default [`ModelBasedSearch`] strategy.
    #[must_use]
    pub fn new(n_trials: usize) -> Self {
        Self::builder(n_trials).build()
    }

    /// Return an [`OptimizerBuilder`] for fluent configuration.
    #[must_use]
    pub fn builder(n_trials: usize) -> OptimizerBuilder {
        OptimizerBuilder::new(n_trials)
    }

    /// Run the search: up to `n_trials` proposals, infeasible ones skipped
    /// (they consume budget but are never evaluated), best feasible result
    /// tracked with a strict comparison.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySpace`] when `space` declares no parameters; objective
    /// failures propagate unmodified and abort the search.
    pub fn optimize(&self, objective: impl Objective, space: &SearchSpace) -> Result<StudyResult> {
        if space.is_empty() {
            return Err(Error::EmptySpace);
        }

        let mut history: Vec<Evaluation> = Vec::new();
        let mut best_params: Option<Candidate> = None;
        let mut best_value = f64::NEG_INFINITY;

        for _trial in 0..self.n_trials {
            let params = self.strategy.propose(space, &history);
            if !space.feasible(&params) {
                trace_debug!(trial = _trial, "infeasible candidate discarded");
                continue;
            }
            let value = objective.evaluate(&params)?;
            if value > best_value {
                best_value = value;
                best_params = Some(params.clone());
                trace_info!(trial = _trial, value, "new best value found");
            }
            history.push(Evaluation { params, value });
        }

        Ok(StudyResult {
            best_params,
            best_value,
        })
    }
}

/// A builder for constructing [`Optimizer`] instances.
///
/// Created via [`Optimizer::builder`].
///
/// # Defaults
///
/// - Strategy: [`ModelBasedSearch`] (seeded from the OS, or from
///   [`seed`](OptimizerBuilder::seed) when given)
pub struct OptimizerBuilder {
    n_trials: usize,
    strategy: Option<Box<dyn SearchStrategy>>,
    seed: Option<u64>,
}

impl OptimizerBuilder {
    fn new(n_trials: usize) -> Self {
        Self {
            n_trials,
            strategy: None,
            seed: None,
        }
    }

    /// Use a custom search strategy instead of the default
    /// [`ModelBasedSearch`].
    #[must_use]
    pub fn strategy(mut self, strategy: impl SearchStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Seed for the default strategy's RNG. Ignored when a custom strategy
    /// is injected via [`strategy`](Self::strategy).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the optimizer.
    #[must_use]
    pub fn build(self) -> Optimizer {
        let strategy = self.strategy.unwrap_or_else(|| match self.seed {
            Some(seed) => Box::new(ModelBasedSearch::with_seed(seed)),
            None => Box::new(ModelBasedSearch::new()),
        });
        Optimizer {
            strategy,
            n_trials: self.n_trials,
        }
    }
}
