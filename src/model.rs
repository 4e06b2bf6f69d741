//! Contracts for the externally supplied models a [`Scheduler`] composes.
//!
//! The scheduler never trains or owns a model: the caller hands in a
//! [`BenefitModel`] (a `(mean, std)` belief about the benefit of running a
//! candidate), a [`SafetyModel`] (the probability the candidate is safe to
//! run), and optionally a [`RetrainHook`] fired after every Nth completed
//! run. All three are ordinary traits with blanket impls for closures, so
//! most callers never implement them by hand.
//!
//! [`Scheduler`]: crate::Scheduler

use crate::error::Result;
use crate::ledger::Run;
use crate::types::Candidate;

/// Predicts the benefit of running a candidate experiment as a Gaussian
/// `(mean, std)` belief.
///
/// Failures propagate unmodified out of
/// [`Scheduler::score`](crate::Scheduler::score) and
/// [`Scheduler::suggest`](crate::Scheduler::suggest); wrap foreign errors
/// with [`Error::upstream`](crate::Error::upstream).
pub trait BenefitModel {
    /// Return the `(mean, std)` benefit estimate for `features`.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying model.
    fn predict(&self, features: &Candidate) -> Result<(f64, f64)>;
}

impl<F> BenefitModel for F
where
    F: Fn(&Candidate) -> Result<(f64, f64)>,
{
    fn predict(&self, features: &Candidate) -> Result<(f64, f64)> {
        self(features)
    }
}

/// Predicts the probability that a candidate experiment is safe to run.
///
/// The returned value is expected to lie in `[0, 1]`; the scheduler uses it
/// as a multiplicative discount on the acquisition score and does not clamp
/// it.
pub trait SafetyModel {
    /// Return the safety probability for `features`.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying model.
    fn predict(&self, features: &Candidate) -> Result<f64>;
}

impl<F> SafetyModel for F
where
    F: Fn(&Candidate) -> Result<f64>,
{
    fn predict(&self, features: &Candidate) -> Result<f64> {
        self(features)
    }
}

/// Hook invoked synchronously with the full run ledger when the retrain
/// trigger fires.
///
/// The hook is infallible from the scheduler's point of view: containment
/// of retraining failures is the surrounding system's responsibility, so a
/// hook that can fail should catch and log internally.
pub trait RetrainHook {
    /// Called with every run registered so far, in insertion order.
    fn retrain(&mut self, history: &[Run]);
}

impl<F> RetrainHook for F
where
    F: FnMut(&[Run]),
{
    fn retrain(&mut self, history: &[Run]) {
        self(history);
    }
}

/// The default retrain hook: does nothing.
///
/// Used when no hook is injected, so the retrain trigger arithmetic still
/// runs but has no effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRetrain;

impl RetrainHook for NoopRetrain {
    fn retrain(&mut self, _history: &[Run]) {}
}
