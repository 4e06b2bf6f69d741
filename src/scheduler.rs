//! Safety-gated active-learning scheduler.

use crate::acquisition::{self, AcquisitionStrategy};
use crate::error::{Error, Result};
use crate::ledger::{Run, RunLedger};
use crate::model::{BenefitModel, NoopRetrain, RetrainHook, SafetyModel};
use crate::types::{Candidate, RunId};

/// Selects the next experiment to run, balancing expected benefit,
/// uncertainty, and safety.
///
/// The scheduler composes three externally supplied pieces: a
/// [`BenefitModel`] giving a Gaussian `(mean, std)` belief about a
/// candidate's benefit, a [`SafetyModel`] giving the probability the
/// candidate is safe, and an optional [`RetrainHook`] fired after every
/// `retrain_every`-th completed run. Acquisition value is computed per the
/// configured [`AcquisitionStrategy`] and multiplied by the safety
/// probability — an unsafe candidate scores near zero no matter how
/// promising its benefit estimate, a soft constraint rather than a hard
/// filter.
///
/// The scheduler exclusively owns its [`RunLedger`] and the best-observed
/// mark. It holds no locks: callers sharing one instance across threads
/// must serialize access themselves.
///
/// # Examples
///
/// ```
/// use leachopt::prelude::*;
///
/// let scheduler = Scheduler::builder(
///     |c: &Candidate| Ok::<_, Error>((c["temperature"] / 10.0, 0.5)),
///     |c: &Candidate| Ok::<_, Error>(if c["temperature"] > 110.0 { 0.1 } else { 0.95 }),
/// )
/// .strategy(AcquisitionStrategy::UpperConfidenceBound)
/// .kappa(1.5)
/// .build();
///
/// let hot = Candidate::from([("temperature".to_string(), 115.0)]);
/// let warm = Candidate::from([("temperature".to_string(), 95.0)]);
/// // The unsafe hot candidate is heavily discounted.
/// assert!(scheduler.score(&warm).unwrap() > scheduler.score(&hot).unwrap());
/// ```
pub struct Scheduler<B, S> {
    benefit: B,
    safety: S,
    strategy: AcquisitionStrategy,
    kappa: f64,
    xi: f64,
    retrain_every: usize,
    retrain_hook: Box<dyn RetrainHook>,
    ledger: RunLedger,
}

impl<B, S> core::fmt::Debug for Scheduler<B, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scheduler")
            .field("strategy", &self.strategy)
            .field("kappa", &self.kappa)
            .field("xi", &self.xi)
            .field("retrain_every", &self.retrain_every)
            .field("n_runs", &self.ledger.len())
            .field("best_observed", &self.ledger.best_observed())
            .finish_non_exhaustive()
    }
}

impl<B, S> Scheduler<B, S>
where
    B: BenefitModel,
    S: SafetyModel,
{
    /// Create a scheduler with default settings: Expected Improvement,
    /// `kappa = 2.0`, `xi = 0.01`, retraining disabled.
    pub fn new(benefit: B, safety: S) -> Self {
        Self::builder(benefit, safety).build()
    }

    /// Return a [`SchedulerBuilder`] for fluent configuration.
    pub fn builder(benefit: B, safety: S) -> SchedulerBuilder<B, S> {
        SchedulerBuilder::new(benefit, safety)
    }

    fn base_score(&self, mean: f64, std: f64) -> f64 {
        match self.strategy {
            AcquisitionStrategy::ExpectedImprovement => {
                acquisition::expected_improvement(mean, std, self.ledger.best_observed(), self.xi)
            }
            AcquisitionStrategy::UpperConfidenceBound => acquisition::ucb(mean, std, self.kappa),
        }
    }

    /// Acquisition score of a candidate: `p_safe * base`, where `base` is
    /// EI or UCB per the configured strategy.
    ///
    /// # Errors
    ///
    /// Predictor failures propagate unmodified.
    pub fn score(&self, features: &Candidate) -> Result<f64> {
        let (mean, std) = self.benefit.predict(features)?;
        let p_safe = self.safety.predict(features)?;
        Ok(p_safe * self.base_score(mean, std))
    }

    /// Score every candidate and return the arg-max.
    ///
    /// Comparison is strict greater-than, so ties resolve to the first
    /// candidate in input order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCandidates`] if the iterator yields nothing; predictor
    /// failures propagate unmodified.
    pub fn suggest<I>(&self, candidates: I) -> Result<Candidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut best: Option<(Candidate, f64)> = None;
        for candidate in candidates {
            let score = self.score(&candidate)?;
            match &best {
                Some((_, best_score)) if score <= *best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
        let (candidate, _score) = best.ok_or(Error::EmptyCandidates)?;
        trace_debug!(score = _score, "candidate selected");
        Ok(candidate)
    }

    /// Append a run to the ledger and return its id (dense, 0-based).
    pub fn register_run(&mut self, features: Candidate) -> RunId {
        let run_id = self.ledger.register(features);
        trace_debug!(run_id, "run registered");
        run_id
    }

    /// Record the outcome of a run, update the best-observed mark, and fire
    /// the retrain hook when the completed-run count reaches an exact
    /// non-zero multiple of `retrain_every`.
    ///
    /// Re-registering an outcome for the same run is permitted and
    /// re-counts toward the trigger.
    ///
    /// # Errors
    ///
    /// [`Error::RunOutOfRange`] if `run_id` was never registered; the
    /// ledger is left untouched in that case.
    pub fn register_outcome(&mut self, run_id: RunId, outcome: f64) -> Result<()> {
        self.ledger.record_outcome(run_id, outcome)?;
        trace_debug!(
            run_id,
            outcome,
            best_observed = self.ledger.best_observed(),
            "outcome recorded"
        );

        let completed = self.ledger.completed();
        if self.retrain_every > 0 && completed > 0 && completed % self.retrain_every == 0 {
            trace_info!(completed, "retrain trigger fired");
            self.retrain_hook.retrain(self.ledger.runs());
        }
        Ok(())
    }

    /// The highest outcome recorded so far, or negative infinity if none.
    #[must_use]
    pub fn best_observed(&self) -> f64 {
        self.ledger.best_observed()
    }

    /// The run ledger, in insertion order.
    #[must_use]
    pub fn ledger(&self) -> &RunLedger {
        &self.ledger
    }

    /// Look up a registered run by id.
    #[must_use]
    pub fn run(&self, run_id: RunId) -> Option<&Run> {
        self.ledger.get(run_id)
    }
}

/// A builder for constructing [`Scheduler`] instances with a fluent API.
///
/// Created via [`Scheduler::builder`].
///
/// # Defaults
///
/// - Strategy: [`AcquisitionStrategy::ExpectedImprovement`]
/// - `kappa`: 2.0 (UCB exploration weight)
/// - `xi`: 0.01 (EI exploration margin)
/// - `retrain_every`: 0 (disabled)
/// - Retrain hook: [`NoopRetrain`]
pub struct SchedulerBuilder<B, S> {
    benefit: B,
    safety: S,
    strategy: AcquisitionStrategy,
    kappa: f64,
    xi: f64,
    retrain_every: usize,
    retrain_hook: Option<Box<dyn RetrainHook>>,
}

impl<B, S> SchedulerBuilder<B, S>
where
    B: BenefitModel,
    S: SafetyModel,
{
    fn new(benefit: B, safety: S) -> Self {
        Self {
            benefit,
            safety,
            strategy: AcquisitionStrategy::default(),
            kappa: 2.0,
            xi: 0.01,
            retrain_every: 0,
            retrain_hook: None,
        }
    }

    /// Set the acquisition strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: AcquisitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the UCB exploration weight.
    #[must_use]
    pub fn kappa(mut self, kappa: f64) -> Self {
        self.kappa = kappa;
        self
    }

    /// Set the EI exploration margin.
    #[must_use]
    pub fn xi(mut self, xi: f64) -> Self {
        self.xi = xi;
        self
    }

    /// Fire the retrain hook after every `n`-th completed run. `0` (the
    /// default) disables the trigger entirely.
    #[must_use]
    pub fn retrain_every(mut self, n: usize) -> Self {
        self.retrain_every = n;
        self
    }

    /// Inject the hook invoked when the retrain trigger fires. Defaults to
    /// [`NoopRetrain`].
    #[must_use]
    pub fn retrain_hook(mut self, hook: impl RetrainHook + 'static) -> Self {
        self.retrain_hook = Some(Box::new(hook));
        self
    }

    /// Build the scheduler.
    #[must_use]
    pub fn build(self) -> Scheduler<B, S> {
        Scheduler {
            benefit: self.benefit,
            safety: self.safety,
            strategy: self.strategy,
            kappa: self.kappa,
            xi: self.xi,
            retrain_every: self.retrain_every,
            retrain_hook: self.retrain_hook.unwrap_or_else(|| Box::new(NoopRetrain)),
            ledger: RunLedger::new(),
        }
    }
}
