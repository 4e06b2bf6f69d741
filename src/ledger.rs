//! Append-only ledger of proposed experiments and their outcomes.

use crate::error::{Error, Result};
use crate::types::{Candidate, RunId};

/// A single registered experiment.
///
/// `id` is a dense 0-based index into the ledger: ids are assigned in
/// insertion order with no gaps and no reuse, and runs are never deleted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Dense 0-based index of this run in the ledger.
    pub id: RunId,
    /// The features the experiment was proposed with.
    pub features: Candidate,
    /// The recorded outcome, if any. Set by
    /// [`RunLedger::record_outcome`]; overwriting is permitted.
    pub outcome: Option<f64>,
}

/// Ordered, append-only record of runs, owning the best-observed
/// high-water mark.
///
/// The best-observed value starts at negative infinity and only ever
/// increases; it is the reference point every Expected Improvement score is
/// computed against.
#[derive(Debug)]
pub struct RunLedger {
    runs: Vec<Run>,
    best_observed: f64,
}

impl Default for RunLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            best_observed: f64::NEG_INFINITY,
        }
    }

    /// Append a run with no outcome yet and return its id.
    pub fn register(&mut self, features: Candidate) -> RunId {
        let id = self.runs.len();
        self.runs.push(Run {
            id,
            features,
            outcome: None,
        });
        id
    }

    /// Record (or overwrite) the outcome of an existing run, raising the
    /// best-observed mark if `outcome` exceeds it.
    ///
    /// Validation happens before any mutation: on error the ledger and the
    /// best-observed mark are untouched.
    ///
    /// # Errors
    ///
    /// [`Error::RunOutOfRange`] if `run_id` was never registered.
    pub fn record_outcome(&mut self, run_id: RunId, outcome: f64) -> Result<()> {
        let len = self.runs.len();
        let run = self
            .runs
            .get_mut(run_id)
            .ok_or(Error::RunOutOfRange { run_id, len })?;
        run.outcome = Some(outcome);
        if outcome > self.best_observed {
            self.best_observed = outcome;
        }
        Ok(())
    }

    /// The highest outcome recorded so far, or negative infinity if none.
    #[must_use]
    pub fn best_observed(&self) -> f64 {
        self.best_observed
    }

    /// Number of runs with a recorded outcome.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_some()).count()
    }

    /// Number of registered runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether no runs have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// All runs in insertion order.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Look up a run by id.
    #[must_use]
    pub fn get(&self, run_id: RunId) -> Option<&Run> {
        self.runs.get(run_id)
    }
}
