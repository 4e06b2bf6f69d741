//! Core type aliases shared across the crate.

use std::collections::BTreeMap;

/// A candidate experiment or parameter set: feature name to numeric value.
///
/// Candidates are ephemeral — produced by the caller or a search strategy,
/// never stored beyond the run ledger. `BTreeMap` keeps iteration order
/// deterministic, which matters for reproducible sampling and stable logs.
pub type Candidate = BTreeMap<String, f64>;

/// Identifier of a registered run: a dense 0-based index into the ledger.
pub type RunId = usize;
