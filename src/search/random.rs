//! Constrained random search: the always-available baseline strategy.

use parking_lot::Mutex;

use crate::rng_util;
use crate::search::{Evaluation, SearchStrategy};
use crate::space::SearchSpace;
use crate::types::Candidate;

/// Samples each bound independently and uniformly, ignoring history.
///
/// This is the fallback search engine: no surrogate model, no memory, just
/// uniform draws inside the box. Feasibility filtering happens in the
/// [`Optimizer`](crate::Optimizer), so infeasible draws burn trial budget
/// exactly as the fallback semantics require.
///
/// # Examples
///
/// ```
/// use leachopt::RandomSearch;
///
/// // Create with a default RNG
/// let strategy = RandomSearch::new();
///
/// // Create with a fixed seed for reproducibility
/// let strategy = RandomSearch::with_seed(42);
/// ```
pub struct RandomSearch {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSearch {
    /// Creates a new random search strategy with a default random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new random search strategy with a fixed seed.
    ///
    /// Using the same seed produces the same sequence of proposals.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomSearch {
    fn propose(&self, space: &SearchSpace, _history: &[Evaluation]) -> Candidate {
        let mut rng = self.rng.lock();
        space
            .bounds()
            .iter()
            .map(|(name, &(low, high))| (name.clone(), rng_util::f64_range(&mut rng, low, high)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> SearchSpace {
        SearchSpace::new()
            .param("temperature", 60.0, 120.0)
            .unwrap()
            .param("acid_concentration", 0.0, 10.0)
            .unwrap()
    }

    #[test]
    fn test_proposals_stay_in_bounds() {
        let strategy = RandomSearch::with_seed(42);
        let space = space();
        for _ in 0..200 {
            let params = strategy.propose(&space, &[]);
            assert_eq!(params.len(), 2);
            assert!(space.contains(&params));
        }
    }

    #[test]
    fn test_reproducibility() {
        let a = RandomSearch::with_seed(42);
        let b = RandomSearch::with_seed(42);
        let space = space();
        for _ in 0..10 {
            assert_eq!(a.propose(&space, &[]), b.propose(&space, &[]));
        }
    }

    #[test]
    fn test_history_is_ignored() {
        let a = RandomSearch::with_seed(7);
        let b = RandomSearch::with_seed(7);
        let space = space();
        let history = vec![Evaluation {
            params: a.propose(&space, &[]),
            value: 1.0,
        }];
        let _ = b.propose(&space, &[]);
        assert_eq!(a.propose(&space, &history), b.propose(&space, &[]));
    }
}
