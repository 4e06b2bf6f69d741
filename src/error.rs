#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a search-space bound has `low` greater than `high`
    /// (or a non-finite endpoint).
    #[error("invalid bounds for '{name}': low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The parameter with the offending bounds.
        name: String,
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when `suggest` is called with no candidates.
    #[error("no candidates provided")]
    EmptyCandidates,

    /// Returned when an optimization is started over a search space with no
    /// parameters.
    #[error("search space has no parameters")]
    EmptySpace,

    /// Returned when an outcome references a run id that was never
    /// registered.
    #[error("run id {run_id} out of range: ledger holds {len} runs")]
    RunOutOfRange {
        /// The offending run id.
        run_id: usize,
        /// The number of runs currently in the ledger.
        len: usize,
    },

    /// Returned when an acquisition strategy string is not recognized.
    #[error("unknown acquisition strategy '{0}' (expected \"ei\" or \"ucb\")")]
    UnknownStrategy(String),

    /// Returned when an externally supplied predictor or objective fails.
    /// The source error is carried unmodified.
    #[error("upstream model failure: {0}")]
    Upstream(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error from an externally supplied predictor or objective.
    pub fn upstream(err: impl core::error::Error + Send + Sync + 'static) -> Self {
        Error::Upstream(Box::new(err))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
