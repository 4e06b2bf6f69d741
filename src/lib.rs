#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Active-learning experiment scheduling and constrained black-box
//! optimization for mineral-processing campaigns. The crate has two cores: a
//! [`Scheduler`] that ranks candidate experiments by a safety-gated
//! acquisition score (Expected Improvement or Upper Confidence Bound) while
//! keeping an append-only ledger of runs and outcomes, and an [`Optimizer`]
//! that maximizes a black-box objective over a bounded [`SearchSpace`] with
//! hard feasibility constraints.
//!
//! # Getting Started
//!
//! Rank candidates with a scheduler backed by your own benefit and safety
//! models (any closure returning `Result` works):
//!
//! ```
//! use leachopt::prelude::*;
//!
//! let mut scheduler = Scheduler::builder(
//!     |c: &Candidate| Ok::<_, Error>((c["acid_concentration"] * 3.0, 1.0)),
//!     |_c: &Candidate| Ok::<_, Error>(0.9),
//! )
//! .build();
//!
//! let candidates = vec![
//!     Candidate::from([("acid_concentration".to_string(), 1.0)]),
//!     Candidate::from([("acid_concentration".to_string(), 4.0)]),
//! ];
//! let pick = scheduler.suggest(candidates).unwrap();
//! assert_eq!(pick["acid_concentration"], 4.0);
//!
//! let run_id = scheduler.register_run(pick);
//! scheduler.register_outcome(run_id, 11.4).unwrap();
//! assert_eq!(scheduler.best_observed(), 11.4);
//! ```
//!
//! Maximize an objective subject to feasibility constraints:
//!
//! ```
//! use leachopt::prelude::*;
//!
//! let space = SearchSpace::new()
//!     .param("temperature", 60.0, 120.0)
//!     .unwrap()
//!     .constraint(|c| c["temperature"] >= 70.0);
//!
//! let optimizer = Optimizer::builder(100).seed(7).build();
//! let result = optimizer
//!     .optimize(
//!         |c: &Candidate| Ok::<_, Error>(-(c["temperature"] - 90.0).powi(2)),
//!         &space,
//!     )
//!     .unwrap();
//! assert!(result.best_params.is_some());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Scheduler`] | Score and pick the next experiment, record runs and outcomes, trigger retraining. |
//! | [`RunLedger`] | Append-only record of proposed experiments and their outcomes. |
//! | [`SearchSpace`] | Parameter bounds plus hard feasibility constraints. |
//! | [`Optimizer`] | Drive a constrained maximization over a search space. |
//! | [`SearchStrategy`](search::SearchStrategy) | Strategy for proposing the next point ([`ModelBasedSearch`], [`RandomSearch`]). |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Run`], [`StudyResult`], [`AcquisitionStrategy`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key scheduling and optimization points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod acquisition;
mod error;
pub mod leach;
mod ledger;
pub mod model;
mod objective;
mod rng_util;
mod scheduler;
pub mod search;
mod space;
mod types;

pub use acquisition::AcquisitionStrategy;
pub use error::{Error, Result};
pub use ledger::{Run, RunLedger};
pub use model::{BenefitModel, NoopRetrain, RetrainHook, SafetyModel};
pub use objective::Objective;
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use search::{ModelBasedSearch, Optimizer, OptimizerBuilder, RandomSearch, StudyResult};
pub use space::SearchSpace;
pub use types::{Candidate, RunId};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use leachopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::acquisition::AcquisitionStrategy;
    pub use crate::error::{Error, Result};
    pub use crate::ledger::{Run, RunLedger};
    pub use crate::model::{BenefitModel, NoopRetrain, RetrainHook, SafetyModel};
    pub use crate::objective::Objective;
    pub use crate::scheduler::{Scheduler, SchedulerBuilder};
    pub use crate::search::{
        ModelBasedSearch, Optimizer, OptimizerBuilder, RandomSearch, SearchStrategy, StudyResult,
    };
    pub use crate::space::SearchSpace;
    pub use crate::types::{Candidate, RunId};
}
