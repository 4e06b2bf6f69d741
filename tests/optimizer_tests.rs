//! End-to-end optimization runs over the leach operating window.

use leachopt::prelude::*;
use leachopt::{leach, search::Evaluation};

fn baseline_point() -> Candidate {
    Candidate::from([
        ("temperature".to_owned(), 90.0),
        ("acid_concentration".to_owned(), 2.0),
        ("extraction_time".to_owned(), 3.0),
    ])
}

// =============================================================================
// Test: fallback random search on the leach scenario
// =============================================================================

#[test]
fn test_random_search_beats_feasible_baseline() {
    let space = leach::search_space().unwrap();
    let baseline = leach::objective(&baseline_point());
    assert!(space.feasible(&baseline_point()));

    let optimizer = Optimizer::builder(200)
        .strategy(RandomSearch::with_seed(42))
        .build();
    let result = optimizer
        .optimize(|c: &Candidate| Ok::<_, Error>(leach::objective(c)), &space)
        .unwrap();

    let best = result.best_params.expect("feasible region is large");
    assert!(space.feasible(&best));
    assert!(space.contains(&best));
    assert!(
        result.best_value >= baseline,
        "random search best {} below baseline {baseline}",
        result.best_value
    );
}

// =============================================================================
// Test: model-based search on the leach scenario
// =============================================================================

#[test]
fn test_model_based_search_beats_feasible_baseline() {
    let space = leach::search_space().unwrap();
    let baseline = leach::objective(&baseline_point());

    let optimizer = Optimizer::builder(200).seed(42).build();
    let result = optimizer
        .optimize(|c: &Candidate| Ok::<_, Error>(leach::objective(c)), &space)
        .unwrap();

    let best = result.best_params.expect("feasible region is large");
    assert!(space.feasible(&best));
    assert!(result.best_value >= baseline);
}

#[test]
fn test_model_based_finds_near_optimal_quadratic() {
    // Maximize -(x - 3)^2 over [-10, 10]; optimum 0 at x = 3.
    let space = SearchSpace::new().param("x", -10.0, 10.0).unwrap();
    let optimizer = Optimizer::builder(150)
        .strategy(
            ModelBasedSearch::builder()
                .seed(42)
                .n_startup_trials(10)
                .build(),
        )
        .build();

    let result = optimizer
        .optimize(
            |c: &Candidate| Ok::<_, Error>(-(c["x"] - 3.0).powi(2)),
            &space,
        )
        .unwrap();

    assert!(
        result.best_value > -1.0,
        "model-based search should get close to the optimum: best {}",
        result.best_value
    );
}

// =============================================================================
// Test: strategy-agnostic semantics
// =============================================================================

#[test]
fn test_both_strategies_handle_infeasible_space() {
    let space = leach::search_space()
        .unwrap()
        .constraint(|_| false);

    for optimizer in [
        Optimizer::builder(50)
            .strategy(RandomSearch::with_seed(5))
            .build(),
        Optimizer::builder(50)
            .strategy(ModelBasedSearch::with_seed(5))
            .build(),
    ] {
        let result = optimizer
            .optimize(|c: &Candidate| Ok::<_, Error>(leach::objective(c)), &space)
            .unwrap();
        assert!(!result.found());
        assert_eq!(result.best_value, f64::NEG_INFINITY);
    }
}

#[test]
fn test_constant_objective_returns_point_in_bounds() {
    let space = leach::search_space().unwrap();
    let optimizer = Optimizer::builder(40)
        .strategy(RandomSearch::with_seed(11))
        .build();
    let result = optimizer
        .optimize(|_c: &Candidate| Ok::<_, Error>(0.0), &space)
        .unwrap();
    assert_eq!(result.best_value, 0.0);
    assert!(space.contains(&result.best_params.unwrap()));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let space = leach::search_space().unwrap();
    let run = |seed: u64| {
        Optimizer::builder(100)
            .seed(seed)
            .build()
            .optimize(|c: &Candidate| Ok::<_, Error>(leach::objective(c)), &space)
            .unwrap()
    };
    assert_eq!(run(123), run(123));
}

// =============================================================================
// Test: strategies only ever see feasible history
// =============================================================================

#[test]
fn test_history_passed_to_strategy_is_feasible_only() {
    struct RecordingStrategy {
        inner: RandomSearch,
    }

    impl SearchStrategy for RecordingStrategy {
        fn propose(&self, space: &SearchSpace, history: &[Evaluation]) -> Candidate {
            for eval in history {
                assert!(space.feasible(&eval.params), "infeasible evaluation leaked");
            }
            self.inner.propose(space, history)
        }
    }

    let space = leach::search_space().unwrap();
    let optimizer = Optimizer::builder(100)
        .strategy(RecordingStrategy {
            inner: RandomSearch::with_seed(21),
        })
        .build();
    optimizer
        .optimize(|c: &Candidate| Ok::<_, Error>(leach::objective(c)), &space)
        .unwrap();
}
