//! End-to-end scenarios through the public API.

use jug_solver::{
    can_solve, jug_status_label, solve, solve_detailed, verify_path, Capacities, JugProblem,
    JugStatus, SolveOutcome, SolverConfig,
};

#[tokio::test]
async fn four_and_three_measure_two() {
    let path = solve(4, 3, 2).await;

    assert!(!path.is_empty());
    assert!(path.len() <= 7);
    let first = &path[0];
    assert_eq!((first.jug_x_level, first.jug_y_level), (0, 0));
    assert!(first.explanation.starts_with("Start"));

    let last = path.last().unwrap();
    assert!(last.jug_x_level == 2 || last.jug_y_level == 2);
    assert_eq!(verify_path(&Capacities::new(4, 3), 2, &path), Ok(()));
}

#[tokio::test]
async fn three_and_five_measure_four() {
    let path = solve(3, 5, 4).await;
    assert!(!path.is_empty());
    assert_eq!(path.last().unwrap().jug_y_level, 4);
}

#[tokio::test]
async fn two_and_six_cannot_measure_five() {
    assert!(!can_solve(2, 6, 5));
    assert!(solve(2, 6, 5).await.is_empty());
}

#[test]
fn target_larger_than_both_jugs() {
    assert!(!can_solve(6, 4, 8));
}

#[test]
fn status_labels() {
    assert_eq!(jug_status_label(0, 5).to_string(), "Empty");
    assert_eq!(jug_status_label(5, 5).to_string(), "Full");
    assert_eq!(jug_status_label(2, 5).to_string(), "Partially Full");
}

#[tokio::test]
async fn large_capacities_hit_the_ceiling() {
    // gcd(997, 1009) = 1, but reaching 500 needs far more than 50 states
    let config = SolverConfig {
        max_states: 50,
        yield_interval: 10,
    };
    let result = solve_detailed(Capacities::new(997, 1009), 500, &config).await;

    assert_eq!(result.outcome, SolveOutcome::Aborted);
    assert!(result.path.is_empty());
    assert!(result.states_visited > 50);
}

#[tokio::test]
async fn concurrent_searches_are_independent() {
    let handles: Vec<_> = [(4, 3, 2), (3, 5, 4), (2, 6, 5), (7, 11, 6)]
        .into_iter()
        .map(|(x, y, z)| tokio::spawn(async move { (x, y, z, solve(x, y, z).await) }))
        .collect();

    for handle in handles {
        let (x, y, z, path) = handle.await.unwrap();
        if can_solve(x, y, z) {
            assert_eq!(verify_path(&Capacities::new(x, y), z, &path), Ok(()));
        } else {
            assert!(path.is_empty());
        }
    }
}

#[tokio::test]
async fn problem_json_round_trip_to_solution() {
    let problem = JugProblem::from_json(r#"{"jugX": 3, "jugY": 5, "target": 4}"#).unwrap();
    let caps = problem.capacities().unwrap();
    let result = solve_detailed(caps, problem.target, &SolverConfig::default()).await;

    assert!(result.is_solved());
    let end = result.final_state().unwrap();
    assert_eq!(jug_status_label(end.x, caps.x), JugStatus::Full);
    assert_eq!(jug_status_label(end.y, caps.y), JugStatus::PartiallyFull);
}
