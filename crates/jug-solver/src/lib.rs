//! Solver library for the two-jug water measuring puzzle.
//!
//! Given jug capacities X and Y and a target Z, this crate decides whether
//! Z can be measured and finds the shortest sequence of fill, empty and
//! transfer moves that leaves Z litres in one of the jugs.

pub mod error;
pub mod executor;
pub mod feasibility;
pub mod jugs;
pub mod solver;

// Re-export main types
pub use error::{PathError, ProblemError};
pub use executor::{successors, verify_path, verify_solution};
pub use feasibility::{can_solve, gcd, is_feasible};
pub use jugs::{
    jug_status_label, Action, ActionStep, Capacities, Jug, JugProblem, JugState, JugStatus,
};
pub use solver::{solve, solve_blocking, solve_detailed, SolveOutcome, SolverConfig, SolverResult};
