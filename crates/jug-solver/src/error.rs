//! Errors for caller-side validation and path checking.
//!
//! The search itself never fails; these cover malformed problems and
//! action paths that do not follow the transition rules.

use thiserror::Error;

use crate::jugs::{Jug, JugState};

/// Errors raised while reading or validating a problem description.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("jug {jug} has zero capacity; both capacities must be at least 1")]
    ZeroCapacity { jug: Jug },

    #[error("invalid problem JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an action path is not a valid solution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("path does not begin with the start step at (0, 0)")]
    MissingStart,

    #[error("step {index} leaves capacity bounds at {state}")]
    OutOfBounds { index: usize, state: JugState },

    #[error("step {index} ({explanation:?}) is not a legal move from {from} to {to}")]
    IllegalTransition {
        index: usize,
        from: JugState,
        to: JugState,
        explanation: String,
    },

    #[error("final state {state} does not hold target {target}")]
    TargetNotReached { state: JugState, target: u32 },
}
