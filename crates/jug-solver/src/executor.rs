//! Transition rules between jug states and replay-based path verification.

use smallvec::SmallVec;

use crate::error::PathError;
use crate::jugs::{Action, ActionStep, Capacities, JugState};

/// Successor list for one state; at most one entry per action.
pub type Successors = SmallVec<[(Action, JugState); 6]>;

impl Action {
    /// Apply this action to `state`.
    ///
    /// Returns `None` when the precondition fails: filling a full jug,
    /// emptying an empty one, or pouring from an empty jug or into a full one.
    pub fn apply(self, state: JugState, capacities: &Capacities) -> Option<JugState> {
        match self {
            Action::Fill(jug) => {
                let capacity = capacities.get(jug);
                (state.level(jug) < capacity).then(|| state.with_level(jug, capacity))
            }
            Action::Empty(jug) => (state.level(jug) > 0).then(|| state.with_level(jug, 0)),
            Action::Transfer(from) => {
                let to = from.other();
                let source = state.level(from);
                let dest = state.level(to);
                let room = capacities.get(to);
                if source == 0 || dest >= room {
                    return None;
                }
                let amount = source.min(room - dest);
                Some(
                    state
                        .with_level(from, source - amount)
                        .with_level(to, dest + amount),
                )
            }
        }
    }
}

/// All valid moves out of `state`, in [`Action::ALL`] order
pub fn successors(state: JugState, capacities: &Capacities) -> Successors {
    Action::ALL
        .iter()
        .filter_map(|&action| action.apply(state, capacities).map(|next| (action, next)))
        .collect()
}

/// Check that `steps` is a legal solution path for `target`.
///
/// The path must open with the start step, every later step must be the
/// result of the action its explanation names, and the last state must
/// hold the target in one of the jugs.
pub fn verify_path(
    capacities: &Capacities,
    target: u32,
    steps: &[ActionStep],
) -> Result<(), PathError> {
    let (first, last) = match (steps.first(), steps.last()) {
        (Some(first), Some(last)) => (first, last.state()),
        _ => return Err(PathError::Empty),
    };
    if !first.is_start() {
        return Err(PathError::MissingStart);
    }

    for (index, pair) in steps.windows(2).enumerate() {
        let from = pair[0].state();
        let to = pair[1].state();
        if !capacities.contains(to) {
            return Err(PathError::OutOfBounds {
                index: index + 1,
                state: to,
            });
        }

        let legal = Action::ALL.iter().any(|&action| {
            action.apply(from, capacities) == Some(to)
                && action.explanation(capacities) == pair[1].explanation
        });
        if !legal {
            return Err(PathError::IllegalTransition {
                index: index + 1,
                from,
                to,
                explanation: pair[1].explanation.clone(),
            });
        }
    }

    if !last.matches_target(target) {
        return Err(PathError::TargetNotReached {
            state: last,
            target,
        });
    }
    Ok(())
}

/// Simple verification: is `steps` a valid solution?
pub fn verify_solution(capacities: &Capacities, target: u32, steps: &[ActionStep]) -> bool {
    verify_path(capacities, target, steps).is_ok()
}
