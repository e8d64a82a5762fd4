//! Jug model types shared by the solver, the executor and the CLI.
//!
//! Step and problem types serialize to the camelCase JSON shape consumed
//! by the UI layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;

/// Explanation attached to the synthetic first step of every path.
pub const START_EXPLANATION: &str = "Start with both jugs empty";

/// One of the two jugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jug {
    X,
    Y,
}

impl Jug {
    pub fn other(self) -> Jug {
        match self {
            Jug::X => Jug::Y,
            Jug::Y => Jug::X,
        }
    }
}

impl fmt::Display for Jug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jug::X => f.write_str("X"),
            Jug::Y => f.write_str("Y"),
        }
    }
}

/// Capacities of the two jugs.
///
/// [`Capacities::new`] accepts any values, including zero; callers that
/// take untrusted input should go through [`Capacities::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacities {
    pub x: u32,
    pub y: u32,
}

impl Capacities {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Build capacities, rejecting a jug that cannot hold anything.
    pub fn try_new(x: u32, y: u32) -> Result<Self, ProblemError> {
        if x == 0 {
            return Err(ProblemError::ZeroCapacity { jug: Jug::X });
        }
        if y == 0 {
            return Err(ProblemError::ZeroCapacity { jug: Jug::Y });
        }
        Ok(Self { x, y })
    }

    pub fn get(&self, jug: Jug) -> u32 {
        match jug {
            Jug::X => self.x,
            Jug::Y => self.y,
        }
    }

    /// The larger of the two capacities
    pub fn max(&self) -> u32 {
        self.x.max(self.y)
    }

    /// Whether a state lies within these capacities
    pub fn contains(&self, state: JugState) -> bool {
        state.x <= self.x && state.y <= self.y
    }
}

/// Fill levels of both jugs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JugState {
    pub x: u32,
    pub y: u32,
}

impl JugState {
    /// Both jugs empty
    pub const EMPTY: JugState = JugState { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn level(&self, jug: Jug) -> u32 {
        match jug {
            Jug::X => self.x,
            Jug::Y => self.y,
        }
    }

    /// Return a copy with one jug set to `level`
    pub fn with_level(self, jug: Jug, level: u32) -> Self {
        match jug {
            Jug::X => Self { x: level, ..self },
            Jug::Y => Self { y: level, ..self },
        }
    }

    /// Either jug holds exactly `target`
    pub fn matches_target(&self, target: u32) -> bool {
        self.x == target || self.y == target
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single move between jug states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fill(Jug),
    Empty(Jug),
    /// Pour from the given jug into the other one
    Transfer(Jug),
}

impl Action {
    /// Every action, in the order successors are generated.
    pub const ALL: [Action; 6] = [
        Action::Fill(Jug::X),
        Action::Fill(Jug::Y),
        Action::Empty(Jug::X),
        Action::Empty(Jug::Y),
        Action::Transfer(Jug::X),
        Action::Transfer(Jug::Y),
    ];

    /// Human-readable label for a step taken with this action
    pub fn explanation(self, capacities: &Capacities) -> String {
        match self {
            Action::Fill(jug) => format!("Fill jug {} ({}L)", jug, capacities.get(jug)),
            Action::Empty(jug) => format!("Empty jug {}", jug),
            Action::Transfer(from) => {
                format!("Transfer from jug {} to jug {}", from, from.other())
            }
        }
    }
}

/// One entry of a solution path: the levels after a move plus its cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStep {
    pub jug_x_level: u32,
    pub jug_y_level: u32,
    pub explanation: String,
}

impl ActionStep {
    /// The synthetic first step at (0, 0)
    pub fn start() -> Self {
        Self {
            jug_x_level: 0,
            jug_y_level: 0,
            explanation: START_EXPLANATION.to_string(),
        }
    }

    /// Step recording that `action` produced `state`
    pub fn from_action(action: Action, state: JugState, capacities: &Capacities) -> Self {
        Self {
            jug_x_level: state.x,
            jug_y_level: state.y,
            explanation: action.explanation(capacities),
        }
    }

    pub fn state(&self) -> JugState {
        JugState::new(self.jug_x_level, self.jug_y_level)
    }

    pub fn is_start(&self) -> bool {
        self.state() == JugState::EMPTY && self.explanation == START_EXPLANATION
    }
}

/// Display status of a single jug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JugStatus {
    Empty,
    Full,
    #[serde(rename = "Partially Full")]
    PartiallyFull,
}

impl JugStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JugStatus::Empty => "Empty",
            JugStatus::Full => "Full",
            JugStatus::PartiallyFull => "Partially Full",
        }
    }
}

impl fmt::Display for JugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a jug by its fill level. Empty wins over Full for a zero-capacity jug.
pub fn jug_status_label(current_level: u32, capacity: u32) -> JugStatus {
    if current_level == 0 {
        JugStatus::Empty
    } else if current_level == capacity {
        JugStatus::Full
    } else {
        JugStatus::PartiallyFull
    }
}

/// A problem as submitted by a caller, e.g. `{"jugX": 4, "jugY": 3, "target": 2}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugProblem {
    #[serde(rename = "jugX")]
    pub jug_x: u32,
    #[serde(rename = "jugY")]
    pub jug_y: u32,
    pub target: u32,
}

impl JugProblem {
    pub fn new(jug_x: u32, jug_y: u32, target: u32) -> Self {
        Self {
            jug_x,
            jug_y,
            target,
        }
    }

    /// Parse a problem from its JSON form and validate it
    pub fn from_json(json: &str) -> Result<Self, ProblemError> {
        let problem: JugProblem = serde_json::from_str(json)?;
        problem.validate()?;
        Ok(problem)
    }

    pub fn validate(&self) -> Result<(), ProblemError> {
        self.capacities().map(|_| ())
    }

    pub fn capacities(&self) -> Result<Capacities, ProblemError> {
        Capacities::try_new(self.jug_x, self.jug_y)
    }
}
