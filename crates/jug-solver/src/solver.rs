//! Breadth-first search for the shortest sequence of jug moves.
//!
//! Every visited state is stored once in an arena together with the index
//! of the state it was reached from and the action taken. The path is
//! rebuilt by walking back from the goal, so frontier entries never own
//! or copy a path.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::executor::successors;
use crate::feasibility::is_feasible;
use crate::jugs::{Action, ActionStep, Capacities, JugState};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Abort once more than this many states have been visited
    pub max_states: usize,
    /// The async search yields to the executor each time the visited count
    /// crosses a multiple of this. Zero disables yielding.
    pub yield_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_states: 10_000,
            yield_interval: 1_000,
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveOutcome {
    /// A state holding the target was reached
    Solved,
    /// Rejected by the gcd rule before searching
    Infeasible,
    /// Visited-state ceiling exceeded
    Aborted,
    /// Frontier ran dry without reaching the target
    Exhausted,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SolveOutcome,
    /// Shortest path to the target; empty unless solved
    pub path: Vec<ActionStep>,
    pub states_visited: usize,
    pub time_elapsed_ms: u64,
}

impl SolverResult {
    pub fn is_solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }

    /// Number of moves, not counting the start step
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn final_state(&self) -> Option<JugState> {
        self.path.last().map(ActionStep::state)
    }
}

/// An arena entry: a visited state and how it was first reached
#[derive(Debug, Clone, Copy)]
struct Node {
    state: JugState,
    parent: Option<usize>,
    action: Option<Action>,
}

enum Progress {
    Continue,
    Found(usize),
    Aborted,
    Exhausted,
}

/// State of one search invocation. Dropped when the search ends.
struct Search {
    capacities: Capacities,
    target: u32,
    max_states: usize,
    nodes: Vec<Node>,
    visited: HashSet<JugState>,
    frontier: VecDeque<usize>,
}

impl Search {
    fn new(capacities: Capacities, target: u32, config: &SolverConfig) -> Self {
        let mut visited = HashSet::new();
        visited.insert(JugState::EMPTY);
        Self {
            capacities,
            target,
            max_states: config.max_states,
            nodes: vec![Node {
                state: JugState::EMPTY,
                parent: None,
                action: None,
            }],
            visited,
            frontier: VecDeque::from([0]),
        }
    }

    fn visited(&self) -> usize {
        self.visited.len()
    }

    /// Expand the oldest frontier entry
    fn step(&mut self) -> Progress {
        let Some(index) = self.frontier.pop_front() else {
            return Progress::Exhausted;
        };
        let state = self.nodes[index].state;
        if state.matches_target(self.target) {
            return Progress::Found(index);
        }

        for (action, next) in successors(state, &self.capacities) {
            if self.visited.insert(next) {
                self.nodes.push(Node {
                    state: next,
                    parent: Some(index),
                    action: Some(action),
                });
                self.frontier.push_back(self.nodes.len() - 1);
            }
        }

        if self.visited.len() > self.max_states {
            return Progress::Aborted;
        }
        Progress::Continue
    }

    /// Walk parent links back from `goal` and emit steps from the start
    fn path_to(&self, goal: usize) -> Vec<ActionStep> {
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            path.push(match node.action {
                Some(action) => ActionStep::from_action(action, node.state, &self.capacities),
                None => ActionStep::start(),
            });
            cursor = node.parent;
        }
        path.reverse();
        path
    }

    fn finish(self, progress: Progress, start_time: Instant) -> SolverResult {
        let states_visited = self.visited();
        let (outcome, path) = match progress {
            Progress::Found(goal) => (SolveOutcome::Solved, self.path_to(goal)),
            Progress::Aborted => {
                warn!(
                    visited = states_visited,
                    max_states = self.max_states,
                    "maximum states explored, terminating search"
                );
                (SolveOutcome::Aborted, Vec::new())
            }
            Progress::Exhausted | Progress::Continue => (SolveOutcome::Exhausted, Vec::new()),
        };
        debug!(
            ?outcome,
            states_visited,
            moves = path.len().saturating_sub(1),
            "search finished"
        );
        SolverResult {
            outcome,
            path,
            states_visited,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

/// Check feasibility and set up a search, or return the infeasible result
fn begin(
    capacities: Capacities,
    target: u32,
    config: &SolverConfig,
    start_time: Instant,
) -> Result<Search, SolverResult> {
    debug!(
        jug_x = capacities.x,
        jug_y = capacities.y,
        target,
        "starting search"
    );
    if !is_feasible(&capacities, target) {
        debug!(target, "target rejected by feasibility check");
        return Err(SolverResult {
            outcome: SolveOutcome::Infeasible,
            path: Vec::new(),
            states_visited: 0,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        });
    }
    Ok(Search::new(capacities, target, config))
}

/// Run the search to completion, yielding to the async executor at
/// `yield_interval` boundaries.
pub async fn solve_detailed(
    capacities: Capacities,
    target: u32,
    config: &SolverConfig,
) -> SolverResult {
    let start_time = Instant::now();
    let mut search = match begin(capacities, target, config, start_time) {
        Ok(search) => search,
        Err(result) => return result,
    };

    let interval = config.yield_interval;
    let mut next_yield = interval;
    loop {
        match search.step() {
            Progress::Continue => {}
            done => return search.finish(done, start_time),
        }
        if interval > 0 && search.visited() >= next_yield {
            next_yield = (search.visited() / interval + 1) * interval;
            tokio::task::yield_now().await;
        }
    }
}

/// Run the search to completion on the current thread without yielding.
pub fn solve_blocking(capacities: Capacities, target: u32, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();
    let mut search = match begin(capacities, target, config, start_time) {
        Ok(search) => search,
        Err(result) => return result,
    };

    loop {
        match search.step() {
            Progress::Continue => {}
            done => return search.finish(done, start_time),
        }
    }
}

/// Shortest action path from both jugs empty to a jug holding `z`.
///
/// Returns an empty path when `z` is infeasible or the search gave up;
/// use [`solve_detailed`] to tell those apart.
pub async fn solve(x: u32, y: u32, z: u32) -> Vec<ActionStep> {
    solve_detailed(Capacities::new(x, y), z, &SolverConfig::default())
        .await
        .path
}
