//! CLI entry point for the jug solver.
//!
//! Usage:
//!   jug-solver solve <X> <Y> <Z> [options]
//!   jug-solver solve --file <problem.json> [options]
//!   jug-solver solve --stdin [options]
//!   jug-solver check <X> <Y> <Z>
//!
//! Options:
//!   --max-states <n>      Visited-state ceiling before giving up (default: 10000)
//!   --yield-interval <n>  States between cooperative yields (default: 1000)
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default: warn).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use jug_solver::{
    can_solve, gcd, jug_status_label, solve_detailed, ActionStep, JugProblem, JugStatus,
    ProblemError, SolveOutcome, SolverConfig, SolverResult,
};

#[derive(Parser)]
#[command(name = "jug-solver")]
#[command(about = "Shortest-path solver for the two-jug water measuring puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest sequence of moves reaching the target
    Solve {
        /// Capacity of jug X, capacity of jug Y and the target amount
        #[arg(value_names = ["X", "Y", "Z"], num_args = 3, conflicts_with_all = ["file", "stdin"])]
        values: Option<Vec<u32>>,

        /// Path to a problem JSON file: {"jugX": 4, "jugY": 3, "target": 2}
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the problem JSON from stdin
        #[arg(long)]
        stdin: bool,

        /// Maximum number of states to visit before giving up
        #[arg(long, default_value = "10000")]
        max_states: usize,

        /// Visited states between cooperative yields (0 disables)
        #[arg(long, default_value = "1000")]
        yield_interval: usize,
    },

    /// Report whether a target is reachable without searching
    Check {
        /// Capacity of jug X
        x: u32,
        /// Capacity of jug Y
        y: u32,
        /// Target amount
        z: u32,
    },
}

/// Exit status when the target was reached (or is reachable, for `check`)
const EXIT_SOLVED: u8 = 0;
/// Exit status when the target was not reached
const EXIT_UNSOLVED: u8 = 1;
/// Exit status for invalid input or unwritable output
const EXIT_INPUT_ERROR: u8 = 2;

/// Errors surfaced by the CLI before or after solving
#[derive(Debug, Error)]
enum CliError {
    #[error("expected exactly three values: X Y Z")]
    ValueCount,

    #[error("provide X Y Z, --file or --stdin")]
    MissingInput,

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    outcome: SolveOutcome,
    steps: usize,
    states_visited: usize,
    time_elapsed_ms: u64,
    path: Vec<ActionStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jug_status: Option<StatusOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusOutput {
    jug_x: JugStatus,
    jug_y: JugStatus,
}

/// Output format for a feasibility check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    solvable: bool,
    gcd: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

async fn run(command: Commands) -> Result<u8, CliError> {
    match command {
        Commands::Solve {
            values,
            file,
            stdin,
            max_states,
            yield_interval,
        } => {
            let problem = read_problem(values, file, stdin, io::stdin())?;
            let capacities = problem.capacities()?;

            let config = SolverConfig {
                max_states,
                yield_interval,
            };

            let result = solve_detailed(capacities, problem.target, &config).await;
            print_json(&format_result(&problem, &result))?;
            Ok(exit_status(result.is_solved()))
        }

        Commands::Check { x, y, z } => {
            let output = CheckOutput {
                solvable: can_solve(x, y, z),
                gcd: gcd(x, y),
            };
            print_json(&output)?;
            Ok(exit_status(output.solvable))
        }
    }
}

fn exit_status(solved: bool) -> u8 {
    if solved {
        EXIT_SOLVED
    } else {
        EXIT_UNSOLVED
    }
}

/// Build and validate the problem from positional values, a file or `input`
fn read_problem(
    values: Option<Vec<u32>>,
    file: Option<PathBuf>,
    stdin: bool,
    mut input: impl Read,
) -> Result<JugProblem, CliError> {
    if let Some(values) = values {
        let problem = match values.as_slice() {
            &[x, y, z] => JugProblem::new(x, y, z),
            _ => return Err(CliError::ValueCount),
        };
        problem.validate()?;
        return Ok(problem);
    }

    let json_content = if stdin {
        let mut buffer = String::new();
        input
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                origin: "stdin".to_string(),
                source,
            })?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path).map_err(|source| CliError::Read {
            origin: path.display().to_string(),
            source,
        })?
    } else {
        return Err(CliError::MissingInput);
    };

    Ok(JugProblem::from_json(&json_content)?)
}

fn format_result(problem: &JugProblem, result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solvable: result.is_solved(),
        outcome: result.outcome,
        steps: result.moves(),
        states_visited: result.states_visited,
        time_elapsed_ms: result.time_elapsed_ms,
        path: result.path.clone(),
        jug_status: result.final_state().map(|state| StatusOutput {
            jug_x: jug_status_label(state.x, problem.jug_x),
            jug_y: jug_status_label(state.y, problem.jug_y),
        }),
    }
}

fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jug_solver::{solve_blocking, Capacities, Jug};

    fn no_input() -> &'static [u8] {
        &[]
    }

    #[test]
    fn test_read_positional_values() {
        let problem = read_problem(Some(vec![4, 3, 2]), None, false, no_input()).unwrap();
        assert_eq!(problem, JugProblem::new(4, 3, 2));

        let err = read_problem(Some(vec![4, 3]), None, false, no_input()).unwrap_err();
        assert!(matches!(err, CliError::ValueCount));

        let err = read_problem(Some(vec![4, 0, 2]), None, false, no_input()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Problem(ProblemError::ZeroCapacity { jug: Jug::Y })
        ));
    }

    #[test]
    fn test_read_problem_from_stdin() {
        let json = br#"{"jugX": 3, "jugY": 5, "target": 4}"#;
        let problem = read_problem(None, None, true, &json[..]).unwrap();
        assert_eq!(problem, JugProblem::new(3, 5, 4));

        let err = read_problem(None, None, true, &b"not json"[..]).unwrap_err();
        assert!(matches!(err, CliError::Problem(ProblemError::Json(_))));
    }

    #[test]
    fn test_read_problem_errors() {
        let err = read_problem(None, None, false, no_input()).unwrap_err();
        assert!(matches!(err, CliError::MissingInput));

        let missing = PathBuf::from("/nonexistent/jug-problem.json");
        let err = read_problem(None, Some(missing), false, no_input()).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("jug-problem.json"));
    }

    #[test]
    fn test_format_solved_result() {
        let problem = JugProblem::new(3, 5, 4);
        let result = solve_blocking(Capacities::new(3, 5), 4, &SolverConfig::default());
        let value = serde_json::to_value(format_result(&problem, &result)).unwrap();

        assert_eq!(value["solvable"], true);
        assert_eq!(value["outcome"], "solved");
        assert_eq!(value["steps"], 6);
        assert_eq!(value["path"][0]["explanation"], "Start with both jugs empty");
        assert_eq!(value["path"][6]["jugYLevel"], 4);
        assert_eq!(value["jugStatus"]["jugX"], "Full");
        assert_eq!(value["jugStatus"]["jugY"], "Partially Full");
        assert!(value.get("statesVisited").is_some());
        assert!(value.get("timeElapsedMs").is_some());
    }

    #[test]
    fn test_format_unsolved_result() {
        let problem = JugProblem::new(4, 3, 2);
        let config = SolverConfig {
            max_states: 3,
            ..Default::default()
        };
        let result = solve_blocking(Capacities::new(4, 3), 2, &config);
        let value = serde_json::to_value(format_result(&problem, &result)).unwrap();

        assert_eq!(value["solvable"], false);
        assert_eq!(value["outcome"], "aborted");
        assert_eq!(value["steps"], 0);
        assert!(value.get("jugStatus").is_none());

        let infeasible = solve_blocking(Capacities::new(2, 6), 5, &SolverConfig::default());
        let value = serde_json::to_value(format_result(&JugProblem::new(2, 6, 5), &infeasible))
            .unwrap();
        assert_eq!(value["outcome"], "infeasible");
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(true), EXIT_SOLVED);
        assert_eq!(exit_status(false), EXIT_UNSOLVED);
        assert_ne!(EXIT_INPUT_ERROR, EXIT_UNSOLVED);
    }
}
