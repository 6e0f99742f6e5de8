//! The boundary to the external two-phase solver. The solver receives the
//! facelet string and answers with a move string in the usual notation.

use std::{io, process::Command};

use cube_core::{InvalidMove, MoveSequence, parse_moves};
use log::{debug, info};
use thiserror::Error;

use crate::config::SolverConfig;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Failed to run solver `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Solver exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("The cube state is very likely invalid or unsolvable; solver said: {0}")]
    Rejected(String),
    #[error("Solver returned an unreadable solution: {0}")]
    InvalidSolution(#[from] InvalidMove),
}

pub trait SolverOracle {
    /// Solve the cube described by a 54-symbol facelet string.
    fn solve(&mut self, facelets: &str) -> Result<MoveSequence, SolverError>;
}

/// Runs a solver executable once per request.
pub struct ProcessSolver {
    config: SolverConfig,
}

impl ProcessSolver {
    pub fn new(config: SolverConfig) -> Self {
        ProcessSolver { config }
    }
}

impl SolverOracle for ProcessSolver {
    fn solve(&mut self, facelets: &str) -> Result<MoveSequence, SolverError> {
        info!(target: "solver", "Running {} on {facelets}", self.config.command);

        let output = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(facelets)
            .output()
            .map_err(|source| SolverError::Spawn {
                command: self.config.command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(target: "solver", "Solver output: {stdout:?}");

        if !output.status.success() {
            return Err(SolverError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        parse_solver_output(&stdout)
    }
}

/// Pull the solution out of the solver's stdout.
///
/// The last non-empty line holds the moves; a trailing move count such as
/// `(17)` is dropped, and a line starting with `Error` is a rejection.
pub fn parse_solver_output(stdout: &str) -> Result<MoveSequence, SolverError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .unwrap_or_default();

    if line.to_ascii_lowercase().starts_with("error") {
        return Err(SolverError::Rejected(line.to_owned()));
    }

    let moves = line
        .split_whitespace()
        .filter(|token| !(token.starts_with('(') && token.ends_with(')')))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(parse_moves(&moves)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_solution() {
        let moves = parse_solver_output("D2 R' D' F2 B D R2 D2 R' F2 D' F2 U' B2 L2 U2 D R2 U\n")
            .unwrap();
        assert_eq!(moves.len(), 19);
    }

    #[test]
    fn solution_with_move_count_and_preamble() {
        let moves = parse_solver_output("30.177ms\nR F2 R' U R U2 F2 (7)\n").unwrap();
        assert_eq!(moves.to_string(), "R F2 R' U R U2 F2");
    }

    #[test]
    fn already_solved_cube_gives_empty_solution() {
        assert!(parse_solver_output("\n").unwrap().is_empty());
    }

    #[test]
    fn solver_rejection() {
        assert!(matches!(
            parse_solver_output("Error: Cube definition string is invalid"),
            Err(SolverError::Rejected(_))
        ));
    }

    #[test]
    fn unreadable_solution() {
        assert!(matches!(
            parse_solver_output("R Q2"),
            Err(SolverError::InvalidSolution(_))
        ));
    }

    #[test]
    fn missing_solver_binary() {
        let mut solver = ProcessSolver::new(SolverConfig {
            command: "this-solver-does-not-exist".to_owned(),
            args: Vec::new(),
        });
        assert!(matches!(
            solver.solve("UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"),
            Err(SolverError::Spawn { .. })
        ));
    }
}
