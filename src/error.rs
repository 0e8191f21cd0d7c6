//! Simulation errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors surfaced by the dispatcher and the policy engines.
///
/// No simulation runs when any of these is returned; a failure in one
/// policy never falls back to another.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The policy name does not match any engine.
    #[error("unknown scheduling policy '{0}' (expected roundRobin, srt, sjn or priority)")]
    UnknownPolicy(String),

    /// Round-Robin was requested with a quantum ≤ 0 (or none at all).
    #[error("invalid time quantum {0}: Round-Robin requires a quantum > 0")]
    InvalidQuantum(i64),

    /// No eligible processes to simulate.
    #[error("cannot simulate an empty process set")]
    EmptyProcessSet,

    /// Boundary validation rejected the input records.
    #[error("invalid process input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
