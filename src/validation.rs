//! Input validation for simulation runs.
//!
//! Checks process records at the boundary, before they reach a policy
//! engine. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Negative priorities
//!
//! Records with a non-positive burst are not errors: they are dropped by
//! [`eligible_processes`], since they have no work to schedule.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a negative priority.
    NegativePriority,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates process records.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("{p} arrives at {}", p.arrival_time),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("{p} has negative priority {}", p.priority),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fresh copies of the records that have work to do (`burst_time > 0`).
pub fn eligible_processes(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .filter(|p| p.burst_time > 0)
        .map(Process::fresh_copy)
        .collect()
}
