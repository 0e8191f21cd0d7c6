//! Simulation configuration and requests.
//!
//! A presentation layer hands over a `SimulationRequest` (usually as
//! JSON); the request validates its records, drops those with no work,
//! and dispatches to the configured policy.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::Process;
use crate::scheduler::{Dispatcher, Policy, Simulation};
use crate::validation::{eligible_processes, validate_processes};

/// Quantum used by [`SimulationConfig::default`].
pub const DEFAULT_QUANTUM: i64 = 2;

/// Which policy to run and with what quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// Time quantum; required by Round-Robin, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationConfig {
    /// Creates a configuration without a quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Policy::RoundRobin).with_quantum(DEFAULT_QUANTUM)
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Process records as entered by the caller.
    pub processes: Vec<Process>,
    /// Policy selection.
    #[serde(flatten)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, config: SimulationConfig) -> Self {
        Self { processes, config }
    }

    /// Validates, filters and runs the request.
    ///
    /// # Errors
    /// - `InvalidInput` if any record fails validation.
    /// - `InvalidQuantum` for Round-Robin without a positive quantum.
    /// - `EmptyProcessSet` if no record has a positive burst.
    pub fn run(&self) -> Result<Simulation> {
        validate_processes(&self.processes).map_err(SimulationError::InvalidInput)?;
        let dispatcher = Dispatcher::from_config(&self.config)?;

        let eligible = eligible_processes(&self.processes);
        if eligible.len() < self.processes.len() {
            tracing::debug!(
                dropped = self.processes.len() - eligible.len(),
                "dropped processes with no burst time"
            );
        }

        dispatcher.simulate(&eligible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.policy, Policy::RoundRobin);
        assert_eq!(config.quantum, Some(DEFAULT_QUANTUM));
    }

    #[test]
    fn test_config_from_json() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"policy":"srt"}"#).unwrap();
        assert_eq!(config, SimulationConfig::new(Policy::ShortestRemainingTime));

        let config: SimulationConfig =
            serde_json::from_str(r#"{"policy":"roundRobin","quantum":4}"#).unwrap();
        assert_eq!(config.quantum, Some(4));

        assert!(serde_json::from_str::<SimulationConfig>(r#"{"policy":"fifo"}"#).is_err());
    }

    #[test]
    fn test_request_run_from_json() {
        let json = r#"{
            "policy": "roundRobin",
            "quantum": 2,
            "processes": [
                {"id": 0, "arrivalTime": 0, "burstTime": 5},
                {"id": 1, "arrivalTime": 1, "burstTime": 3},
                {"id": 2, "arrivalTime": 1, "burstTime": 0}
            ]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        let sim = request.run().unwrap();

        // P2 has no burst and is dropped.
        assert_eq!(sim.processes.len(), 2);
        assert_eq!(
            sim.timeline.to_string(),
            "P0[0-2] P1[2-4] P0[4-6] P1[6-7] P0[7-8]"
        );
    }

    #[test]
    fn test_request_all_zero_burst_is_empty() {
        let request = SimulationRequest::new(
            vec![Process::new(0, 0, 0)],
            SimulationConfig::new(Policy::Priority),
        );
        assert_eq!(request.run().unwrap_err(), SimulationError::EmptyProcessSet);
    }

    #[test]
    fn test_request_rejects_invalid_records() {
        let request = SimulationRequest::new(
            vec![Process::new(0, -2, 3)],
            SimulationConfig::new(Policy::ShortestJobNext),
        );
        match request.run().unwrap_err() {
            SimulationError::InvalidInput(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_request_quantum_checked_before_simulation() {
        let request = SimulationRequest::new(
            vec![Process::new(0, 0, 3)],
            SimulationConfig::new(Policy::RoundRobin).with_quantum(0),
        );
        assert_eq!(request.run().unwrap_err(), SimulationError::InvalidQuantum(0));
    }
}
