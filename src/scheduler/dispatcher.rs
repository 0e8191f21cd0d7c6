//! Policy selection and simulation runs.
//!
//! Maps a policy identifier to one of the four engines, deep-copies the
//! caller's processes, runs the engine and derives the KPIs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::SimulationKpi;
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Pid, Process, Timeline};
use crate::policies::{
    PriorityPolicy, RoundRobin, SchedulingPolicy, ShortestJobNext, ShortestRemainingTime,
};

/// The scheduling policies the dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Round-Robin with a time quantum.
    #[serde(rename = "roundRobin")]
    RoundRobin,
    /// Preemptive shortest remaining time.
    #[serde(rename = "srt")]
    ShortestRemainingTime,
    /// Non-preemptive shortest job next.
    #[serde(rename = "sjn")]
    ShortestJobNext,
    /// Non-preemptive priority.
    #[serde(rename = "priority")]
    Priority,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 4] = [
        Policy::RoundRobin,
        Policy::ShortestRemainingTime,
        Policy::ShortestJobNext,
        Policy::Priority,
    ];

    /// Identifier accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Policy::RoundRobin => "roundRobin",
            Policy::ShortestRemainingTime => "srt",
            Policy::ShortestJobNext => "sjn",
            Policy::Priority => "priority",
        }
    }

    /// Whether the policy consumes a quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Builds the engine. Only Round-Robin looks at `quantum`.
    fn engine(&self, quantum: Option<i64>) -> Result<Arc<dyn SchedulingPolicy>> {
        Ok(match self {
            Policy::RoundRobin => {
                let quantum = quantum.ok_or(SimulationError::InvalidQuantum(0))?;
                Arc::new(RoundRobin::new(quantum)?)
            }
            Policy::ShortestRemainingTime => Arc::new(ShortestRemainingTime),
            Policy::ShortestJobNext => Arc::new(ShortestJobNext),
            Policy::Priority => Arc::new(PriorityPolicy),
        })
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SimulationError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs a configured policy over process sets.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::Dispatcher;
///
/// let processes = vec![
///     Process::new(0, 0, 4).with_priority(2),
///     Process::new(1, 0, 3).with_priority(1),
/// ];
/// let dispatcher = Dispatcher::from_name("priority", None).unwrap();
/// let sim = dispatcher.simulate(&processes).unwrap();
/// assert_eq!(sim.timeline.to_string(), "P1[0-3] P0[3-7]");
/// assert!((sim.average_waiting() - 1.5).abs() < 1e-10);
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    policy: Policy,
    engine: Arc<dyn SchedulingPolicy>,
}

impl Dispatcher {
    /// Creates a dispatcher for a policy.
    ///
    /// Fails with `InvalidQuantum` when Round-Robin gets no quantum or a
    /// quantum ≤ 0. Other policies ignore `quantum`.
    pub fn new(policy: Policy, quantum: Option<i64>) -> Result<Self> {
        let engine = policy.engine(quantum)?;
        Ok(Self { policy, engine })
    }

    /// Creates a dispatcher from a policy identifier.
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Self> {
        Self::new(name.parse()?, quantum)
    }

    /// Creates a dispatcher from a configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(config.policy, config.quantum)
    }

    /// The selected policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Simulates the processes under the selected policy.
    ///
    /// The input is never mutated; the run works on fresh copies and
    /// returns them, in input order, with metrics populated.
    pub fn simulate(&self, processes: &[Process]) -> Result<Simulation> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }

        let mut processes: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();
        tracing::debug!(
            policy = self.engine.name(),
            processes = processes.len(),
            "simulation started"
        );

        let timeline = self.engine.run(&mut processes);
        let kpi = SimulationKpi::calculate(&processes, &timeline)?;

        tracing::debug!(
            policy = self.engine.name(),
            makespan = kpi.makespan,
            avg_turnaround = kpi.avg_turnaround,
            avg_waiting = kpi.avg_waiting,
            "simulation finished"
        );

        Ok(Simulation {
            policy: self.policy,
            processes,
            timeline,
            kpi,
        })
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("policy", &self.policy)
            .field("engine", &self.engine)
            .finish()
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Processes with completion metrics, in input order.
    pub processes: Vec<Process>,
    /// Execution slices.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub kpi: SimulationKpi,
}

impl Simulation {
    /// Finds a simulated process by id.
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == pid)
    }

    /// Mean turnaround time over all processes.
    pub fn average_turnaround(&self) -> f64 {
        self.kpi.avg_turnaround
    }

    /// Mean waiting time over all processes.
    pub fn average_waiting(&self) -> f64 {
        self.kpi.avg_waiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 0, 7),
            Process::new(1, 2, 4),
            Process::new(2, 4, 1),
        ]
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("roundRobin".parse::<Policy>(), Ok(Policy::RoundRobin));
        assert_eq!("srt".parse::<Policy>(), Ok(Policy::ShortestRemainingTime));
        assert_eq!("sjn".parse::<Policy>(), Ok(Policy::ShortestJobNext));
        assert_eq!("priority".parse::<Policy>(), Ok(Policy::Priority));
        assert_eq!(
            "fcfs".parse::<Policy>(),
            Err(SimulationError::UnknownPolicy("fcfs".into()))
        );
        // Identifiers are case-sensitive.
        assert!("SRT".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
    }

    #[test]
    fn test_unknown_policy_runs_nothing() {
        let err = Dispatcher::from_name("lottery", Some(2)).unwrap_err();
        assert_eq!(err, SimulationError::UnknownPolicy("lottery".into()));
    }

    #[test]
    fn test_round_robin_quantum_required() {
        assert_eq!(
            Dispatcher::new(Policy::RoundRobin, None).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );
        assert_eq!(
            Dispatcher::new(Policy::RoundRobin, Some(-1)).unwrap_err(),
            SimulationError::InvalidQuantum(-1)
        );
    }

    #[test]
    fn test_quantum_ignored_by_other_policies() {
        for policy in [
            Policy::ShortestRemainingTime,
            Policy::ShortestJobNext,
            Policy::Priority,
        ] {
            assert!(Dispatcher::new(policy, Some(-5)).is_ok());
            assert!(Dispatcher::new(policy, None).is_ok());
        }
    }

    #[test]
    fn test_empty_process_set() {
        let dispatcher = Dispatcher::new(Policy::ShortestJobNext, None).unwrap();
        assert_eq!(
            dispatcher.simulate(&[]).unwrap_err(),
            SimulationError::EmptyProcessSet
        );
    }

    #[test]
    fn test_simulate_does_not_mutate_input() {
        let input = sample();
        let dispatcher = Dispatcher::new(Policy::ShortestJobNext, None).unwrap();
        let sim = dispatcher.simulate(&input).unwrap();

        assert_eq!(input, sample());
        assert_eq!(sim.process(2).unwrap().completion_time, 8);
        assert_eq!(sim.process(1).unwrap().completion_time, 12);
        assert_eq!(sim.policy, Policy::ShortestJobNext);
    }

    #[test]
    fn test_simulate_resets_stale_state() {
        let dispatcher = Dispatcher::new(Policy::RoundRobin, Some(2)).unwrap();
        let first = dispatcher.simulate(&sample()).unwrap();
        // Feeding finished records back in starts from scratch.
        let second = dispatcher.simulate(&first.processes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig::new(Policy::RoundRobin).with_quantum(3);
        let dispatcher = Dispatcher::from_config(&config).unwrap();
        assert_eq!(dispatcher.policy(), Policy::RoundRobin);
        let sim = dispatcher.simulate(&sample()).unwrap();
        assert!(sim.timeline.entries().iter().all(|e| e.exec_time <= 3));
    }

    #[test]
    fn test_simulation_averages() {
        let dispatcher = Dispatcher::new(Policy::ShortestJobNext, None).unwrap();
        let sim = dispatcher.simulate(&sample()).unwrap();
        // Turnaround: 7, 10, 4 → 7.0; waiting: 0, 6, 3 → 3.0
        assert!((sim.average_turnaround() - 7.0).abs() < 1e-10);
        assert!((sim.average_waiting() - 3.0).abs() < 1e-10);
    }
}
