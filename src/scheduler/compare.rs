//! Side-by-side comparison of every policy on one workload.
//!
//! Each policy runs on its own scoped thread with its own deep copy of
//! the processes; the caller's slice is only read.

use std::thread;

use super::{Dispatcher, Policy, Simulation};
use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Results of running every policy over the same processes.
#[derive(Debug, Clone)]
pub struct PolicyComparison {
    simulations: Vec<Simulation>,
}

impl PolicyComparison {
    /// Simulations in [`Policy::ALL`] order.
    pub fn simulations(&self) -> &[Simulation] {
        &self.simulations
    }

    /// The run for one policy.
    pub fn get(&self, policy: Policy) -> Option<&Simulation> {
        self.simulations.iter().find(|s| s.policy == policy)
    }

    /// Policy with the lowest average waiting time (first wins on ties).
    pub fn best_by_waiting(&self) -> Option<&Simulation> {
        self.best_by(|s| s.kpi.avg_waiting)
    }

    /// Policy with the lowest average turnaround time (first wins on ties).
    pub fn best_by_turnaround(&self) -> Option<&Simulation> {
        self.best_by(|s| s.kpi.avg_turnaround)
    }

    fn best_by(&self, metric: impl Fn(&Simulation) -> f64) -> Option<&Simulation> {
        self.simulations.iter().fold(None, |best, sim| match best {
            Some(b) if metric(b) <= metric(sim) => Some(b),
            _ => Some(sim),
        })
    }
}

/// Runs all four policies over `processes` in parallel.
///
/// `quantum` is used by Round-Robin only; an invalid quantum or an empty
/// process set fails the whole comparison before any thread starts.
pub fn compare_policies(processes: &[Process], quantum: Option<i64>) -> Result<PolicyComparison> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }

    let dispatchers = Policy::ALL
        .into_iter()
        .map(|policy| Dispatcher::new(policy, quantum))
        .collect::<Result<Vec<_>>>()?;

    let simulations = thread::scope(|scope| {
        let handles: Vec<_> = dispatchers
            .iter()
            .map(|dispatcher| scope.spawn(move || dispatcher.simulate(processes)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(PolicyComparison { simulations })
}
