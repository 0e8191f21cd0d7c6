//! Simulation quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first start - arrival |
//! | Makespan | End of the last slice |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Processes completed per tick of makespan |
//! | Context Switches | Hand-offs between different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Process, Timeline};

/// Simulation performance indicators.
///
/// All time values are in simulated clock ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationKpi {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time (first dispatch - arrival).
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Ticks with no process on the CPU before the makespan.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes per tick.
    pub throughput: f64,
    /// Number of hand-offs between different processes.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from simulated processes and their timeline.
    ///
    /// # Errors
    /// `EmptyProcessSet` when `processes` is empty, since the means are
    /// undefined.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }
        let count = processes.len() as f64;

        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_response: i64 = processes
            .iter()
            .filter_map(|p| timeline.first_start(p.id).map(|s| s - p.arrival_time))
            .sum();

        let makespan = timeline.makespan();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                timeline.busy_time() as f64 / makespan as f64,
                count / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_turnaround: total_turnaround as f64 / count,
            avg_waiting: total_waiting as f64 / count,
            avg_response: total_response as f64 / count,
            makespan,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{RoundRobin, SchedulingPolicy};

    #[test]
    fn test_kpi_round_robin() {
        let mut processes = vec![Process::new(0, 0, 5), Process::new(1, 1, 3)];
        let timeline = RoundRobin::new(2).unwrap().run(&mut processes);

        let kpi = SimulationKpi::calculate(&processes, &timeline).unwrap();
        assert!((kpi.avg_turnaround - 7.0).abs() < 1e-10); // (8 + 6) / 2
        assert!((kpi.avg_waiting - 3.0).abs() < 1e-10); // (3 + 3) / 2
        assert!((kpi.avg_response - 0.5).abs() < 1e-10); // (0 + 1) / 2
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 4);
    }

    #[test]
    fn test_kpi_with_idle_time() {
        let mut p0 = Process::new(0, 2, 2);
        p0.execute(2);
        let mut timeline = Timeline::new();
        timeline.record_execution(0, 2, 2);
        timeline.finalize(&mut p0, 4);

        let kpi = SimulationKpi::calculate(&[p0], &timeline).unwrap();
        assert_eq!(kpi.makespan, 4);
        assert_eq!(kpi.idle_time, 2);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        assert_eq!(
            SimulationKpi::calculate(&[], &Timeline::new()),
            Err(SimulationError::EmptyProcessSet)
        );
    }
}
