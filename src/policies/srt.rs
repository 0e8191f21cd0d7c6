//! Shortest-Remaining-Time engine (preemptive).
//!
//! # Algorithm
//!
//! 1. Admit arrived processes (arrival order, stable) to the ready set.
//! 2. Pick the ready process with the least remaining time.
//! 3. Run it until it finishes or until the next arrival, whichever
//!    comes first.
//!
//! The choice is re-evaluated only at arrival boundaries and completions.
//! A running process is assumed to stay shortest until the next arrival,
//! so an arrival that merely ties it does not preempt.

use super::ready::ReadySet;
use super::{arrival_order, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Preemptive shortest-remaining-time-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl ShortestRemainingTime {
    /// Earliest arrival strictly after `now`, if any.
    fn next_arrival(processes: &[Process], now: i64) -> Option<i64> {
        processes
            .iter()
            .map(|p| p.arrival_time)
            .filter(|&t| t > now)
            .min()
    }
}

impl SchedulingPolicy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "srt"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let order = arrival_order(processes);
        let mut timeline = Timeline::new();
        let mut ready = ReadySet::new();
        let mut now: i64 = 0;

        while processes.iter().any(|p| !p.is_finished()) {
            ready.admit_arrivals(processes, &order, now);

            let Some(idx) = ready.shortest(processes) else {
                tracing::trace!(now, "cpu idle");
                now += 1;
                continue;
            };

            let remaining = processes[idx].remaining_time;
            let exec_time = match Self::next_arrival(processes, now) {
                Some(arrival) if arrival < now + remaining => arrival - now,
                _ => remaining,
            };

            let process = &mut processes[idx];
            timeline.record_execution(process.id, now, exec_time);
            now += exec_time;
            process.execute(exec_time);

            if process.is_finished() {
                timeline.finalize(process, now);
                ready.prune_finished(processes);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}
