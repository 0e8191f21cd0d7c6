//! Shortest-Job-Next engine (non-preemptive).
//!
//! Same admission and idle rules as the SRT engine, but the selected
//! process always runs to completion in a single slice. Selection is
//! repeated after every completion.

use super::ready::ReadySet;
use super::{arrival_order, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Non-preemptive shortest-job-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobNext;

impl SchedulingPolicy for ShortestJobNext {
    fn name(&self) -> &'static str {
        "sjn"
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

            let process = &mut processes[idx];
            let exec_time = process.remaining_time;
            timeline.record_execution(process.id, now, exec_time);
            now += exec_time;
            process.execute(exec_time);
            timeline.finalize(process, now);

            ready.prune_finished(processes);
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}
