//! Priority engine (non-preemptive).
//!
//! The ready set is rebuilt from scratch at every decision point; only
//! arrived, unfinished processes are eligible. Lower priority values win,
//! ties go to the earlier arrival and then the lower id.

use super::SchedulingPolicy;
use crate::models::{Process, Timeline};

/// Non-preemptive static-priority scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPolicy;

impl PriorityPolicy {
    fn select(processes: &[Process], now: i64) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(now) && !p.is_finished())
            .min_by_key(|(_, p)| (p.priority, p.arrival_time, p.id))
            .map(|(i, _)| i)
    }
}

impl SchedulingPolicy for PriorityPolicy {
    fn name(&self) -> &'static str {
        "priority"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut now: i64 = 0;

        while processes.iter().any(|p| !p.is_finished()) {
            let Some(idx) = Self::select(processes, now) else {
                tracing::trace!(now, "cpu idle");
                now += 1;
                continue;
            };

            let process = &mut processes[idx];
            let exec_time = process.remaining_time;
            timeline.record_execution(process.id, now, exec_time);
            now += exec_time;
            process.remaining_time = 0;
            timeline.finalize(process, now);
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::testing::{assert_metric_invariants, spans};

    #[test]
    fn test_lower_value_runs_first() {
        let mut processes = vec![
            Process::new(0, 0, 4).with_priority(2),
            Process::new(1, 0, 3).with_priority(1),
        ];
        let timeline = PriorityPolicy.run(&mut processes);
        assert_eq!(spans(&timeline), vec![(1, 0, 3), (0, 3, 7)]);
        assert_metric_invariants(&processes, &timeline);
    }

    #[test]
    fn test_unarrived_winner_is_not_selected() {
        // P1 has the best priority but has not arrived at t=0.
        let mut processes = vec![
            Process::new(0, 0, 3).with_priority(5),
            Process::new(1, 1, 2).with_priority(0),
            Process::new(2, 0, 1).with_priority(3),
        ];
        let timeline = PriorityPolicy.run(&mut processes);
        assert_eq!(spans(&timeline), vec![(2, 0, 1), (1, 1, 3), (0, 3, 6)]);
    }

    #[test]
    fn test_non_preemptive() {
        let mut processes = vec![
            Process::new(0, 0, 10).with_priority(9),
            Process::new(1, 1, 1).with_priority(0),
        ];
        let timeline = PriorityPolicy.run(&mut processes);
        assert_eq!(spans(&timeline), vec![(0, 0, 10), (1, 10, 11)]);
        assert_eq!(processes[1].waiting_time, 9);
    }

    #[test]
    fn test_equal_priority_tie_breaks_by_arrival() {
        let mut processes = vec![
            Process::new(0, 2, 1).with_priority(1),
            Process::new(1, 1, 1).with_priority(1),
            Process::new(2, 0, 3).with_priority(1),
        ];
        let timeline = PriorityPolicy.run(&mut processes);
        assert_eq!(spans(&timeline), vec![(2, 0, 3), (1, 3, 4), (0, 4, 5)]);
    }
}
