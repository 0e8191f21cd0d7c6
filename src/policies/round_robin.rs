//! Round-Robin engine.
//!
//! # Algorithm
//!
//! 1. Admit arrived, unfinished processes to a FIFO queue in
//!    (arrival, id) order.
//! 2. Run the head for `min(quantum, remaining)` ticks.
//! 3. If it still has work, admit anything that arrived during the slice
//!    first, then put it back at the tail.
//!
//! Admitting new arrivals ahead of the preempted process keeps a tied
//! arrival from waiting behind a process that just used a full quantum.

use std::collections::{HashSet, VecDeque};

use super::SchedulingPolicy;
use crate::error::{Result, SimulationError};
use crate::models::{Pid, Process, Timeline};

/// Round-Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::policies::{RoundRobin, SchedulingPolicy};
///
/// let mut processes = vec![Process::new(0, 0, 5), Process::new(1, 1, 3)];
/// let timeline = RoundRobin::new(2).unwrap().run(&mut processes);
/// assert_eq!(timeline.to_string(), "P0[0-2] P1[2-4] P0[4-6] P1[6-7] P0[7-8]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates the engine; a quantum ≤ 0 is rejected.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(SimulationError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Maximum contiguous ticks per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "roundRobin"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));

        let mut timeline = Timeline::new();
        let mut queue = ReadyQueue::default();
        let mut now: i64 = 0;

        while processes.iter().any(|p| !p.is_finished()) {
            queue.admit_arrivals(processes, &order, now, None);

            let Some(idx) = queue.pop() else {
                tracing::trace!(now, "cpu idle");
                now += 1;
                continue;
            };

            let process = &mut processes[idx];
            let exec_time = self.quantum.min(process.remaining_time);
            timeline.record_execution(process.id, now, exec_time);
            now += exec_time;
            process.execute(exec_time);

            if process.is_finished() {
                timeline.finalize(process, now);
            } else {
                let pid = process.id;
                queue.admit_arrivals(processes, &order, now, Some(pid));
                queue.push(idx, pid);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }
}

/// FIFO of slice indices with pid-based membership.
#[derive(Debug, Default)]
struct ReadyQueue {
    queue: VecDeque<(usize, Pid)>,
    queued: HashSet<Pid>,
}

impl ReadyQueue {
    fn admit_arrivals(
        &mut self,
        processes: &[Process],
        order: &[usize],
        now: i64,
        running: Option<Pid>,
    ) {
        for &idx in order {
            let p = &processes[idx];
            if p.has_arrived(now) && !p.is_finished() && Some(p.id) != running {
                self.push(idx, p.id);
            }
        }
    }

    fn push(&mut self, idx: usize, pid: Pid) {
        if self.queued.insert(pid) {
            self.queue.push_back((idx, pid));
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let (idx, pid) = self.queue.pop_front()?;
        self.queued.remove(&pid);
        Some(idx)
    }
}
