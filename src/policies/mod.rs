//! CPU scheduling policy engines.
//!
//! Each engine drives a discrete simulated clock from t=0 until every
//! process has consumed its burst, appending one `GanttEntry` per slice
//! and stamping completion metrics as processes finish.
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `RoundRobin` | by quantum | FIFO ready queue |
//! | `ShortestRemainingTime` | at arrivals | minimum remaining time |
//! | `ShortestJobNext` | no | minimum remaining time |
//! | `PriorityPolicy` | no | minimum priority value |
//!
//! # Clock
//! When nothing is ready the clock advances by a single tick and no entry
//! is produced. Engines assume every process has `burst_time > 0` and
//! `arrival_time >= 0`; the dispatcher and `validation` enforce that.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod priority;
mod ready;
mod round_robin;
mod sjn;
mod srt;

pub use priority::PriorityPolicy;
pub use round_robin::RoundRobin;
pub use sjn::ShortestJobNext;
pub use srt::ShortestRemainingTime;

use crate::models::{Process, Timeline};
use std::fmt::Debug;

/// A scheduling policy that can simulate a process set.
///
/// `run` mutates the given processes in place (remaining time and
/// completion metrics) and returns the resulting timeline. Runs are
/// deterministic: identical inputs produce identical timelines.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy identifier (e.g., "roundRobin", "srt").
    fn name(&self) -> &'static str;

    /// Simulates the processes to completion.
    fn run(&self, processes: &mut [Process]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Indices of `processes` sorted by arrival time (stable).
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}
