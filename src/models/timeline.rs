//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered record of every slice a policy engine ran,
//! plus the order in which processes completed. It is also the single
//! place where completion metrics are stamped onto a process.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Pid, Process};

/// A contiguous interval during which one process occupies the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttEntry {
    /// Process that ran.
    pub pid: Pid,
    /// Tick at which the slice started.
    pub start_time: i64,
    /// Length of the slice.
    pub exec_time: i64,
    /// `start_time + exec_time` (denormalized for presentation layers).
    pub end_time: i64,
}

impl GanttEntry {
    /// Creates an entry; `end_time` is derived.
    pub fn new(pid: Pid, start_time: i64, exec_time: i64) -> Self {
        Self {
            pid,
            start_time,
            exec_time,
            end_time: start_time + exec_time,
        }
    }
}

impl fmt::Display for GanttEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}[{}-{}]", self.pid, self.start_time, self.end_time)
    }
}

/// Append-only execution timeline.
///
/// Entries are non-decreasing in `start_time`; consecutive entries abut
/// unless the CPU idled between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    entries: Vec<GanttEntry>,
    completion_order: Vec<Pid>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn record_execution(&mut self, pid: Pid, start_time: i64, exec_time: i64) {
        debug_assert!(exec_time > 0);
        debug_assert!(self
            .entries
            .last()
            .map_or(true, |last| last.end_time <= start_time));
        tracing::trace!(pid, start_time, exec_time, "slice");
        self.entries.push(GanttEntry::new(pid, start_time, exec_time));
    }

    /// Stamps completion metrics onto a process whose work is done.
    pub fn finalize(&mut self, process: &mut Process, completion_time: i64) {
        process.complete(completion_time);
        self.completion_order.push(process.id);
        tracing::debug!(
            pid = process.id,
            completion_time,
            turnaround = process.turnaround_time,
            waiting = process.waiting_time,
            "process completed"
        );
    }

    /// All entries in execution order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    /// Pids in the order their processes completed.
    pub fn completion_order(&self) -> &[Pid] {
        &self.completion_order
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has executed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last slice.
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total ticks the CPU was occupied.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.exec_time).sum()
    }

    /// Ticks between 0 and the makespan with nothing running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Entries belonging to one process.
    pub fn entries_for(&self, pid: Pid) -> Vec<&GanttEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Tick at which a process first got the CPU.
    pub fn first_start(&self, pid: Pid) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.pid == pid)
            .map(|e| e.start_time)
    }

    /// Number of hand-offs between different processes.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record_execution(0, 0, 2);
        t.record_execution(1, 2, 2);
        t.record_execution(1, 4, 1);
        // idle 5..7
        t.record_execution(2, 7, 3);
        t
    }

    #[test]
    fn test_entry_end_time() {
        let e = GanttEntry::new(4, 10, 3);
        assert_eq!(e.end_time, 13);
        assert_eq!(e.to_string(), "P4[10-13]");
    }

    #[test]
    fn test_timeline_aggregates() {
        let t = sample_timeline();
        assert_eq!(t.len(), 4);
        assert_eq!(t.makespan(), 10);
        assert_eq!(t.busy_time(), 8);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.context_switches(), 2); // 0→1, 1→2
    }

    #[test]
    fn test_entries_for_and_first_start() {
        let t = sample_timeline();
        assert_eq!(t.entries_for(1).len(), 2);
        assert_eq!(t.first_start(1), Some(2));
        assert_eq!(t.first_start(2), Some(7));
        assert_eq!(t.first_start(9), None);
    }

    #[test]
    fn test_finalize_stamps_metrics() {
        let mut t = Timeline::new();
        let mut p = Process::new(5, 1, 3);
        p.execute(3);
        t.record_execution(5, 1, 3);
        t.finalize(&mut p, 4);

        assert_eq!(p.completion_time, 4);
        assert_eq!(p.turnaround_time, 3);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(t.completion_order(), &[5]);
    }

    #[test]
    fn test_display() {
        let t = sample_timeline();
        assert_eq!(t.to_string(), "P0[0-2] P1[2-4] P1[4-5] P2[7-10]");
        assert_eq!(Timeline::new().to_string(), "");
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
        assert_eq!(t.context_switches(), 0);
    }
}
