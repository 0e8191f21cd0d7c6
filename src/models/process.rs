//! Process record model.
//!
//! A process carries immutable input parameters (arrival, burst, priority)
//! and the mutable bookkeeping a simulation run updates as it executes
//! the process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier: a stable ordinal assigned at creation.
pub type Pid = usize;

/// A process to be simulated.
///
/// # Time Representation
/// All times are unitless integer ticks of the simulated clock, starting
/// at t=0. Completion metrics stay 0 until `remaining_time` reaches 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Ordinal identity (`P0`, `P1`, ...).
    pub id: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
    /// CPU time not yet consumed.
    #[serde(default)]
    pub remaining_time: i64,
    /// Tick at which the last slice ended.
    #[serde(default)]
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with `remaining_time` initialised to the burst.
    pub fn new(id: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether all CPU time has been consumed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is eligible to run at `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Consumes `duration` ticks of CPU time.
    pub fn execute(&mut self, duration: i64) {
        debug_assert!(duration > 0 && duration <= self.remaining_time);
        self.remaining_time -= duration;
    }

    /// Stamps completion metrics.
    ///
    /// Called once, when `remaining_time` has reached 0.
    pub fn complete(&mut self, completion_time: i64) {
        debug_assert!(self.is_finished());
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Clears all simulation state, keeping the input parameters.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }

    /// A fresh copy ready for a new simulation run.
    pub fn fresh_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.id)
    }
}
