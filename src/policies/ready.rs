//! Ready set shared by the shortest-job engines.

use std::collections::HashSet;

use crate::models::{Pid, Process};

/// Processes that have arrived and still need CPU time.
///
/// Members are slice indices kept in admission order; membership is
/// tracked by pid so that a process is never admitted twice.
#[derive(Debug, Default)]
pub(crate) struct ReadySet {
    members: Vec<usize>,
    admitted: HashSet<Pid>,
}

impl ReadySet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Admits every arrived, unfinished process not yet in the set.
    ///
    /// `order` fixes the admission sequence (normally arrival order).
    pub(crate) fn admit_arrivals(&mut self, processes: &[Process], order: &[usize], now: i64) {
        for &idx in order {
            let p = &processes[idx];
            if p.has_arrived(now) && !p.is_finished() && self.admitted.insert(p.id) {
                self.members.push(idx);
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member with the least remaining time; ties by arrival, then id.
    pub(crate) fn shortest(&self, processes: &[Process]) -> Option<usize> {
        self.members.iter().copied().min_by_key(|&i| {
            let p = &processes[i];
            (p.remaining_time, p.arrival_time, p.id)
        })
    }

    /// Drops members whose work is done.
    pub(crate) fn prune_finished(&mut self, processes: &[Process]) {
        let admitted = &mut self.admitted;
        self.members.retain(|&i| {
            let keep = !processes[i].is_finished();
            if !keep {
                admitted.remove(&processes[i].id);
            }
            keep
        });
    }
}
