//! Random workload generation.
//!
//! Produces reproducible process sets for benchmarking policies against
//! each other. The same seed always yields the same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::Process;

/// Seeded generator of process sets.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(7).with_process_count(5).generate();
/// let b = WorkloadGenerator::new(7).with_process_count(5).generate();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|p| p.burst_time > 0));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    process_count: usize,
    arrivals: RangeInclusive<i64>,
    bursts: RangeInclusive<i64>,
    priorities: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges: 8 processes, arrivals in
    /// 0..=20, bursts in 1..=10, priorities in 0..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            process_count: 8,
            arrivals: 0..=20,
            bursts: 1..=10,
            priorities: 0..=5,
        }
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the arrival time range (clamped to start at 0).
    pub fn with_arrivals(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrivals = (*range.start()).max(0)..=*range.end();
        self
    }

    /// Sets the burst time range (clamped to start at 1).
    pub fn with_bursts(mut self, range: RangeInclusive<i64>) -> Self {
        self.bursts = (*range.start()).max(1)..=*range.end();
        self
    }

    /// Sets the priority range (clamped to start at 0).
    pub fn with_priorities(mut self, range: RangeInclusive<i32>) -> Self {
        self.priorities = (*range.start()).max(0)..=*range.end();
        self
    }

    /// Generates the process set; ids are `0..count` in order.
    ///
    /// An empty range (end below start after clamping) collapses to its
    /// start value.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.process_count)
            .map(|id| {
                let arrival = sample(&mut rng, &self.arrivals);
                let burst = sample(&mut rng, &self.bursts);
                let priority = sample(&mut rng, &self.priorities);
                Process::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn sample<R, T>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    R: Rng,
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}
