//! Dispatching, simulation runs and KPI evaluation.
//!
//! # Dispatcher
//!
//! `Dispatcher` maps a [`Policy`] (or its identifier: `roundRobin`, `srt`,
//! `sjn`, `priority`) to a policy engine and runs it on a private copy of
//! the caller's processes, producing a [`Simulation`].
//!
//! # KPI
//!
//! `SimulationKpi` computes turnaround, waiting and response means plus
//! makespan, utilization and throughput.
//!
//! # Comparison
//!
//! `compare_policies` runs all four policies over the same workload on
//! separate threads.

mod compare;
mod dispatcher;
mod kpi;

pub use compare::{compare_policies, PolicyComparison};
pub use dispatcher::{Dispatcher, Policy, Simulation};
pub use kpi::SimulationKpi;
