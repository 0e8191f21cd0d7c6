//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical single-CPU scheduling policies over a fixed set of
//! processes on a discrete integer clock, producing a Gantt timeline and
//! per-process completion, turnaround and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `GanttEntry`, `Timeline`
//! - **`policies`**: Engines — `RoundRobin`, `ShortestRemainingTime`,
//!   `ShortestJobNext`, `PriorityPolicy`
//! - **`scheduler`**: `Dispatcher`, `Simulation`, `SimulationKpi`, policy comparison
//! - **`config`**: `SimulationConfig` and serde-friendly `SimulationRequest`
//! - **`validation`**: Boundary checks and burst filtering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::Dispatcher;
//!
//! let processes = vec![Process::new(0, 0, 5), Process::new(1, 1, 3)];
//! let sim = Dispatcher::from_name("roundRobin", Some(2))?.simulate(&processes)?;
//!
//! assert_eq!(sim.process(0).unwrap().completion_time, 8);
//! assert!((sim.average_waiting() - 3.0).abs() < 1e-10);
//! # Ok::<(), u_cpusched::SimulationError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
