//! Greedy scheduler and schedule reporting.
//!
//! Provides a deterministic single-pass scheduler and aggregate reporting.
//!
//! # Algorithm
//!
//! `GreedyScheduler` combines Kahn-style topological traversal with
//! earliest-free-slot worker assignment. It produces a feasible schedule,
//! not an optimal one.
//!
//! # Reporting
//!
//! `ScheduleReport` computes the makespan, the budget advisory, and
//! per-worker-slot busy time and utilization.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod greedy;
mod report;

pub use greedy::{GreedyScheduler, SchedulerConfig};
pub use report::ScheduleReport;
