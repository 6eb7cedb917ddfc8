//! Dependency-driven task scheduling under a shared worker pool.
//!
//! Computes a feasible start/finish schedule for a fixed table of
//! interdependent tasks, then reports whether the makespan fits a target
//! time budget. The scheduler is a deterministic single pass: Kahn-style
//! topological traversal combined with greedy earliest-free-slot worker
//! assignment. Worker contention is *simulated* at schedule-construction
//! time; nothing here executes concurrently.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Schedule`, `ScheduledTask`
//! - **`graph`**: Dependency graph construction (successors + indegrees)
//! - **`scheduler`**: `GreedyScheduler`, `SchedulerConfig`, `ScheduleReport`
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   dependencies, DAG cycles)
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use dagplan::models::Task;
//! use dagplan::scheduler::{GreedyScheduler, ScheduleReport, SchedulerConfig};
//!
//! let tasks = vec![
//!     Task::new("A", 15).with_name("Identify affected servers"),
//!     Task::new("B", 20).with_name("Prioritize critical data"),
//!     Task::new("C", 10)
//!         .with_name("Activate recovery protocol")
//!         .with_deps(["A", "B"])
//!         .with_worker(),
//! ];
//!
//! let config = SchedulerConfig::new(3, 120);
//! let schedule = GreedyScheduler::new(config.clone()).schedule(&tasks).unwrap();
//! let report = ScheduleReport::calculate(&schedule, &config);
//!
//! assert_eq!(report.makespan, 30);
//! assert!(report.within_budget);
//! ```
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod validation;
