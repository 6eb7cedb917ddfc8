//! Schedule reporting: makespan, budget advisory, pool utilization.
//!
//! Computes aggregate figures from a completed schedule. Exceeding the
//! time budget is an advisory condition, not an error: the schedule is
//! still feasible, it just does not fit the target window.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest finish time |
//! | Overrun | max(0, makespan - budget) |
//! | Slot busy time | Sum of durations assigned to a worker slot |
//! | Slot utilization | busy / makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Schedule;
use crate::scheduler::SchedulerConfig;

/// Aggregate figures for a completed schedule.
///
/// All time values are in the same abstract units as task durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Makespan: latest finish time across all tasks.
    pub makespan: u64,
    /// Configured time budget.
    pub time_budget: u64,
    /// Whether the makespan fits within the budget.
    pub within_budget: bool,
    /// Amount by which the makespan exceeds the budget (0 if within).
    pub overrun: u64,
    /// Number of scheduled tasks.
    pub task_count: usize,
    /// Busy time per worker slot that received at least one task.
    pub busy_by_worker: HashMap<usize, u64>,
}

impl ScheduleReport {
    /// Computes the report for a schedule under the given configuration.
    ///
    /// Logs a warning when the makespan exceeds the budget.
    pub fn calculate(schedule: &Schedule, config: &SchedulerConfig) -> Self {
        let makespan = schedule.makespan();
        let within_budget = makespan <= config.time_budget;
        let overrun = makespan.saturating_sub(config.time_budget);

        if !within_budget {
            warn!(
                makespan,
                budget = config.time_budget,
                overrun,
                "schedule exceeds the time budget"
            );
        }

        let mut busy_by_worker: HashMap<usize, u64> = HashMap::new();
        for entry in &schedule.entries {
            if let Some(slot) = entry.worker {
                *busy_by_worker.entry(slot).or_insert(0) += entry.duration();
            }
        }

        Self {
            makespan,
            time_budget: config.time_budget,
            within_budget,
            overrun,
            task_count: schedule.len(),
            busy_by_worker,
        }
    }

    /// Utilization of a worker slot over the makespan horizon.
    ///
    /// Returns `None` when the makespan is zero.
    pub fn worker_utilization(&self, slot: usize) -> Option<f64> {
        if self.makespan == 0 {
            return None;
        }
        let busy = self.busy_by_worker.get(&slot).copied().unwrap_or(0);
        Some(busy as f64 / self.makespan as f64)
    }
}
