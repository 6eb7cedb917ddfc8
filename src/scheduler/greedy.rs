//! Greedy topological scheduler.
//!
//! # Algorithm
//!
//! 1. Build the dependency graph and seed a FIFO ready queue with all
//!    indegree-0 tasks, in table-definition order.
//! 2. Pop a ready task; its start time is the latest finish among its
//!    dependencies (0 for roots).
//! 3. If the task is worker-bound, also wait for the earliest-free worker
//!    slot and occupy it until the task finishes.
//! 4. Decrement successor indegrees; successors reaching 0 join the queue.
//! 5. When the queue drains, fail fast if any task was never scheduled.
//!
//! # Complexity
//! O(V + E) traversal plus O(V * W) worker-slot scans for pool size W.
//!
//! # Reference
//! - Kahn (1962), "Topological sorting of large networks"
//! - Graham (1966), "Bounds for certain multiprocessing anomalies" (list scheduling)

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::graph::DependencyGraph;
use crate::models::{Schedule, ScheduledTask, Task};

/// Scheduling configuration, passed explicitly into each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of interchangeable worker slots in the shared pool.
    pub workers: usize,
    /// Target time budget for the whole schedule (same units as durations).
    pub time_budget: u64,
}

impl SchedulerConfig {
    /// Creates a configuration.
    pub fn new(workers: usize, time_budget: u64) -> Self {
        Self {
            workers,
            time_budget,
        }
    }
}

/// Greedy topological scheduler.
///
/// Produces a feasible (not optimal) schedule: every task starts no earlier
/// than its last-finishing dependency, and worker-bound tasks additionally
/// wait for the earliest-free pool slot. Ties in the ready queue resolve in
/// table-definition order, so runs are deterministic.
///
/// # Example
///
/// ```
/// use dagplan::models::Task;
/// use dagplan::scheduler::{GreedyScheduler, SchedulerConfig};
///
/// let tasks = vec![
///     Task::new("A", 15),
///     Task::new("B", 20),
///     Task::new("C", 10).with_deps(["A", "B"]),
/// ];
/// let scheduler = GreedyScheduler::new(SchedulerConfig::new(3, 120));
/// let schedule = scheduler.schedule(&tasks).unwrap();
///
/// assert_eq!(schedule.start_of("C"), Some(20));
/// assert_eq!(schedule.makespan(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    config: SchedulerConfig,
}

impl GreedyScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules a task table.
    ///
    /// The slice order is the definition order used for all tie-breaks.
    ///
    /// # Errors
    /// - [`ScheduleError::UnscheduledTasks`] if a cycle or a dependency on
    ///   an undefined task leaves tasks unreachable.
    /// - [`ScheduleError::EmptyWorkerPool`] if a worker-bound task is
    ///   submitted with a zero-size pool.
    pub fn schedule(&self, tasks: &[Task]) -> Result<Schedule, ScheduleError> {
        let graph = DependencyGraph::build(tasks);
        self.schedule_with_graph(tasks, &graph)
    }

    /// Schedules against a pre-built graph.
    ///
    /// The graph must have been built from the same task table.
    pub fn schedule_with_graph(
        &self,
        tasks: &[Task],
        graph: &DependencyGraph,
    ) -> Result<Schedule, ScheduleError> {
        let by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
        let mut indegree = graph.indegree_map();

        // Ready queue seeded in definition order (deterministic tie-break).
        let mut queue: VecDeque<&str> = tasks
            .iter()
            .filter(|t| indegree.get(t.id.as_str()) == Some(&0))
            .map(|t| t.id.as_str())
            .collect();

        debug!(roots = queue.len(), tasks = tasks.len(), "seeded ready queue");

        let mut worker_free = vec![0u64; self.config.workers];
        let mut finish_times: HashMap<&str, u64> = HashMap::new();
        let mut schedule = Schedule::new();

        while let Some(task_id) = queue.pop_front() {
            let task = by_id[task_id];

            // Earliest start permitted by the dependencies.
            let mut start = task
                .deps
                .iter()
                .map(|dep| finish_times[dep.as_str()])
                .max()
                .unwrap_or(0);

            let worker = if task.requires_worker {
                let (slot, &free_at) = worker_free
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, &t)| t)
                    .ok_or_else(|| ScheduleError::EmptyWorkerPool(task.id.clone()))?;
                start = start.max(free_at);
                Some(slot)
            } else {
                None
            };

            let finish = start + task.duration;
            if let Some(slot) = worker {
                worker_free[slot] = finish;
            }
            finish_times.insert(task_id, finish);

            debug!(task = %task_id, start, finish, ?worker, "scheduled task");

            let mut entry = ScheduledTask::new(task_id, start, finish);
            if let Some(slot) = worker {
                entry = entry.with_worker(slot);
            }
            schedule.push(entry);

            for succ in graph.successors_of(task_id) {
                if let Some(deg) = indegree.get_mut(succ.as_str()) {
                    *deg -= 1;
                    if *deg == 0 {
                        queue.push_back(succ.as_str());
                    }
                }
            }
        }

        // Fail fast instead of returning a silently partial schedule.
        if schedule.len() < tasks.len() {
            let remaining: Vec<String> = tasks
                .iter()
                .filter(|t| !finish_times.contains_key(t.id.as_str()))
                .map(|t| t.id.clone())
                .collect();
            return Err(ScheduleError::UnscheduledTasks(remaining));
        }

        Ok(schedule)
    }
}
