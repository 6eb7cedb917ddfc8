//! Task model.
//!
//! A task is the unit of scheduling: a fixed duration of work that may
//! depend on other tasks and may require one slot from the shared worker
//! pool for its whole duration.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A task to be scheduled.
///
/// Tasks are static input: the table of tasks (and each dependency list)
/// is fixed before scheduling begins and never mutated. The position of a
/// task in the input slice is its definition order, which the scheduler
/// uses as the deterministic tie-break.
///
/// # Time Representation
/// Durations and schedule times are abstract non-negative time units
/// (minutes, in the typical recovery-plan use). The consumer defines the
/// unit; t=0 is the schedule start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable description (opaque display string).
    pub name: String,
    /// Processing duration in time units. Must be positive.
    pub duration: u64,
    /// IDs of tasks that must finish before this task may start.
    pub deps: Vec<String>,
    /// Whether this task occupies one shared worker slot while running.
    ///
    /// Tasks with `requires_worker == false` are scheduled purely by
    /// dependency-completion time and never contend for the pool.
    pub requires_worker: bool,
}

impl Task {
    /// Creates a new task with the given ID and duration.
    pub fn new(id: impl Into<String>, duration: u64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration,
            deps: Vec::new(),
            requires_worker: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a single dependency.
    pub fn with_dep(mut self, dep: impl Into<String>) -> Self {
        self.deps.push(dep.into());
        self
    }

    /// Adds several dependencies at once.
    pub fn with_deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deps.extend(deps.into_iter().map(Into::into));
        self
    }

    /// Marks this task as consuming a shared worker slot.
    pub fn with_worker(mut self) -> Self {
        self.requires_worker = true;
        self
    }

    /// Whether this task has any dependencies.
    pub fn has_deps(&self) -> bool {
        !self.deps.is_empty()
    }

    /// Number of dependencies.
    pub fn dep_count(&self) -> usize {
        self.deps.len()
    }
}
