//! Schedule (solution) model.
//!
//! A schedule is the output of a scheduling run: one entry per task,
//! recording when it starts, when it finishes, and (for worker-bound
//! tasks) which pool slot it occupied.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A complete schedule.
///
/// Entries are stored in scheduling order (the order the topological
/// traversal emitted them). Each task appears exactly once; entries are
/// immutable once pushed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-task start/finish entries, in scheduling order.
    pub entries: Vec<ScheduledTask>,
}

/// A single task's place in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Scheduled task ID.
    pub task_id: String,
    /// Start time (time units from schedule start).
    pub start: u64,
    /// Finish time (`start + duration`).
    pub finish: u64,
    /// Worker pool slot occupied for `[start, finish)`, if the task is
    /// worker-bound. `None` for unconstrained tasks.
    pub worker: Option<usize>,
}

impl ScheduledTask {
    /// Creates an entry for an unconstrained task.
    pub fn new(task_id: impl Into<String>, start: u64, finish: u64) -> Self {
        Self {
            task_id: task_id.into(),
            start,
            finish,
            worker: None,
        }
    }

    /// Sets the occupied worker slot.
    pub fn with_worker(mut self, slot: usize) -> Self {
        self.worker = Some(slot);
        self
    }

    /// Duration (finish - start) in time units.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.finish - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduledTask) {
        self.entries.push(entry);
    }

    /// Finds the entry for a given task.
    pub fn entry_for(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    /// Start time of a task, if it was scheduled.
    pub fn start_of(&self, task_id: &str) -> Option<u64> {
        self.entry_for(task_id).map(|e| e.start)
    }

    /// Finish time of a task, if it was scheduled.
    pub fn finish_of(&self, task_id: &str) -> Option<u64> {
        self.entry_for(task_id).map(|e| e.finish)
    }

    /// Makespan: latest finish time across all entries (0 when empty).
    pub fn makespan(&self) -> u64 {
        self.entries.iter().map(|e| e.finish).max().unwrap_or(0)
    }

    /// All entries assigned to a given worker slot.
    pub fn entries_for_worker(&self, slot: usize) -> Vec<&ScheduledTask> {
        self.entries
            .iter()
            .filter(|e| e.worker == Some(slot))
            .collect()
    }

    /// Number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(ScheduledTask::new("A", 0, 15));
        s.push(ScheduledTask::new("B", 0, 20));
        s.push(ScheduledTask::new("D", 30, 35).with_worker(0));
        s.push(ScheduledTask::new("E", 35, 65).with_worker(1));
        s
    }

    #[test]
    fn test_makespan() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 65);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.makespan(), 0);
        assert!(s.is_empty());
        assert!(s.entry_for("A").is_none());
    }

    #[test]
    fn test_lookup() {
        let s = sample_schedule();
        assert_eq!(s.start_of("B"), Some(0));
        assert_eq!(s.finish_of("B"), Some(20));
        assert_eq!(s.start_of("missing"), None);

        let d = s.entry_for("D").unwrap();
        assert_eq!(d.worker, Some(0));
        assert_eq!(d.duration(), 5);
    }

    #[test]
    fn test_entries_for_worker() {
        let s = sample_schedule();
        let w0 = s.entries_for_worker(0);
        assert_eq!(w0.len(), 1);
        assert_eq!(w0[0].task_id, "D");
        assert!(s.entries_for_worker(2).is_empty());
    }

    #[test]
    fn test_unconstrained_has_no_worker() {
        let s = sample_schedule();
        assert_eq!(s.entry_for("A").unwrap().worker, None);
    }
}
