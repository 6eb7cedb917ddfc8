//! Scheduling error type.

use thiserror::Error;

/// Errors a scheduling run can fail with.
///
/// Exceeding the time budget is deliberately *not* an error; it is an
/// advisory condition reported by [`crate::scheduler::ScheduleReport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The ready queue drained while tasks remained unscheduled. Caused by
    /// a dependency cycle or a dependency on a task not in the table.
    #[error("unscheduled tasks remain (cycle or missing dependency): {}", .0.join(", "))]
    UnscheduledTasks(Vec<String>),

    /// A worker-bound task was submitted with a zero-size worker pool.
    #[error("worker pool is empty but task '{0}' requires a worker")]
    EmptyWorkerPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscheduled_display() {
        let err = ScheduleError::UnscheduledTasks(vec!["X".into(), "Y".into()]);
        assert_eq!(
            err.to_string(),
            "unscheduled tasks remain (cycle or missing dependency): X, Y"
        );
    }

    #[test]
    fn test_empty_pool_display() {
        let err = ScheduleError::EmptyWorkerPool("D".into());
        assert!(err.to_string().contains("'D'"));
    }
}
