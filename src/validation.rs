//! Input validation for task tables.
//!
//! Checks structural integrity of a task table before scheduling. Detects:
//! - Duplicate task IDs
//! - Dependencies on undefined tasks
//! - Self-dependencies
//! - Zero durations
//! - Circular dependencies (DAG validation)
//!
//! Validation is a pre-flight convenience: the scheduler independently
//! fails fast on anything that would leave tasks unscheduled.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task depends on an ID not present in the table.
    UnknownDependency,
    /// A task lists itself as a dependency.
    SelfDependency,
    /// A task has a zero duration.
    ZeroDuration,
    /// The dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task table.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. All dependencies reference tasks in the table
/// 3. No task depends on itself
/// 4. All durations are positive
/// 5. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Task '{}' has zero duration", task.id),
            ));
        }
    }

    for task in tasks {
        for dep in &task.deps {
            if dep == &task.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("Task '{}' depends on itself", task.id),
                ));
            } else if !task_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Task '{}' depends on unknown task '{dep}'", task.id),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    // Adjacency list: task_id → successors
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for dep in &task.deps {
            adj.entry(dep.as_str()).or_default().push(task.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 15),
            Task::new("B", 20),
            Task::new("C", 10).with_deps(["A", "B"]),
            Task::new("D", 5).with_dep("C").with_worker(),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_tasks(&sample_tasks()).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![Task::new("A", 10), Task::new("A", 20)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_unknown_dependency() {
        let tasks = vec![Task::new("A", 10).with_dep("NONEXISTENT")];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownDependency));
    }

    #[test]
    fn test_self_dependency() {
        let tasks = vec![Task::new("A", 10).with_dep("A")];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SelfDependency));
    }

    #[test]
    fn test_zero_duration() {
        let tasks = vec![Task::new("A", 0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_cyclic_dependency() {
        // A → B → C → A (cycle)
        let tasks = vec![
            Task::new("A", 10).with_dep("C"),
            Task::new("B", 10).with_dep("A"),
            Task::new("C", 10).with_dep("B"),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_no_cycle_in_chain() {
        // A → B → C (linear chain, no cycle)
        let tasks = vec![
            Task::new("A", 10),
            Task::new("B", 10).with_dep("A"),
            Task::new("C", 10).with_dep("B"),
        ];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // A → {B, C} → D: shared successor, still a DAG.
        let tasks = vec![
            Task::new("A", 10),
            Task::new("B", 10).with_dep("A"),
            Task::new("C", 10).with_dep("A"),
            Task::new("D", 10).with_deps(["B", "C"]),
        ];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![
            Task::new("A", 0),                      // Zero duration
            Task::new("B", 10).with_dep("UNKNOWN"), // Unknown dependency
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_empty_table() {
        assert!(validate_tasks(&[]).is_ok());
    }
}
