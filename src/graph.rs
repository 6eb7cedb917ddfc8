//! Dependency graph construction.
//!
//! Converts a task table into a directed successor graph plus per-task
//! indegree counts, the two inputs the topological scheduler consumes.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::HashMap;

use crate::models::Task;

/// A directed dependency graph derived from a task table.
///
/// An edge A→B exists iff task B lists A as a dependency. Successor lists
/// preserve table-definition order so traversal stays deterministic.
///
/// Construction does not validate references: a dependency naming an
/// undefined task simply leaves that task's indegree permanently positive.
/// [`crate::validation::validate_tasks`] catches this up front and the
/// scheduler's post-pass fails fast on it.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    successors: HashMap<String, Vec<String>>,
    indegree: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Builds the graph from a task table.
    ///
    /// For every task T with dependency D: T is appended to D's successor
    /// list and T's indegree is incremented. Every task appears in the
    /// indegree map, dependency-free tasks with indegree 0.
    pub fn build(tasks: &[Task]) -> Self {
        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        let mut indegree: HashMap<String, usize> = HashMap::new();

        for task in tasks {
            for dep in &task.deps {
                successors
                    .entry(dep.clone())
                    .or_default()
                    .push(task.id.clone());
            }
            *indegree.entry(task.id.clone()).or_insert(0) += task.deps.len();
        }

        Self {
            successors,
            indegree,
        }
    }

    /// Successor IDs of a task (tasks that depend on it), in
    /// table-definition order. Empty for unknown IDs or leaves.
    pub fn successors_of(&self, task_id: &str) -> &[String] {
        self.successors
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indegree (dependency count) of a task. `None` for unknown IDs.
    pub fn indegree_of(&self, task_id: &str) -> Option<usize> {
        self.indegree.get(task_id).copied()
    }

    /// A mutable copy of the indegree map, for the scheduler to consume.
    pub fn indegree_map(&self) -> HashMap<String, usize> {
        self.indegree.clone()
    }

    /// Number of tasks in the graph.
    pub fn task_count(&self) -> usize {
        self.indegree.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 15),
            Task::new("B", 20),
            Task::new("C", 10).with_deps(["A", "B"]),
            Task::new("D", 5).with_dep("C"),
        ]
    }

    #[test]
    fn test_build_successors() {
        let graph = DependencyGraph::build(&sample_tasks());
        assert_eq!(graph.successors_of("A"), ["C"]);
        assert_eq!(graph.successors_of("B"), ["C"]);
        assert_eq!(graph.successors_of("C"), ["D"]);
        assert!(graph.successors_of("D").is_empty());
    }

    #[test]
    fn test_build_indegrees() {
        let graph = DependencyGraph::build(&sample_tasks());
        assert_eq!(graph.indegree_of("A"), Some(0));
        assert_eq!(graph.indegree_of("B"), Some(0));
        assert_eq!(graph.indegree_of("C"), Some(2));
        assert_eq!(graph.indegree_of("D"), Some(1));
        assert_eq!(graph.indegree_of("Z"), None);
        assert_eq!(graph.task_count(), 4);
    }

    #[test]
    fn test_successor_order_is_definition_order() {
        // H, I, J all depend on G; successor list must follow table order.
        let tasks = vec![
            Task::new("G", 15),
            Task::new("H", 10).with_dep("G"),
            Task::new("I", 20).with_dep("G"),
            Task::new("J", 15).with_dep("G"),
        ];
        let graph = DependencyGraph::build(&tasks);
        assert_eq!(graph.successors_of("G"), ["H", "I", "J"]);
    }

    #[test]
    fn test_unknown_dependency_keeps_indegree_positive() {
        let tasks = vec![Task::new("A", 10).with_dep("GHOST")];
        let graph = DependencyGraph::build(&tasks);
        // "A" counts its ghost dependency; "GHOST" itself is not a task.
        assert_eq!(graph.indegree_of("A"), Some(1));
        assert_eq!(graph.indegree_of("GHOST"), None);
        assert_eq!(graph.successors_of("GHOST"), ["A"]);
    }

    #[test]
    fn test_empty_table() {
        let graph = DependencyGraph::build(&[]);
        assert_eq!(graph.task_count(), 0);
        assert!(graph.successors_of("A").is_empty());
    }
}
