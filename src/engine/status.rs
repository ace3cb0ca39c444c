// src/engine/status.rs

use tracing::{debug, trace};

use crate::engine::completed::CompletedSet;
use crate::errors::{ActivityMapError, Result};
use crate::graph::{ActivityGraph, NodeId};
use crate::types::Status;

/// Owns the activity graph plus the user's completed set, and derives
/// per-activity status from them.
///
/// Status is recomputed on every query; nothing is cached, so toggling an
/// activity is immediately reflected in its dependents.
#[derive(Debug, Clone)]
pub struct StatusEngine {
    graph: ActivityGraph,
    completed: CompletedSet,
}

impl StatusEngine {
    pub fn new(graph: ActivityGraph) -> Self {
        Self {
            graph,
            completed: CompletedSet::new(),
        }
    }

    pub fn graph(&self) -> &ActivityGraph {
        &self.graph
    }

    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    pub fn is_completed(&self, id: NodeId) -> bool {
        self.completed.contains(id)
    }

    /// Derive the status of one activity.
    ///
    /// - `Completed` if the activity is in the completed set.
    /// - `Locked` if any direct prerequisite is not `Completed`. A prerequisite
    ///   that is merely `Unlocked` still locks its dependents.
    /// - `Unlocked` otherwise, including when there are no prerequisites.
    ///
    /// Prerequisites are evaluated recursively in edge order and evaluation
    /// stops at the first one that is not completed. Returns
    /// [`ActivityMapError::CyclicDependency`] if an activity is reached again
    /// through its own prerequisite chain.
    pub fn status(&self, id: NodeId) -> Result<Status> {
        let mut chain = Vec::new();
        self.status_on_chain(id, &mut chain)
    }

    fn status_on_chain(&self, id: NodeId, chain: &mut Vec<NodeId>) -> Result<Status> {
        if chain.contains(&id) {
            let mut labels: Vec<String> = chain
                .iter()
                .map(|&c| self.graph.label(c).to_string())
                .collect();
            labels.push(self.graph.label(id).to_string());
            debug!(chain = ?labels, "cyclic prerequisite chain");
            return Err(ActivityMapError::CyclicDependency { chain: labels });
        }

        if self.completed.contains(id) {
            return Ok(Status::Completed);
        }

        chain.push(id);
        let mut status = Status::Unlocked;
        for prereq in self.graph.prerequisites_of(id) {
            if self.status_on_chain(prereq, chain)? != Status::Completed {
                status = Status::Locked;
                break;
            }
        }
        chain.pop();

        trace!(activity = %self.graph.label(id), %status, "derived status");
        Ok(status)
    }

    /// Status of every activity, in node order.
    pub fn statuses(&self) -> Result<Vec<(NodeId, Status)>> {
        self.graph
            .node_ids()
            .map(|id| Ok((id, self.status(id)?)))
            .collect()
    }

    /// Flip the completed flag. Returns whether the activity is completed
    /// afterwards.
    pub fn toggle_completed(&mut self, id: NodeId) -> bool {
        let now = self.completed.toggle(id);
        debug!(activity = %self.graph.label(id), completed = now, "toggled activity");
        now
    }

    pub fn mark_completed(&mut self, id: NodeId) {
        if self.completed.insert(id) {
            debug!(activity = %self.graph.label(id), "marked as completed");
        }
    }

    pub fn mark_not_completed(&mut self, id: NodeId) {
        if self.completed.remove(id) {
            debug!(activity = %self.graph.label(id), "marked as not completed");
        }
    }

    /// Replace the completed set from its persisted form.
    ///
    /// Labels unknown to the current graph are dropped silently.
    pub fn load_completed(&mut self, serialized: &str) {
        self.completed = CompletedSet::parse(serialized, &self.graph);
        debug!(count = self.completed.len(), "loaded completed activities");
    }

    /// Persisted form of the completed set.
    pub fn save_completed(&self) -> String {
        self.completed.serialize(&self.graph)
    }

    /// Labels of completed activities, in completion order.
    pub fn completed_labels(&self) -> Vec<&str> {
        self.completed.iter().map(|id| self.graph.label(id)).collect()
    }

    /// Resolve a label, failing with [`ActivityMapError::NodeNotFound`].
    pub fn require(&self, label: &str) -> Result<NodeId> {
        self.graph
            .find_node_by_label(label)
            .ok_or_else(|| ActivityMapError::NodeNotFound(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(nodes: &[&str], edges: &[(&str, &str)]) -> StatusEngine {
        let mut graph = ActivityGraph::new();
        graph.load_nodes(
            nodes
                .iter()
                .enumerate()
                .map(|(i, label)| (0.0, i as f64 * 100.0, *label)),
        );
        graph.load_connections(edges.iter().copied());
        StatusEngine::new(graph)
    }

    #[test]
    fn unlocked_prerequisite_still_locks_dependent() {
        let engine = engine(&["A", "B"], &[("A", "B")]);
        let a = engine.require("A").unwrap();
        let b = engine.require("B").unwrap();

        assert_eq!(engine.status(a).unwrap(), Status::Unlocked);
        assert_eq!(engine.status(b).unwrap(), Status::Locked);
    }

    #[test]
    fn completed_node_inside_a_cycle_breaks_it() {
        let mut engine = engine(&["A", "B"], &[("A", "B"), ("B", "A")]);
        let a = engine.require("A").unwrap();
        let b = engine.require("B").unwrap();
        engine.mark_completed(a);

        assert_eq!(engine.status(b).unwrap(), Status::Unlocked);
        assert_eq!(engine.status(a).unwrap(), Status::Completed);
    }

    #[test]
    fn cycle_error_names_the_chain() {
        let engine = engine(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        let a = engine.require("A").unwrap();

        match engine.status(a) {
            Err(ActivityMapError::CyclicDependency { chain }) => {
                assert_eq!(chain, vec!["A", "C", "B", "A"]);
            }
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn require_reports_unknown_label() {
        let engine = engine(&["A"], &[]);
        assert!(matches!(
            engine.require("nope"),
            Err(ActivityMapError::NodeNotFound(label)) if label == "nope"
        ));
    }
}
