// src/engine/completed.rs

//! The set of activities the user marked as completed, and its persisted
//! string form.

use tracing::debug;

use crate::graph::{ActivityGraph, NodeId};

/// Separator between labels in the persisted completed-set string.
///
/// Existing stores hold exactly this sequence (UTF-8 `e0 b8 a2 e0 b8 87`),
/// so it must not change.
pub const DELIMITER: &str = "\u{0E22}\u{0E07}";

/// Completed activities, in the order they were completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedSet {
    ids: Vec<NodeId>,
}

impl CompletedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `true` if the id was not already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&c| c == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Flip membership. Returns whether the id is completed afterwards.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Parse a persisted string against `graph`.
    ///
    /// Labels that no longer exist in the graph are dropped: they come from
    /// an older version of the map. Empty segments (including the empty
    /// string as a whole) are ignored, and repeated labels count once.
    pub fn parse(serialized: &str, graph: &ActivityGraph) -> Self {
        let mut set = Self::new();

        for label in serialized.split(DELIMITER).filter(|s| !s.is_empty()) {
            match graph.find_node_by_label(label) {
                Some(id) => {
                    set.insert(id);
                }
                None => debug!(label, "dropping stale completed activity"),
            }
        }

        set
    }

    /// Join the labels of all completed activities with [`DELIMITER`].
    pub fn serialize(&self, graph: &ActivityGraph) -> String {
        self.ids
            .iter()
            .map(|&id| graph.label(id))
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> ActivityGraph {
        let mut graph = ActivityGraph::new();
        graph.load_nodes([(0.0, 0.0, "Lists"), (0.0, 1.0, "Lists as text")]);
        graph
    }

    #[test]
    fn delimiter_matches_stored_bytes() {
        assert_eq!(DELIMITER.as_bytes(), &[0xe0, 0xb8, 0xa2, 0xe0, 0xb8, 0x87]);
    }

    #[test]
    fn serialize_keeps_completion_order() {
        let graph = graph();
        let mut set = CompletedSet::new();
        set.insert(graph.find_node_by_label("Lists as text").unwrap());
        set.insert(graph.find_node_by_label("Lists").unwrap());

        assert_eq!(
            set.serialize(&graph),
            format!("Lists as text{DELIMITER}Lists")
        );
    }

    #[test]
    fn empty_string_parses_to_empty_set() {
        assert!(CompletedSet::parse("", &graph()).is_empty());
    }

    #[test]
    fn repeated_labels_count_once() {
        let raw = format!("Lists{DELIMITER}Lists{DELIMITER}{DELIMITER}Gone");
        let set = CompletedSet::parse(&raw, &graph());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggle_flips_membership() {
        let graph = graph();
        let id = graph.find_node_by_label("Lists").unwrap();
        let mut set = CompletedSet::new();

        assert!(set.toggle(id));
        assert!(set.contains(id));
        assert!(!set.toggle(id));
        assert!(!set.contains(id));
    }
}
