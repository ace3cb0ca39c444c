// src/graph/graph.rs

use tracing::{debug, warn};

use crate::graph::dimensions::Dimensions;

/// Index of a node inside its [`ActivityGraph`].
///
/// Ids are only meaningful for the graph that produced them and are
/// invalidated by the next [`ActivityGraph::load_nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labeled, positioned activity.
///
/// Coordinates are only used for rendering; the status algorithm never
/// looks at them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// A prerequisite connection: `to` depends on `from`.
///
/// Endpoints that did not resolve at load time are `None`; the raw labels
/// are kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: Option<NodeId>,
    pub to: Option<NodeId>,
    pub from_label: String,
    pub to_label: String,
}

impl Edge {
    /// Both endpoints, if both resolved.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        Some((self.from?, self.to?))
    }
}

/// Directed prerequisite graph of activities.
///
/// Nodes keep insertion order so that rendering and status listings are
/// deterministic. The graph is bulk-loaded once and not mutated afterwards.
///
/// Labels are expected to be unique. This is not enforced: with duplicate
/// labels, [`find_node_by_label`](Self::find_node_by_label) returns the
/// first match in insertion order and the later nodes are unreachable by
/// label. `check::check_graph` reports such duplicates.
#[derive(Debug, Clone, Default)]
pub struct ActivityGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl ActivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all nodes with the given `(x, y, label)` entries.
    ///
    /// Existing edges are dropped too, since their node ids would no longer
    /// point at the same activities.
    pub fn load_nodes<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (f64, f64, S)>,
        S: Into<String>,
    {
        let nodes: Vec<Node> = entries
            .into_iter()
            .map(|(x, y, label)| Node {
                label: label.into(),
                x,
                y,
            })
            .collect();

        let dupes = duplicate_labels_in(&nodes);
        if !dupes.is_empty() {
            warn!(
                labels = ?dupes,
                "duplicate activity labels; lookups resolve to the first occurrence"
            );
        }

        debug!(count = nodes.len(), "loaded activity nodes");
        self.nodes = nodes;
        self.edges.clear();
    }

    /// Replace all edges with the given `(from_label, to_label)` entries.
    ///
    /// Labels are resolved against the current nodes. A label that does not
    /// resolve leaves that endpoint empty; the rest of the batch loads
    /// normally.
    pub fn load_connections<I, A, B>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let edges: Vec<Edge> = entries
            .into_iter()
            .map(|(from_label, to_label)| {
                let from_label = from_label.into();
                let to_label = to_label.into();
                let from = self.find_node_by_label(&from_label);
                let to = self.find_node_by_label(&to_label);

                if from.is_none() {
                    warn!(from = %from_label, to = %to_label, "connection has unknown `from` activity");
                }
                if to.is_none() {
                    warn!(from = %from_label, to = %to_label, "connection has unknown `to` activity");
                }

                Edge {
                    from,
                    to,
                    from_label,
                    to_label,
                }
            })
            .collect();

        debug!(count = edges.len(), "loaded activity connections");
        self.edges = edges;
    }

    /// First node with exactly this label (case-sensitive), in insertion order.
    pub fn find_node_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.label == label)
            .map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Label of a node id. Panics on ids from another graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct prerequisites of `id`, in edge order.
    ///
    /// Edges with an unresolved endpoint are skipped.
    pub fn prerequisites_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |edge| match edge.endpoints() {
            Some((from, to)) if to == id => Some(from),
            _ => None,
        })
    }

    /// Direct dependents of `id`, in edge order.
    pub fn dependents_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |edge| match edge.endpoints() {
            Some((from, to)) if from == id => Some(to),
            _ => None,
        })
    }

    /// Labels that occur on more than one node, in first-seen order.
    pub fn duplicate_labels(&self) -> Vec<String> {
        duplicate_labels_in(&self.nodes)
    }

    /// Bounding box over all nodes, seeded with zero.
    ///
    /// Because the fold starts at zero, the origin is always inside the
    /// box: all-positive or all-negative coordinates are stretched to reach
    /// it. See [`tight_dimensions`](Self::tight_dimensions) for a box that
    /// hugs the nodes.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::fold(self.nodes.iter().map(|n| (n.x, n.y)), (0.0, 0.0))
    }

    /// Bounding box over all nodes, seeded with the first node.
    ///
    /// `None` for an empty graph.
    pub fn tight_dimensions(&self) -> Option<Dimensions> {
        let first = self.nodes.first()?;
        Some(Dimensions::fold(
            self.nodes.iter().map(|n| (n.x, n.y)),
            (first.x, first.y),
        ))
    }
}

fn duplicate_labels_in(nodes: &[Node]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes: Vec<String> = Vec::new();

    for node in nodes {
        if !seen.insert(node.label.as_str()) && !dupes.contains(&node.label) {
            dupes.push(node.label.clone());
        }
    }

    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActivityGraph {
        let mut graph = ActivityGraph::new();
        graph.load_nodes([(0.0, 0.0, "A"), (10.0, 100.0, "B"), (20.0, 200.0, "C")]);
        graph.load_connections([("A", "B"), ("B", "C"), ("A", "C")]);
        graph
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let graph = sample();
        assert!(graph.find_node_by_label("A").is_some());
        assert!(graph.find_node_by_label("a").is_none());
    }

    #[test]
    fn duplicate_labels_resolve_to_first_node() {
        let mut graph = ActivityGraph::new();
        graph.load_nodes([(1.0, 1.0, "X"), (2.0, 2.0, "Y"), (3.0, 3.0, "X")]);

        let id = graph.find_node_by_label("X").unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(graph.duplicate_labels(), vec!["X".to_string()]);
    }

    #[test]
    fn unresolved_connection_keeps_the_rest_of_the_batch() {
        let mut graph = ActivityGraph::new();
        graph.load_nodes([(0.0, 0.0, "A"), (0.0, 1.0, "B")]);
        graph.load_connections([("A", "B"), ("Ghost", "B"), ("A", "Nowhere")]);

        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert!(edges[0].endpoints().is_some());
        assert_eq!(edges[1].from, None);
        assert!(edges[1].to.is_some());
        assert!(edges[2].from.is_some());
        assert_eq!(edges[2].to, None);
        assert_eq!(edges[2].to_label, "Nowhere");
    }

    #[test]
    fn prerequisites_and_dependents_follow_edge_order() {
        let graph = sample();
        let a = graph.find_node_by_label("A").unwrap();
        let b = graph.find_node_by_label("B").unwrap();
        let c = graph.find_node_by_label("C").unwrap();

        assert_eq!(graph.prerequisites_of(c).collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(graph.dependents_of(a).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(graph.prerequisites_of(a).count(), 0);
    }

    #[test]
    fn reloading_nodes_drops_stale_edges() {
        let mut graph = sample();
        graph.load_nodes([(0.0, 0.0, "Z")]);
        assert!(graph.edges().is_empty());
        assert_eq!(graph.len(), 1);
    }
}
