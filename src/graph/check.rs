// src/graph/check.rs

//! Data-integrity diagnostics for a loaded [`ActivityGraph`].
//!
//! Loading is permissive, so nothing here is enforced at load time. This
//! pass reports what loading tolerated:
//! - connections with an endpoint that did not resolve,
//! - labels shared by several nodes,
//! - prerequisite cycles (which make `status()` fail for the nodes involved),
//! - connections whose dependent is drawn at or above its prerequisite.

use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::debug;

use crate::graph::graph::ActivityGraph;

/// A connection with at least one missing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedEdge {
    /// Position of the connection in load order.
    pub index: usize,
    pub from: String,
    pub to: String,
    pub from_missing: bool,
    pub to_missing: bool,
}

/// A connection where `to.y <= from.y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpwardEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub unresolved: Vec<UnresolvedEdge>,
    pub duplicates: Vec<String>,
    /// Each entry is one cycle group, labels in node order.
    pub cycles: Vec<Vec<String>>,
    pub upward_edges: Vec<UpwardEdge>,
}

impl CheckReport {
    /// Upward edges are advisory and do not count.
    pub fn is_ok(&self) -> bool {
        self.unresolved.is_empty() && self.duplicates.is_empty() && self.cycles.is_empty()
    }
}

pub fn check_graph(graph: &ActivityGraph) -> CheckReport {
    let mut report = CheckReport {
        duplicates: graph.duplicate_labels(),
        ..CheckReport::default()
    };

    for (index, edge) in graph.edges().iter().enumerate() {
        let Some((from, to)) = edge.endpoints() else {
            report.unresolved.push(UnresolvedEdge {
                index,
                from: edge.from_label.clone(),
                to: edge.to_label.clone(),
                from_missing: edge.from.is_none(),
                to_missing: edge.to.is_none(),
            });
            continue;
        };

        if let (Some(f), Some(t)) = (graph.node(from), graph.node(to)) {
            if t.y <= f.y {
                report.upward_edges.push(UpwardEdge {
                    from: f.label.clone(),
                    to: t.label.clone(),
                });
            }
        }
    }

    report.cycles = find_cycles(graph);

    debug!(
        unresolved = report.unresolved.len(),
        duplicates = report.duplicates.len(),
        cycles = report.cycles.len(),
        upward = report.upward_edges.len(),
        "graph integrity check finished"
    );

    report
}

/// Strongly connected components with more than one node, plus self-loops.
fn find_cycles(graph: &ActivityGraph) -> Vec<Vec<String>> {
    // Node indices line up with `NodeId::index()` because nodes are added in
    // insertion order.
    let mut pg: DiGraph<&str, ()> = DiGraph::with_capacity(graph.len(), graph.edges().len());
    for (_, node) in graph.nodes() {
        pg.add_node(node.label.as_str());
    }

    let mut self_loops = Vec::new();
    for (from, to) in graph.edges().iter().filter_map(|e| e.endpoints()) {
        if from == to {
            self_loops.push(from.index());
        }
        pg.add_edge(NodeIndex::new(from.index()), NodeIndex::new(to.index()), ());
    }

    let mut groups: Vec<Vec<usize>> = kosaraju_scc(&pg)
        .into_iter()
        .map(|component| component.into_iter().map(|ix| ix.index()).collect::<Vec<_>>())
        .filter(|component| component.len() > 1 || self_loops.contains(&component[0]))
        .collect();

    for group in groups.iter_mut() {
        group.sort_unstable();
    }
    groups.sort_unstable();

    groups
        .into_iter()
        .map(|group| group.into_iter().map(|i| pg[NodeIndex::new(i)].to_string()).collect())
        .collect()
}
