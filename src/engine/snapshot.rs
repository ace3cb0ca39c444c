// src/engine/snapshot.rs

//! Render-ready view of the engine state.
//!
//! The view layer draws from a [`Snapshot`] instead of walking the graph
//! itself, so the skipping of broken connections happens in one place.

use serde::Serialize;
use tracing::warn;

use crate::engine::status::StatusEngine;
use crate::errors::Result;
use crate::graph::Dimensions;
use crate::types::Status;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub dimensions: Dimensions,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl Snapshot {
    /// Capture statuses and drawable connections.
    ///
    /// Connections with a missing endpoint are left out with a warning. A
    /// cyclic prerequisite chain fails the whole capture.
    pub fn capture(engine: &StatusEngine) -> Result<Self> {
        let graph = engine.graph();

        let mut edges = Vec::with_capacity(graph.edges().len());
        for edge in graph.edges() {
            if edge.from.is_none() {
                warn!(from = %edge.from_label, "nonexistent connection node (from)");
                continue;
            }
            if edge.to.is_none() {
                warn!(to = %edge.to_label, "nonexistent connection node (to)");
                continue;
            }
            edges.push(EdgeView {
                from: edge.from_label.clone(),
                to: edge.to_label.clone(),
            });
        }

        let nodes = graph
            .nodes()
            .map(|(id, node)| {
                Ok(NodeView {
                    label: node.label.clone(),
                    x: node.x,
                    y: node.y,
                    status: engine.status(id)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dimensions: graph.dimensions(),
            nodes,
            edges,
        })
    }

    /// Nodes with the given status, in node order.
    pub fn with_status(&self, status: Status) -> impl Iterator<Item = &NodeView> {
        self.nodes.iter().filter(move |n| n.status == status)
    }
}
