#![allow(dead_code)]

use activitymap::config::{
    ConnectionConfig, MapFile, MapSection, NodeConfig, RawMapFile, StorageSection,
};
use activitymap::engine::StatusEngine;
use activitymap::graph::ActivityGraph;

/// Builder for `MapFile` to simplify test setup.
pub struct MapFileBuilder {
    map: RawMapFile,
}

impl MapFileBuilder {
    pub fn new() -> Self {
        Self {
            map: RawMapFile {
                map: MapSection::default(),
                storage: StorageSection::default(),
                node: Vec::new(),
                connection: Vec::new(),
            },
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.map.map.name = Some(name.to_string());
        self
    }

    pub fn with_node(mut self, label: &str, x: f64, y: f64) -> Self {
        self.map.node.push(NodeConfig {
            label: label.to_string(),
            x,
            y,
        });
        self
    }

    pub fn with_connection(mut self, from: &str, to: &str) -> Self {
        self.map.connection.push(ConnectionConfig {
            from: from.to_string(),
            to: to.to_string(),
        });
        self
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.map.storage.key = key.to_string();
        self
    }

    pub fn raw(self) -> RawMapFile {
        self.map
    }

    pub fn build(self) -> MapFile {
        MapFile::try_from(self.map).expect("Failed to build valid map from builder")
    }
}

impl Default for MapFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Graph from labels and `(from, to)` pairs.
///
/// Nodes are laid out top to bottom in the order given, so every
/// connection from an earlier to a later label points downwards.
pub fn graph(labels: &[&str], connections: &[(&str, &str)]) -> ActivityGraph {
    let mut graph = ActivityGraph::new();
    graph.load_nodes(
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| (0.0, i as f64 * 125.0, *label)),
    );
    graph.load_connections(connections.iter().copied());
    graph
}

/// Engine over [`graph`] with the given labels already completed.
pub fn engine(
    labels: &[&str],
    connections: &[(&str, &str)],
    completed: &[&str],
) -> StatusEngine {
    let mut engine = StatusEngine::new(graph(labels, connections));
    for label in completed {
        let id = engine
            .graph()
            .find_node_by_label(label)
            .unwrap_or_else(|| panic!("unknown label in test setup: {label}"));
        engine.mark_completed(id);
    }
    engine
}
