// src/config/model.rs

use serde::Deserialize;

use crate::graph::ActivityGraph;

/// Activity map as read from a TOML file, before validation.
///
/// ```toml
/// [map]
/// name = "Scratch"
///
/// [storage]
/// dir = ".activitymap"
/// key = "completedActivities"
///
/// [[node]]
/// label = "Sprites"
/// x = -500
/// y = 0
///
/// [[connection]]
/// from = "Sprites"
/// to = "Sprite positions"
/// ```
///
/// All sections are optional; an empty node list is rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMapFile {
    #[serde(default)]
    pub map: MapSection,

    #[serde(default)]
    pub storage: StorageSection,

    /// `[[node]]` entries, in drawing order.
    #[serde(default)]
    pub node: Vec<NodeConfig>,

    /// `[[connection]]` entries.
    #[serde(default)]
    pub connection: Vec<ConnectionConfig>,
}

/// A validated activity map. Obtain one through `TryFrom<RawMapFile>` or
/// `config::load_and_validate`.
#[derive(Debug, Clone)]
pub struct MapFile {
    pub map: MapSection,
    pub storage: StorageSection,
    pub node: Vec<NodeConfig>,
    pub connection: Vec<ConnectionConfig>,
}

impl MapFile {
    pub(crate) fn new_unchecked(raw: RawMapFile) -> Self {
        Self {
            map: raw.map,
            storage: raw.storage,
            node: raw.node,
            connection: raw.connection,
        }
    }

    /// Load nodes and connections into a fresh graph.
    pub fn build_graph(&self) -> ActivityGraph {
        let mut graph = ActivityGraph::new();
        graph.load_nodes(self.node.iter().map(|n| (n.x, n.y, n.label.as_str())));
        graph.load_connections(
            self.connection
                .iter()
                .map(|c| (c.from.as_str(), c.to.as_str())),
        );
        graph
    }
}

/// `[map]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MapSection {
    /// Display name, only used in output headers.
    #[serde(default)]
    pub name: Option<String>,
}

/// `[storage]` section: where the completed set is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Directory of the file store. Relative paths are resolved against the
    /// directory containing the map file.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the completed set is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".activitymap".to_string()
}

fn default_storage_key() -> String {
    "completedActivities".to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// `[[node]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// `[[connection]]` entry: `to` depends on `from`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub from: String,
    pub to: String,
}
