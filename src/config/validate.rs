// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{MapFile, RawMapFile};
use crate::engine::DELIMITER;
use crate::errors::{ActivityMapError, Result};

impl TryFrom<RawMapFile> for MapFile {
    type Error = ActivityMapError;

    fn try_from(raw: RawMapFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_map(&raw)?;
        Ok(MapFile::new_unchecked(raw))
    }
}

/// Structural checks only.
///
/// Dangling connections and duplicate labels are logged but accepted:
/// maps evolve, and the graph tolerates both.
fn validate_raw_map(raw: &RawMapFile) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_storage(raw)?;
    validate_nodes(raw)?;
    warn_on_connections(raw);
    Ok(())
}

fn ensure_has_nodes(raw: &RawMapFile) -> Result<()> {
    if raw.node.is_empty() {
        return Err(ActivityMapError::ConfigError(
            "map must contain at least one [[node]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_storage(raw: &RawMapFile) -> Result<()> {
    if raw.storage.key.trim().is_empty() {
        return Err(ActivityMapError::ConfigError(
            "[storage].key must not be empty".to_string(),
        ));
    }
    if raw.storage.dir.trim().is_empty() {
        return Err(ActivityMapError::ConfigError(
            "[storage].dir must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_nodes(raw: &RawMapFile) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, node) in raw.node.iter().enumerate() {
        if node.label.is_empty() {
            return Err(ActivityMapError::ConfigError(format!(
                "node #{index} has an empty label"
            )));
        }
        if node.label.contains(DELIMITER) {
            return Err(ActivityMapError::ConfigError(format!(
                "node '{}' contains the reserved completed-set delimiter",
                node.label
            )));
        }
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(ActivityMapError::ConfigError(format!(
                "node '{}' has a non-finite position ({}, {})",
                node.label, node.x, node.y
            )));
        }
        if !seen.insert(node.label.as_str()) {
            warn!(label = %node.label, "duplicate node label; only the first one is addressable");
        }
    }

    Ok(())
}

fn warn_on_connections(raw: &RawMapFile) {
    let labels: HashSet<&str> = raw.node.iter().map(|n| n.label.as_str()).collect();

    for conn in raw.connection.iter() {
        for (side, label) in [("from", &conn.from), ("to", &conn.to)] {
            if !labels.contains(label.as_str()) {
                warn!(
                    from = %conn.from,
                    to = %conn.to,
                    side,
                    "connection refers to an unknown node"
                );
            }
        }
    }
}
