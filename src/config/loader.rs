// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{MapFile, RawMapFile};
use crate::errors::Result;

/// Read and deserialize a map file without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawMapFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let map: RawMapFile = toml::from_str(&contents)?;
    debug!(
        ?path,
        nodes = map.node.len(),
        connections = map.connection.len(),
        "parsed map file"
    );

    Ok(map)
}

/// Read, deserialize and validate a map file.
///
/// This is the entry point used by the CLI. Validation rejects maps that
/// cannot work at all (no nodes, empty labels, non-finite positions, an
/// empty storage key) and only warns about dangling connections and
/// duplicate labels.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<MapFile> {
    let raw = load_from_path(&path)?;
    MapFile::try_from(raw)
}

/// Map file used when `--map` is not given.
pub fn default_map_path() -> PathBuf {
    PathBuf::from("ActivityMap.toml")
}
