// src/config/mod.rs

//! Activity map files.
//!
//! - TOML-backed data model (`model.rs`).
//! - Loading from disk (`loader.rs`).
//! - Structural validation (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_map_path, load_and_validate, load_from_path};
pub use model::{ConnectionConfig, MapFile, MapSection, NodeConfig, RawMapFile, StorageSection};
