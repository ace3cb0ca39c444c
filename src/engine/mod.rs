// src/engine/mod.rs

//! Activity status engine.
//!
//! - [`status`] derives `Completed` / `Unlocked` / `Locked` per activity from
//!   the graph and the completed set.
//! - [`completed`] holds the completed set and its persisted string form.
//! - [`snapshot`] packages everything a renderer needs in one value.

pub mod completed;
pub mod snapshot;
pub mod status;

pub use completed::{CompletedSet, DELIMITER};
pub use snapshot::{EdgeView, NodeView, Snapshot};
pub use status::StatusEngine;
pub use crate::types::Status;
