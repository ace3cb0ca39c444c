// src/graph/mod.rs

//! Activity graph model.
//!
//! - [`graph`] holds the nodes and prerequisite edges, in load order.
//! - [`dimensions`] is the bounding box used by renderers.
//! - [`check`] reports data-integrity defects tolerated during loading.

pub mod check;
pub mod dimensions;
pub mod graph;

pub use check::{CheckReport, check_graph};
pub use dimensions::Dimensions;
pub use graph::{ActivityGraph, Edge, Node, NodeId};
