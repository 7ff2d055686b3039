//! Waypoint graph built from a venue layout.
//!
//! Nodes are addressed by stable `usize` index into an arena. The graph is
//! immutable once built; all per-search bookkeeping lives in
//! [`crate::search::SearchState`].
//!
//! # Construction
//!
//! 1. Four corner waypoints are proposed around every seat row group and
//!    deduplicated with [`merge_or_insert`].
//! 2. One goal node is appended per exit, without deduplication.
//! 3. Static visibility edges are recorded from every waypoint to every node
//!    it has a clear corridor to.

mod builder;
#[allow(clippy::module_inception)]
mod graph;
mod node;

pub use builder::{GraphBuilder, MergeOutcome, merge_or_insert, propose_row_waypoints};
pub use graph::NavGraph;
pub use node::{Node, NodeKind};
