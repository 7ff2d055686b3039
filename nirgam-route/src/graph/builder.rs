//! Waypoint proposal and deduplication.

use log::debug;

use crate::config::PlannerConfig;
use crate::core::{Point2D, Rect};
use crate::layout::Layout;

use super::graph::NavGraph;
use super::node::Node;

/// What [`merge_or_insert`] did with a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The candidate was folded into the existing node at this index.
    Merged(usize),
    /// The candidate was appended at this index.
    Inserted(usize),
}

impl MergeOutcome {
    /// Index of the node that now represents the candidate.
    pub fn index(self) -> usize {
        match self {
            MergeOutcome::Merged(idx) | MergeOutcome::Inserted(idx) => idx,
        }
    }
}

/// Merge `candidate` into the first node closer than `tolerance`, or append it.
///
/// A merged node moves to the midpoint of its old position and the
/// candidate. First match wins, so later candidates can be pulled into an
/// already-merged node.
pub fn merge_or_insert(candidate: Node, nodes: &mut Vec<Node>, tolerance: f64) -> MergeOutcome {
    if let Some((idx, existing)) = nodes
        .iter_mut()
        .enumerate()
        .find(|(_, node)| node.position.distance(candidate.position) < tolerance)
    {
        existing.position = existing.position.midpoint(candidate.position);
        return MergeOutcome::Merged(idx);
    }

    nodes.push(candidate);
    MergeOutcome::Inserted(nodes.len() - 1)
}

/// Corner waypoints around one seat row group.
///
/// Offsets use the first seat's half-extent for both ends of the row.
/// Order: first-top, first-bottom, last-top, last-bottom. Returns `None`
/// for an empty group.
pub fn propose_row_waypoints(row: &[Rect], offset: f64) -> Option<[Point2D; 4]> {
    let first = row.first()?;
    let last = row.last()?;

    let dx = first.half_width() + offset;
    let dy = first.half_height() + offset;

    Some([
        Point2D::new(first.position_x - dx, first.position_y - dy),
        Point2D::new(first.position_x - dx, first.position_y + dy),
        Point2D::new(last.position_x + dx, last.position_y - dy),
        Point2D::new(last.position_x + dx, last.position_y + dy),
    ])
}

/// Builds a [`NavGraph`] from a [`Layout`].
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    config: PlannerConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Deduplicated waypoint nodes for every row group, in layout order.
    pub fn waypoints(&self, layout: &Layout) -> Vec<Node> {
        let mut nodes = Vec::new();

        for row in &layout.seats {
            let Some(corners) = propose_row_waypoints(row, self.config.waypoint_offset) else {
                continue;
            };
            for corner in corners {
                merge_or_insert(Node::waypoint(corner), &mut nodes, self.config.merge_tolerance);
            }
        }

        nodes
    }

    /// Build the full graph: waypoints, then one goal node per exit.
    pub fn build(&self, layout: &Layout) -> NavGraph {
        let mut nodes = self.waypoints(layout);
        let waypoint_count = nodes.len();

        nodes.extend(layout.goals.iter().map(|goal| Node::goal(goal.center())));

        let graph = NavGraph::new(nodes, layout.obstacles(), self.config.corridor_tolerance);

        debug!(
            "[GraphBuilder] {} waypoints, {} goals, {} visibility edges",
            waypoint_count,
            graph.len() - waypoint_count,
            graph.edge_count()
        );

        graph
    }

    /// Get the configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
