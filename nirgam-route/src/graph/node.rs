//! Node types for the waypoint graph.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Permanent role of a node in the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Corner waypoint around a seat row.
    Waypoint,
    /// Exit; a permanent sink for every search.
    Goal,
}

/// A vertex of the waypoint graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in layout units.
    pub position: Point2D,
    /// Node role.
    pub kind: NodeKind,
}

impl Node {
    /// Create a waypoint node.
    #[inline]
    pub fn waypoint(position: Point2D) -> Self {
        Self {
            position,
            kind: NodeKind::Waypoint,
        }
    }

    /// Create a goal node.
    #[inline]
    pub fn goal(position: Point2D) -> Self {
        Self {
            position,
            kind: NodeKind::Goal,
        }
    }

    /// Check if this node is an exit.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.kind == NodeKind::Goal
    }

    /// Get the color for SVG visualization.
    pub fn svg_color(&self) -> &'static str {
        match self.kind {
            NodeKind::Waypoint => "blue",
            NodeKind::Goal => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let w = Node::waypoint(Point2D::new(1.0, 2.0));
        assert_eq!(w.position, Point2D::new(1.0, 2.0));
        assert_eq!(w.kind, NodeKind::Waypoint);
        assert!(!w.is_goal());

        let g = Node::goal(Point2D::ZERO);
        assert!(g.is_goal());
    }

    #[test]
    fn test_svg_colors() {
        assert_eq!(Node::waypoint(Point2D::ZERO).svg_color(), "blue");
        assert_eq!(Node::goal(Point2D::ZERO).svg_color(), "red");
    }
}
