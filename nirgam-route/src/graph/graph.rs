//! The built waypoint graph.

use crate::core::{Point2D, Rect};
use crate::geometry::corridor_clear;

use super::node::Node;

/// Waypoint graph for one venue layout.
///
/// Holds the nodes, the seat obstacles used for corridor tests and the
/// static visibility edges computed at build time.
#[derive(Clone, Debug)]
pub struct NavGraph {
    /// All nodes; waypoints first, then goals.
    nodes: Vec<Node>,

    /// Static visibility: edges[i] = nodes reachable from i by a clear corridor.
    /// Goal nodes have no outgoing edges.
    edges: Vec<Vec<usize>>,

    /// Seat rectangles.
    obstacles: Vec<Rect>,

    /// Corridor half-width.
    corridor_tolerance: f64,
}

impl NavGraph {
    /// Assemble a graph from nodes and obstacles and compute visibility edges.
    pub fn new(nodes: Vec<Node>, obstacles: Vec<Rect>, corridor_tolerance: f64) -> Self {
        let mut graph = Self {
            edges: vec![Vec::new(); nodes.len()],
            nodes,
            obstacles,
            corridor_tolerance,
        };
        graph.build_edges();
        graph
    }

    /// Record every clear corridor leaving a non-goal node.
    fn build_edges(&mut self) {
        let n = self.nodes.len();

        for i in 0..n {
            if self.nodes[i].is_goal() {
                continue;
            }
            for j in 0..n {
                if i != j && self.is_clear(self.nodes[i].position, self.nodes[j].position) {
                    self.edges[i].push(j);
                }
            }
        }
    }

    /// Check the corridor between two arbitrary points against the seats.
    #[inline]
    pub fn is_clear(&self, from: Point2D, to: Point2D) -> bool {
        corridor_clear(from, to, self.corridor_tolerance, &self.obstacles)
    }

    /// Get all nodes in the graph.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by index.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Position of a node. Panics on an out-of-range index.
    #[inline]
    pub fn position(&self, index: usize) -> Point2D {
        self.nodes[index].position
    }

    /// Get the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices of goal nodes.
    pub fn goal_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_goal())
            .map(|(idx, _)| idx)
    }

    /// Number of goal nodes.
    pub fn goal_count(&self) -> usize {
        self.goal_indices().count()
    }

    /// Get the static visibility adjacency list.
    pub fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// Number of directed visibility edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Seat obstacles.
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Corridor half-width used for every clearance test.
    pub fn corridor_tolerance(&self) -> f64 {
        self.corridor_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat() -> Vec<Rect> {
        vec![Rect::new(50.0, 50.0, 200.0, 200.0)]
    }

    #[test]
    fn test_empty_graph() {
        let graph = NavGraph::new(Vec::new(), seat(), 25.0);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.goal_count(), 0);
    }

    #[test]
    fn test_visibility_edges_skip_blocked_and_goal_sources() {
        let nodes = vec![
            Node::waypoint(Point2D::new(100.0, 205.0)),
            Node::waypoint(Point2D::new(100.0, 100.0)),
            Node::goal(Point2D::new(400.0, 205.0)),
        ];
        let graph = NavGraph::new(nodes, seat(), 25.0);

        // 0 -> 2 passes through the seat
        assert!(!graph.edges()[0].contains(&2));
        assert!(graph.edges()[0].contains(&1));
        assert!(graph.edges()[1].contains(&0));
        assert!(graph.edges()[1].contains(&2));
        // Goals are sinks
        assert!(graph.edges()[2].is_empty());
        assert_eq!(graph.goal_indices().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_node_access() {
        let graph = NavGraph::new(vec![Node::waypoint(Point2D::new(1.0, 2.0))], Vec::new(), 25.0);
        assert_eq!(graph.position(0), Point2D::new(1.0, 2.0));
        assert!(graph.node(1).is_none());
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.corridor_tolerance(), 25.0);
    }
}
