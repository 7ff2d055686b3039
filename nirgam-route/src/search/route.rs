//! Owned route snapshots.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::graph::NavGraph;

use super::state::{NodeStatus, SearchState};

/// A node on a route, copied out of the search state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteWaypoint {
    /// Graph index of the node when the route was captured.
    pub index: usize,
    /// Node position.
    pub position: Point2D,
    /// Accumulated cost from the start.
    pub cost: f64,
    /// Status at capture time (determined, or goal for the last waypoint).
    pub status: NodeStatus,
}

/// Waypoints from (but excluding) the start to the chosen exit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints in traversal order.
    pub waypoints: Vec<RouteWaypoint>,
    /// Cost of the final waypoint; 0 for an empty route.
    pub total_cost: f64,
}

impl Route {
    /// Create a route from waypoints in traversal order.
    pub fn new(waypoints: Vec<RouteWaypoint>) -> Self {
        let total_cost = waypoints.last().map_or(0.0, |w| w.cost);
        Self {
            waypoints,
            total_cost,
        }
    }

    /// Positions in traversal order.
    pub fn positions(&self) -> Vec<Point2D> {
        self.waypoints.iter().map(|w| w.position).collect()
    }

    /// The exit the route ends at.
    pub fn goal(&self) -> Option<&RouteWaypoint> {
        self.waypoints.last()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Euclidean length of the polyline `start -> waypoints...`.
    pub fn length_from(&self, start: Point2D) -> f64 {
        let mut previous = start;
        let mut total = 0.0;
        for waypoint in &self.waypoints {
            total += previous.distance(waypoint.position);
            previous = waypoint.position;
        }
        total
    }
}

/// Follow back-references from `goal` to the start and snapshot the nodes.
///
/// The start itself ends the walk and is not part of the route.
pub fn reconstruct_route(graph: &NavGraph, state: &SearchState, goal: usize) -> Route {
    let mut waypoints = Vec::new();
    let mut current = goal;

    while state.status(current) != NodeStatus::Start {
        waypoints.push(RouteWaypoint {
            index: current,
            position: state.position(graph, current),
            cost: state.cost(current),
            status: state.status(current),
        });

        match state.back(current) {
            Some(previous) => current = previous,
            None => break,
        }
    }

    waypoints.reverse();
    Route::new(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    #[test]
    fn test_reconstruct_chain() {
        let graph = NavGraph::new(
            vec![
                Node::waypoint(Point2D::new(10.0, 0.0)),
                Node::goal(Point2D::new(10.0, 10.0)),
            ],
            Vec::new(),
            25.0,
        );
        let mut state = SearchState::new(&graph);
        let start = state.start_index();
        state.set_status(0, NodeStatus::Determined);
        state.set_cost(0, 10.0);
        state.set_back(0, start);
        state.set_cost(1, 20.0);
        state.set_back(1, 0);

        let route = reconstruct_route(&graph, &state, 1);
        assert_eq!(route.len(), 2);
        assert_eq!(route.waypoints[0].index, 0);
        assert_eq!(route.waypoints[0].status, NodeStatus::Determined);
        assert_eq!(route.waypoints[1].status, NodeStatus::Goal);
        assert_eq!(route.total_cost, 20.0);
        assert_eq!(route.length_from(Point2D::ZERO), 20.0);
        assert_eq!(route.goal().map(|g| g.position), Some(Point2D::new(10.0, 10.0)));
    }

    #[test]
    fn test_route_survives_state_reset() {
        let graph = NavGraph::new(vec![Node::goal(Point2D::new(3.0, 4.0))], Vec::new(), 25.0);
        let mut state = SearchState::new(&graph);
        let start = state.start_index();
        state.set_cost(0, 5.0);
        state.set_back(0, start);

        let route = reconstruct_route(&graph, &state, 0);
        state.reset(&graph);

        assert_eq!(route.positions(), vec![Point2D::new(3.0, 4.0)]);
        assert_eq!(route.total_cost, 5.0);
    }

    #[test]
    fn test_empty_route() {
        let route = Route::default();
        assert!(route.is_empty());
        assert_eq!(route.total_cost, 0.0);
        assert!(route.goal().is_none());
        assert_eq!(route.length_from(Point2D::new(1.0, 1.0)), 0.0);
    }
}
