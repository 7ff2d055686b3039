//! Search driver: seeding, iteration and termination.

use log::{debug, trace};

use crate::core::Point2D;
use crate::error::{PlanError, Result};
use crate::graph::NavGraph;

use super::frontier::expand;
use super::route::{Route, reconstruct_route};
use super::state::{NodeStatus, SearchState};

/// Result of a successful search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Route from the start (excluded) to the exit.
    pub route: Route,
    /// Graph index of the exit reached.
    pub goal: usize,
    /// Nodes in the order they became determined, with their final cost.
    pub determined: Vec<(usize, f64)>,
    /// Number of frontier walks performed.
    pub iterations: usize,
}

/// Shortest-path search to the nearest exit over a [`NavGraph`].
pub struct PathSearch<'a> {
    graph: &'a NavGraph,
}

impl<'a> PathSearch<'a> {
    /// Create a search over `graph`.
    pub fn new(graph: &'a NavGraph) -> Self {
        Self { graph }
    }

    /// Find the cheapest route from `start` to any goal.
    ///
    /// `state` must be neutral (fresh or reset); it is left holding the
    /// search tree and discovered successors for inspection until the
    /// caller resets it.
    pub fn run(&self, state: &mut SearchState, start: Point2D) -> Result<SearchOutcome> {
        let graph = self.graph;
        let origin = state.start_index();
        state.set_start(start);

        trace!("[PathSearch] start=({:.1},{:.1})", start.x, start.y);

        for idx in 0..graph.len() {
            if graph.is_clear(start, graph.position(idx)) {
                state.push_successor(origin, idx);
            }
        }

        let mut determined = Vec::new();
        let mut iterations = 0;

        let goal = loop {
            iterations += 1;

            let mut best = None;
            expand(graph, state, origin, &mut best);

            let Some(chosen) = best else {
                debug!(
                    "[PathSearch] FAILED: frontier exhausted after {} iterations from ({:.1},{:.1})",
                    iterations, start.x, start.y
                );
                return Err(PlanError::UnreachableGoal { start });
            };

            trace!(
                "[PathSearch] iter {}: node {} at ({:.1},{:.1}) cost={:.2}",
                iterations,
                chosen,
                graph.position(chosen).x,
                graph.position(chosen).y,
                state.cost(chosen)
            );

            if state.status(chosen) == NodeStatus::Goal {
                break chosen;
            }

            state.set_status(chosen, NodeStatus::Determined);
            determined.push((chosen, state.cost(chosen)));
            self.discover_successors(state, chosen);
        };

        let route = reconstruct_route(graph, state, goal);

        debug!(
            "[PathSearch] reached goal {} in {} iterations: {} waypoints, cost={:.2}",
            goal,
            iterations,
            route.len(),
            route.total_cost
        );

        Ok(SearchOutcome {
            route,
            goal,
            determined,
            iterations,
        })
    }

    /// Give a newly determined node every clear corridor to a node that is
    /// not yet determined.
    fn discover_successors(&self, state: &mut SearchState, chosen: usize) {
        let from = self.graph.position(chosen);

        for idx in 0..self.graph.len() {
            if idx == chosen || state.status(idx) == NodeStatus::Determined {
                continue;
            }
            if self.graph.is_clear(from, self.graph.position(idx)) {
                state.push_successor(chosen, idx);
            }
        }

        trace!(
            "[PathSearch] node {} discovered {} successors",
            chosen,
            state.successors(chosen).len()
        );
    }
}
