//! Planning pass over all occupants.

use log::{info, warn};

use crate::config::PlannerConfig;
use crate::core::Point2D;
use crate::error::{PlanError, Result};
use crate::graph::{GraphBuilder, NavGraph};
use crate::layout::Layout;
use crate::search::{PathSearch, Route, SearchState};

use super::agent::Agent;

/// What happened to one occupant during a pass.
#[derive(Clone, Debug, PartialEq)]
pub enum OccupantOutcome {
    /// A route was stored on the occupant.
    Routed {
        /// Waypoints on the route.
        waypoints: usize,
        /// Route cost.
        cost: f64,
        /// Frontier walks performed.
        iterations: usize,
    },
    /// No exit was reachable; the occupant keeps an empty route.
    Unreachable(PlanError),
}

/// Summary of a planning pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanReport {
    /// One entry per occupant, in planning order.
    pub outcomes: Vec<OccupantOutcome>,
}

impl PlanReport {
    /// Number of occupants that received a route.
    pub fn routed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, OccupantOutcome::Routed { .. }))
            .count()
    }

    /// Indices of occupants with no reachable exit.
    pub fn unreachable(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, OccupantOutcome::Unreachable(_)))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Plans every occupant on one shared graph.
pub struct Router {
    graph: NavGraph,
    state: SearchState,
    config: PlannerConfig,
    last_search_edges: Vec<(Point2D, Point2D)>,
}

impl Router {
    /// Create a router over an already built graph.
    pub fn new(graph: NavGraph, config: PlannerConfig) -> Self {
        let state = SearchState::new(&graph);
        Self {
            graph,
            state,
            config,
            last_search_edges: Vec::new(),
        }
    }

    /// Build the graph for `layout` and create a router over it.
    pub fn from_layout(layout: &Layout, config: PlannerConfig) -> Self {
        let graph = GraphBuilder::new(config.clone()).build(layout);
        Self::new(graph, config)
    }

    /// Plan a route from `start` to the nearest reachable exit.
    ///
    /// The search state is reset before returning, whether or not a route
    /// was found.
    pub fn route_from(&mut self, start: Point2D) -> Result<(Route, usize)> {
        let result = PathSearch::new(&self.graph).run(&mut self.state, start);
        self.last_search_edges = self.state.edge_segments(&self.graph);
        self.reset();
        result.map(|outcome| (outcome.route, outcome.iterations))
    }

    /// Plan one occupant and store the route on it.
    pub fn plan_agent(&mut self, agent: &mut Agent) -> Result<OccupantOutcome> {
        let (route, iterations) = self.route_from(agent.position)?;
        let outcome = OccupantOutcome::Routed {
            waypoints: route.len(),
            cost: route.total_cost,
            iterations,
        };
        agent.route = route;
        Ok(outcome)
    }

    /// Plan every occupant in order.
    ///
    /// With `stop_on_unreachable` the first failure aborts the pass as
    /// [`PlanError::Occupant`]; occupants planned before it keep their
    /// routes. Otherwise failures are recorded in the report.
    pub fn plan(&mut self, agents: &mut [Agent]) -> Result<PlanReport> {
        let mut report = PlanReport::default();

        for (index, agent) in agents.iter_mut().enumerate() {
            match self.plan_agent(agent) {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(err) if self.config.stop_on_unreachable => {
                    return Err(PlanError::Occupant {
                        index,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    warn!("[Router] occupant {}: {}", index, err);
                    agent.route = Route::default();
                    report.outcomes.push(OccupantOutcome::Unreachable(err));
                }
            }
        }

        info!(
            "[Router] planned {} occupants: {} routed, {} unreachable",
            agents.len(),
            report.routed(),
            report.outcomes.len() - report.routed()
        );

        Ok(report)
    }

    /// Return the search state to neutral.
    pub fn reset(&mut self) {
        self.state.reset(&self.graph);
    }

    /// Get the graph.
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Get the search state (neutral between occupants).
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Successor edges discovered by the most recent search.
    pub fn last_search_edges(&self) -> &[(Point2D, Point2D)] {
        &self.last_search_edges
    }

    /// Get the configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
