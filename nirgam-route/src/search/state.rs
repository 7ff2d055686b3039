//! Per-search bookkeeping, keyed by node index.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::graph::NavGraph;

/// Search status of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Not yet determined.
    Unsearched,
    /// Shortest cost from the start is final for this run.
    Determined,
    /// The search origin.
    Start,
    /// An exit. Never becomes determined.
    Goal,
}

/// Mutable search data for one graph.
///
/// Slots `0..graph.len()` mirror the graph's nodes; the start pseudo-node
/// lives at [`SearchState::start_index`] (== `graph.len()`).
#[derive(Clone, Debug)]
pub struct SearchState {
    status: Vec<NodeStatus>,
    cost: Vec<f64>,
    back: Vec<Option<usize>>,
    successors: Vec<Vec<usize>>,
    start_position: Point2D,
}

impl SearchState {
    /// Create a neutral state sized for `graph`.
    pub fn new(graph: &NavGraph) -> Self {
        let slots = graph.len() + 1;
        let mut state = Self {
            status: vec![NodeStatus::Unsearched; slots],
            cost: vec![f64::INFINITY; slots],
            back: vec![None; slots],
            successors: vec![Vec::new(); slots],
            start_position: Point2D::ZERO,
        };
        state.reset(graph);
        state
    }

    /// Return every slot to neutral.
    ///
    /// Goal nodes keep [`NodeStatus::Goal`]; everything else becomes
    /// unsearched with infinite cost, no back-reference and no successors.
    /// The start slot is marked [`NodeStatus::Start`].
    pub fn reset(&mut self, graph: &NavGraph) {
        debug_assert_eq!(self.status.len(), graph.len() + 1);

        for (idx, node) in graph.nodes().iter().enumerate() {
            self.status[idx] = if node.is_goal() {
                NodeStatus::Goal
            } else {
                NodeStatus::Unsearched
            };
        }
        let start = self.start_index();
        self.status[start] = NodeStatus::Start;

        self.cost.fill(f64::INFINITY);
        self.back.fill(None);
        for successors in &mut self.successors {
            successors.clear();
        }
    }

    /// Place the start pseudo-node.
    pub fn set_start(&mut self, position: Point2D) {
        self.start_position = position;
    }

    /// Index of the start pseudo-node.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.status.len() - 1
    }

    /// Start position.
    #[inline]
    pub fn start_position(&self) -> Point2D {
        self.start_position
    }

    /// Position of a slot: graph node or the start.
    #[inline]
    pub fn position(&self, graph: &NavGraph, index: usize) -> Point2D {
        if index == self.start_index() {
            self.start_position
        } else {
            graph.position(index)
        }
    }

    /// Number of slots including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.status.len()
    }

    /// Check if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    #[inline]
    pub fn status(&self, index: usize) -> NodeStatus {
        self.status[index]
    }

    #[inline]
    pub fn set_status(&mut self, index: usize, status: NodeStatus) {
        self.status[index] = status;
    }

    #[inline]
    pub fn cost(&self, index: usize) -> f64 {
        self.cost[index]
    }

    #[inline]
    pub fn set_cost(&mut self, index: usize, cost: f64) {
        self.cost[index] = cost;
    }

    #[inline]
    pub fn back(&self, index: usize) -> Option<usize> {
        self.back[index]
    }

    #[inline]
    pub fn set_back(&mut self, index: usize, from: usize) {
        self.back[index] = Some(from);
    }

    /// Successors discovered for a slot, in discovery order.
    #[inline]
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    #[inline]
    pub fn push_successor(&mut self, index: usize, successor: usize) {
        self.successors[index].push(successor);
    }

    /// All discovered successor edges as position pairs.
    pub fn edge_segments(&self, graph: &NavGraph) -> Vec<(Point2D, Point2D)> {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, successors)| {
                successors.iter().map(move |&to| (from, to))
            })
            .map(|(from, to)| (self.position(graph, from), self.position(graph, to)))
            .collect()
    }

    /// Check the neutral-state invariant for every non-start slot.
    pub fn is_neutral(&self, graph: &NavGraph) -> bool {
        graph.nodes().iter().enumerate().all(|(idx, node)| {
            let expected = if node.is_goal() {
                NodeStatus::Goal
            } else {
                NodeStatus::Unsearched
            };
            self.status[idx] == expected
                && self.cost[idx] == f64::INFINITY
                && self.back[idx].is_none()
                && self.successors[idx].is_empty()
        }) && self.successors[self.start_index()].is_empty()
    }
}
