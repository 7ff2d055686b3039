//! Frontier walk through the determined-node tree.

use crate::graph::NavGraph;

use super::state::{NodeStatus, SearchState};

/// Relax every edge from the determined tree rooted at `node` into a live
/// node and track the cheapest candidate in `best`.
///
/// For each successor `c` of `node`, in discovery order:
/// - `c == node` is skipped;
/// - a determined `c` is descended into only if it was reached from `node`
///   (its back-reference is `node`), otherwise skipped;
/// - a live `c` gets `tentative = cost(node) + |node c|`, or just the
///   distance when `node` has no finite cost (the start). The first live
///   candidate of the walk becomes `best` and takes the tentative cost and
///   back-reference unconditionally. Later candidates take them only when
///   cheaper than their current cost, and replace `best` when the tentative
///   cost is below `best`'s cost.
///
/// The relaxation of a later candidate is independent of whether it
/// replaces `best`.
pub fn expand(graph: &NavGraph, state: &mut SearchState, node: usize, best: &mut Option<usize>) {
    let origin = state.position(graph, node);
    let base = state.cost(node);

    for i in 0..state.successors(node).len() {
        let candidate = state.successors(node)[i];

        if candidate == node {
            continue;
        }

        if state.status(candidate) == NodeStatus::Determined {
            if state.back(candidate) == Some(node) {
                expand(graph, state, candidate, best);
            }
            continue;
        }

        let distance = origin.distance(state.position(graph, candidate));
        let tentative = if base.is_finite() {
            base + distance
        } else {
            distance
        };

        match *best {
            None => {
                *best = Some(candidate);
                state.set_cost(candidate, tentative);
                state.set_back(candidate, node);
            }
            Some(current) => {
                if tentative < state.cost(candidate) {
                    state.set_cost(candidate, tentative);
                    state.set_back(candidate, node);
                }
                if tentative < state.cost(current) {
                    *best = Some(candidate);
                }
            }
        }
    }
}
