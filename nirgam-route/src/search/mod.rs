//! Incremental single-source shortest path over the waypoint graph.
//!
//! The search determines one node per iteration. Instead of a priority
//! queue it re-walks the tree of already-determined nodes from the start
//! every iteration ([`expand`]) and picks the cheapest live candidate on the
//! whole frontier. Successor edges are discovered lazily: a node only learns
//! its clear corridors once it is determined.
//!
//! # Algorithm
//!
//! 1. Seed the start with every node it has a clear corridor to.
//! 2. Walk the determined tree from the start and relax every edge into a
//!    live node, keeping the cheapest candidate.
//! 3. No candidate: the exits are unreachable.
//! 4. A goal candidate ends the search.
//! 5. Otherwise mark the candidate determined, discover its successors and
//!    repeat from 2.
//! 6. Rebuild the route by following back-references from the goal.
//!
//! All mutable search data lives in [`SearchState`], separate from the
//! immutable [`crate::graph::NavGraph`].

mod frontier;
mod planner;
mod route;
mod state;

pub use frontier::expand;
pub use planner::{PathSearch, SearchOutcome};
pub use route::{Route, RouteWaypoint, reconstruct_route};
pub use state::{NodeStatus, SearchState};
