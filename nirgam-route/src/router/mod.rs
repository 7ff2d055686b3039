//! Per-occupant routing over a shared waypoint graph.
//!
//! The [`Router`] owns the graph and one [`crate::search::SearchState`] for
//! the whole planning pass. Occupants are planned strictly one after another,
//! and the state is reset after every occupant so no search sees another's
//! costs, back-references or successors.

mod agent;
mod evacuation;

pub use agent::{Agent, agents_in_front_of_seats};
pub use evacuation::{OccupantOutcome, PlanReport, Router};
