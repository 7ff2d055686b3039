//! Collision geometry for corridor visibility.
//!
//! A waypoint-to-waypoint move is modelled as a [`Corridor`]: a rectangle of
//! half-width `tolerance` swept along the straight line between the two
//! points. The move is allowed when no corridor edge crosses any edge of any
//! obstacle rectangle.
//!
//! # Crossing rule
//!
//! Two segments cross only when each one strictly separates the endpoints of
//! the other ([`segments_intersect`]). Touching an endpoint or running
//! collinear along an edge does not count, so a corridor may graze a seat
//! block.

mod corridor;
mod segment;

pub use corridor::{Corridor, corridor_clear};
pub use segment::{segments_intersect, separates};
