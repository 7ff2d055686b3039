//! Occupants to be routed.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::core::Point2D;
use crate::layout::Layout;
use crate::search::Route;

/// An occupant with a start position and, once planned, a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Start position.
    pub position: Point2D,
    /// Body radius (drawing only).
    pub radius: f64,
    /// Walking speed (drawing only).
    pub speed: f64,
    /// Planned route; empty until planned.
    #[serde(default)]
    pub route: Route,
}

impl Agent {
    /// Create an occupant with explicit radius and speed.
    pub fn new(position: Point2D, radius: f64, speed: f64) -> Self {
        Self {
            position,
            radius,
            speed,
            route: Route::default(),
        }
    }

    /// Create an occupant using the configured radius and speed.
    pub fn with_config(position: Point2D, config: &PlannerConfig) -> Self {
        Self::new(position, config.agent_radius, config.agent_speed)
    }

    /// Whether a route has been stored.
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    /// Route positions including the start.
    pub fn path(&self) -> Vec<Point2D> {
        std::iter::once(self.position)
            .chain(self.route.waypoints.iter().map(|w| w.position))
            .collect()
    }

    /// Time to walk the route at this occupant's speed.
    pub fn travel_time(&self) -> f64 {
        if self.speed > 0.0 {
            self.route.total_cost / self.speed
        } else {
            f64::INFINITY
        }
    }
}

/// One occupant per seat, standing `seat_clearance` in front of the seat's
/// upper edge, in layout order.
pub fn agents_in_front_of_seats(layout: &Layout, config: &PlannerConfig) -> Vec<Agent> {
    layout
        .seats
        .iter()
        .flatten()
        .map(|seat| {
            let position = Point2D::new(
                seat.position_x,
                seat.position_y - seat.half_height() - config.seat_clearance,
            );
            Agent::with_config(position, config)
        })
        .collect()
}
