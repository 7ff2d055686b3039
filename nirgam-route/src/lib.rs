//! # Nirgam-Route: Evacuation Route Planning for Seated Venues
//!
//! Plans a walking route for every occupant of a venue (lecture hall,
//! theatre, stadium block) to the nearest reachable exit, steering around
//! rows of seats.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nirgam_route::{Agent, Layout, PlannerConfig, Point2D, Rect, Router};
//!
//! let layout = Layout::new(1000, 1000)
//!     .with_row(vec![Rect::new(50.0, 50.0, 200.0, 200.0)])
//!     .with_goal(Rect::new(40.0, 40.0, 500.0, 200.0));
//!
//! let mut router = Router::from_layout(&layout, PlannerConfig::default());
//! let mut agents = vec![Agent::with_config(Point2D::new(100.0, 205.0), router.config())];
//! router.plan(&mut agents)?;
//!
//! for p in agents[0].path() {
//!     println!("({:.1}, {:.1})", p.x, p.y);
//! }
//! # Ok::<(), nirgam_route::PlanError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Layout units, origin at the top-left corner of the venue, y growing
//! downward. Rectangles are given by center and full extent.
//!
//! ## Architecture
//!
//! - [`core`]: Point and rectangle value types
//! - [`geometry`]: Segment crossing and corridor clearance
//! - [`layout`]: Venue description and its JSON form
//! - [`graph`]: Waypoint graph construction
//! - [`search`]: Frontier-walk shortest path to the nearest exit
//! - [`router`]: Per-occupant planning pass
//! - [`render`]: SVG export
//! - [`config`]: Planner settings
//!
//! ```text
//!   Layout ──► GraphBuilder ──► NavGraph ──► Router ──► Agent.route
//!                                  │            │
//!                                  └─ PathSearch + SearchState (reset per occupant)
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod render;
pub mod router;
pub mod search;

pub use config::PlannerConfig;
pub use core::{Point2D, Rect};
pub use error::{ConfigLoadError, LayoutError, PlanError, Result};
pub use graph::{GraphBuilder, NavGraph, Node, NodeKind};
pub use layout::Layout;
pub use router::{Agent, OccupantOutcome, PlanReport, Router, agents_in_front_of_seats};
pub use search::{PathSearch, Route, RouteWaypoint, SearchOutcome, SearchState};
