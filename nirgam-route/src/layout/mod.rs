//! Venue layout: bounds, seat row groups and exits.
//!
//! The layout is the input contract of the planner. Seats are grouped into
//! rows; each group is one contiguous block whose first and last seats
//! determine the waypoints proposed around it.

mod json;

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::LayoutError;

fn default_extent() -> u32 {
    1000
}

/// A seated venue floor plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Layout {
    /// Floor width.
    #[serde(default = "default_extent")]
    pub width: u32,

    /// Floor height.
    #[serde(default = "default_extent")]
    pub height: u32,

    /// Seat row groups, each an ordered run of adjacent seats.
    #[serde(default)]
    pub seats: Vec<Vec<Rect>>,

    /// Exit zones.
    #[serde(default)]
    pub goals: Vec<Rect>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            seats: Vec::new(),
            goals: Vec::new(),
        }
    }
}

impl Layout {
    /// Create an empty layout with the given bounds.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Builder-style: append a seat row group.
    pub fn with_row(mut self, row: Vec<Rect>) -> Self {
        self.seats.push(row);
        self
    }

    /// Builder-style: append an exit.
    pub fn with_goal(mut self, goal: Rect) -> Self {
        self.goals.push(goal);
        self
    }

    /// All seats flattened in row order; these are the collision obstacles.
    pub fn obstacles(&self) -> Vec<Rect> {
        self.seats.iter().flatten().copied().collect()
    }

    /// Total number of seats.
    pub fn seat_count(&self) -> usize {
        self.seats.iter().map(Vec::len).sum()
    }

    /// Reject rectangles with non-finite or non-positive extents.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (group, row) in self.seats.iter().enumerate() {
            if let Some(index) = row.iter().position(|seat| !seat.is_well_formed()) {
                return Err(LayoutError::InvalidRectangle {
                    group: Some(group),
                    index,
                });
            }
        }
        if let Some(index) = self.goals.iter().position(|goal| !goal.is_well_formed()) {
            return Err(LayoutError::InvalidRectangle { group: None, index });
        }
        Ok(())
    }
}
