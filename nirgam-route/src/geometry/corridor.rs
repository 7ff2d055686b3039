//! Corridor clearance between two waypoints.

use crate::core::{Point2D, Rect};

use super::segment::segments_intersect;

/// Rectangle of half-width `tolerance` centered on the line `from`-`to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corridor {
    /// Start of the center line.
    pub from: Point2D,
    /// End of the center line.
    pub to: Point2D,
    /// Half-width.
    pub tolerance: f64,
}

impl Corridor {
    /// Create a corridor.
    #[inline]
    pub fn new(from: Point2D, to: Point2D, tolerance: f64) -> Self {
        Self {
            from,
            to,
            tolerance,
        }
    }

    /// Perpendicular offset from the center line to the "top" side.
    ///
    /// For a zero-length corridor `atan2(0, 0) == 0`, so the offset is
    /// straight along +y.
    #[inline]
    fn offset(&self) -> Point2D {
        let theta = self.from.angle_to(self.to);
        Point2D::new(-self.tolerance * theta.sin(), self.tolerance * theta.cos())
    }

    /// The four edges in test order: top, right, bottom, left.
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        let n = self.offset();
        let from_top = self.from + n;
        let to_top = self.to + n;
        let to_bottom = self.to - n;
        let from_bottom = self.from - n;
        [
            (from_top, to_top),
            (to_top, to_bottom),
            (to_bottom, from_bottom),
            (from_bottom, from_top),
        ]
    }

    /// Check the corridor against every edge of every obstacle.
    ///
    /// Returns `false` on the first crossing.
    pub fn is_clear(&self, obstacles: &[Rect]) -> bool {
        self.edges()
            .iter()
            .all(|&(c1, c2)| !crosses_any(c1, c2, obstacles))
    }
}

/// Whether segment `r1`-`r2` crosses any edge of any obstacle.
fn crosses_any(r1: Point2D, r2: Point2D, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|obstacle| {
        obstacle
            .edges()
            .iter()
            .any(|&(p1, p2)| segments_intersect(r1, r2, p1, p2))
    })
}

/// Check that a corridor of half-width `tolerance` from `from` to `to`
/// crosses no obstacle edge.
#[inline]
pub fn corridor_clear(from: Point2D, to: Point2D, tolerance: f64, obstacles: &[Rect]) -> bool {
    Corridor::new(from, to, tolerance).is_clear(obstacles)
}
