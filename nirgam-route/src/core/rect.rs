//! Center/extent rectangle used for seat blocks and exits.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// An axis-aligned rectangle described by its center and extent.
///
/// Field names follow the layout file format (`PositionX`, `PositionY`,
/// `Width`, `Height`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rect {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Center X coordinate.
    pub position_x: f64,
    /// Center Y coordinate.
    pub position_y: f64,
}

impl Rect {
    /// Create a rectangle from its extent and center.
    #[inline]
    pub const fn new(width: f64, height: f64, position_x: f64, position_y: f64) -> Self {
        Self {
            width,
            height,
            position_x,
            position_y,
        }
    }

    /// Create a rectangle centered on `center`.
    #[inline]
    pub fn centered(center: Point2D, width: f64, height: f64) -> Self {
        Self::new(width, height, center.x, center.y)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.position_x, self.position_y)
    }

    /// Half of the width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the height.
    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Smallest x.
    #[inline]
    pub fn left(&self) -> f64 {
        self.position_x - self.half_width()
    }

    /// Largest x.
    #[inline]
    pub fn right(&self) -> f64 {
        self.position_x + self.half_width()
    }

    /// Smallest y.
    #[inline]
    pub fn top(&self) -> f64 {
        self.position_y - self.half_height()
    }

    /// Largest y.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position_y + self.half_height()
    }

    /// The four boundary edges as `(from, to)` pairs.
    ///
    /// Order: top, right, bottom, left, walking clockwise from the
    /// top-left corner (y grows downward).
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        let top_left = Point2D::new(self.left(), self.top());
        let top_right = Point2D::new(self.right(), self.top());
        let bottom_right = Point2D::new(self.right(), self.bottom());
        let bottom_left = Point2D::new(self.left(), self.bottom());
        [
            (top_left, top_right),
            (top_right, bottom_right),
            (bottom_right, bottom_left),
            (bottom_left, top_left),
        ]
    }

    /// Check if a point lies inside or on the rectangle.
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Whether both extents are finite and strictly positive.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.position_x.is_finite()
            && self.position_y.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}
