//! Point type for venue coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A position in layout units.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Angle from this point to another (radians, atan2 convention)
    #[inline]
    pub fn angle_to(&self, other: Point2D) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Midpoint between this point and another
    #[inline]
    pub fn midpoint(&self, other: Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_angle_to() {
        let a = Point2D::new(1.0, 1.0);
        assert_relative_eq!(a.angle_to(Point2D::new(2.0, 1.0)), 0.0);
        assert_relative_eq!(
            a.angle_to(Point2D::new(1.0, 2.0)),
            std::f64::consts::FRAC_PI_2
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(3.0, 5.0);
        assert_eq!(a + b, Point2D::new(4.0, 7.0));
        assert_eq!(b - a, Point2D::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point2D::new(2.0, 4.0));
        assert_eq!(a.midpoint(b), Point2D::new(2.0, 3.5));
    }
}
