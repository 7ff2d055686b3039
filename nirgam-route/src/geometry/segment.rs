//! Segment-segment crossing test.

use crate::core::Point2D;

/// Check whether the infinite line through `r1`-`r2` strictly separates
/// `p1` from `p2`.
///
/// Both cross products are taken relative to `r1`. A point lying exactly on
/// the line yields zero, which never separates.
#[inline]
pub fn separates(r1: Point2D, r2: Point2D, p1: Point2D, p2: Point2D) -> bool {
    let t1 = (r1.x - r2.x) * (p1.y - r1.y) + (r1.y - r2.y) * (r1.x - p1.x);
    let t2 = (r1.x - r2.x) * (p2.y - r1.y) + (r1.y - r2.y) * (r1.x - p2.x);
    t1 * t2 < 0.0
}

/// Check whether segment `a1`-`a2` crosses segment `b1`-`b2`.
///
/// The separation test runs once with each segment as the reference line and
/// both must agree. Collinear or endpoint-touching segments are not crossing,
/// and neither is a zero-length segment.
#[inline]
pub fn segments_intersect(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> bool {
    separates(a1, a2, b1, b2) && separates(b1, b2, a1, a2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(10.0, 0.0)
        ));
        assert!(segments_intersect(
            p(5.0, -5.0),
            p(5.0, 5.0),
            p(0.0, 0.0),
            p(10.0, 0.0)
        ));
    }

    #[test]
    fn test_disjoint_segments() {
        // Parallel
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 1.0),
            p(10.0, 1.0)
        ));
        // Lines cross but segments stop short
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(5.0, -5.0),
            p(5.0, 5.0)
        ));
    }

    #[test]
    fn test_one_sided_separation_is_not_enough() {
        // The vertical line x=5 separates the endpoints of the horizontal
        // segment, but the horizontal line y=0 does not separate (5,1)-(5,5).
        assert!(separates(p(5.0, 1.0), p(5.0, 5.0), p(0.0, 0.0), p(10.0, 0.0)));
        assert!(!separates(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 1.0), p(5.0, 5.0)));
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 1.0),
            p(5.0, 5.0)
        ));
    }

    #[test]
    fn test_touching_endpoint_is_not_crossing() {
        // T-junction: the vertical segment ends exactly on the horizontal one
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(5.0, 5.0)
        ));
        // Shared endpoint
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0)
        ));
    }

    #[test]
    fn test_collinear_overlap_is_not_crossing() {
        // Known edge case: overlapping collinear edges give zero cross
        // products in both orientations and are treated as clear.
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(15.0, 0.0)
        ));
    }

    #[test]
    fn test_zero_length_segment_never_crosses() {
        // Known edge case: a degenerate segment yields zero for both products
        // as the reference line, so it cannot cross anything.
        assert!(!segments_intersect(
            p(5.0, 0.0),
            p(5.0, 0.0),
            p(0.0, -1.0),
            p(10.0, 1.0)
        ));
    }

    #[test]
    fn test_symmetric_under_pair_swap() {
        let cases = [
            (p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)),
            (p(0.0, 0.0), p(10.0, 0.0), p(5.0, 1.0), p(5.0, 5.0)),
            (p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.0), p(15.0, 0.0)),
            (p(-3.0, 7.5), p(12.0, -2.0), p(1.0, 1.0), p(2.0, 9.0)),
            (p(1.0, 1.0), p(1.0, 1.0), p(0.0, 0.0), p(2.0, 2.0)),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(
                segments_intersect(a1, a2, b1, b2),
                segments_intersect(b1, b2, a1, a2)
            );
        }
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        let (a1, a2, b1, b2) = (p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0));
        assert!(segments_intersect(a2, a1, b1, b2));
        assert!(segments_intersect(a1, a2, b2, b1));
        assert!(segments_intersect(a2, a1, b2, b1));
    }
}
