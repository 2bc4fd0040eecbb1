use crate::math::{Point, Real};
use crate::query::sat;

/// Intersection test between two convex polygons given by their vertices.
///
/// Both vertex sets must be expressed in the same frame. A set with two vertices is handled
/// as a degenerate polygon with two opposite edges. The result is meaningless for empty sets
/// or non-finite coordinates, but never panics.
#[inline]
pub fn intersection_test_points_points(points1: &[Point<Real>], points2: &[Point<Real>]) -> bool {
    sat::polygon_polygon_find_separating_axis(points1, points2).is_none()
}
