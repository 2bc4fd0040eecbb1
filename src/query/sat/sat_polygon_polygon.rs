use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use crate::utils::Interval;

/// An axis that separates two polygons, found by [`polygon_polygon_find_separating_axis`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingAxis {
    /// Which polygon the separating edge belongs to: `0` for the first argument of the
    /// search, `1` for the second.
    pub polygon: usize,
    /// The index of the separating edge, going from vertex `edge` to vertex `edge + 1`
    /// (wrapping around).
    pub edge: usize,
    /// The normal of the separating edge, scaled by the edge length.
    pub axis: Vector<Real>,
}

/// Projects a set of points on an axis.
///
/// Returns the range of the dot products between `axis` and each point: the "shadow" the
/// points cast on the line directed by `axis`. The axis does not need to be normalized; the
/// returned interval is then scaled by its norm. An empty set of points yields
/// [`Interval::empty`].
#[inline]
pub fn polygon_project_on_axis(points: &[Point<Real>], axis: &Vector<Real>) -> Interval<Real> {
    points
        .iter()
        .fold(Interval::empty(), |shadow, pt| shadow.enclose(pt.coords.dot(axis)))
}

/// Searches the edges of the polygon `points1` for one whose normal separates it from the
/// polygon `points2`.
///
/// Both polygons are given by their vertices, expressed in the same frame. Edges are tested in
/// order and the search stops at the first separating one. Its index and its (non-normalized)
/// normal are returned. Projections sharing a single endpoint are not considered separated.
pub fn polygon_polygon_find_separating_edge_oneway(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> Option<(usize, Vector<Real>)> {
    let n = points1.len();

    for a in 0..n {
        let b = (a + 1) % n;
        let axis = Segment::new(points1[a], points1[b]).scaled_normal();
        let shadow1 = polygon_project_on_axis(points1, &axis);
        let shadow2 = polygon_project_on_axis(points2, &axis);

        if !shadow1.intersects(&shadow2) {
            return Some((a, axis));
        }
    }

    None
}

/// Searches for an edge normal of either polygon that separates them.
///
/// The edges of `points1` are tested first, then the edges of `points2`. Returns `None` if no
/// edge normal separates the polygons, which means they overlap if both are convex.
pub fn polygon_polygon_find_separating_axis(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> Option<SeparatingAxis> {
    for (polygon, (pts1, pts2)) in [(points1, points2), (points2, points1)]
        .into_iter()
        .enumerate()
    {
        if let Some((edge, axis)) = polygon_polygon_find_separating_edge_oneway(pts1, pts2) {
            return Some(SeparatingAxis {
                polygon,
                edge,
                axis,
            });
        }
    }

    None
}
