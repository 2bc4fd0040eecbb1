use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Segment;
use alloc::vec::Vec;
use na::{ComplexField, RealField};

/// Error returned when a polygon model has too few vertices to enclose an area.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("a polygon needs at least {} vertices, got {num_vertices}", Polygon::MIN_VERTICES)]
pub struct InvalidPolygon {
    /// The number of vertices of the rejected model.
    pub num_vertices: usize,
}

/// A convex polygon placed in the world.
///
/// A polygon is made of a fixed *model* (its vertices expressed in its own local frame) and a
/// *pose*: the world-space position of its local origin and an orientation, in radians, about
/// that origin. The world-space vertices are derived from both and are kept up to date by every
/// method that modifies the pose, so they can be read at any time without risking a stale
/// transform.
///
/// The vertices may be given in clockwise or counter-clockwise order. Convexity is assumed but
/// not enforced: collision tests involving a non-convex polygon return meaningless results.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "PolygonDesc", into = "PolygonDesc")
)]
pub struct Polygon {
    local_vertices: Vec<Point<Real>>,
    position: Vector<Real>,
    orientation: Real,
    world_vertices: Vec<Point<Real>>,
    overlapping: bool,
}

impl Polygon {
    /// The minimum number of vertices of a polygon model.
    pub const MIN_VERTICES: usize = 3;

    /// Creates a polygon from its local-space model, placed at the origin with a zero orientation.
    ///
    /// Returns an error if the model has less than [`Polygon::MIN_VERTICES`] vertices.
    pub fn new(local_vertices: Vec<Point<Real>>) -> Result<Self, InvalidPolygon> {
        if local_vertices.len() < Self::MIN_VERTICES {
            return Err(InvalidPolygon {
                num_vertices: local_vertices.len(),
            });
        }

        let polygon = Self::from_model(local_vertices);

        if !polygon.is_convex() {
            log::debug!(
                "Polygon model with {} vertices is not convex; overlap tests involving it are meaningless.",
                polygon.num_vertices()
            );
        }

        Ok(polygon)
    }

    /// Creates a regular polygon with `num_sides` vertices lying on a circle of the given radius.
    ///
    /// The `i`-th vertex is located at `radius * (cos(i * 2π / num_sides), sin(i * 2π / num_sides))`.
    pub fn regular(num_sides: usize, radius: Real) -> Result<Self, InvalidPolygon> {
        let theta = Real::two_pi() / num_sides as Real;
        let vertices = (0..num_sides)
            .map(|i| {
                let (sin, cos) = ComplexField::sin_cos(theta * i as Real);
                Point::new(radius * cos, radius * sin)
            })
            .collect();
        Self::new(vertices)
    }

    /// Creates a rectangle centered at the local origin, with the given half side lengths.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let (hx, hy) = (half_extents.x, half_extents.y);
        Self::from_model(alloc::vec![
            Point::new(-hx, -hy),
            Point::new(-hx, hy),
            Point::new(hx, hy),
            Point::new(hx, -hy),
        ])
    }

    // The model must have at least `MIN_VERTICES` vertices.
    fn from_model(local_vertices: Vec<Point<Real>>) -> Self {
        let world_vertices = local_vertices.clone();

        Polygon {
            local_vertices,
            position: Vector::zeros(),
            orientation: 0.0,
            world_vertices,
            overlapping: false,
        }
    }

    /// Returns this polygon moved to the given pose.
    #[must_use]
    pub fn with_pose(mut self, position: Vector<Real>, orientation: Real) -> Self {
        self.set_pose(position, orientation);
        self
    }

    /// The vertices of this polygon's model, in its local frame.
    #[inline]
    pub fn local_vertices(&self) -> &[Point<Real>] {
        &self.local_vertices
    }

    /// The vertices of this polygon, in world-space.
    #[inline]
    pub fn world_vertices(&self) -> &[Point<Real>] {
        &self.world_vertices
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.local_vertices.len()
    }

    /// The world-space position of this polygon's local origin.
    #[inline]
    pub fn position(&self) -> &Vector<Real> {
        &self.position
    }

    /// The rotation angle, in radians, of this polygon about its position.
    #[inline]
    pub fn orientation(&self) -> Real {
        self.orientation
    }

    /// The isometry mapping this polygon's local frame to world-space.
    #[inline]
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::new(self.position, self.orientation)
    }

    /// Did this polygon overlap at least one other polygon during the last collision pass?
    #[inline]
    pub fn is_overlapping(&self) -> bool {
        self.overlapping
    }

    pub(crate) fn set_overlapping(&mut self, overlapping: bool) {
        self.overlapping = overlapping;
    }

    /// Moves this polygon to the given position.
    pub fn set_position(&mut self, position: Vector<Real>) {
        self.position = position;
        self.update_world_vertices();
    }

    /// Sets the orientation, in radians, of this polygon.
    pub fn set_orientation(&mut self, orientation: Real) {
        self.orientation = orientation;
        self.update_world_vertices();
    }

    /// Sets both the position and orientation of this polygon.
    pub fn set_pose(&mut self, position: Vector<Real>, orientation: Real) {
        self.position = position;
        self.orientation = orientation;
        self.update_world_vertices();
    }

    /// Translates this polygon by the given vector.
    pub fn translate_by(&mut self, translation: &Vector<Real>) {
        self.position += translation;
        self.update_world_vertices();
    }

    /// Rotates this polygon about its position by the given angle, in radians.
    pub fn rotate_by(&mut self, angle: Real) {
        self.orientation += angle;
        self.update_world_vertices();
    }

    /// Recomputes the world-space vertices from the model and the current pose.
    ///
    /// Each vertex is rotated by the orientation, then translated by the position:
    /// `world = (x cos θ - y sin θ + px, x sin θ + y cos θ + py)`.
    pub fn update_world_vertices(&mut self) {
        let pos = self.isometry();

        for (world, local) in self.world_vertices.iter_mut().zip(&self.local_vertices) {
            *world = pos * local;
        }
    }

    /// The world-space edges of this polygon.
    ///
    /// Edge `i` goes from vertex `i` to vertex `i + 1`, and the last edge closes the boundary by
    /// going back to the first vertex.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = self.world_vertices.len();
        (0..n).map(move |i| Segment::new(self.world_vertices[i], self.world_vertices[(i + 1) % n]))
    }

    /// The world-space segment from the first vertex of this polygon to its position.
    ///
    /// This is what a renderer draws to show which way the polygon is facing.
    pub fn heading(&self) -> Segment {
        Segment::new(self.world_vertices[0], Point::from(self.position))
    }

    /// Tests if this polygon's model is convex.
    ///
    /// Collinear consecutive edges are accepted. The winding may be either clockwise or
    /// counter-clockwise but must be consistent along the whole boundary, and the boundary must
    /// wind around the polygon exactly once (this rejects star-shaped polygons).
    pub fn is_convex(&self) -> bool {
        let pts = &self.local_vertices;
        let n = pts.len();
        let mut winding: Real = 0.0;
        let mut total_turn: Real = 0.0;

        for i1 in 0..n {
            let i2 = (i1 + 1) % n;
            let i3 = (i2 + 1) % n;
            let e1 = pts[i2] - pts[i1];
            let e2 = pts[i3] - pts[i2];
            let cross = e1.perp(&e2);
            total_turn += RealField::atan2(cross, e1.dot(&e2));

            if abs_diff_eq!(
                cross,
                0.0,
                epsilon = DEFAULT_EPSILON * e1.norm() * e2.norm()
            ) {
                continue;
            }

            if cross * winding < 0.0 {
                return false;
            }

            winding = cross;
        }

        abs_diff_eq!(total_turn.abs(), Real::two_pi(), epsilon = 1.0e-3)
    }

    /// Tests if this polygon overlaps `other`, touching boundaries included.
    ///
    /// See [`crate::query::intersection_test`].
    pub fn intersects(&self, other: &Polygon) -> bool {
        crate::query::intersection_test(self, other)
    }
}

/// The serialized form of a polygon: its model and its pose.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct PolygonDesc {
    local_vertices: Vec<Point<Real>>,
    position: Vector<Real>,
    orientation: Real,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<PolygonDesc> for Polygon {
    type Error = InvalidPolygon;

    fn try_from(desc: PolygonDesc) -> Result<Self, InvalidPolygon> {
        Ok(Polygon::new(desc.local_vertices)?.with_pose(desc.position, desc.orientation))
    }
}

#[cfg(feature = "serde-serialize")]
impl From<Polygon> for PolygonDesc {
    fn from(polygon: Polygon) -> Self {
        PolygonDesc {
            local_vertices: polygon.local_vertices,
            position: polygon.position,
            orientation: polygon.orientation,
        }
    }
}
