//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. Shine a light perpendicular to that axis: the two
//! shadows are disjoint.
//!
//! For two convex polygons, only a finite set of candidate axes needs to be tested: if a
//! separating axis exists, one of them is parallel to an edge normal of one of the two
//! polygons. Testing the `n1 + n2` edge normals of both polygons is thus enough to decide
//! whether they overlap.
//!
//! # Boundary policy
//!
//! Projections are compared inclusively: two shadows sharing only an endpoint are considered
//! overlapping, so polygons that exactly touch are reported as intersecting.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use polysat2d::math::Point;
//! use polysat2d::query::sat::polygon_polygon_find_separating_axis;
//!
//! let left = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let right = left.map(|pt| pt + polysat2d::math::Vector::new(3.0, 0.0));
//!
//! let sep = polygon_polygon_find_separating_axis(&left, &right).unwrap();
//! assert_eq!(sep.polygon, 0); // An edge of `left` separates the squares.
//! # }
//! ```

pub use self::sat_polygon_polygon::*;

mod sat_polygon_polygon;
