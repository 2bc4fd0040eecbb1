/*!
polysat2d
=========

**polysat2d** decides whether convex 2D polygons overlap using the separating
axis theorem, and keeps each polygon's world-space geometry in sync with its
position and orientation.

```
# #[cfg(feature = "f32")] {
use polysat2d::math::Vector;
use polysat2d::query;
use polysat2d::shape::Polygon;

let triangle = Polygon::regular(3, 20.0)
    .unwrap()
    .with_pose(Vector::new(200.0, 150.0), 0.0);
let square = Polygon::cuboid(Vector::new(30.0, 30.0))
    .with_pose(Vector::new(210.0, 150.0), 0.3);

assert!(query::intersection_test(&triangle, &square));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod motion;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;
}
