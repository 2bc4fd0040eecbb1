//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general function of this module is [`intersection_test()`], which tells whether
//! two convex polygons overlap. It reads the current world-space vertices of both polygons.
//!
//! # Specific cases
//! [`intersection_test_points_points()`] runs the same test on raw vertex sets, and the
//! [`sat`] module exposes the separating axis search underlying both, for callers that
//! need to know *which* axis separates two polygons.

pub use self::intersection_test::{intersection_test, intersection_test_points_points};

pub mod intersection_test;
pub mod sat;
