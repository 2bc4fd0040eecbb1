//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_points_points::intersection_test_points_points;

mod intersection_test_points_points;
