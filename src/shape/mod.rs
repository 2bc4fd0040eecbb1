//! Shapes supported by polysat2d.

pub use self::polygon::{InvalidPolygon, Polygon};
pub use self::segment::Segment;

mod polygon;
mod segment;
