//! Per-frame collision passes over collections of polygons.
//!
//! A frame goes through three stages:
//! 1. inputs modify the poses of the polygons, which refreshes their world-space vertices;
//! 2. every unordered pair of polygons is tested with [`crate::query::intersection_test`];
//! 3. each polygon's overlap flag is set if it belongs to at least one overlapping pair.
//!
//! [`update_overlap_flags`] runs stages 2 and 3 on any slice of polygons. [`PolygonSet`] owns
//! its polygons and runs the whole frame with [`PolygonSet::step`].

pub use self::overlap_flags::{find_overlapping_pairs, update_overlap_flags};
pub use self::polygon_set::{PolygonHandle, PolygonRenderData, PolygonSet, PolygonSetError};

mod overlap_flags;
mod polygon_set;
