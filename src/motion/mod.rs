//! Per-frame pose inputs applied to polygons.
//!
//! An input is either an absolute pose or a pose delta ([`PolygonInput`]). [`DriveInput`]
//! expresses the "steer and thrust" controls of an interactive demo and converts them into a
//! delta given the elapsed time.

use crate::math::{Real, Vector};
use crate::shape::Polygon;
use na::ComplexField;

/// A modification of a polygon's pose.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PolygonInput {
    /// Moves the polygon relative to its current pose.
    Delta {
        /// Added to the polygon's position.
        translation: Vector<Real>,
        /// Added to the polygon's orientation, in radians.
        rotation: Real,
    },
    /// Replaces the polygon's pose.
    Absolute {
        /// The new position.
        position: Vector<Real>,
        /// The new orientation, in radians.
        orientation: Real,
    },
}

impl PolygonInput {
    /// An input leaving the pose unchanged.
    pub fn identity() -> Self {
        PolygonInput::Delta {
            translation: Vector::zeros(),
            rotation: 0.0,
        }
    }

    /// Applies this input to `polygon`, refreshing its world-space vertices once.
    pub fn apply_to(&self, polygon: &mut Polygon) {
        match *self {
            PolygonInput::Delta {
                translation,
                rotation,
            } => {
                let position = polygon.position() + translation;
                let orientation = polygon.orientation() + rotation;
                polygon.set_pose(position, orientation);
            }
            PolygonInput::Absolute {
                position,
                orientation,
            } => polygon.set_pose(position, orientation),
        }
    }
}

impl Default for PolygonInput {
    fn default() -> Self {
        Self::identity()
    }
}

/// Speeds used to turn a [`DriveInput`] into a pose delta.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DriveParams {
    /// Distance traveled per unit of time at full thrust.
    pub linear_speed: Real,
    /// Angle, in radians, turned per unit of time at full steering.
    pub angular_speed: Real,
}

impl Default for DriveParams {
    fn default() -> Self {
        DriveParams {
            linear_speed: 60.0,
            angular_speed: 2.0,
        }
    }
}

/// Steering controls for a polygon moving along its heading.
///
/// The heading of a polygon with orientation `θ` is `(cos θ, sin θ)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DriveInput {
    /// Steering, usually in `[-1, 1]`. Positive values increase the orientation.
    pub turn: Real,
    /// Thrust along the heading, usually in `[-1, 1]`. Negative values move backward.
    pub thrust: Real,
}

impl DriveInput {
    /// Converts these controls into a pose delta for a polygon currently oriented by
    /// `orientation`, after `dt` units of time.
    ///
    /// The rotation is applied first: the translation follows the updated heading.
    pub fn to_polygon_input(
        &self,
        orientation: Real,
        params: &DriveParams,
        dt: Real,
    ) -> PolygonInput {
        let rotation = self.turn * params.angular_speed * dt;
        let (sin, cos) = ComplexField::sin_cos(orientation + rotation);
        let distance = self.thrust * params.linear_speed * dt;

        PolygonInput::Delta {
            translation: Vector::new(cos, sin) * distance,
            rotation,
        }
    }

    /// Applies these controls to `polygon` for a time step `dt`.
    pub fn apply_to(&self, polygon: &mut Polygon, params: &DriveParams, dt: Real) {
        self.to_polygon_input(polygon.orientation(), params, dt)
            .apply_to(polygon)
    }
}
