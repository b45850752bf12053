use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// A reference point rigidly mounted on the airframe, such as a wing centre
/// of pressure or an engine nozzle.
///
/// Local axes: `+X` span (right), `+Y` up, `-Z` forward. `+Z` therefore runs
/// from the leading edge to the trailing edge, which is the chord axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Offset from the body origin in body coordinates [m]
    pub offset: Vector3<f64>,
    /// Rotation relative to the body frame
    #[serde(default = "UnitQuaternion::identity")]
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Attachment {
    fn default() -> Self {
        Self::at(Vector3::zeros())
    }
}

impl Attachment {
    pub fn at(offset: Vector3<f64>) -> Self {
        Self {
            offset,
            rotation: UnitQuaternion::identity(),
        }
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the local rotation back to zero.
    pub fn level(&mut self) {
        self.rotation = UnitQuaternion::identity();
    }

    /// Resolves the attachment against the body's current pose.
    pub fn world_frame(&self, spatial: &SpatialComponent) -> SurfaceFrame {
        let orientation = spatial.attitude * self.rotation;
        SurfaceFrame {
            position: spatial.to_world(&self.offset),
            chord: orientation * Vector3::z(),
            span: orientation * Vector3::x(),
            up: orientation * Vector3::y(),
            forward: orientation * -Vector3::z(),
        }
    }
}

/// World-space position and orthonormal basis of an attachment for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub position: Vector3<f64>,
    pub chord: Vector3<f64>,
    pub span: Vector3<f64>,
    pub up: Vector3<f64>,
    pub forward: Vector3<f64>,
}
