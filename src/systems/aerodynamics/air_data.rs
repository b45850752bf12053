use nalgebra::Vector3;

use crate::components::SurfaceFrame;
use crate::physics::{PhysicsError, RigidBody};
use crate::utils::MIN_AIRSPEED_THRESHOLD;

/// Flow conditions sampled at one wing reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct AirDataValues {
    /// Velocity of the reference point in still air (m/s).
    pub point_velocity: Vector3<f64>,
    pub airspeed: f64,
    /// Unit direction the free stream travels relative to the wing.
    pub relative_wind: Vector3<f64>,
    /// Angle of attack (rad), unbounded.
    pub alpha: f64,
    pub density: f64,
    pub dynamic_pressure: f64,
}

impl AirDataValues {
    /// Samples the relative wind at `frame.position`.
    ///
    /// The point velocity includes the rotational term, so a wing mounted
    /// away from the centre of mass sees extra flow while the body turns.
    /// Fails with `DegenerateVector` when the point is not moving.
    pub fn sample(
        frame: &SurfaceFrame,
        body: &impl RigidBody,
        density: f64,
    ) -> Result<Self, PhysicsError> {
        let point_velocity = body.point_velocity(&frame.position);
        let airspeed = point_velocity.norm();

        let relative_wind = (-point_velocity)
            .try_normalize(MIN_AIRSPEED_THRESHOLD)
            .ok_or(PhysicsError::DegenerateVector("relative wind"))?;

        let alpha = Self::calculate_alpha(&relative_wind, frame);
        let dynamic_pressure = 0.5 * density * airspeed * airspeed;

        Ok(Self {
            point_velocity,
            airspeed,
            relative_wind,
            alpha,
            density,
            dynamic_pressure,
        })
    }

    fn calculate_alpha(relative_wind: &Vector3<f64>, frame: &SurfaceFrame) -> f64 {
        let flow_chord = relative_wind.dot(&frame.chord);
        let flow_up = relative_wind.dot(&frame.up);
        flow_up.atan2(flow_chord)
    }
}
