use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// How a force contribution is handed to the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// Continuous force [N], integrated over the step.
    Force,
    /// Instantaneous momentum change [N·s], applied once.
    Impulse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
}

/// Read-only kinematic state of the host rigid body.
pub trait RigidBody {
    fn linear_velocity(&self) -> Vector3<f64>;

    /// Angular velocity in the world frame [rad/s].
    fn angular_velocity(&self) -> Vector3<f64>;

    /// Centre of mass in world coordinates [m].
    fn center_of_mass(&self) -> Vector3<f64>;

    /// Velocity of a world-space point rigidly attached to the body.
    fn point_velocity(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.linear_velocity() + self.angular_velocity().cross(&(point - self.center_of_mass()))
    }
}

/// Receives world-space force-at-point contributions for the current step.
pub trait ForceSink {
    fn apply_force_at_point(
        &mut self,
        vector: Vector3<f64>,
        point: Vector3<f64>,
        mode: ForceMode,
        category: ForceCategory,
    );
}

/// Discrete one-shot engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCommand {
    StepUp,
    StepDown,
    ToggleAfterburner,
}

/// Engine control input as seen from inside a fixed step.
pub trait EngineInput {
    fn throttle_up_held(&self) -> bool;
    fn throttle_down_held(&self) -> bool;

    /// Removes and returns every buffered command in arrival order.
    fn drain_commands(&mut self) -> Vec<EngineCommand>;
}
