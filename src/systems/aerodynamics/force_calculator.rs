use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::components::{
    AeroState, BodyView, PhysicsComponent, SpatialComponent, SurfaceFrame, Wing, WingConfig,
};
use crate::physics::{ForceCategory, ForceMode, ForceSink, PhysicsError, RigidBody};
use crate::systems::aerodynamics::AirDataValues;
use crate::utils::{LIFT_TO_DRAG_MIN_LIFT, OSWALD_EFFICIENCY};

// --- Pure Calculation Logic ---

/// Linear lift curve, no stall limit.
pub fn lift_coefficient(config: &WingConfig, alpha: f64) -> f64 {
    config.c_l_alpha * alpha
}

/// Parabolic drag polar: `Cd = Cd0 + Cl² / (π·AR·e)`.
pub fn drag_coefficient(config: &WingConfig, c_l: f64) -> f64 {
    config.c_d_0 + c_l * c_l / (PI * config.aspect_ratio * OSWALD_EFFICIENCY)
}

/// Diagnostic L/D. Reads zero while lift is negligible.
pub fn lift_to_drag(lift: f64, drag: f64) -> f64 {
    if lift > LIFT_TO_DRAG_MIN_LIFT {
        lift / drag
    } else {
        0.0
    }
}

/// Everything the wing model produced for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct WingForces {
    pub air_data: AirDataValues,
    pub c_l: f64,
    pub c_d: f64,
    pub lift: f64,
    pub drag: f64,
    pub lift_to_drag: f64,
    pub lift_vector: Vector3<f64>,
    pub drag_vector: Vector3<f64>,
    /// World-space application point (m).
    pub point: Vector3<f64>,
}

impl WingForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift_vector + self.drag_vector
    }

    pub fn to_state(&self) -> AeroState {
        AeroState {
            airspeed: self.air_data.airspeed,
            relative_wind: self.air_data.relative_wind,
            alpha: self.air_data.alpha,
            c_l: self.c_l,
            c_d: self.c_d,
            dynamic_pressure: self.air_data.dynamic_pressure,
            lift: self.lift,
            drag: self.drag,
            lift_to_drag: self.lift_to_drag,
        }
    }
}

/// Calculates lift and drag for the wing at `frame` on the given body.
///
/// Lift acts along `normalize(relative_wind × span)`, perpendicular to the
/// local flow in the wing's vertical plane. If the flow runs along the span
/// that direction is undefined and lift is dropped; drag still applies.
pub fn calculate_wing_forces(
    config: &WingConfig,
    frame: &SurfaceFrame,
    body: &impl RigidBody,
) -> Result<WingForces, PhysicsError> {
    let air_data = AirDataValues::sample(frame, body, config.air_density)?;

    let c_l = lift_coefficient(config, air_data.alpha);
    let c_d = drag_coefficient(config, c_l);

    let q_s = air_data.dynamic_pressure * config.wing_area;
    let lift = q_s * c_l;
    let drag = q_s * c_d;

    let lift_dir = air_data
        .relative_wind
        .cross(&frame.span)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::zeros);
    let drag_dir = -air_data.relative_wind;

    Ok(WingForces {
        c_l,
        c_d,
        lift,
        drag,
        lift_to_drag: lift_to_drag(lift, drag),
        lift_vector: lift_dir * lift,
        drag_vector: drag_dir * drag,
        point: frame.position,
        air_data,
    })
}

// --- Bevy System ---

/// Applies wing lift and drag as a continuous force at the wing reference
/// point. A missing reference or a still wing contributes nothing this step.
pub fn wing_force_system(
    mut aircraft: Query<(
        &Wing,
        &SpatialComponent,
        &mut PhysicsComponent,
        &mut AeroState,
    )>,
) {
    for (wing, spatial, mut physics, mut aero_state) in aircraft.iter_mut() {
        physics.clear_category(&ForceCategory::Aerodynamic);

        let Some(reference) = wing.reference.as_ref() else {
            debug!("{}", PhysicsError::MissingReference("wing reference point"));
            *aero_state = AeroState::still_air(&wing.config);
            continue;
        };

        let frame = reference.world_frame(spatial);
        let result = calculate_wing_forces(&wing.config, &frame, &BodyView::new(spatial, &physics));

        match result {
            Ok(forces) => {
                *aero_state = forces.to_state();
                physics.apply_force_at_point(
                    forces.total(),
                    forces.point,
                    ForceMode::Force,
                    ForceCategory::Aerodynamic,
                );
            }
            Err(err) => {
                debug!("Skipping wing forces: {}", err);
                *aero_state = AeroState::still_air(&wing.config);
            }
        }
    }
}
