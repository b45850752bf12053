use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::Attachment;
use crate::utils::SEA_LEVEL_DENSITY;

/// Aerodynamic parameters of the single lifting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingConfig {
    /// Air density ρ [kg/m³]
    pub air_density: f64,
    /// Reference wing area S [m²]
    pub wing_area: f64,
    /// Aspect ratio AR
    pub aspect_ratio: f64,
    /// Zero-lift drag coefficient Cd0
    pub c_d_0: f64,
    /// Lift-curve slope Cl_α [1/rad]
    pub c_l_alpha: f64,
}

impl Default for WingConfig {
    fn default() -> Self {
        Self {
            air_density: SEA_LEVEL_DENSITY,
            wing_area: 1.5,
            aspect_ratio: 8.0,
            c_d_0: 0.02,
            c_l_alpha: 5.5,
        }
    }
}

/// The wing and the point its forces act at. Without a reference point the
/// wing contributes nothing.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wing {
    pub config: WingConfig,
    pub reference: Option<Attachment>,
}

impl Wing {
    pub fn new(config: WingConfig, reference: Option<Attachment>) -> Self {
        Self { config, reference }
    }
}

/// Aerodynamic diagnostics from the most recent fixed step.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroState {
    /// Speed of the wing reference point (m/s).
    pub airspeed: f64,
    /// Unit direction of the incoming flow, zero when undefined.
    pub relative_wind: Vector3<f64>,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    pub c_l: f64,
    pub c_d: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Lift magnitude (N).
    pub lift: f64,
    /// Drag magnitude (N).
    pub drag: f64,
    pub lift_to_drag: f64,
}

impl Default for AeroState {
    fn default() -> Self {
        Self::still_air(&WingConfig::default())
    }
}

impl AeroState {
    /// Readout for a step with no relative wind: only parasitic drag remains
    /// in the coefficients.
    pub fn still_air(config: &WingConfig) -> Self {
        Self {
            airspeed: 0.0,
            relative_wind: Vector3::zeros(),
            alpha: 0.0,
            c_l: 0.0,
            c_d: config.c_d_0,
            dynamic_pressure: 0.0,
            lift: 0.0,
            drag: 0.0,
            lift_to_drag: 0.0,
        }
    }
}
