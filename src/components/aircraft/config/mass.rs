use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassConfig {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Centre of mass in body coordinates (m).
    pub center_of_mass: Vector3<f64>,
}

impl Default for MassConfig {
    fn default() -> Self {
        Self {
            mass: 9000.0,
            center_of_mass: Vector3::zeros(),
        }
    }
}
