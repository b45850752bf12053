use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Read-only flight snapshot, refreshed once per fixed step.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// Body speed [m/s]
    pub speed: f64,
    /// Speed of the wing reference point [m/s]
    pub airspeed: f64,
    pub altitude: f64,
    pub vertical_speed: f64,
    pub grounded: bool,
    /// [rad]
    pub alpha: f64,
    pub c_l: f64,
    pub c_d: f64,
    pub lift_to_drag: f64,
    pub lift: f64,
    pub drag: f64,
    pub dynamic_pressure: f64,
    pub throttle: f64,
    pub afterburner: bool,
    pub last_applied_thrust: f64,
}

impl FlightTelemetry {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
