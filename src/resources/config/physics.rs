use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_TIMESTEP;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed simulation step (s)
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(timestep: f64) -> Self {
        Self { timestep }
    }
}
