use bevy::prelude::*;

use crate::resources::PhysicsConfig;
use crate::utils::DEFAULT_TIMESTEP;

/// Fixed-step clock shared by every force system.
pub struct PhysicsPlugin {
    pub timestep: f64,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PhysicsConfig::with_timestep(self.timestep))
            .insert_resource(Time::<Fixed>::from_seconds(self.timestep));
    }
}
