use bevy::prelude::*;

use crate::components::{
    Force, JetEngine, JetEngineConfig, JetEngineState, PhysicsComponent, SpatialComponent,
    SurfaceFrame,
};
use crate::physics::{ForceCategory, PhysicsError};

/// Sea-level static thrust for the current throttle and afterburner setting.
/// No lapse with altitude or airspeed.
pub fn calculate_thrust(config: &JetEngineConfig, state: &JetEngineState) -> f64 {
    state.throttle() * config.available_thrust(state.afterburner())
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutputs {
    /// Thrust magnitude (N), reported even when nothing is applied.
    pub thrust: f64,
    /// Force along the nozzle's forward axis at the nozzle position.
    pub force: Option<Force>,
}

pub fn calculate_engine_outputs(
    config: &JetEngineConfig,
    state: &JetEngineState,
    nozzle: Option<&SurfaceFrame>,
) -> EngineOutputs {
    let thrust = calculate_thrust(config, state);

    let force = match nozzle {
        Some(frame) if thrust > 0.0 => Some(Force {
            vector: frame.forward * thrust,
            point: frame.position,
            mode: config.application.force_mode(),
            category: ForceCategory::Propulsive,
        }),
        _ => None,
    };

    EngineOutputs { thrust, force }
}

/// Bevy system computing thrust and handing it to the physics component.
pub fn propulsion_system(
    mut query: Query<(&mut JetEngine, &SpatialComponent, &mut PhysicsComponent)>,
) {
    for (mut engine, spatial, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Propulsive);

        let nozzle = engine.nozzle.map(|n| n.world_frame(spatial));
        let outputs = calculate_engine_outputs(&engine.config, &engine.state, nozzle.as_ref());

        engine.state.record_thrust(outputs.thrust);

        match outputs.force {
            Some(force) => physics.add_force(force),
            None if nozzle.is_none() && outputs.thrust > 0.0 => {
                debug!("{}", PhysicsError::MissingReference("engine nozzle"));
            }
            None => {}
        }
    }
}
