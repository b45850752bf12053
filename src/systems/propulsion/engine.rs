use bevy::prelude::*;

use crate::components::{
    EngineCommandEvent, EngineControls, JetEngine, JetEngineConfig, JetEngineState,
};
use crate::physics::EngineInput;
use crate::resources::PhysicsConfig;

/// Advances the throttle state by one fixed step.
///
/// Buffered discrete commands are applied first, in arrival order and once
/// each, then the held controls slew the throttle. Every write clamps.
pub fn update_engine_controls(
    state: &mut JetEngineState,
    config: &JetEngineConfig,
    input: &mut impl EngineInput,
    dt: f64,
) {
    for command in input.drain_commands() {
        state.apply_command(command, config);
    }

    if input.throttle_up_held() {
        state.ramp(config.throttle_rate, dt);
    }
    if input.throttle_down_held() {
        state.ramp(-config.throttle_rate, dt);
    }
}

/// Moves discrete commands raised since the last fixed step into the owning
/// aircraft's queue. Runs inside the fixed step, ahead of
/// [`engine_control_system`], so a command sent anywhere in the frame is
/// applied by the next step.
pub fn buffer_engine_commands(
    mut events: EventReader<EngineCommandEvent>,
    mut controls: Query<&mut EngineControls, With<JetEngine>>,
) {
    for event in events.read() {
        match controls.get_mut(event.aircraft) {
            Ok(mut aircraft_controls) => aircraft_controls.push(event.command),
            Err(_) => warn!(
                "Dropping {:?}: entity {:?} has no engine",
                event.command, event.aircraft
            ),
        }
    }
}

/// Bevy system applying engine controls once per fixed step.
pub fn engine_control_system(
    mut query: Query<(&mut JetEngine, &mut EngineControls)>,
    physics_config: Res<PhysicsConfig>,
) {
    let dt = physics_config.timestep;

    for (mut engine, mut controls) in query.iter_mut() {
        let JetEngine { config, state, .. } = &mut *engine;
        update_engine_controls(state, config, &mut *controls, dt);
    }
}
