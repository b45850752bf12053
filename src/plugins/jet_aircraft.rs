use bevy::prelude::*;

use crate::components::{
    AeroState, EngineCommandEvent, EngineControls, FlightTelemetry, GroundContact,
    GroundContactEvent, JetAircraftConfig, JetEngine, PhysicsComponent, SpatialComponent, Wing,
};
use crate::systems::{
    buffer_engine_commands, engine_control_system, force_accumulator_system,
    ground_contact_system, nozzle_reset_system, propulsion_system, telemetry_system,
    wing_force_system,
};
use nalgebra::{UnitQuaternion, Vector3};

/// Per-step ordering of the jet aircraft systems.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum JetPhysicsSet {
    Controls,
    Aerodynamics,
    Propulsion,
    Forces,
    Telemetry,
}

/// Registers the wing, engine and ground contact systems and spawns one
/// aircraft from the given configuration.
pub struct JetAircraftPlugin {
    config: JetAircraftConfig,
}

impl JetAircraftPlugin {
    pub fn new(config: JetAircraftConfig) -> Self {
        Self { config }
    }

    fn setup_aircraft(mut commands: Commands, config: JetAircraftConfig) {
        let entity = spawn_jet_aircraft(&mut commands, &config);
        info!("Spawned {} as {:?}", config.name, entity);
    }
}

/// Spawns a jet aircraft with every component the force systems read.
pub fn spawn_jet_aircraft(commands: &mut Commands, config: &JetAircraftConfig) -> Entity {
    commands
        .spawn((
            Name::new(config.name.clone()),
            SpatialComponent::new(
                config.start_position,
                config.start_velocity,
                UnitQuaternion::identity(),
                Vector3::zeros(),
            ),
            PhysicsComponent::new(config.mass.mass, config.mass.center_of_mass),
            Wing::new(config.wing.clone(), config.wing_reference),
            AeroState::still_air(&config.wing),
            JetEngine::new(config.engine.clone(), config.nozzle),
            EngineControls::new(),
            GroundContact::default(),
            FlightTelemetry::default(),
        ))
        .id()
}

impl Plugin for JetAircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.add_event::<EngineCommandEvent>()
            .add_event::<GroundContactEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    JetPhysicsSet::Controls,
                    JetPhysicsSet::Aerodynamics,
                    JetPhysicsSet::Propulsion,
                    JetPhysicsSet::Forces,
                    JetPhysicsSet::Telemetry,
                )
                    .chain(),
            )
            .add_systems(Startup, move |commands: Commands| {
                Self::setup_aircraft(commands, config.clone())
            })
            .add_systems(
                FixedUpdate,
                (
                    (
                        ground_contact_system,
                        nozzle_reset_system,
                        buffer_engine_commands,
                        engine_control_system,
                    )
                        .chain()
                        .in_set(JetPhysicsSet::Controls),
                    wing_force_system.in_set(JetPhysicsSet::Aerodynamics),
                    propulsion_system.in_set(JetPhysicsSet::Propulsion),
                    force_accumulator_system.in_set(JetPhysicsSet::Forces),
                    telemetry_system.in_set(JetPhysicsSet::Telemetry),
                ),
            );
    }
}
