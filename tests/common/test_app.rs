use bevy::prelude::*;
use jetsim::{
    components::{
        EngineCommandEvent, GroundContactEvent, GroundSurface, JetAircraftConfig, JetEngine,
    },
    physics::EngineCommand,
    plugins::{JetAircraftPlugin, PhysicsPlugin},
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft_config: JetAircraftConfig,
    timestep: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft_config: JetAircraftConfig::default(),
            timestep: 1.0 / 50.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: JetAircraftConfig) -> Self {
        self.aircraft_config = config;
        self
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        // No TimePlugin: fixed steps are driven explicitly by the tests.
        app.add_plugins(PhysicsPlugin {
            timestep: self.timestep,
        })
        .add_plugins(JetAircraftPlugin::new(self.aircraft_config));

        // Run an initial update to spawn the aircraft
        app.update();

        let aircraft = {
            let world = app.world_mut();
            let mut query = world.query_filtered::<Entity, With<JetEngine>>();
            query
                .get_single(world)
                .expect("exactly one aircraft should be spawned")
        };

        let ground = app.world_mut().spawn(GroundSurface).id();

        TestApp {
            app,
            aircraft,
            ground,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub aircraft: Entity,
    pub ground: Entity,
}

impl TestApp {
    /// Runs one frame followed by one fixed physics step.
    pub fn step(&mut self) {
        self.app.update();
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn send_command(&mut self, command: EngineCommand) {
        self.app.world_mut().send_event(EngineCommandEvent {
            aircraft: self.aircraft,
            command,
        });
    }

    pub fn send_contact(&mut self, event: GroundContactEvent) {
        self.app.world_mut().send_event(event);
    }

    pub fn get<T: Component>(&self) -> &T {
        self.app
            .world()
            .get::<T>(self.aircraft)
            .expect("aircraft is missing a component")
    }

    pub fn get_mut<T: Component>(&mut self) -> Mut<T> {
        self.app
            .world_mut()
            .get_mut::<T>(self.aircraft)
            .expect("aircraft is missing a component")
    }
}
