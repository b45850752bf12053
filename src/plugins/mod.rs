mod jet_aircraft;
mod physics;

pub use jet_aircraft::{spawn_jet_aircraft, JetAircraftPlugin, JetPhysicsSet};
pub use physics::PhysicsPlugin;
