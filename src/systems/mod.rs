pub mod aerodynamics;
mod ground;
pub mod physics;
pub mod propulsion;
mod telemetry;

pub use aerodynamics::{calculate_wing_forces, wing_force_system, AirDataValues, WingForces};
pub use ground::{ground_contact_system, nozzle_reset_system};
pub use physics::{calculate_net_loads, force_accumulator_system, NetLoads};
pub use propulsion::{
    buffer_engine_commands, calculate_engine_outputs, calculate_thrust, engine_control_system,
    propulsion_system, update_engine_controls, EngineOutputs,
};
pub use telemetry::telemetry_system;
