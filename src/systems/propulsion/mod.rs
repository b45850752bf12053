mod engine;
mod powerplant;

pub use engine::{buffer_engine_commands, engine_control_system, update_engine_controls};
pub use powerplant::{
    calculate_engine_outputs, calculate_thrust, propulsion_system, EngineOutputs,
};
