mod air_data;
mod force_calculator;

pub use air_data::AirDataValues;
pub use force_calculator::{
    calculate_wing_forces, drag_coefficient, lift_coefficient, lift_to_drag, wing_force_system,
    WingForces,
};
