mod force_calculator;

pub use force_calculator::{calculate_net_loads, force_accumulator_system, NetLoads};
