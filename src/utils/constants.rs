pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

/// Oswald span efficiency used by the drag polar.
pub const OSWALD_EFFICIENCY: f64 = 0.85;

/// Point speeds below this are treated as zero relative wind [m/s].
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// Lift below this yields a zero L/D readout [N].
pub const LIFT_TO_DRAG_MIN_LIFT: f64 = 0.1;

/// Height above the touchdown reference at which the nozzle is levelled [m].
pub const NOZZLE_RESET_MARGIN: f64 = 0.5;

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 50.0; // s
