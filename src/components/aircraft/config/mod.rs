mod aircraft;
mod loader;
mod mass;

pub use aircraft::JetAircraftConfig;
pub use loader::ConfigError;
pub use mass::MassConfig;
