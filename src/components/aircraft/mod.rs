pub mod config;

pub use config::{ConfigError, JetAircraftConfig, MassConfig};
