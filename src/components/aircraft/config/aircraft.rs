use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{loader::require, ConfigError, MassConfig};
use crate::components::{Attachment, JetEngineConfig, WingConfig};

/// Complete description of a single-wing, single-engine jet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetAircraftConfig {
    pub name: String,
    pub mass: MassConfig,
    pub wing: WingConfig,
    /// Point the wing forces act at. `None` disables aerodynamics.
    pub wing_reference: Option<Attachment>,
    pub engine: JetEngineConfig,
    /// Point and axis the thrust acts along. `None` disables thrust.
    pub nozzle: Option<Attachment>,
    /// Initial position in world space (m).
    pub start_position: Vector3<f64>,
    /// Initial velocity in world space (m/s).
    pub start_velocity: Vector3<f64>,
}

impl Default for JetAircraftConfig {
    fn default() -> Self {
        Self {
            name: "JetTrainer".to_string(),
            mass: MassConfig::default(),
            wing: WingConfig::default(),
            wing_reference: Some(Attachment::at(Vector3::new(0.0, 0.0, -0.3))),
            engine: JetEngineConfig::default(),
            nozzle: Some(Attachment::at(Vector3::new(0.0, 0.0, 4.0))),
            start_position: Vector3::zeros(),
            start_velocity: Vector3::zeros(),
        }
    }
}

impl JetAircraftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v > 0.0;
        let non_negative = |v: f64| v >= 0.0;

        require("mass.mass", self.mass.mass, positive, "positive")?;
        require("wing.air_density", self.wing.air_density, positive, "positive")?;
        require("wing.wing_area", self.wing.wing_area, positive, "positive")?;
        require("wing.aspect_ratio", self.wing.aspect_ratio, positive, "positive")?;
        require("wing.c_d_0", self.wing.c_d_0, non_negative, "non-negative")?;
        require("wing.c_l_alpha", self.wing.c_l_alpha, |_| true, "finite")?;
        require("engine.thrust_dry", self.engine.thrust_dry, non_negative, "non-negative")?;
        require(
            "engine.thrust_afterburner",
            self.engine.thrust_afterburner,
            non_negative,
            "non-negative",
        )?;
        require("engine.throttle_rate", self.engine.throttle_rate, non_negative, "non-negative")?;
        require("engine.throttle_step", self.engine.throttle_step, non_negative, "non-negative")?;
        require(
            "engine.nozzle_reset_margin",
            self.engine.nozzle_reset_margin,
            non_negative,
            "non-negative",
        )?;

        if self.wing_reference.is_none() {
            warn!("{}: no wing reference point, aerodynamics disabled", self.name);
        }
        if self.nozzle.is_none() {
            warn!("{}: no nozzle, thrust disabled", self.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{StepRule, ThrustApplication};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(JetAircraftConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
name: Trainer
wing:
  wing_area: 2.0
engine:
  step_rule: Additive
  application: Force
nozzle: ~
"#;
        let config = JetAircraftConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.name, "Trainer");
        assert_eq!(config.wing.wing_area, 2.0);
        assert_eq!(config.wing.aspect_ratio, 8.0);
        assert_eq!(config.engine.step_rule, StepRule::Additive);
        assert_eq!(config.engine.application, ThrustApplication::Force);
        assert_eq!(config.engine.thrust_dry, 79000.0);
        assert!(config.nozzle.is_none());
        assert!(config.wing_reference.is_some());
    }

    #[test]
    fn test_rejects_non_positive_area() {
        let yaml = "wing:\n  wing_area: 0.0\n";
        match JetAircraftConfig::from_yaml_str(yaml) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("wing.wing_area")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_thrust() {
        let config = JetAircraftConfig {
            engine: JetEngineConfig {
                thrust_afterburner: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_a_yaml_error() {
        let result = JetAircraftConfig::from_yaml_str("wing: [1, 2");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let config = JetAircraftConfig {
            name: "RoundTrip".to_string(),
            start_velocity: Vector3::new(0.0, 0.0, -120.0),
            ..Default::default()
        };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml_string().unwrap().as_bytes())
            .unwrap();

        let loaded = JetAircraftConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let result = JetAircraftConfig::from_file("/nonexistent/jetsim/aircraft.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
