use jetsim::components::{Attachment, JetAircraftConfig, ThrustApplication};
use nalgebra::{UnitQuaternion, Vector3};

/// Wing pitched up by 0.1 rad, flying level at 100 m/s.
pub fn create_reference_config() -> JetAircraftConfig {
    JetAircraftConfig {
        name: "reference_jet".to_string(),
        wing_reference: Some(
            Attachment::at(Vector3::new(0.0, 0.0, -0.3))
                .with_rotation(UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.1)),
        ),
        nozzle: Some(Attachment::at(Vector3::new(0.0, 0.0, 4.0))),
        start_position: Vector3::new(0.0, 1000.0, 0.0),
        start_velocity: Vector3::new(0.0, 0.0, -100.0),
        ..Default::default()
    }
}

/// Parked on the ground with no airflow.
pub fn create_parked_config() -> JetAircraftConfig {
    JetAircraftConfig {
        name: "parked_jet".to_string(),
        start_position: Vector3::zeros(),
        start_velocity: Vector3::zeros(),
        ..Default::default()
    }
}

pub fn create_force_mode_config() -> JetAircraftConfig {
    let mut config = create_reference_config();
    config.engine.application = ThrustApplication::Force;
    config
}
