use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{BodyView, Force, PhysicsComponent, SpatialComponent};
use crate::physics::{ForceMode, RigidBody};

/// Net contributions of one step, split by application mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetLoads {
    pub force: Vector3<f64>,
    pub moment: Vector3<f64>,
    pub impulse: Vector3<f64>,
    pub angular_impulse: Vector3<f64>,
}

/// Sums force-at-point contributions about the world centre of mass.
pub fn calculate_net_loads(forces: &[Force], center_of_mass: &Vector3<f64>) -> NetLoads {
    let mut loads = NetLoads {
        force: Vector3::zeros(),
        moment: Vector3::zeros(),
        impulse: Vector3::zeros(),
        angular_impulse: Vector3::zeros(),
    };

    for force in forces {
        let arm = force.point - center_of_mass;
        let moment = arm.cross(&force.vector);
        match force.mode {
            ForceMode::Force => {
                loads.force += force.vector;
                loads.moment += moment;
            }
            ForceMode::Impulse => {
                loads.impulse += force.vector;
                loads.angular_impulse += moment;
            }
        }
    }

    loads
}

/// Collapses the per-category force list into the net values read by the
/// host integrator.
pub fn force_accumulator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        let com = BodyView::new(spatial, &physics).center_of_mass();
        let loads = calculate_net_loads(&physics.forces, &com);

        physics.net_force = loads.force;
        physics.net_moment = loads.moment;
        physics.net_impulse = loads.impulse;
        physics.net_angular_impulse = loads.angular_impulse;
    }
}
