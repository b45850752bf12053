use approx::assert_relative_eq;
use jetsim::components::{PhysicsComponent, SpatialComponent};
use nalgebra::Vector3;

/// Assert that a spatial component's state is finite
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite"
    );
}

/// Assert that every accumulated force and moment is finite
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(physics.mass > 0.0, "Mass must be positive");
    for (name, value) in [
        ("net force", physics.net_force),
        ("net moment", physics.net_moment),
        ("net impulse", physics.net_impulse),
        ("net angular impulse", physics.net_angular_impulse),
    ] {
        assert!(
            value.iter().all(|x| x.is_finite()),
            "{name} contains non-finite values"
        );
    }
    for force in &physics.forces {
        assert!(
            force.vector.iter().all(|x| x.is_finite()),
            "{:?} force is not finite",
            force.category
        );
    }
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
