use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::physics::{ForceCategory, ForceMode, ForceSink, RigidBody};

/// Mass properties plus the per-step force ledger handed to the integrator.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    /// Centre of mass in body coordinates [m]
    pub center_of_mass: Vector3<f64>,
    /// Sum of continuous forces [N]
    pub net_force: Vector3<f64>,
    /// Sum of continuous moments about the centre of mass [N·m]
    pub net_moment: Vector3<f64>,
    /// Sum of impulses [N·s]
    pub net_impulse: Vector3<f64>,
    /// Sum of angular impulses about the centre of mass [N·m·s]
    pub net_angular_impulse: Vector3<f64>,
    pub forces: Vec<Force>,
}

/// A single world-space contribution applied at a world-space point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub point: Vector3<f64>,
    pub mode: ForceMode,
    pub category: ForceCategory,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self::new(1000.0, Vector3::zeros())
    }
}

impl PhysicsComponent {
    pub fn new(mass: f64, center_of_mass: Vector3<f64>) -> Self {
        Self {
            mass,
            center_of_mass,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            net_impulse: Vector3::zeros(),
            net_angular_impulse: Vector3::zeros(),
            forces: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    /// Drops every stored contribution of one category.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
    }

    pub fn forces_in<'a>(
        &'a self,
        category: &'a ForceCategory,
    ) -> impl Iterator<Item = &'a Force> + 'a {
        self.forces.iter().filter(move |f| &f.category == category)
    }
}

impl ForceSink for PhysicsComponent {
    fn apply_force_at_point(
        &mut self,
        vector: Vector3<f64>,
        point: Vector3<f64>,
        mode: ForceMode,
        category: ForceCategory,
    ) {
        self.add_force(Force {
            vector,
            point,
            mode,
            category,
        });
    }
}

/// Borrowed view joining spatial state and mass properties.
#[derive(Debug, Clone, Copy)]
pub struct BodyView<'a> {
    pub spatial: &'a SpatialComponent,
    pub physics: &'a PhysicsComponent,
}

impl<'a> BodyView<'a> {
    pub fn new(spatial: &'a SpatialComponent, physics: &'a PhysicsComponent) -> Self {
        Self { spatial, physics }
    }
}

impl RigidBody for BodyView<'_> {
    fn linear_velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.spatial.angular_velocity
    }

    fn center_of_mass(&self) -> Vector3<f64> {
        self.spatial.to_world(&self.physics.center_of_mass)
    }
}
