use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag for colliders that count as ground.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GroundSurface;

/// Minimal ground contact bookkeeping shared by the aircraft models.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundContact {
    /// True while touching a ground surface.
    pub grounded: bool,
    /// Body height recorded at the most recent touchdown [m].
    pub reference_height: f64,
    /// Latched on the first touchdown and never cleared.
    pub has_touched_ground: bool,
}

impl GroundContact {
    pub fn touch_down(&mut self, height: f64) {
        self.grounded = true;
        self.has_touched_ground = true;
        self.reference_height = height;
    }

    pub fn lift_off(&mut self) {
        self.grounded = false;
    }

    /// True once the body has climbed more than `margin` above the touchdown
    /// height after any touchdown.
    pub fn climbed_clear(&self, height: f64, margin: f64) -> bool {
        self.has_touched_ground && height - margin > self.reference_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Started,
    Ended,
}

/// Collision notification from the host physics layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundContactEvent {
    pub aircraft: Entity,
    pub surface: Entity,
    pub phase: ContactPhase,
}
