use bevy::prelude::*;
use std::collections::VecDeque;

use crate::physics::{EngineCommand, EngineInput};

/// Engine control state for one aircraft: level-sampled hold flags plus the
/// discrete commands waiting for the next fixed step.
#[derive(Component, Debug, Clone, Default)]
pub struct EngineControls {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pending: VecDeque<EngineCommand>,
}

impl EngineControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls with the given hold flags and nothing queued.
    pub fn held(throttle_up: bool, throttle_down: bool) -> Self {
        Self {
            throttle_up,
            throttle_down,
            ..Self::default()
        }
    }

    pub fn push(&mut self, command: EngineCommand) {
        self.pending.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl EngineInput for EngineControls {
    fn throttle_up_held(&self) -> bool {
        self.throttle_up
    }

    fn throttle_down_held(&self) -> bool {
        self.throttle_down
    }

    fn drain_commands(&mut self) -> Vec<EngineCommand> {
        self.pending.drain(..).collect()
    }
}

/// A discrete engine command addressed to one aircraft, raised by the input
/// layer at any point in the frame.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCommandEvent {
    pub aircraft: Entity,
    pub command: EngineCommand,
}
