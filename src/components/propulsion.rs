use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Attachment;
use crate::physics::{EngineCommand, ForceMode};
use crate::utils::{clamp01, NOZZLE_RESET_MARGIN};

/// How a discrete throttle step combines with the current setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepRule {
    /// `throttle = clamp01(throttle * ±step)`. Any step down collapses the
    /// throttle to zero and a step up scales rather than increments.
    #[default]
    Multiplicative,
    /// `throttle = clamp01(throttle ± step)`.
    Additive,
}

/// How the thrust value is handed to the integrator each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrustApplication {
    /// The thrust in newtons is applied as a per-step impulse, so the
    /// effective force scales with the step rate.
    #[default]
    Impulse,
    /// The thrust is applied as a continuous force.
    Force,
}

impl ThrustApplication {
    pub fn force_mode(self) -> ForceMode {
        match self {
            ThrustApplication::Impulse => ForceMode::Impulse,
            ThrustApplication::Force => ForceMode::Force,
        }
    }
}

/// Configuration for a single afterburning jet engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetEngineConfig {
    /// Dry thrust at sea level static conditions (N)
    pub thrust_dry: f64,
    /// Afterburner thrust at sea level static conditions (N)
    pub thrust_afterburner: f64,
    /// Continuous throttle slew rate (1/s)
    pub throttle_rate: f64,
    /// Discrete throttle step
    pub throttle_step: f64,
    pub step_rule: StepRule,
    pub application: ThrustApplication,
    /// Climb above the touchdown height after which the nozzle is levelled (m)
    pub nozzle_reset_margin: f64,
}

impl Default for JetEngineConfig {
    fn default() -> Self {
        Self {
            thrust_dry: 79000.0,
            thrust_afterburner: 129000.0,
            throttle_rate: 1.0,
            throttle_step: 0.05,
            step_rule: StepRule::default(),
            application: ThrustApplication::default(),
            nozzle_reset_margin: NOZZLE_RESET_MARGIN,
        }
    }
}

impl JetEngineConfig {
    /// Sea-level static thrust available in the given mode (N).
    pub fn available_thrust(&self, afterburner: bool) -> f64 {
        if afterburner {
            self.thrust_afterburner
        } else {
            self.thrust_dry
        }
    }
}

/// Throttle and afterburner state. The throttle can only be written through
/// [`JetEngineState::set_throttle`], which clamps into `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JetEngineState {
    throttle: f64,
    afterburner: bool,
    last_applied_thrust: f64,
}

impl JetEngineState {
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn afterburner(&self) -> bool {
        self.afterburner
    }

    /// Thrust magnitude computed on the last step (N).
    pub fn last_applied_thrust(&self) -> f64 {
        self.last_applied_thrust
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = clamp01(throttle);
    }

    pub fn record_thrust(&mut self, thrust: f64) {
        self.last_applied_thrust = thrust;
    }

    /// Continuous slew while a throttle control is held.
    pub fn ramp(&mut self, rate: f64, dt: f64) {
        self.set_throttle(self.throttle + rate * dt);
    }

    pub fn step(&mut self, delta: f64, rule: StepRule) {
        match rule {
            StepRule::Multiplicative => self.set_throttle(self.throttle * delta),
            StepRule::Additive => self.set_throttle(self.throttle + delta),
        }
    }

    pub fn toggle_afterburner(&mut self) {
        self.afterburner = !self.afterburner;
    }

    pub fn apply_command(&mut self, command: EngineCommand, config: &JetEngineConfig) {
        match command {
            EngineCommand::StepUp => self.step(config.throttle_step, config.step_rule),
            EngineCommand::StepDown => self.step(-config.throttle_step, config.step_rule),
            EngineCommand::ToggleAfterburner => self.toggle_afterburner(),
        }
    }
}

/// A jet engine mounted on the airframe. Without a nozzle no thrust is applied.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct JetEngine {
    pub config: JetEngineConfig,
    pub state: JetEngineState,
    pub nozzle: Option<Attachment>,
}

impl JetEngine {
    pub fn new(config: JetEngineConfig, nozzle: Option<Attachment>) -> Self {
        Self {
            config,
            state: JetEngineState::default(),
            nozzle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let state = JetEngineState::default();
        assert_eq!(state.throttle(), 0.0);
        assert!(!state.afterburner());
        assert_eq!(state.last_applied_thrust(), 0.0);
    }

    #[test]
    fn test_ramp_clamps_at_both_ends() {
        let mut state = JetEngineState::default();
        for _ in 0..100 {
            state.ramp(1.0, 0.02);
        }
        assert_eq!(state.throttle(), 1.0);

        for _ in 0..100 {
            state.ramp(-1.0, 0.02);
        }
        assert_eq!(state.throttle(), 0.0);
    }

    #[test]
    fn test_multiplicative_step_down_collapses_to_zero() {
        let config = JetEngineConfig::default();
        let mut state = JetEngineState::default();
        state.set_throttle(0.8);

        state.apply_command(EngineCommand::StepDown, &config);
        // 0.8 * -0.05 = -0.04, clamped.
        assert_eq!(state.throttle(), 0.0);
    }

    #[test]
    fn test_multiplicative_step_up_scales() {
        let config = JetEngineConfig::default();
        let mut state = JetEngineState::default();
        state.set_throttle(0.8);

        state.apply_command(EngineCommand::StepUp, &config);
        assert_relative_eq!(state.throttle(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_additive_step() {
        let config = JetEngineConfig {
            step_rule: StepRule::Additive,
            ..Default::default()
        };
        let mut state = JetEngineState::default();
        state.set_throttle(0.8);

        state.apply_command(EngineCommand::StepDown, &config);
        assert_relative_eq!(state.throttle(), 0.75, epsilon = 1e-12);

        for _ in 0..10 {
            state.apply_command(EngineCommand::StepUp, &config);
        }
        assert_eq!(state.throttle(), 1.0);
    }

    #[test]
    fn test_double_toggle_restores_afterburner() {
        let config = JetEngineConfig::default();
        let mut state = JetEngineState::default();

        state.apply_command(EngineCommand::ToggleAfterburner, &config);
        assert!(state.afterburner());
        state.apply_command(EngineCommand::ToggleAfterburner, &config);
        assert!(!state.afterburner());
    }

    #[test]
    fn test_set_throttle_clamps() {
        let mut state = JetEngineState::default();
        state.set_throttle(3.0);
        assert_eq!(state.throttle(), 1.0);
        state.set_throttle(-0.1);
        assert_eq!(state.throttle(), 0.0);
    }

    #[test]
    fn test_throttle_stays_in_range_for_mixed_sequences() {
        let configs = [
            JetEngineConfig::default(),
            JetEngineConfig {
                step_rule: StepRule::Additive,
                throttle_step: 0.3,
                ..Default::default()
            },
        ];
        let commands = [
            EngineCommand::StepUp,
            EngineCommand::StepDown,
            EngineCommand::ToggleAfterburner,
        ];

        for config in &configs {
            let mut state = JetEngineState::default();
            for i in 0..500usize {
                match i % 7 {
                    0 | 3 => state.ramp(config.throttle_rate, 0.13),
                    1 => state.ramp(-config.throttle_rate, 0.05),
                    _ => state.apply_command(commands[i % commands.len()], config),
                }
                assert!(
                    (0.0..=1.0).contains(&state.throttle()),
                    "throttle out of range: {}",
                    state.throttle()
                );
            }
        }
    }
}
