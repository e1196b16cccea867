use crate::config::ControlMode;

/// Commands for one tick, whoever produced them.
///
/// Each channel is a level in [0, 1]. Discrete rulesets treat a channel as
/// engaged from 0.5 upward; continuous rulesets use the clamped level as is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlOutput {
    pub thrust: f64,
    pub rotate_left: f64,
    pub rotate_right: f64,
}

impl ControlOutput {
    pub const IDLE: ControlOutput = ControlOutput {
        thrust: 0.0,
        rotate_left: 0.0,
        rotate_right: 0.0,
    };

    pub fn new(thrust: f64, rotate_left: f64, rotate_right: f64) -> Self {
        ControlOutput {
            thrust,
            rotate_left,
            rotate_right,
        }
    }

    pub fn discrete(thrust: bool, rotate_left: bool, rotate_right: bool) -> Self {
        let level = |engaged: bool| if engaged { 1.0 } else { 0.0 };
        ControlOutput::new(level(thrust), level(rotate_left), level(rotate_right))
    }

    /// Reads `[thrust, left, right]` from a policy's raw output vector.
    /// Missing entries count as zero, extra entries are ignored.
    pub fn from_network_outputs(outputs: &[f64]) -> Self {
        let at = |i: usize| outputs.get(i).copied().unwrap_or(0.0);
        ControlOutput::new(at(0), at(1), at(2))
    }

    pub fn thrust_level(&self, mode: ControlMode) -> f64 {
        command_level(self.thrust, mode)
    }

    /// Net rotation in [-1, 1]; positive turns the nose left (angle increases).
    pub fn rotation(&self, mode: ControlMode) -> f64 {
        command_level(self.rotate_left, mode) - command_level(self.rotate_right, mode)
    }

    pub fn is_thrusting(&self, mode: ControlMode) -> bool {
        self.thrust_level(mode) > 0.0
    }
}

fn command_level(command: f64, mode: ControlMode) -> f64 {
    match mode {
        ControlMode::Discrete => {
            if command >= 0.5 {
                1.0
            } else {
                0.0
            }
        }
        ControlMode::Continuous => {
            if command.is_nan() {
                0.0
            } else {
                command.clamp(0.0, 1.0)
            }
        }
    }
}
