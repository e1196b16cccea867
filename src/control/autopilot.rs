use crate::config::SimulationConfig;
use crate::constants::{ANGLE_SCALE, VELOCITY_SCALE};

use super::output::ControlOutput;
use super::policy::{ControlPolicy, Observation};

struct PidController {
    kp: f64, // Proportional gain
    ki: f64, // Integral gain
    kd: f64, // Derivative gain
    previous_error: Option<f64>,
    integral: f64,
    output: f64,
}

impl PidController {
    fn new(kp: f64, ki: f64, kd: f64) -> Self {
        PidController {
            kp,
            ki,
            kd,
            previous_error: None,
            integral: 0.0,
            output: 0.0,
        }
    }

    fn calculate(&mut self, error: f64, delta_time: f64) -> f64 {
        self.integral = (self.integral + error * delta_time).clamp(-10.0, 10.0);
        let derivative = match self.previous_error {
            Some(previous) => (error - previous) / delta_time,
            None => 0.0,
        };
        self.previous_error = Some(error);
        self.output = (self.kp * error + self.ki * self.integral + self.kd * derivative)
            .clamp(-1.0, 1.0);
        self.output
    }
}

/// Baseline pilot: holds a capped descent rate with bang-bang thrust and
/// leans toward the landing target within a tilt that stays inside the safe
/// landing angle.
pub struct LandingAutopilot {
    steering: PidController,
    max_tilt: f64,
    descent_rate: f64,
    angular_velocity: f64,
    has_target: bool,
    delta_time: f64,
}

impl LandingAutopilot {
    pub fn new(config: &SimulationConfig) -> Self {
        // Leave room for one rotation step of overshoot.
        let max_tilt = (config.safe_angle_threshold - config.angular_velocity)
            .clamp(0.0, 30.0);
        let descent_rate = config
            .safe_velocity_threshold
            .map_or(1.0, |limit| (limit / 3.0).min(1.0));

        LandingAutopilot {
            steering: PidController::new(4.0, 0.05, 0.5),
            max_tilt,
            descent_rate,
            angular_velocity: config.angular_velocity,
            has_target: config.landing_zone.is_some(),
            delta_time: 1.0 / config.tick_rate,
        }
    }

    pub fn max_tilt(&self) -> f64 {
        self.max_tilt
    }

    /// Angle the autopilot wants, negative to drift right.
    fn target_angle(&mut self, observation: &Observation) -> f64 {
        let offset = if self.has_target {
            observation.dx
        } else {
            0.5 - observation.dx
        };
        let steer = self.steering.calculate(offset, self.delta_time);
        -steer * self.max_tilt
    }
}

impl ControlPolicy for LandingAutopilot {
    fn decide(&mut self, observation: &Observation) -> ControlOutput {
        let desired = self.target_angle(observation);
        let angle = observation.angle * ANGLE_SCALE;
        let deadband = self.angular_velocity / 2.0;

        let rotate_left = angle < desired - deadband;
        let rotate_right = angle > desired + deadband;
        let thrust = observation.vy * VELOCITY_SCALE > self.descent_rate;

        ControlOutput::discrete(thrust, rotate_left, rotate_right)
    }
}
