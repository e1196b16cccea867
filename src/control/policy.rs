//! The seam between the flight core and whatever flies the rocket.
//!
//! A policy sees a normalized [`Observation`] and answers with a
//! [`ControlOutput`]. Keyboard input, scripted closures, evolved networks
//! and the autopilot all plug in here and share the same step function.

use crate::config::SimulationConfig;
use crate::constants::{ANGLE_SCALE, VELOCITY_SCALE};
use crate::trajectory_system::flight_state::RocketState;

use super::output::ControlOutput;

/// Rocket state scaled to roughly [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Offset from the rocket's center to the landing-zone center over the
    /// scene width, or the center's x over the scene width without a zone.
    pub dx: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle: f64,
    pub angular_rate: f64,
    pub flight_time_fraction: f64,
    pub extended: bool,
}

impl Observation {
    pub fn from_state(state: &RocketState, config: &SimulationConfig, tick: u32) -> Self {
        let center_x = state.center().x;
        let dx = match config.landing_zone {
            Some(zone) => (zone.center() - center_x) / config.scene_width,
            None => center_x / config.scene_width,
        };
        let flight_time_fraction = match config.max_flight_ticks {
            Some(limit) => (tick as f64 / limit as f64).min(1.0),
            None => 0.0,
        };

        Observation {
            dx,
            y: state.position.y / config.scene_height,
            vx: state.velocity.x / VELOCITY_SCALE,
            vy: state.velocity.y / VELOCITY_SCALE,
            angle: state.angle / ANGLE_SCALE,
            angular_rate: state.angular_rate / config.angular_velocity,
            flight_time_fraction,
            extended: config.extended_observation,
        }
    }

    /// Input vector for a policy network: five entries, or seven with the
    /// angular rate and flight-time fraction appended.
    pub fn features(&self) -> Vec<f64> {
        let mut features = vec![self.dx, self.y, self.vx, self.vy, self.angle];
        if self.extended {
            features.push(self.angular_rate);
            features.push(self.flight_time_fraction);
        }
        features
    }
}

pub trait ControlPolicy {
    fn decide(&mut self, observation: &Observation) -> ControlOutput;
}

impl<F> ControlPolicy for F
where
    F: FnMut(&Observation) -> ControlOutput,
{
    fn decide(&mut self, observation: &Observation) -> ControlOutput {
        self(observation)
    }
}

/// Adapts an opaque network (feature vector in, `[thrust, left, right]` out)
/// to a [`ControlPolicy`].
pub struct NetworkPolicy<N> {
    network: N,
}

impl<N> NetworkPolicy<N>
where
    N: FnMut(&[f64]) -> Vec<f64>,
{
    pub fn new(network: N) -> Self {
        NetworkPolicy { network }
    }
}

impl<N> ControlPolicy for NetworkPolicy<N>
where
    N: FnMut(&[f64]) -> Vec<f64>,
{
    fn decide(&mut self, observation: &Observation) -> ControlOutput {
        let outputs = (self.network)(&observation.features());
        ControlOutput::from_network_outputs(&outputs)
    }
}
