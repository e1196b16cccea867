//! Display-only values derived from the rocket each tick. Nothing here
//! feeds back into the simulation.

use crate::config::SimulationConfig;
use crate::exhaust_system::trail::ParticleTrail;
use crate::trajectory_system::flight_state::{Phase, RocketState};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub angle: f64,
    /// Magnitude of the velocity change over the last tick, per second squared.
    pub acceleration: f64,
    pub altitude: f64,
}

impl HudReadout {
    pub fn compute(
        previous_velocity: Vector2D,
        state: &RocketState,
        config: &SimulationConfig,
    ) -> Self {
        HudReadout {
            angle: state.angle,
            acceleration: (state.velocity - previous_velocity).magnitude() * config.tick_rate,
            altitude: state.altitude(config),
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Angle: {:.1}°", self.angle),
            format!("Acceleration: {:.1} px/s²", self.acceleration),
            format!("Altitude: {:.1} px", self.altitude),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub position: Vector2D,
    pub radius: u32,
    pub color: (u8, u8, u8),
    pub alpha: u8,
}

/// Everything a renderer needs for one tick. The renderer rotates the
/// sprite about its center and draws the explosion flash when present.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub position: Vector2D,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub phase: Phase,
    pub explosion_radius: Option<f64>,
    pub particles: Vec<ParticleSprite>,
}

impl RenderFrame {
    pub fn capture(state: &RocketState, trail: &ParticleTrail) -> Self {
        RenderFrame {
            position: state.position,
            width: state.width,
            height: state.height,
            angle: state.angle,
            phase: state.phase,
            explosion_radius: state.explosion_radius(),
            particles: trail
                .particles()
                .iter()
                .map(|particle| ParticleSprite {
                    position: particle.position,
                    radius: particle.radius,
                    color: particle.color,
                    alpha: particle.alpha(),
                })
                .collect(),
        }
    }

    pub fn center(&self) -> Vector2D {
        self.position + Vector2D::new(self.width / 2.0, self.height / 2.0)
    }
}
