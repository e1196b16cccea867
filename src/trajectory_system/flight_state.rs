//! Rocket flight dynamics and the touchdown state machine.
//!
//! One call to [`FlightState::step`] is one fixed tick. Within a tick the
//! order is: rotate, thrust, gravity, integrate, friction, clamp, ground
//! contact. All quantities are per tick in screen units (y grows downward),
//! and nothing in this path is random.

use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::constants::EXPLOSION_MAX_RADIUS;
use crate::control::output::ControlOutput;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

use super::landing::{LandingEvaluator, LandingOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Flying,
    Exploding,
    Landed,
    Destroyed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Landed | Phase::Destroyed)
    }
}

/// Angle and velocity at the moment of ground contact, before the vertical
/// velocity is zeroed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    pub angle: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    /// Top-left corner of the rocket's bounding box.
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Degrees from "up", positive counter-clockwise, kept in (-180, 180].
    pub angle: f64,
    /// Rotation applied during the last flying tick, degrees per tick.
    pub angular_rate: f64,
    pub phase: Phase,
    /// Ticks left before `Exploding` becomes `Destroyed`.
    pub explosion_timer: u32,
    pub width: f64,
    pub height: f64,
    pub touchdown: Option<Touchdown>,
}

impl RocketState {
    pub fn at_start(config: &SimulationConfig) -> Self {
        RocketState {
            position: config.start_position(),
            velocity: Vector2D::ZERO,
            angle: 0.0,
            angular_rate: 0.0,
            phase: Phase::Flying,
            explosion_timer: 0,
            width: config.rocket_width,
            height: config.rocket_height,
            touchdown: None,
        }
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Distance between the rocket's base and the top of the ground.
    pub fn altitude(&self, config: &SimulationConfig) -> f64 {
        config.ground_level() - self.position.y
    }

    /// Radius of the explosion flash, growing as the countdown runs out.
    pub fn explosion_radius(&self) -> Option<f64> {
        match self.phase {
            Phase::Exploding => Some((EXPLOSION_MAX_RADIUS - self.explosion_timer as f64).max(0.0)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: Phase,
    pub to: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub phase: Phase,
    /// Set only on the tick where the phase changed.
    pub transition: Option<PhaseTransition>,
    pub state: RocketState,
}

impl StepResult {
    pub fn transitioned(&self) -> bool {
        self.transition.is_some()
    }
}

/// Wraps any angle into (-180, 180].
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone)]
pub struct FlightState {
    state: RocketState,
    config: SimulationConfig,
}

impl FlightState {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let state = RocketState::at_start(&config);
        Self::with_state(config, state)
    }

    /// Resumes from an arbitrary state. The angle is renormalized and the
    /// position clamped so the state invariants hold from the first tick.
    pub fn with_state(
        config: SimulationConfig,
        mut state: RocketState,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        state.angle = normalize_angle(state.angle);
        state.width = config.rocket_width;
        state.height = config.rocket_height;
        state.position.x = state.position.x.clamp(0.0, config.max_x());
        if state.phase == Phase::Flying {
            state.position.y = state.position.y.min(config.ground_level());
        }
        Ok(FlightState { state, config })
    }

    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn step(&mut self, control: &ControlOutput) -> StepResult {
        let previous = self.state.phase;

        match previous {
            Phase::Flying => self.fly(control),
            Phase::Exploding => self.burn_down(),
            Phase::Landed | Phase::Destroyed => {}
        }

        let transition = (self.state.phase != previous).then_some(PhaseTransition {
            from: previous,
            to: self.state.phase,
        });
        if let Some(change) = transition {
            debug!(from = ?change.from, to = ?change.to, "rocket phase changed");
        }

        StepResult {
            phase: self.state.phase,
            transition,
            state: self.state,
        }
    }

    fn fly(&mut self, control: &ControlOutput) {
        let config = &self.config;
        let state = &mut self.state;
        let mode = config.control_mode;

        let rotation = config.angular_velocity * control.rotation(mode);
        state.angle = normalize_angle(state.angle + rotation);
        state.angular_rate = rotation;

        let throttle = control.thrust_level(mode);
        if throttle > 0.0 {
            state.velocity += Vector2D::nose_direction(state.angle) * (config.thrust * throttle);
        }

        state.velocity.y += config.gravity;
        state.position += state.velocity;
        state.velocity.x *= config.friction;

        if state.position.x < 0.0 {
            state.position.x = 0.0;
            state.velocity.x = 0.0;
        } else if state.position.x > config.max_x() {
            state.position.x = config.max_x();
            state.velocity.x = 0.0;
        }
        if config.clamp_top && state.position.y < 0.0 {
            state.position.y = 0.0;
            state.velocity.y = 0.0;
        }

        trace!(
            x = state.position.x,
            y = state.position.y,
            vx = state.velocity.x,
            vy = state.velocity.y,
            angle = state.angle,
            "flight tick"
        );

        let ground_level = config.ground_level();
        if state.position.y > ground_level {
            let touchdown = Touchdown {
                angle: state.angle,
                vx: state.velocity.x,
                vy: state.velocity.y,
            };
            state.position.y = ground_level;
            state.velocity.y = 0.0;
            state.touchdown = Some(touchdown);

            match LandingEvaluator::evaluate(&touchdown, config) {
                LandingOutcome::Safe => state.phase = Phase::Landed,
                LandingOutcome::Unsafe => {
                    state.phase = Phase::Exploding;
                    state.explosion_timer = config.explosion_duration;
                }
            }
            debug!(
                angle = touchdown.angle,
                vx = touchdown.vx,
                vy = touchdown.vy,
                x = state.position.x,
                "ground contact"
            );
        }
    }

    fn burn_down(&mut self) {
        self.state.explosion_timer = self.state.explosion_timer.saturating_sub(1);
        if self.state.explosion_timer == 0 {
            self.state.phase = Phase::Destroyed;
        }
    }
}
