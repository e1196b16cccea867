use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::exhaust_system::trail::ParticleTrail;
use crate::telemetry_system::hud::RenderFrame;
use crate::trajectory_system::flight_state::{FlightState, Phase, RocketState, StepResult};
use crate::utils::vector2d::Vector2D;

use super::output::ControlOutput;
use super::policy::Observation;

/// One episode's rocket: its flight state plus the exhaust it leaves behind.
pub struct Rocket {
    flight: FlightState,
    trail: ParticleTrail,
    ticks: u32,
}

/// What happened during one [`Rocket::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Ticks completed so far, including this one.
    pub tick: u32,
    pub step: StepResult,
    /// Whether the rocket was flying when the tick started.
    pub was_flying: bool,
    /// Thrust level actually applied, 0 when the rocket was not flying.
    pub throttle: f64,
    pub previous_velocity: Vector2D,
    pub particles_emitted: usize,
}

impl Rocket {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let flight = FlightState::new(config)?;
        Ok(Self::from_flight(flight))
    }

    pub fn from_flight(flight: FlightState) -> Self {
        let trail = ParticleTrail::new(flight.config().exhaust.clone());
        Rocket {
            flight,
            trail,
            ticks: 0,
        }
    }

    /// Runs one full tick: physics and collisions first, then exhaust
    /// emission, then particle aging.
    pub fn tick(&mut self, control: &ControlOutput) -> TickReport {
        let before = *self.flight.state();
        let was_flying = before.phase == Phase::Flying;
        let throttle = if was_flying {
            control.thrust_level(self.flight.config().control_mode)
        } else {
            0.0
        };

        let step = self.flight.step(control);

        let particles_emitted = if throttle > 0.0 && step.phase == Phase::Flying {
            let count = self.trail.per_tick();
            self.trail
                .emit(exhaust_origin(&step.state), exhaust_angle(&step.state), count);
            count
        } else {
            0
        };
        self.trail.advance();
        self.ticks += 1;

        TickReport {
            tick: self.ticks,
            step,
            was_flying,
            throttle,
            previous_velocity: before.velocity,
            particles_emitted,
        }
    }

    pub fn observation(&self) -> Observation {
        Observation::from_state(self.flight.state(), self.flight.config(), self.ticks)
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::capture(self.flight.state(), &self.trail)
    }

    pub fn state(&self) -> &RocketState {
        self.flight.state()
    }

    pub fn config(&self) -> &SimulationConfig {
        self.flight.config()
    }

    pub fn trail(&self) -> &ParticleTrail {
        &self.trail
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Middle of the rocket's tail, where exhaust leaves the engine.
fn exhaust_origin(state: &RocketState) -> Vector2D {
    let tail = Vector2D::nose_direction(state.angle) * (-state.height / 2.0);
    state.center() + tail
}

/// Screen-convention heading opposite the nose.
fn exhaust_angle(state: &RocketState) -> f64 {
    90.0 - state.angle
}
