pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod exhaust_system;
pub mod telemetry_system;
pub mod training;
pub mod trajectory_system;
pub mod utils;

pub use config::{ControlMode, ExhaustConfig, LandingZone, RewardShaping, Ruleset, SimulationConfig};
pub use control::autopilot::LandingAutopilot;
pub use control::input::KeyState;
pub use control::output::ControlOutput;
pub use control::policy::{ControlPolicy, NetworkPolicy, Observation};
pub use control::rocket::{Rocket, TickReport};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::flight_state::{
    normalize_angle, FlightState, Phase, PhaseTransition, RocketState, StepResult, Touchdown,
};
pub use trajectory_system::landing::{LandingEvaluator, LandingOutcome};

// Re-export commonly used items from exhaust_system
pub use exhaust_system::particle::Particle;
pub use exhaust_system::trail::ParticleTrail;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::hud::{HudReadout, ParticleSprite, RenderFrame};
pub use telemetry_system::telemetry::{Telemetry, TelemetrySummary};

// Re-export commonly used items from training
pub use training::episode::{
    evaluate_policies, run_episode, run_episode_observed, EpisodeResult, Termination,
};
pub use training::fitness::FitnessTracker;

pub use utils::vector2d::Vector2D;
