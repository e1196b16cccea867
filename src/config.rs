//! Simulation constants for one run.
//!
//! A [`SimulationConfig`] is built once (from a preset [`Ruleset`] or a flat
//! JSON object) and never mutated while an episode is in progress. Every
//! constructor that hands a config to the flight core validates it first.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

/// How control commands are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Each command is either engaged (>= 0.5) or not; engaged thrust is full thrust.
    #[default]
    Discrete,
    /// Commands are clamped to [0, 1] and scale thrust / rotation rate.
    Continuous,
}

/// Named rule presets. The scripts this crate models disagreed on control
/// style and top clamping, so each preset fixes one combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruleset {
    Classic,
    Training,
}

/// Horizontal interval on the ground that earns a landing-zone bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingZone {
    pub left: f64,
    pub right: f64,
}

impl LandingZone {
    pub fn new(left: f64, right: f64) -> Self {
        LandingZone { left, right }
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustConfig {
    pub per_tick: usize,
    pub speed: f64,
    /// Half-width of the uniform angular jitter, degrees.
    pub spread: f64,
    pub speed_jitter: (f64, f64),
    pub lifetime: (u32, u32),
    pub radius: (u32, u32),
    pub color: (u8, u8, u8),
    /// Fixed seed for reproducible trails; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ExhaustConfig {
    fn default() -> Self {
        ExhaustConfig {
            per_tick: PARTICLES_PER_TICK,
            speed: PARTICLE_SPEED,
            spread: PARTICLE_SPREAD,
            speed_jitter: PARTICLE_SPEED_JITTER,
            lifetime: PARTICLE_LIFETIME,
            radius: PARTICLE_RADIUS,
            color: PARTICLE_COLOR,
            seed: None,
        }
    }
}

/// Reward terms used when an optimizer scores an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardShaping {
    pub safe_landing_bonus: f64,
    /// Flat bonus for touching down anywhere inside the landing zone. Kept above
    /// `safe_landing_bonus` so a zone landing always outweighs a plain one.
    pub zone_landing_bonus: f64,
    /// Extra bonus at the zone center, falling linearly to zero at its edges.
    pub zone_center_bonus: f64,
    pub survival_per_tick: f64,
    pub thrust_per_tick: f64,
    pub hover_ceiling: Option<f64>,
    pub hover_penalty: f64,
}

impl Default for RewardShaping {
    fn default() -> Self {
        RewardShaping {
            safe_landing_bonus: SAFE_LANDING_BONUS,
            zone_landing_bonus: ZONE_LANDING_BONUS,
            zone_center_bonus: ZONE_CENTER_BONUS,
            survival_per_tick: SURVIVAL_REWARD,
            thrust_per_tick: THRUST_REWARD,
            hover_ceiling: None,
            hover_penalty: HOVER_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scene_width: f64,
    pub scene_height: f64,
    pub ground_thickness: f64,
    pub tick_rate: f64,

    pub rocket_width: f64,
    pub rocket_height: f64,
    /// Height of the rocket's base above the ground at episode start.
    pub start_altitude: f64,

    pub gravity: f64,
    pub thrust: f64,
    pub angular_velocity: f64,
    pub friction: f64,
    pub clamp_top: bool,
    pub control_mode: ControlMode,

    pub safe_angle_threshold: f64,
    pub safe_velocity_threshold: Option<f64>,
    pub landing_zone: Option<LandingZone>,
    pub explosion_duration: u32,

    pub max_altitude: Option<f64>,
    pub max_flight_ticks: Option<u32>,
    pub extended_observation: bool,

    pub exhaust: ExhaustConfig,
    pub reward: RewardShaping,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            scene_width: SCREEN_WIDTH,
            scene_height: SCREEN_HEIGHT,
            ground_thickness: GROUND_HEIGHT,
            tick_rate: TICK_RATE,
            rocket_width: ROCKET_WIDTH,
            rocket_height: ROCKET_HEIGHT,
            start_altitude: 0.0,
            gravity: GRAVITY,
            thrust: THRUST,
            angular_velocity: ANGULAR_VELOCITY,
            friction: FRICTION,
            clamp_top: false,
            control_mode: ControlMode::Discrete,
            safe_angle_threshold: SAFE_ANGLE_THRESHOLD,
            safe_velocity_threshold: None,
            landing_zone: None,
            explosion_duration: EXPLOSION_DURATION,
            max_altitude: None,
            max_flight_ticks: None,
            extended_observation: false,
            exhaust: ExhaustConfig::default(),
            reward: RewardShaping::default(),
        }
    }
}

impl SimulationConfig {
    pub fn classic() -> Self {
        SimulationConfig::default()
    }

    pub fn training() -> Self {
        SimulationConfig {
            start_altitude: TRAINING_START_ALTITUDE,
            clamp_top: true,
            control_mode: ControlMode::Continuous,
            safe_velocity_threshold: Some(TRAINING_SAFE_VELOCITY),
            landing_zone: Some(LandingZone::new(TRAINING_ZONE_LEFT, TRAINING_ZONE_RIGHT)),
            max_altitude: Some(TRAINING_MAX_ALTITUDE),
            max_flight_ticks: Some(TRAINING_MAX_FLIGHT_TICKS),
            extended_observation: true,
            reward: RewardShaping {
                hover_ceiling: Some(HOVER_CEILING),
                ..RewardShaping::default()
            },
            ..SimulationConfig::default()
        }
    }

    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        match ruleset {
            Ruleset::Classic => Self::classic(),
            Ruleset::Training => Self::training(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Lowest y the rocket's top-left corner may reach.
    pub fn ground_level(&self) -> f64 {
        self.scene_height - self.ground_thickness - self.rocket_height
    }

    /// Largest x the rocket's top-left corner may reach.
    pub fn max_x(&self) -> f64 {
        self.scene_width - self.rocket_width
    }

    pub fn start_position(&self) -> Vector2D {
        Vector2D::new(
            self.scene_width / 2.0 - self.rocket_width / 2.0,
            self.ground_level() - self.start_altitude,
        )
    }

    pub fn effective_tick_limit(&self) -> u32 {
        self.max_flight_ticks.unwrap_or(EPISODE_TICK_LIMIT)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        ensure(
            self.scene_width > 0.0 && self.scene_height > 0.0,
            "scene dimensions must be positive",
        )?;
        ensure(
            self.rocket_width > 0.0 && self.rocket_height > 0.0,
            "rocket dimensions must be positive",
        )?;
        ensure(
            self.ground_thickness >= 0.0,
            "ground thickness cannot be negative",
        )?;
        ensure(
            self.rocket_width <= self.scene_width && self.ground_level() >= 0.0,
            "rocket does not fit inside the scene",
        )?;
        ensure(self.tick_rate > 0.0, "tick rate must be positive")?;
        ensure(
            self.friction > 0.0 && self.friction <= 1.0,
            "friction coefficient must lie in (0, 1]",
        )?;
        ensure(
            self.angular_velocity > 0.0 && self.angular_velocity.is_finite(),
            "angular velocity must be positive",
        )?;
        ensure(
            self.gravity >= 0.0 && self.gravity.is_finite(),
            "gravity must be a non-negative number",
        )?;
        ensure(
            self.thrust >= 0.0 && self.thrust.is_finite(),
            "thrust must be a non-negative number",
        )?;
        ensure(
            self.start_altitude >= 0.0 && self.start_altitude <= self.ground_level(),
            "start altitude must keep the rocket inside the scene",
        )?;
        ensure(
            self.safe_angle_threshold >= 0.0,
            "safe angle threshold cannot be negative",
        )?;
        if let Some(limit) = self.safe_velocity_threshold {
            ensure(limit >= 0.0, "safe velocity threshold cannot be negative")?;
        }
        if let Some(zone) = self.landing_zone {
            ensure(zone.left < zone.right, "landing zone must have left < right")?;
            ensure(
                zone.left >= 0.0 && zone.right <= self.scene_width,
                "landing zone must lie inside the scene",
            )?;
        }
        ensure(
            self.explosion_duration > 0,
            "explosion duration must be at least one tick",
        )?;
        if let Some(ticks) = self.max_flight_ticks {
            ensure(ticks > 0, "flight-time guard must be at least one tick")?;
        }

        let exhaust = &self.exhaust;
        ensure(
            exhaust.lifetime.0 > 0 && exhaust.lifetime.0 <= exhaust.lifetime.1,
            "particle lifetime range must be positive and ordered",
        )?;
        ensure(
            exhaust.radius.0 <= exhaust.radius.1,
            "particle radius range must be ordered",
        )?;
        ensure(
            exhaust.speed_jitter.0 > 0.0
                && exhaust.speed_jitter.1.is_finite()
                && exhaust.speed_jitter.0 <= exhaust.speed_jitter.1,
            "particle speed jitter range must be positive and ordered",
        )?;
        ensure(
            exhaust.speed >= 0.0 && exhaust.speed.is_finite(),
            "particle speed must be a non-negative number",
        )?;
        ensure(
            exhaust.spread >= 0.0 && exhaust.spread.is_finite(),
            "particle spread must be a non-negative number",
        )?;

        Ok(())
    }
}

fn ensure(condition: bool, message: &str) -> Result<(), SimulationError> {
    if condition {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(message.to_string()))
    }
}
