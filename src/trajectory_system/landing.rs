use crate::config::SimulationConfig;

use super::flight_state::{Phase, RocketState, Touchdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    Safe,
    Unsafe,
}

/// Classifies touchdowns and scores finished landings.
pub struct LandingEvaluator;

impl LandingEvaluator {
    /// Depends only on the contact angle and velocity, never on the path.
    pub fn evaluate(touchdown: &Touchdown, config: &SimulationConfig) -> LandingOutcome {
        if touchdown.angle.abs() > config.safe_angle_threshold {
            return LandingOutcome::Unsafe;
        }
        if let Some(limit) = config.safe_velocity_threshold {
            if touchdown.vx.abs() > limit || touchdown.vy.abs() > limit {
                return LandingOutcome::Unsafe;
            }
        }
        LandingOutcome::Safe
    }

    /// Terminal reward for a finished episode: the safe-landing bonus plus the
    /// landing-zone bonus. Anything but a landed rocket scores zero here.
    pub fn score(state: &RocketState, config: &SimulationConfig) -> f64 {
        match state.phase {
            Phase::Landed => {
                config.reward.safe_landing_bonus + Self::zone_bonus(state.center().x, config)
            }
            _ => 0.0,
        }
    }

    /// Bonus for a landing centered at `x`: a flat amount anywhere inside the
    /// zone plus a share that falls linearly from the zone center to its edges.
    pub fn zone_bonus(x: f64, config: &SimulationConfig) -> f64 {
        match config.landing_zone {
            Some(zone) if zone.contains(x) => {
                let offset = (x - zone.center()).abs() / zone.half_width();
                config.reward.zone_landing_bonus
                    + config.reward.zone_center_bonus * (1.0 - offset).max(0.0)
            }
            _ => 0.0,
        }
    }
}
