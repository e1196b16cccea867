use crate::config::SimulationConfig;
use crate::control::rocket::TickReport;
use crate::trajectory_system::flight_state::RocketState;
use crate::trajectory_system::landing::LandingEvaluator;

use super::episode::Termination;

/// Accumulates the shaped reward of one episode.
///
/// While flying, every tick earns the survival increment and a thrust-usage
/// increment proportional to the throttle; hanging above the hover ceiling
/// without descending costs the hover penalty. The landing bonus is added
/// once at the end, and only for a real landing.
#[derive(Debug, Clone, Default)]
pub struct FitnessTracker {
    total: f64,
}

impl FitnessTracker {
    pub fn new() -> Self {
        FitnessTracker { total: 0.0 }
    }

    pub fn record_tick(&mut self, report: &TickReport, config: &SimulationConfig) {
        if !report.was_flying {
            return;
        }
        let reward = &config.reward;
        let state = &report.step.state;

        self.total += reward.survival_per_tick;
        self.total += reward.thrust_per_tick * report.throttle;

        if let Some(ceiling) = reward.hover_ceiling {
            let descending = state.velocity.y > 0.0;
            if state.altitude(config) > ceiling && !descending {
                self.total -= reward.hover_penalty;
            }
        }
    }

    pub fn finish(
        &mut self,
        state: &RocketState,
        termination: Termination,
        config: &SimulationConfig,
    ) -> f64 {
        if termination.awards_landing_bonus() {
            self.total += LandingEvaluator::score(state, config);
        }
        self.total
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
