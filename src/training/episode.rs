//! Episode runner for optimizers.
//!
//! The optimizer stays outside this crate: it hands over a policy, gets back
//! the final state and one scalar fitness. Episodes share nothing, so a
//! population can be scored in parallel.

use rayon::prelude::*;
use tracing::info;

use crate::config::SimulationConfig;
use crate::control::policy::ControlPolicy;
use crate::control::rocket::{Rocket, TickReport};
use crate::errors::SimulationError;
use crate::trajectory_system::flight_state::{Phase, RocketState};

use super::fitness::FitnessTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Landed,
    Destroyed,
    /// Flight-time guard (or the hard tick limit) ran out while flying.
    FlightTimeExceeded,
    AltitudeExceeded,
}

impl Termination {
    pub fn awards_landing_bonus(&self) -> bool {
        matches!(self, Termination::Landed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeResult {
    pub final_state: RocketState,
    pub fitness: f64,
    pub ticks: u32,
    pub termination: Termination,
}

pub fn run_episode<P>(policy: &mut P, config: &SimulationConfig) -> Result<EpisodeResult, SimulationError>
where
    P: ControlPolicy + ?Sized,
{
    run_episode_observed(policy, config, |_, _| {})
}

/// Same as [`run_episode`], calling `observer` after every tick (for
/// telemetry or rendering).
pub fn run_episode_observed<P, F>(
    policy: &mut P,
    config: &SimulationConfig,
    mut observer: F,
) -> Result<EpisodeResult, SimulationError>
where
    P: ControlPolicy + ?Sized,
    F: FnMut(&Rocket, &TickReport),
{
    let mut rocket = Rocket::new(config.clone())?;
    let mut fitness = FitnessTracker::new();
    let tick_limit = config.effective_tick_limit();

    let termination = loop {
        let observation = rocket.observation();
        let control = policy.decide(&observation);
        let report = rocket.tick(&control);
        fitness.record_tick(&report, config);
        observer(&rocket, &report);

        match report.step.phase {
            Phase::Landed => break Termination::Landed,
            Phase::Destroyed => break Termination::Destroyed,
            // An explosion always runs its countdown to the end.
            Phase::Exploding => {}
            Phase::Flying => {
                if let Some(ceiling) = config.max_altitude {
                    if rocket.state().altitude(config) > ceiling {
                        break Termination::AltitudeExceeded;
                    }
                }
                if report.tick >= tick_limit {
                    break Termination::FlightTimeExceeded;
                }
            }
        }
    };

    let final_state = *rocket.state();
    let fitness = fitness.finish(&final_state, termination, config);
    info!(
        ?termination,
        ticks = rocket.ticks(),
        fitness,
        x = final_state.position.x,
        "episode finished"
    );

    Ok(EpisodeResult {
        final_state,
        fitness,
        ticks: rocket.ticks(),
        termination,
    })
}

/// Scores every policy on its own episode, in parallel.
pub fn evaluate_policies<P>(
    policies: &mut [P],
    config: &SimulationConfig,
) -> Result<Vec<EpisodeResult>, SimulationError>
where
    P: ControlPolicy + Send,
{
    config.validate()?;
    policies
        .par_iter_mut()
        .map(|policy| run_episode(policy, config))
        .collect()
}
