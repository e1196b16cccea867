use crate::control::rocket::{Rocket, TickReport};
use crate::trajectory_system::flight_state::Phase;
use crate::utils::vector2d::Vector2D;

use super::hud::HudReadout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySummary {
    pub ticks: u32,
    pub max_speed: f64,
    pub max_altitude: f64,
    pub max_acceleration: f64,
    pub thrust_ticks: u32,
    pub particles_emitted: usize,
}

/// Per-episode flight log: periodic readouts, running maxima and the tick at
/// which each phase was entered.
pub struct Telemetry {
    pub log: Vec<String>,
    log_every: u32,
    tick_rate: f64,
    summary: TelemetrySummary,
    phase_changes: Vec<(Phase, u32)>,
}

impl Telemetry {
    pub fn new(tick_rate: f64, log_every: u32) -> Self {
        Telemetry {
            log: Vec::new(),
            log_every: log_every.max(1),
            tick_rate,
            summary: TelemetrySummary {
                ticks: 0,
                max_speed: 0.0,
                max_altitude: 0.0,
                max_acceleration: 0.0,
                thrust_ticks: 0,
                particles_emitted: 0,
            },
            phase_changes: vec![(Phase::Flying, 0)],
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn seconds(&self, tick: u32) -> f64 {
        tick as f64 / self.tick_rate
    }

    pub fn collect_data(&mut self, rocket: &Rocket, report: &TickReport) {
        let state = &report.step.state;
        let readout = HudReadout::compute(report.previous_velocity, state, rocket.config());
        let speed = state.velocity.magnitude();

        let summary = &mut self.summary;
        summary.ticks = report.tick;
        summary.max_speed = summary.max_speed.max(speed);
        summary.max_altitude = summary.max_altitude.max(readout.altitude);
        summary.max_acceleration = summary.max_acceleration.max(readout.acceleration);
        summary.particles_emitted += report.particles_emitted;
        if report.throttle > 0.0 {
            summary.thrust_ticks += 1;
        }

        if let Some(transition) = report.step.transition {
            self.phase_changes.push((transition.to, report.tick));
        }

        if report.tick % self.log_every == 0 || report.step.transitioned() {
            let [angle, acceleration, altitude] = readout.lines();
            self.log.push(format!(
                "Time: {} (tick {})\n\
                     Phase: {:?}\n\
                     Position: {}\n\
                     Velocity: {} (Magnitude: {:.2})\n\
                     {}\n\
                     {}\n\
                     {}\n\
                     Throttle: {:.2}\n\
                     Particles: {}\n",
                Self::format_time(self.seconds(report.tick)),
                report.tick,
                report.step.phase,
                Self::format_vector2d(&state.position, 2),
                Self::format_vector2d(&state.velocity, 2),
                speed,
                angle,
                acceleration,
                altitude,
                report.throttle,
                rocket.trail().len(),
            ));
        }
    }

    pub fn summary(&self) -> TelemetrySummary {
        self.summary
    }

    pub fn phase_changes(&self) -> &[(Phase, u32)] {
        &self.phase_changes
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        let summary = &self.summary;
        println!("\n--- Flight Summary ---");
        println!(
            "Duration: {} ({} ticks)",
            Self::format_time(self.seconds(summary.ticks)),
            summary.ticks
        );
        println!("Max Speed: {:.2} px/tick", summary.max_speed);
        println!("Max Altitude: {:.2} px", summary.max_altitude);
        println!("Max Acceleration: {:.2} px/s²", summary.max_acceleration);
        println!(
            "Engine Time: {}",
            Self::format_time(self.seconds(summary.thrust_ticks))
        );
        println!("Particles Emitted: {}", summary.particles_emitted);

        println!("\n--- Phase Transitions ---");
        for (phase, tick) in &self.phase_changes {
            println!(
                "Phase {:?} reached at: {}",
                phase,
                Self::format_time(self.seconds(*tick))
            );
        }
    }
}
