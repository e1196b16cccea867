use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rocket_landing::*;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RulesetArg {
    Classic,
    Training,
}

impl From<RulesetArg> for Ruleset {
    fn from(arg: RulesetArg) -> Self {
        match arg {
            RulesetArg::Classic => Ruleset::Classic,
            RulesetArg::Training => Ruleset::Training,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pilot {
    /// Never touch the controls
    Idle,
    /// Hold rotate-left for the whole flight
    Spin,
    /// PID landing autopilot
    Autopilot,
}

#[derive(Parser)]
#[command(name = "lander")]
#[command(about = "Rocket landing simulator")]
#[command(version)]
struct Cli {
    /// Preset rules to start from
    #[arg(long, value_enum, default_value_t = RulesetArg::Classic)]
    ruleset: RulesetArg,

    /// Flat JSON config; replaces the preset entirely
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Pilot::Autopilot)]
    pilot: Pilot,

    /// Starting height of the rocket's base above the ground
    #[arg(long)]
    start_altitude: Option<f64>,

    /// Seed for the exhaust particles
    #[arg(long)]
    seed: Option<u64>,

    /// Log a telemetry entry every N ticks
    #[arg(long, default_value_t = 30)]
    log_every: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(level)
        .init();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::for_ruleset(cli.ruleset.into()),
    };
    if let Some(altitude) = cli.start_altitude {
        config.start_altitude = altitude;
    }
    if cli.seed.is_some() {
        config.exhaust.seed = cli.seed;
    }
    config.validate()?;

    let mut policy: Box<dyn ControlPolicy> = match cli.pilot {
        Pilot::Idle => Box::new(|_: &Observation| ControlOutput::IDLE),
        Pilot::Spin => Box::new(|_: &Observation| ControlOutput::discrete(false, true, false)),
        Pilot::Autopilot => Box::new(LandingAutopilot::new(&config)),
    };

    let mut telemetry = Telemetry::new(config.tick_rate, cli.log_every);
    let result = run_episode_observed(policy.as_mut(), &config, |rocket, report| {
        telemetry.collect_data(rocket, report);
    })?;

    telemetry.display_data();

    println!("\n--- Episode Result ---");
    println!("Termination: {:?}", result.termination);
    println!("Final Phase: {:?}", result.final_state.phase);
    if let Some(touchdown) = result.final_state.touchdown {
        println!(
            "Touchdown: angle {:.1}°, vx {:.2}, vy {:.2}",
            touchdown.angle, touchdown.vx, touchdown.vy
        );
    }
    println!("Fitness: {:.3}", result.fitness);

    Ok(())
}
