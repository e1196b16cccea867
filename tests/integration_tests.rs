use rocket_landing::{
    run_episode, ControlOutput, FlightState, LandingAutopilot, LandingEvaluator, LandingZone,
    Observation, Phase, Rocket, RocketState, SimulationConfig, Termination, Touchdown,
};

fn airborne_config(start_altitude: f64) -> SimulationConfig {
    SimulationConfig {
        start_altitude,
        ..SimulationConfig::classic()
    }
}

// Fly until the rocket reaches a terminal phase or the tick budget runs out.
fn fly_until_terminal(
    flight: &mut FlightState,
    max_ticks: u32,
    mut control: impl FnMut(&RocketState) -> ControlOutput,
) -> Vec<Phase> {
    let mut phases = Vec::new();
    for _ in 0..max_ticks {
        let command = control(flight.state());
        let result = flight.step(&command);
        phases.push(result.phase);
        if result.phase.is_terminal() {
            break;
        }
    }
    phases
}

#[test]
fn test_free_fall_lands_upright() {
    println!("INTEGRATION TEST: Free fall from altitude");

    let config = airborne_config(300.0);
    let mut flight = FlightState::new(config.clone()).expect("classic config is valid");
    let start_x = flight.state().position.x;

    let phases = fly_until_terminal(&mut flight, 1_000, |_| ControlOutput::IDLE);

    let state = flight.state();
    assert_eq!(state.phase, Phase::Landed, "upright free fall must land");
    assert_eq!(state.angle, 0.0);
    assert_eq!(state.position.x, start_x, "no horizontal drift without thrust");
    assert_eq!(state.position.y, config.ground_level());
    assert!(
        phases[..phases.len() - 1]
            .iter()
            .all(|phase| *phase == Phase::Flying),
        "only the last tick may leave Flying"
    );
    println!("Landed after {} ticks", phases.len());
}

#[test]
fn test_rotating_past_threshold_explodes_then_destroys() {
    println!("INTEGRATION TEST: Tilted landing");

    let config = airborne_config(200.0);
    let threshold = config.safe_angle_threshold;
    let mut flight = FlightState::new(config.clone()).unwrap();

    let mut phases = Vec::new();
    let mut exploded_at = None;
    for tick in 0..1_000 {
        let command = if flight.state().angle.abs() <= threshold {
            ControlOutput::discrete(false, true, false)
        } else {
            ControlOutput::IDLE
        };
        let result = flight.step(&command);
        phases.push(result.phase);
        if result.phase == Phase::Exploding && exploded_at.is_none() {
            exploded_at = Some(tick);
        }
        if result.phase == Phase::Destroyed {
            break;
        }
    }

    let exploded_at = exploded_at.expect("rocket should explode on contact");
    assert_eq!(flight.state().phase, Phase::Destroyed);
    assert!(flight.state().angle.abs() > threshold);
    assert_eq!(
        phases.len() - 1 - exploded_at,
        config.explosion_duration as usize,
        "Destroyed exactly one countdown after the crash"
    );
}

#[test]
fn test_terminal_phases_freeze_the_rocket() {
    let commands = [
        ControlOutput::IDLE,
        ControlOutput::discrete(true, false, false),
        ControlOutput::discrete(true, true, false),
        ControlOutput::new(1.0, 0.0, 1.0),
    ];

    // Landed.
    let mut flight = FlightState::new(SimulationConfig::classic()).unwrap();
    flight.step(&ControlOutput::IDLE);
    assert_eq!(flight.phase(), Phase::Landed);
    let landed = *flight.state();
    for command in commands.iter().cycle().take(40) {
        let result = flight.step(command);
        assert_eq!(result.state, landed);
        assert!(!result.transitioned());
    }

    // Destroyed.
    let config = SimulationConfig::classic();
    let mut state = RocketState::at_start(&config);
    state.angle = 60.0;
    let mut flight = FlightState::with_state(config, state).unwrap();
    let crashed = flight.step(&ControlOutput::IDLE).state;
    for command in commands.iter().cycle().take(100) {
        let result = flight.step(command);
        assert_eq!(result.state.position, crashed.position);
        assert_eq!(result.state.velocity, crashed.velocity);
        assert_eq!(result.state.angle, crashed.angle);
    }
    assert_eq!(flight.phase(), Phase::Destroyed);
}

#[test]
fn test_classification_ignores_path() {
    let config = SimulationConfig {
        safe_velocity_threshold: Some(3.0),
        ..SimulationConfig::classic()
    };

    // Two different flights that meet the ground with the same angle.
    let mut straight = FlightState::new(airborne_config(100.0)).unwrap();
    fly_until_terminal(&mut straight, 1_000, |_| ControlOutput::IDLE);

    let mut wobbly = FlightState::new(airborne_config(100.0)).unwrap();
    let mut tick = 0;
    fly_until_terminal(&mut wobbly, 1_000, |_| {
        tick += 1;
        match tick {
            1..=3 => ControlOutput::discrete(false, true, false),
            4..=6 => ControlOutput::discrete(false, false, true),
            _ => ControlOutput::IDLE,
        }
    });

    let a = straight.state().touchdown.expect("touched down");
    let b = wobbly.state().touchdown.expect("touched down");
    assert_eq!(a.angle, b.angle);

    let same = Touchdown { angle: 4.0, vx: 1.0, vy: 2.5 };
    assert_eq!(
        LandingEvaluator::evaluate(&same, &config),
        LandingEvaluator::evaluate(&Touchdown { ..same }, &config)
    );
    assert_eq!(
        LandingEvaluator::evaluate(&a, &config),
        LandingEvaluator::evaluate(&b, &config)
    );
}

#[test]
fn test_landing_zone_scores_are_ordered() {
    let config = SimulationConfig {
        landing_zone: Some(LandingZone::new(300.0, 500.0)),
        ..SimulationConfig::classic()
    };
    let landed_at = |center_x: f64| {
        let mut state = RocketState::at_start(&config);
        state.position.x = center_x - state.width / 2.0;
        state.phase = Phase::Landed;
        LandingEvaluator::score(&state, &config)
    };

    let center = landed_at(400.0);
    let edge = landed_at(300.0);
    let outside = landed_at(150.0);

    assert!(center > edge);
    assert!(edge > outside);
    assert!(outside > 0.0, "any safe landing earns the flat bonus");
}

#[test]
fn test_exhaust_count_and_expiry() {
    let mut config = airborne_config(400.0);
    config.exhaust.seed = Some(99);
    let per_tick = config.exhaust.per_tick;
    let max_lifetime = config.exhaust.lifetime.1;
    let mut rocket = Rocket::new(config).unwrap();

    let mut previous = 0;
    for _ in 0..5 {
        let report = rocket.tick(&ControlOutput::discrete(true, false, false));
        assert_eq!(report.particles_emitted, per_tick);
        assert_eq!(rocket.trail().len(), previous + per_tick);
        previous = rocket.trail().len();
    }

    for _ in 0..max_lifetime {
        rocket.tick(&ControlOutput::IDLE);
    }
    assert!(rocket.trail().is_empty());
    assert_eq!(rocket.state().phase, Phase::Flying);
}

#[test]
fn test_pinned_against_left_edge() {
    let config = airborne_config(500.0);
    let mut state = RocketState::at_start(&config);
    state.position.x = 0.0;
    state.angle = 90.0;
    let mut flight = FlightState::with_state(config, state).unwrap();

    for _ in 0..30 {
        let result = flight.step(&ControlOutput::discrete(true, false, false));
        assert_eq!(result.state.position.x, 0.0);
        assert_eq!(result.state.velocity.x, 0.0);
    }

    // Thrust pointing the other way frees it.
    let config = flight.config().clone();
    let mut turned = *flight.state();
    turned.angle = -90.0;
    let mut flight = FlightState::with_state(config, turned).unwrap();
    let result = flight.step(&ControlOutput::discrete(true, false, false));
    assert_eq!(result.phase, Phase::Flying);
    assert!(result.state.position.x > 0.0);
}

#[test]
fn test_autopilot_lands_classic() {
    println!("INTEGRATION TEST: Autopilot, classic rules");

    let config = airborne_config(300.0);
    let mut autopilot = LandingAutopilot::new(&config);

    let result = run_episode(&mut autopilot, &config).expect("episode should run");

    assert_eq!(result.termination, Termination::Landed);
    let touchdown = result.final_state.touchdown.unwrap();
    assert!(touchdown.angle.abs() <= config.safe_angle_threshold);
    assert!(touchdown.vy < 2.0, "autopilot should brake, got {}", touchdown.vy);
    println!(
        "Landed in {} ticks, vy {:.2}, fitness {:.2}",
        result.ticks, touchdown.vy, result.fitness
    );
}

#[test]
fn test_autopilot_scores_in_training_zone() {
    let config = SimulationConfig::training();
    let mut autopilot = LandingAutopilot::new(&config);

    let result = run_episode(&mut autopilot, &config).unwrap();

    assert_eq!(result.termination, Termination::Landed);
    let center_x = result.final_state.center().x;
    assert!(config.landing_zone.unwrap().contains(center_x));
    assert!(
        result.fitness > config.reward.safe_landing_bonus + config.reward.zone_landing_bonus,
        "fitness {}",
        result.fitness
    );
}

#[test]
fn test_idle_training_episode_crashes_too_fast() {
    let config = SimulationConfig::training();
    let mut idle = |_: &Observation| ControlOutput::IDLE;

    let result = run_episode(&mut idle, &config).unwrap();

    // 400 units of free fall is far above the training speed limit.
    assert_eq!(result.termination, Termination::Destroyed);
    assert!(result.fitness < 10.0);
}
