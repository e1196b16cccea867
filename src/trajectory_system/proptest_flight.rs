//! Property-based tests for the flight invariants using proptest.

use proptest::prelude::*;

use super::flight_state::{normalize_angle, FlightState, Phase, RocketState, Touchdown};
use super::landing::LandingEvaluator;
use crate::config::{ControlMode, SimulationConfig};
use crate::control::output::ControlOutput;

fn command() -> impl Strategy<Value = ControlOutput> {
    (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)
        .prop_map(|(thrust, left, right)| ControlOutput::new(thrust, left, right))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any angle wraps into (-180, 180] and keeps its direction.
    #[test]
    fn prop_normalized_angle_in_range(angle in -10_000.0f64..10_000.0) {
        let wrapped = normalize_angle(angle);
        prop_assert!(wrapped > -180.0 && wrapped <= 180.0, "{} -> {}", angle, wrapped);

        let turns = (angle - wrapped) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }

    /// Over arbitrary control sequences the angle stays normalized, x stays
    /// on screen, and a clamped rocket has no horizontal velocity.
    #[test]
    fn prop_flight_invariants(
        commands in prop::collection::vec(command(), 1..300),
        start_x in 0.0f64..780.0,
        start_altitude in 0.0f64..510.0,
        continuous in any::<bool>(),
    ) {
        let config = SimulationConfig {
            start_altitude,
            control_mode: if continuous { ControlMode::Continuous } else { ControlMode::Discrete },
            ..SimulationConfig::classic()
        };
        let mut state = RocketState::at_start(&config);
        state.position.x = start_x;
        let mut flight = FlightState::with_state(config.clone(), state).unwrap();

        for control in &commands {
            let before = *flight.state();
            let result = flight.step(control);
            let after = result.state;

            prop_assert!(after.angle > -180.0 && after.angle <= 180.0);
            prop_assert!(after.position.x >= 0.0 && after.position.x <= config.max_x());
            if after.position.x == 0.0 || after.position.x == config.max_x() {
                if before.phase == Phase::Flying {
                    prop_assert_eq!(after.velocity.x, 0.0);
                }
            }
            if after.phase == Phase::Flying {
                prop_assert!(after.position.y <= config.ground_level());
            }
            if before.phase.is_terminal() {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// Classification only looks at the contact angle and velocity.
    #[test]
    fn prop_classification_is_pure(
        angle in -180.0f64..180.0,
        vx in -10.0f64..10.0,
        vy in 0.0f64..15.0,
        threshold in prop::option::of(0.5f64..8.0),
    ) {
        let config = SimulationConfig {
            safe_velocity_threshold: threshold,
            ..SimulationConfig::classic()
        };
        let touchdown = Touchdown { angle, vx, vy };
        let first = LandingEvaluator::evaluate(&touchdown, &config);
        let second = LandingEvaluator::evaluate(&Touchdown { angle, vx, vy }, &config);
        prop_assert_eq!(first, second);
    }
}
