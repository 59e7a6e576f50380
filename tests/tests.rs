use std::f64::consts::PI;

use approx::assert_relative_eq;

use curvex::simulation::scenario::{simulate_acceleration, simulate_deceleration};
use curvex::{decay, sample, simulate, speed_gain, unclamped_gain};
use curvex::{AirAccel, BunnyHop, NVec2, Parameters, Scenario, ScenarioConfig, Strafe};

/// Parameters of the original exploration: vmax = 32, vs = 0.01, tmax = 0.1, ts = 0.2
pub fn test_params() -> Parameters {
    Parameters::from_movement(&ScenarioConfig::default().movement)
}

/// Air models matching the default scenario
pub fn air_models() -> (Strafe, BunnyHop) {
    let cfg = ScenarioConfig::default();
    (
        Strafe {
            max_speed: cfg.movement.max_speed,
            max_accel: cfg.air.strafe_max_accel,
        },
        BunnyHop {
            max_speed: cfg.movement.max_speed,
            acceleration: cfg.air.hop_acceleration,
        },
    )
}

/// Grid of (angle, speed) pairs covering the slider range and angle domain
pub fn angle_speed_grid() -> Vec<(f64, f64)> {
    let mut grid = Vec::new();
    for i in 0..=36 {
        let angle = PI * i as f64 / 36.0;
        for j in 0..=32 {
            grid.push((angle, 2.0 * j as f64));
        }
    }
    grid
}

// ==================================================================================
// Step simulation tests
// ==================================================================================

#[test]
fn decay_trajectory_converges_monotonically() {
    let p = test_params();
    let run = simulate(0.01, p.max_speed, 1000, |dt, v| decay(v, 0.0, p.friction_coef, dt), |_, v| v < 1e-6).unwrap();

    let ys = &run.trajectory.ys;
    assert!(ys.len() > 2);
    for pair in ys.windows(2) {
        // strictly between the previous value and the target
        assert!(pair[1] < pair[0] && pair[1] > 0.0, "not converging: {:?}", pair);
    }
}

#[test]
fn acceleration_toward_max_converges_monotonically() {
    let p = test_params();
    let run = simulate_acceleration(&p, 0.005, 10_000).unwrap();
    for pair in run.trajectory.ys.windows(2) {
        assert!(pair[1] > pair[0] && pair[1] < p.max_speed);
    }
}

#[test]
fn simulated_acceleration_reaches_max_near_tmax() {
    let p = test_params();
    let run = simulate_acceleration(&p, 0.01, 10_000).unwrap();

    let (_, last) = run.trajectory.last().unwrap();
    assert!(last > p.max_speed - p.stop_speed);
    assert!((run.elapsed - p.time_to_max_speed).abs() <= 0.01 + 1e-9, "stopped at {}", run.elapsed);
}

#[test]
fn simulated_deceleration_stops_near_ts() {
    let p = test_params();
    let run = simulate_deceleration(&p, 0.01, 10_000).unwrap();
    assert!((run.elapsed - p.time_to_stop).abs() <= 0.01 + 1e-9, "stopped at {}", run.elapsed);
}

#[test]
fn trajectory_times_are_step_multiples() {
    let p = test_params();
    let run = simulate_deceleration(&p, 0.01, 10_000).unwrap();
    for (i, t) in run.trajectory.xs.iter().enumerate() {
        assert_eq!(*t, i as f64 * 0.01);
    }
}

// ==================================================================================
// Sampling tests
// ==================================================================================

#[test]
fn sampling_a_constant_is_constant() {
    for (start, end, n) in [(0.0, 1.0, 10), (-3.0, 7.5, 33), (2.0, 2.5, 1)] {
        let c = sample(start, end, n, |_| 4.25).unwrap();
        assert_eq!(c.len(), n + 1);
        assert!(c.ys.iter().all(|&y| y == 4.25));
    }
}

#[test]
fn theoretical_deceleration_spans_vmax_to_vs() {
    let p = test_params();
    let c = sample(0.0, p.time_to_stop, 100, |t| p.max_speed * (-p.friction_coef * t).exp()).unwrap();

    assert_eq!(c.len(), 101);
    assert_eq!(c.first(), Some((0.0, p.max_speed)));
    let (t_last, v_last) = c.last().unwrap();
    assert_eq!(t_last, p.time_to_stop);
    assert!(v_last <= p.stop_speed + 1e-12);
    assert_relative_eq!(v_last, p.stop_speed, epsilon = 1e-12);
}

// ==================================================================================
// Air acceleration tests
// ==================================================================================

#[test]
fn clamped_gain_never_exceeds_unclamped() {
    let (strafe, hop) = air_models();
    let dt = ScenarioConfig::default().air.tick;
    for (angle, speed) in angle_speed_grid() {
        let models: [&dyn AirAccel; 2] = [&strafe, &hop];
        for model in models {
            let clamped = speed_gain(model, angle, speed, dt);
            let free = unclamped_gain(model, angle, speed, dt);
            assert!(clamped <= free + 1e-9, "angle {angle}, speed {speed}: {clamped} > {free}");
        }
    }
}

#[test]
fn bunny_hop_never_projects_past_max_speed() {
    let (_, hop) = air_models();
    let dt = ScenarioConfig::default().air.tick;
    for (angle, speed) in angle_speed_grid() {
        let wish = NVec2::new(angle.cos(), angle.sin());
        let v = hop.accelerate(wish, NVec2::new(speed, 0.0), dt);
        assert!(wish.dot(&v) <= hop.max_speed + 1e-9, "angle {angle}, speed {speed}");
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn default_scenario_diagnostics() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
    let d = scenario.diagnostics();

    assert_relative_eq!(d.friction_coef, (3200.0f64).ln() / 0.2, epsilon = 1e-9);
    assert_relative_eq!(d.accel_coef, (3200.0f64).ln() / 0.1, epsilon = 1e-9);
    assert!((d.simulated_tmax - d.theoretical_tmax).abs() <= 0.01 + 1e-9);
    assert!((d.simulated_ts - d.theoretical_ts).abs() <= 0.01 + 1e-9);
}

#[test]
fn air_curves_follow_the_slider_speed() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
    let slow = scenario.air_gain_curves(0.0).unwrap();
    let fast = scenario.air_gain_curves(2.0 * scenario.parameters.max_speed).unwrap();

    assert_eq!(slow.len(), 2);
    assert_eq!(slow[0].1.len(), scenario.config.air.angle_points + 1);
    // from rest every wish direction gains the same speed
    let first = slow[0].1.ys[0];
    assert!(slow[0].1.ys.iter().all(|&g| (g - first).abs() < 1e-9));
    // above max speed, wishing straight ahead cannot gain anything
    assert!(fast[0].1.ys[0] <= 1e-9);
}

#[test]
fn invalid_scenario_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("movement:\n  time_to_stop: 0.0\n").unwrap();
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn ground_stop_ends_at_zero() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
    let run = scenario.ground_stop().unwrap();
    assert_eq!(run.trajectory.last().map(|(_, v)| v), Some(0.0));
    // landing tick keeps the speed
    assert_eq!(run.trajectory.ys[1], scenario.parameters.max_speed);
}
