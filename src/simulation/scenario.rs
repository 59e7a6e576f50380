//! Build a fully-initialized explorer scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - derived physical parameters (`Parameters`)
//! - simulated acceleration / deceleration runs (`StepRun`)
//! - the matching closed-form curves (`Curve`)
//! - the air models used by the speed-gain explorer (`AirModels`)
//!
//! The scenario is inserted into Bevy as a `Resource` and read by the
//! visualization systems, or consumed directly by the console commands.

use std::f64::consts::PI;
use std::fmt;

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::error::{Result, SamplingError};
use crate::simulation::air::{AirModels, BunnyHop, Strafe};
use crate::simulation::decay::{acceleration_speed, deceleration_speed, decay};
use crate::simulation::ground::ground_tick;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::sample;
use crate::simulation::stepper::{simulate, StepRun};
use crate::simulation::trajectory::Curve;

/// Wish angles covered by the air explorer, in radians
pub const ANGLE_DOMAIN: (f64, f64) = (0.0, PI);

/// Bevy resource holding everything a run computes up front
#[derive(Resource)]
pub struct Scenario {
    pub config: ScenarioConfig,
    pub parameters: Parameters,
    pub acceleration: StepRun,
    pub deceleration: StepRun,
    pub acceleration_theory: Curve,
    pub deceleration_theory: Curve,
    pub air: AirModels,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;
        let parameters = Parameters::from_movement(&cfg.movement);
        let sim = &cfg.simulation;

        let acceleration = simulate_acceleration(&parameters, sim.dt, sim.max_steps)?;
        let deceleration = simulate_deceleration(&parameters, sim.dt, sim.max_steps)?;

        let acceleration_theory = sample(0.0, parameters.time_to_max_speed, sim.sample_points, |t| {
            acceleration_speed(&parameters, t)
        })?;
        let deceleration_theory = sample(0.0, parameters.time_to_stop, sim.sample_points, |t| {
            deceleration_speed(&parameters, t)
        })?;

        let air = AirModels::new()
            .with(
                "strafe",
                Strafe {
                    max_speed: parameters.max_speed,
                    max_accel: cfg.air.strafe_max_accel,
                },
            )
            .with(
                "bunny-hop",
                BunnyHop {
                    max_speed: parameters.max_speed,
                    acceleration: cfg.air.hop_acceleration,
                },
            );

        tracing::debug!(
            accel_steps = acceleration.steps,
            decel_steps = deceleration.steps,
            "scenario built"
        );

        Ok(Self {
            config: cfg,
            parameters,
            acceleration,
            deceleration,
            acceleration_theory,
            deceleration_theory,
            air,
        })
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            friction_coef: self.parameters.friction_coef,
            accel_coef: self.parameters.accel_coef,
            simulated_tmax: self.acceleration.elapsed,
            theoretical_tmax: self.parameters.time_to_max_speed,
            simulated_ts: self.deceleration.elapsed,
            theoretical_ts: self.parameters.time_to_stop,
        }
    }

    /// Gain curves of every air model at `speed`, over [`ANGLE_DOMAIN`]
    pub fn air_gain_curves(&self, speed: f64) -> std::result::Result<Vec<(&'static str, Curve)>, SamplingError> {
        let (start, end) = ANGLE_DOMAIN;
        self.air
            .gain_curves(speed, self.config.air.tick, start, end, self.config.air.angle_points)
    }

    /// Ground speed trace after landing at max speed with no input, until the
    /// speed snaps to zero
    pub fn ground_stop(&self) -> Result<StepRun> {
        let p = &self.parameters;
        let mut ticks_since_landing = 0u32;
        let run = simulate(
            self.config.simulation.dt,
            p.max_speed,
            self.config.simulation.max_steps,
            |dt, speed| {
                let next = ground_tick(p, speed, false, ticks_since_landing, dt);
                ticks_since_landing = ticks_since_landing.saturating_add(1);
                next
            },
            |_, speed| speed == 0.0,
        )?;
        Ok(run)
    }
}

/// Accelerate from rest until within `stop_speed` of `max_speed`
pub fn simulate_acceleration(p: &Parameters, dt: f64, max_steps: usize) -> Result<StepRun> {
    let threshold = p.max_speed - p.stop_speed;
    let run = simulate(
        dt,
        0.0,
        max_steps,
        |dt, v| decay(v, p.max_speed, p.accel_coef, dt),
        |_, v| v > threshold,
    )?;
    Ok(run)
}

/// Brake from `max_speed` until below `stop_speed`
pub fn simulate_deceleration(p: &Parameters, dt: f64, max_steps: usize) -> Result<StepRun> {
    let run = simulate(
        dt,
        p.max_speed,
        max_steps,
        |dt, v| decay(v, 0.0, p.friction_coef, dt),
        |_, v| v < p.stop_speed,
    )?;
    Ok(run)
}

/// Scalar console diagnostics of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub friction_coef: f64,
    pub accel_coef: f64,
    pub simulated_tmax: f64,
    pub theoretical_tmax: f64,
    pub simulated_ts: f64,
    pub theoretical_ts: f64,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f = {}", self.friction_coef)?;
        writeln!(f, "a = {}", self.accel_coef)?;
        writeln!(f, "simulated tmax: {:.4}", self.simulated_tmax)?;
        writeln!(f, "theoretical tmax: {}", self.theoretical_tmax)?;
        writeln!(f, "simulated ts: {:.4}", self.simulated_ts)?;
        write!(f, "theoretical ts: {}", self.theoretical_ts)
    }
}
