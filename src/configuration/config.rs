//! Configuration types for loading explorer scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`MovementConfig`]   – ground movement settings the decay rates are derived from
//! - [`SimulationConfig`] – step size, sample count and loop guard
//! - [`AirConfig`]        – air acceleration settings for the strafe / bunny-hop models
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty file (or a missing section) falls
//! back to the values below.
//!
//! # YAML format
//!
//! ```yaml
//! movement:
//!   max_speed: 32.0          # speed reached after `time_to_max_speed`
//!   stop_speed: 0.01         # speed considered "stopped"
//!   time_to_max_speed: 0.1   # seconds from rest to within stop_speed of max_speed
//!   time_to_stop: 0.2        # seconds from max_speed down to stop_speed
//!
//! simulation:
//!   dt: 0.01                 # fixed step of the simulated curves
//!   sample_points: 100       # intervals of the theoretical curves
//!   max_steps: 100000        # step guard for predicates that never hold
//!
//! air:
//!   tick: 0.015625           # one physics tick (1/64 s)
//!   strafe_max_accel: 30.0   # cap on the strafe add speed
//!   hop_acceleration: 400.0  # bunny-hop acceleration
//!   angle_points: 180        # intervals of the angle domain
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// Ground movement settings, in game units
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MovementConfig {
    pub max_speed: f64,
    pub stop_speed: f64,
    pub time_to_max_speed: f64,
    pub time_to_stop: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 32.0,
            stop_speed: 0.01,
            time_to_max_speed: 0.1,
            time_to_stop: 0.2,
        }
    }
}

/// Numerical settings shared by the simulated and sampled curves
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub dt: f64,              // fixed time step
    pub sample_points: usize, // number of intervals for the theoretical curves
    pub max_steps: usize,     // hard cap on simulation steps
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            sample_points: 100,
            max_steps: 100_000,
        }
    }
}

/// Air acceleration settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AirConfig {
    pub tick: f64,
    pub strafe_max_accel: f64,
    pub hop_acceleration: f64,
    pub angle_points: usize,
}

impl Default for AirConfig {
    fn default() -> Self {
        Self {
            tick: 1.0 / 64.0,
            strafe_max_accel: 30.0,
            hop_acceleration: 400.0,
            angle_points: 180,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub movement: MovementConfig,
    pub simulation: SimulationConfig,
    pub air: AirConfig,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml maps an empty document to unit, not to an empty mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reject settings that would make the derived coefficients meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        positive("movement.max_speed", m.max_speed)?;
        positive("movement.stop_speed", m.stop_speed)?;
        positive("movement.time_to_max_speed", m.time_to_max_speed)?;
        positive("movement.time_to_stop", m.time_to_stop)?;
        if m.stop_speed >= m.max_speed {
            return Err(ConfigError::StopSpeedAboveMax {
                stop_speed: m.stop_speed,
                max_speed: m.max_speed,
            });
        }

        positive("simulation.dt", self.simulation.dt)?;
        if self.simulation.sample_points == 0 {
            return Err(ConfigError::ZeroCount("simulation.sample_points"));
        }
        if self.simulation.max_steps == 0 {
            return Err(ConfigError::ZeroCount("simulation.max_steps"));
        }

        let a = &self.air;
        positive("air.tick", a.tick)?;
        positive("air.strafe_max_accel", a.strafe_max_accel)?;
        positive("air.hop_acceleration", a.hop_acceleration)?;
        if a.angle_points == 0 {
            return Err(ConfigError::ZeroCount("air.angle_points"));
        }
        // the strafe clamp only stays below the unclamped gain in this regime
        if a.strafe_max_accel > m.max_speed {
            return Err(ConfigError::StrafeAccelAboveMax {
                max_accel: a.strafe_max_accel,
                max_speed: m.max_speed,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
