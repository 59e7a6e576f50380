//! Error types for configuration, simulation and sampling

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),

    #[error("stop_speed ({stop_speed}) must be below max_speed ({max_speed})")]
    StopSpeedAboveMax { stop_speed: f64, max_speed: f64 },

    #[error("strafe_max_accel ({max_accel}) must not exceed max_speed ({max_speed})")]
    StrafeAccelAboveMax { max_accel: f64, max_speed: f64 },
}

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("stopping condition not met after {steps} steps (t = {elapsed}, value = {last})")]
    StepLimit { steps: usize, elapsed: f64, last: f64 },
}

#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("point count must be at least 1")]
    NoIntervals,

    #[error("interval bounds must be finite, got [{start}, {end}]")]
    InvalidBounds { start: f64, end: f64 },
}

/// Crate-wide error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
