pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod report;
pub mod sweep;

pub use error::{ConfigError, Error, SamplingError, SimulationError};

pub use simulation::trajectory::{Series, Trajectory, Curve};
pub use simulation::params::Parameters;
pub use simulation::decay::{decay, acceleration_speed, deceleration_speed};
pub use simulation::stepper::{simulate, StepRun};
pub use simulation::sampler::sample;
pub use simulation::ground::ground_tick;
pub use simulation::air::{AirAccel, AirModels, Strafe, BunnyHop, NVec2, speed_gain, unclamped_gain};
pub use simulation::scenario::{Scenario, Diagnostics, ANGLE_DOMAIN};

pub use configuration::config::{MovementConfig, SimulationConfig, AirConfig, ScenarioConfig};

pub use visualization::{curves_vis::{run_curves, CurvesLayout}, air_vis::run_air};

pub use report::{write_report, write_csv};
pub use sweep::sweep::{sweep_step_sizes, write_sweep, DEFAULT_STEPS};
