//! Physical parameters derived from the movement settings
//!
//! `Parameters` holds the runtime constants:
//! - max speed and the speed considered stopped,
//! - the two target transition times,
//! - the exponential rates derived from them (`accel_coef`, `friction_coef`)

use crate::configuration::config::MovementConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub max_speed: f64,         // vmax
    pub stop_speed: f64,        // vs
    pub time_to_max_speed: f64, // tmax
    pub time_to_stop: f64,      // ts
    pub accel_coef: f64,        // a = ln(vmax / vs) / tmax
    pub friction_coef: f64,     // f = ln(vmax / vs) / ts
}

impl Parameters {
    /// Derive the decay rates. Assumes the config passed validation.
    pub fn from_movement(m: &MovementConfig) -> Self {
        let ratio = (m.max_speed / m.stop_speed).ln();
        Self {
            max_speed: m.max_speed,
            stop_speed: m.stop_speed,
            time_to_max_speed: m.time_to_max_speed,
            time_to_stop: m.time_to_stop,
            accel_coef: ratio / m.time_to_max_speed,
            friction_coef: ratio / m.time_to_stop,
        }
    }
}
