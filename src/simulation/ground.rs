//! One tick of grounded movement: friction, then acceleration toward max speed

use super::decay::decay;
use super::params::Parameters;

/// Advance a ground speed by one tick.
///
/// Friction is skipped on the landing tick (`ticks_since_landing == 0`) and
/// snaps the speed to zero once it falls below `stop_speed`. When `wish` is
/// set the speed then decays toward `max_speed`.
pub fn ground_tick(p: &Parameters, speed: f64, wish: bool, ticks_since_landing: u32, dt: f64) -> f64 {
    let mut speed = speed;
    if ticks_since_landing > 0 {
        speed *= (-p.friction_coef * dt).exp();
        if speed < p.stop_speed {
            speed = 0.0;
        }
    }
    if wish {
        speed = decay(speed, p.max_speed, p.accel_coef, dt);
    }
    speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::MovementConfig;

    #[test]
    fn landing_tick_keeps_speed() {
        let p = Parameters::from_movement(&MovementConfig::default());
        assert_eq!(ground_tick(&p, 20.0, false, 0, 0.01), 20.0);
        assert!(ground_tick(&p, 20.0, false, 1, 0.01) < 20.0);
    }

    #[test]
    fn slow_speed_snaps_to_zero() {
        let p = Parameters::from_movement(&MovementConfig::default());
        assert_eq!(ground_tick(&p, p.stop_speed, false, 3, 0.01), 0.0);
    }

    #[test]
    fn wish_pulls_toward_max_speed() {
        let p = Parameters::from_movement(&MovementConfig::default());
        let s = ground_tick(&p, 0.0, true, 5, 0.01);
        assert!(s > 0.0 && s < p.max_speed);
    }
}
