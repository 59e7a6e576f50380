//! Exponential update rules and their closed forms

use super::params::Parameters;

/// Move `from` toward `to` by exact exponential decay over `dt`
pub fn decay(from: f64, to: f64, rate: f64, dt: f64) -> f64 {
    to + (from - to) * (-rate * dt).exp()
}

/// Closed-form speed when accelerating from rest
pub fn acceleration_speed(p: &Parameters, t: f64) -> f64 {
    p.max_speed * (1.0 - (-p.accel_coef * t).exp())
}

/// Closed-form speed when braking from max speed
pub fn deceleration_speed(p: &Parameters, t: f64) -> f64 {
    p.max_speed * (-p.friction_coef * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decay_steps_compose() {
        let one = decay(10.0, 2.0, 3.0, 0.2);
        let two = decay(decay(10.0, 2.0, 3.0, 0.1), 2.0, 3.0, 0.1);
        assert_relative_eq!(one, two, epsilon = 1e-12);
    }

    #[test]
    fn zero_dt_is_identity() {
        assert_eq!(decay(7.0, 0.0, 50.0, 0.0), 7.0);
    }
}
