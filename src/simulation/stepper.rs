//! Fixed-step simulation of a scalar state
//!
//! [`simulate`] advances a value by `dt` with a caller supplied update rule
//! until a stopping predicate holds, recording every step.

use super::trajectory::Trajectory;
use crate::error::SimulationError;

/// Result of a step simulation: elapsed time at termination plus the history
#[derive(Debug, Clone)]
pub struct StepRun {
    pub elapsed: f64,
    pub steps: usize,
    pub trajectory: Trajectory,
}

/// Run the update rule `update(dt, previous)` from `initial` until
/// `stop(elapsed, latest)` returns true.
///
/// The predicate is checked before each step on the most recent value, so a
/// predicate that already holds at `t = 0` yields a one-element trajectory.
/// Time at step `i` is `i * dt`, not an accumulated sum.
///
/// Returns [`SimulationError::StepLimit`] once `max_steps` steps have been
/// taken without the predicate holding.
pub fn simulate<U, S>(
    dt: f64,
    initial: f64,
    max_steps: usize,
    mut update: U,
    mut stop: S,
) -> Result<StepRun, SimulationError>
where
    U: FnMut(f64, f64) -> f64,
    S: FnMut(f64, f64) -> bool,
{
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::InvalidStep(dt));
    }

    let mut trajectory = Trajectory::default();
    trajectory.push(0.0, initial);

    let mut steps = 0;
    let mut elapsed = 0.0;
    let mut value = initial;

    while !stop(elapsed, value) {
        if steps == max_steps {
            return Err(SimulationError::StepLimit { steps, elapsed, last: value });
        }
        steps += 1;
        elapsed = steps as f64 * dt;
        value = update(dt, value);
        trajectory.push(elapsed, value);
    }

    tracing::trace!(steps, elapsed, value, "simulation stopped");
    Ok(StepRun { elapsed, steps, trajectory })
}
