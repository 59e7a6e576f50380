//! Air acceleration models for the speed-gain explorer
//!
//! Defines the [`AirAccel`] trait with the strafe and bunny-hop variants and
//! the helpers that turn a model into a speed gain for a given wish angle.
//!
//! Velocities are 2D: the current velocity points along +x and the wish
//! direction is rotated by `angle` from it.

use nalgebra::Vector2;

use super::sampler::sample;
use super::trajectory::Curve;
use crate::error::SamplingError;

pub type NVec2 = Vector2<f64>;

/// One tick of air acceleration
pub trait AirAccel {
    /// New velocity after accelerating along the unit vector `wish_dir` for `dt`
    fn accelerate(&self, wish_dir: NVec2, velocity: NVec2, dt: f64) -> NVec2;

    /// Speed added along `wish_dir` when no clamp applies
    fn budget(&self, dt: f64) -> f64;
}

/// Strafe: the add speed is `max_speed - projected`, kept within `[0, max_accel]`
#[derive(Debug, Clone)]
pub struct Strafe {
    pub max_speed: f64,
    pub max_accel: f64,
}

impl AirAccel for Strafe {
    fn accelerate(&self, wish_dir: NVec2, velocity: NVec2, dt: f64) -> NVec2 {
        let projected = wish_dir.dot(&velocity);
        let add_speed = (self.max_speed - projected).clamp(0.0, self.max_accel);
        velocity + wish_dir * (add_speed * dt)
    }

    fn budget(&self, dt: f64) -> f64 {
        self.max_accel * dt
    }
}

/// Bunny-hop: a fixed `acceleration * dt` cut back so the projected speed
/// lands exactly on `max_speed` when it would overshoot
#[derive(Debug, Clone)]
pub struct BunnyHop {
    pub max_speed: f64,
    pub acceleration: f64,
}

impl AirAccel for BunnyHop {
    fn accelerate(&self, wish_dir: NVec2, velocity: NVec2, dt: f64) -> NVec2 {
        let projected = wish_dir.dot(&velocity);
        let mut added = self.acceleration * dt;
        if projected + added > self.max_speed {
            added = self.max_speed - projected;
        }
        velocity + wish_dir * added
    }

    fn budget(&self, dt: f64) -> f64 {
        self.acceleration * dt
    }
}

fn frame(angle: f64, speed: f64) -> (NVec2, NVec2) {
    (NVec2::new(angle.cos(), angle.sin()), NVec2::new(speed, 0.0))
}

/// Change in speed after one tick at `speed` with the wish direction `angle` radians off
pub fn speed_gain(model: &dyn AirAccel, angle: f64, speed: f64, dt: f64) -> f64 {
    let (wish, v) = frame(angle, speed);
    model.accelerate(wish, v, dt).norm() - speed
}

/// Change in speed when the model's whole budget is added, ignoring its clamp
pub fn unclamped_gain(model: &dyn AirAccel, angle: f64, speed: f64, dt: f64) -> f64 {
    let (wish, v) = frame(angle, speed);
    (v + wish * model.budget(dt)).norm() - speed
}

/// Named collection of air models drawn side by side
pub struct AirModels {
    terms: Vec<(&'static str, Box<dyn AirAccel + Send + Sync>)>,
}

impl Default for AirModels {
    fn default() -> Self {
        Self::new()
    }
}

impl AirModels {
    /// Create an empty model set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a named model
    pub fn with<T>(mut self, name: &'static str, term: T) -> Self
    where
        T: AirAccel + Send + Sync + 'static,
    {
        self.terms.push((name, Box::new(term)));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|(name, _)| *name)
    }

    /// Gain vs. angle over `[angle_start, angle_end]` for every model at `speed`
    pub fn gain_curves(
        &self,
        speed: f64,
        dt: f64,
        angle_start: f64,
        angle_end: f64,
        points: usize,
    ) -> Result<Vec<(&'static str, Curve)>, SamplingError> {
        self.terms
            .iter()
            .map(|(name, model)| {
                let curve = sample(angle_start, angle_end, points, |angle| {
                    speed_gain(model.as_ref(), angle, speed, dt)
                })?;
                Ok::<_, SamplingError>((*name, curve))
            })
            .collect()
    }
}
