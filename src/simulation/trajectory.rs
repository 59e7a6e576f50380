//! Core series types for the explorer.
//!
//! Both the simulated trajectories and the sampled theoretical curves are an
//! ordered list of `(x, y)` pairs stored column-wise:
//! - `Trajectory` – `(time, value)` produced by the step simulation
//! - `Curve`      – `(x, f(x))` produced by the function sampler

/// Column-wise ordered list of points. Only ever extended at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub xs: Vec<f64>, // abscissa (time, angle, ...)
    pub ys: Vec<f64>, // sampled or simulated value
}

pub type Trajectory = Series;
pub type Curve = Series;

impl Series {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        Some((*self.xs.first()?, *self.ys.first()?))
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.xs.last()?, *self.ys.last()?))
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Bounding box `(x_min, x_max, y_min, y_max)`, `None` when empty
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.points();
        let (x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), (x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_points() {
        let mut s = Series::default();
        assert_eq!(s.bounds(), None);
        s.push(0.0, 3.0);
        s.push(2.0, -1.0);
        s.push(1.0, 5.0);
        assert_eq!(s.bounds(), Some((0.0, 2.0, -1.0, 5.0)));
        assert_eq!(s.last(), Some((1.0, 5.0)));
    }
}
