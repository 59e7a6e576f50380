//! Evenly spaced sampling of a closed-form expression

use super::trajectory::Curve;
use crate::error::SamplingError;

/// Evaluate `f` at `points + 1` evenly spaced abscissae over `[start, end]`.
///
/// Iterates by index, so the count is exact and the last abscissa is `end`.
pub fn sample<F>(start: f64, end: f64, points: usize, f: F) -> Result<Curve, SamplingError>
where
    F: Fn(f64) -> f64,
{
    if points == 0 {
        return Err(SamplingError::NoIntervals);
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(SamplingError::InvalidBounds { start, end });
    }

    let step = (end - start) / points as f64;
    let mut curve = Curve::with_capacity(points + 1);
    for i in 0..=points {
        let x = if i == points { end } else { start + i as f64 * step };
        curve.push(x, f(x));
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_point_count_and_endpoints() {
        // 0.1 does not divide evenly in binary, an accumulated sum would drift
        let c = sample(0.0, 1.0, 10, |x| x).unwrap();
        assert_eq!(c.len(), 11);
        assert_eq!(c.first(), Some((0.0, 0.0)));
        assert_eq!(c.last(), Some((1.0, 1.0)));
    }

    #[test]
    fn reversed_interval_walks_backwards() {
        let c = sample(2.0, 0.0, 4, |x| x * x).unwrap();
        assert_eq!(c.xs, vec![2.0, 1.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn zero_points_is_an_error() {
        assert_eq!(sample(0.0, 1.0, 0, |x| x).unwrap_err(), SamplingError::NoIntervals);
    }

    #[test]
    fn nan_bound_is_an_error() {
        assert!(matches!(
            sample(f64::NAN, 1.0, 4, |x| x),
            Err(SamplingError::InvalidBounds { .. })
        ));
    }
}
