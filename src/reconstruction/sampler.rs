//! # Trajectory sampler
//!
//! Produces the fixed-resolution time grid of a hit and evaluates the three
//! axis polynomials on it. The grid is linear: `n` samples from the fit
//! interval's start to the landing time, both bounds exact. `n` is batch-wide
//! configuration (default 100), never derived per hit, so every trajectory in
//! a batch has series of identical length.
use serde::{Deserialize, Serialize};

use crate::dinger_errors::DingerError;
use crate::hits::TrajectoryPolynomial;
use crate::polynomial;

/// Parallel sampled series of one trajectory.
///
/// All vectors share the same length `n`; `t` is strictly increasing with
/// `t[0]` at the interval start and `t[n - 1]` at the landing time. The speed
/// series is present only when requested and serializes under the `speeds`
/// field name the front end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledTrajectory {
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(rename = "speeds", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec<f64>>,
}

/// Sample a trajectory on `n` evenly spaced times over `[t0, landing_time]`.
///
/// Arguments
/// -----------------
/// * `poly`: The per-axis fit; sampling starts at `poly.interval.start`.
/// * `landing_time`: Upper sampling bound, from the landing-time solver.
///   Must lie strictly above the interval start.
/// * `n`: Number of samples, `n >= 2`.
///
/// Return
/// ----------
/// * `Ok(SampledTrajectory)` – Series of length `n`, speed unset.
/// * `Err(DingerError::DegenerateSampling)` – `n < 2`.
/// * `Err(DingerError::InvalidPolynomial)` – An axis has no coefficients.
///
/// See also
/// ------------
/// * [`speeds`](crate::reconstruction::speed::speeds) – Derives the aligned
///   speed series from the same time grid.
pub fn sample(
    poly: &TrajectoryPolynomial,
    landing_time: f64,
    n: usize,
) -> Result<SampledTrajectory, DingerError> {
    if n < 2 {
        return Err(DingerError::DegenerateSampling(n));
    }
    let t = linspace(poly.interval.start, landing_time, n);
    Ok(SampledTrajectory {
        x: polynomial::evaluate(&poly.x, &t)?,
        y: polynomial::evaluate(&poly.y, &t)?,
        z: polynomial::evaluate(&poly.z, &t)?,
        t,
        speed: None,
    })
}

/// `n` evenly spaced values over `[start, end]`, first and last exact.
///
/// The last sample is pinned to `end` so the landing time is hit exactly
/// rather than up to one accumulated rounding step away.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    let mut t: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    t[n - 1] = end;
    t
}

#[cfg(test)]
mod sampler_test {
    use super::*;
    use crate::hits::Interval;

    fn poly(interval: Interval) -> TrajectoryPolynomial {
        TrajectoryPolynomial::new(
            vec![0.0, 1.0],        // x(t) = t
            vec![1.0, 0.0, 2.0],   // y(t) = 1 + 2t^2
            vec![-12.0, 8.0, -1.0], // z(t) = -(t - 2)(t - 6)
            interval,
        )
    }

    #[test]
    fn test_linspace_exact_grid() {
        assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_bounds_are_exact() {
        let t = linspace(0.15, 4.7123, 100);
        assert_eq!(t.len(), 100);
        assert_eq!(t[0], 0.15);
        assert_eq!(t[99], 4.7123);
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_evaluates_each_axis() {
        let interval = Interval::new(0.0, 4.0).unwrap();
        let sampled = sample(&poly(interval), 2.0, 3).unwrap();

        assert_eq!(sampled.t, vec![0.0, 1.0, 2.0]);
        assert_eq!(sampled.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(sampled.y, vec![1.0, 3.0, 9.0]);
        assert_eq!(sampled.z, vec![-12.0, -5.0, 0.0]);
        assert!(sampled.speed.is_none());
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        let interval = Interval::new(0.0, 4.0).unwrap();
        for n in [0, 1] {
            assert!(matches!(
                sample(&poly(interval), 2.0, n),
                Err(DingerError::DegenerateSampling(_))
            ));
        }
    }

    #[test]
    fn test_empty_axis_rejected() {
        let interval = Interval::new(0.0, 4.0).unwrap();
        let broken = TrajectoryPolynomial::new(vec![], vec![1.0], vec![1.0, 1.0], interval);
        assert!(matches!(
            sample(&broken, 2.0, 10),
            Err(DingerError::InvalidPolynomial(_))
        ));
    }
}
