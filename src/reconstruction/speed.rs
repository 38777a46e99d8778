//! # Instantaneous speed along a sampled trajectory.
//!
//! Differentiates each axis polynomial and takes the Euclidean norm of the
//! velocity vector on the **same** time grid the sampler produced. Sharing the
//! grid is the alignment invariant: `speed[i]` belongs to the position sample
//! at index `i`, never to an independently resampled time.
use itertools::izip;
use nalgebra::Vector3;

use crate::hits::TrajectoryPolynomial;
use crate::polynomial;

/// Speed at every sample time, `sqrt(dx² + dy² + dz²)`.
///
/// A constant axis differentiates to the empty polynomial, which evaluates as
/// identically zero here, so any fit yields a full-length series. Values are
/// non-negative by construction and the output length equals `times.len()`.
pub fn speeds(poly: &TrajectoryPolynomial, times: &[f64]) -> Vec<f64> {
    let dx = polynomial::evaluate_or_zero(&polynomial::differentiate(&poly.x), times);
    let dy = polynomial::evaluate_or_zero(&polynomial::differentiate(&poly.y), times);
    let dz = polynomial::evaluate_or_zero(&polynomial::differentiate(&poly.z), times);

    izip!(&dx, &dy, &dz)
        .map(|(&vx, &vy, &vz)| Vector3::new(vx, vy, vz).norm())
        .collect()
}

#[cfg(test)]
mod speed_test {
    use super::*;
    use crate::hits::Interval;
    use approx::assert_relative_eq;

    fn interval() -> Interval {
        Interval::new(0.0, 10.0).unwrap()
    }

    #[test]
    fn test_linear_axes_give_constant_speed() {
        // x' = 1, y' = 2, z' = 3 everywhere.
        let poly = TrajectoryPolynomial::new(
            vec![5.0, 1.0],
            vec![0.0, 2.0],
            vec![-1.0, 3.0],
            interval(),
        );
        let times = [0.0, 1.5, 4.0];
        let speeds = speeds(&poly, &times);
        assert_eq!(speeds.len(), times.len());
        for speed in speeds {
            assert_relative_eq!(speed, 14.0_f64.sqrt(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_constant_axes_give_zero_speed() {
        let poly = TrajectoryPolynomial::new(vec![3.0], vec![7.0], vec![2.0], interval());
        assert_eq!(speeds(&poly, &[0.0, 1.0, 2.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_speeds_never_negative() {
        let poly = TrajectoryPolynomial::new(
            vec![0.0, -55.0, 2.0],
            vec![10.0, -3.0],
            vec![4.0, 28.0, -16.1, 0.2],
            interval(),
        );
        let times: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
        for speed in speeds(&poly, &times) {
            assert!(speed >= 0.0);
        }
    }

    #[test]
    fn test_quadratic_vertical_axis() {
        // z(t) = 10t - 5t^2, z'(t) = 10 - 10t; speed at apex (t = 1) is zero.
        let poly = TrajectoryPolynomial::new(vec![0.0], vec![0.0], vec![0.0, 10.0, -5.0], interval());
        let speeds = speeds(&poly, &[0.0, 1.0, 2.0]);
        assert_relative_eq!(speeds[0], 10.0, max_relative = 1e-12);
        assert_relative_eq!(speeds[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(speeds[2], 10.0, max_relative = 1e-12);
    }
}
