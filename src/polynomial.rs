//! # Polynomial evaluation and differentiation
//!
//! Scalar polynomial primitives shared by every stage of the reconstruction
//! pipeline. A polynomial is an ordered coefficient slice in **ascending-degree
//! order**: `coefficients[k]` multiplies `t^k`, so `coefficients[0]` is the
//! constant term. The input boundary reverses externally supplied
//! descending-degree fits before they ever reach this module (see
//! [`TrajectoryPolynomial::from_descending`](crate::hits::TrajectoryPolynomial::from_descending)),
//! which keeps a single canonical order everywhere in the core.
//!
//! Evaluation uses **Horner's method** rather than a naive power sum so that
//! floating-point error stays bounded for higher-degree fits.
//!
//! All functions here are pure: no state, no side effects.
use crate::dinger_errors::DingerError;

/// Evaluate a polynomial at a single point using Horner's method.
///
/// Arguments
/// -----------------
/// * `coefficients`: Coefficient slice in ascending-degree order.
/// * `t`: Evaluation point.
///
/// Return
/// ----------
/// * `Ok(f64)` – The polynomial value at `t`.
/// * `Err(DingerError::InvalidPolynomial)` – The coefficient slice is empty.
pub fn evaluate_at(coefficients: &[f64], t: f64) -> Result<f64, DingerError> {
    if coefficients.is_empty() {
        return Err(DingerError::InvalidPolynomial(
            "empty coefficient sequence".into(),
        ));
    }
    Ok(horner(coefficients, t))
}

/// Evaluate a polynomial at every point of a time vector.
///
/// Arguments
/// -----------------
/// * `coefficients`: Coefficient slice in ascending-degree order.
/// * `times`: Evaluation points, typically the shared sample grid of a hit.
///
/// Return
/// ----------
/// * `Ok(Vec<f64>)` – One value per entry of `times`, in the same order.
/// * `Err(DingerError::InvalidPolynomial)` – The coefficient slice is empty.
///
/// See also
/// ------------
/// * [`sample`](crate::reconstruction::sampler::sample) – Builds the time grid
///   and evaluates the three axis polynomials on it.
pub fn evaluate(coefficients: &[f64], times: &[f64]) -> Result<Vec<f64>, DingerError> {
    if coefficients.is_empty() {
        return Err(DingerError::InvalidPolynomial(
            "empty coefficient sequence".into(),
        ));
    }
    Ok(times.iter().map(|&t| horner(coefficients, t)).collect())
}

/// Evaluate a polynomial that may be the empty (zero) polynomial.
///
/// Differentiating a degree-0 polynomial yields an empty coefficient sequence;
/// evaluating that sequence is identically zero, not an error. The speed
/// computation relies on this for constant axes.
pub fn evaluate_or_zero(coefficients: &[f64], times: &[f64]) -> Vec<f64> {
    if coefficients.is_empty() {
        return vec![0.0; times.len()];
    }
    times.iter().map(|&t| horner(coefficients, t)).collect()
}

/// Coefficients of the derivative polynomial.
///
/// `d[k] = coefficients[k + 1] * (k + 1)`, so the result is one coefficient
/// shorter than the input. A constant (or empty) polynomial differentiates to
/// the empty polynomial.
pub fn differentiate(coefficients: &[f64]) -> Vec<f64> {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| c * k as f64)
        .collect()
}

#[inline]
fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rfold(0.0, |acc, &c| acc * t + c)
}
