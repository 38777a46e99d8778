//! # Landing-time solver
//!
//! Finds the time at which a reconstructed trajectory ends: the ball reaches
//! ground level when the vertical-position polynomial `z(t)` crosses zero.
//!
//! Algorithm
//! -----------------
//! 1. Trim trailing (highest-degree) zero coefficients so the leading
//!    coefficient handed to the solver is non-zero.
//! 2. Compute **all** complex roots with the Aberth–Ehrlich method
//!    (the [`aberth`] crate).
//! 3. Keep roots whose imaginary magnitude is below
//!    [`root_imag_eps`](crate::reconstruction::ReconstructionParams::root_imag_eps) —
//!    tiny imaginary parts are numerical artifacts of a real root, not true
//!    complex pairs.
//! 4. Drop real roots below
//!    [`min_landing_time`](crate::reconstruction::ReconstructionParams::min_landing_time):
//!    the fit is only meaningful from shortly after launch, and near-zero
//!    roots describe the ball's initial position, not its landing.
//! 5. Sort ascending and select the smallest survivor.
//!
//! Determinism
//! -----------------
//! Identical coefficients always select the identical root: the candidate set
//! is a pure function of the input and the final sort uses the total order on
//! `f64`.
use aberth::{aberth, StopReason};

use super::ReconstructionParams;
use crate::dinger_errors::DingerError;

/// Term-count ceiling of the dispatch ladder in `near_real_roots_dyn`.
///
/// The Aberth solver is const-generic over the number of terms, so dynamic
/// degrees dispatch through a fixed ladder. Degree 15 is far above any
/// observed flight fit (the raw data tops out around degree 6).
const MAX_TERMS: usize = 16;

/// Solve for the landing time of a vertical-position polynomial.
///
/// Arguments
/// -----------------
/// * `z`: Vertical-axis coefficients in ascending-degree order.
/// * `params`: Solver tolerances and the admissibility threshold.
///
/// Return
/// ----------
/// * `Ok(f64)` – The smallest real root at or above
///   `params.min_landing_time`.
/// * `Err(DingerError::InvalidPolynomial)` – Empty coefficient slice.
/// * `Err(DingerError::NoLandingRoot)` – No admissible real root (also when
///   the polynomial is constant after trimming). A data-quality condition on
///   this hit only; the batch driver keeps going.
/// * `Err(DingerError::PolynomialRootFindingFailed)` – The Aberth iteration
///   failed outright.
/// * `Err(DingerError::UnsupportedPolynomialDegree)` – Degree above
///   `MAX_TERMS - 1`.
///
/// See also
/// ------------
/// * [`reconstruct_hit`](crate::reconstruction::reconstruct_hit) – Feeds this
///   root to the trajectory sampler as the upper sampling bound.
pub fn landing_time(z: &[f64], params: &ReconstructionParams) -> Result<f64, DingerError> {
    if z.is_empty() {
        return Err(DingerError::InvalidPolynomial(
            "empty vertical coefficient sequence".into(),
        ));
    }

    let trimmed = match z.iter().rposition(|&c| c != 0.0) {
        // A constant polynomial never crosses zero.
        Some(degree) if degree >= 1 => &z[..=degree],
        _ => return Err(DingerError::NoLandingRoot(params.min_landing_time)),
    };

    let mut roots = near_real_roots_dyn(trimmed, params)?;
    roots.retain(|&root| root >= params.min_landing_time);
    roots.sort_by(f64::total_cmp);
    roots
        .first()
        .copied()
        .ok_or(DingerError::NoLandingRoot(params.min_landing_time))
}

/// Run the Aberth–Ehrlich solver and keep the near-real roots.
///
/// A root is promoted to real when its imaginary magnitude is below
/// `params.root_imag_eps`. `MaxIteration` is accepted alongside `Converged`:
/// the per-root residuals are usually already tight and the admissibility
/// filters downstream reject anything spurious.
fn near_real_roots<const TERMS: usize>(
    poly: &[f64; TERMS],
    params: &ReconstructionParams,
) -> Result<Vec<f64>, DingerError> {
    let roots = aberth(poly, params.aberth_max_iter, params.aberth_eps);
    match roots.stop_reason {
        StopReason::Converged(_) | StopReason::MaxIteration(_) => Ok(roots
            .iter()
            .filter(|root| root.im.abs() < params.root_imag_eps)
            .map(|root| root.re)
            .collect()),
        StopReason::Failed(_) => Err(DingerError::PolynomialRootFindingFailed),
    }
}

/// Bridge a runtime-degree coefficient slice to the const-generic solver.
///
/// The slice must already be trimmed (non-zero leading coefficient) and hold
/// at least two terms.
fn near_real_roots_dyn(
    coefficients: &[f64],
    params: &ReconstructionParams,
) -> Result<Vec<f64>, DingerError> {
    macro_rules! dispatch {
        ($($terms:literal),+ $(,)?) => {
            match coefficients.len() {
                $($terms => {
                    let mut poly = [0.0_f64; $terms];
                    poly.copy_from_slice(coefficients);
                    near_real_roots(&poly, params)
                })+
                len => Err(DingerError::UnsupportedPolynomialDegree(len - 1)),
            }
        };
    }
    dispatch!(2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16)
}
