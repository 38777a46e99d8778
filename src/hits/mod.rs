//! # Hit records: the input data model
//!
//! Types describing a single batted ball as delivered by the data-loading
//! layer: who hit it, in which round, any externally computed metrics, and the
//! per-axis polynomial fit of its flight.
//!
//! Coefficient order convention
//! -----------------
//! The core works exclusively with **ascending-degree** coefficients
//! (`c[k]` multiplies `t^k`). The raw dataset ships fits in descending-degree
//! order; [`TrajectoryPolynomial::from_descending`] is the boundary adapter
//! that reverses them on the way in. Nothing past this module ever sees the
//! external order.
//!
//! See also
//! ------------
//! * [`crate::reconstruction`] – Turns a [`HitRecord`] into a sampled trajectory.
//! * [`crate::hits::aggregate`] – Folds reconstructed hits into the nested
//!   player → round → hit-list output.
pub mod aggregate;

use serde::{Deserialize, Serialize};

use crate::dinger_errors::DingerError;

/// Validity interval `[start, end]` of a raw polynomial fit.
///
/// The fit is only physically meaningful inside this window; sampling starts
/// at `start` and the landing-time solve replaces `end` as the effective upper
/// bound. Construction enforces `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Build a validity interval, rejecting empty or reversed bounds.
    ///
    /// Return
    /// ----------
    /// * `Ok(Interval)` – `start < end` (both finite under comparison).
    /// * `Err(DingerError::InvalidInterval)` – otherwise, NaN bounds included.
    pub fn new(start: f64, end: f64) -> Result<Self, DingerError> {
        if !(start < end) {
            return Err(DingerError::InvalidInterval(start, end));
        }
        Ok(Self { start, end })
    }
}

/// Per-axis polynomial description of one ball flight.
///
/// Three coefficient vectors in ascending-degree order, one per spatial axis.
/// The vectors may have different lengths (the fits are independent), and `z`
/// is the vertical axis whose root determines the landing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPolynomial {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub interval: Interval,
}

impl TrajectoryPolynomial {
    /// Build from coefficients already in ascending-degree order.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, interval: Interval) -> Self {
        Self { x, y, z, interval }
    }

    /// Build from the externally supplied **descending-degree** representation.
    ///
    /// This is the documented boundary transform of the input interface: the
    /// raw dataset stores `[c_n, ..., c_1, c_0]`, the core wants
    /// `[c_0, c_1, ..., c_n]`. Reversal happens exactly once, here.
    pub fn from_descending(
        mut x: Vec<f64>,
        mut y: Vec<f64>,
        mut z: Vec<f64>,
        interval: Interval,
    ) -> Self {
        x.reverse();
        y.reverse();
        z.reverse();
        Self { x, y, z, interval }
    }
}

/// One raw hit as delivered by the data-loading layer.
///
/// Read-only to the core: reconstruction clones what it needs and never
/// mutates the record. `metrics` is an opaque bag of externally computed
/// per-hit values (exit velocity, projected distance, launch angle, ...) that
/// the engine carries through to its output verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitRecord {
    pub player_id: String,
    pub player_name: String,
    pub round: u32,
    /// Running home-run count for the player, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_home_runs: Option<u32>,
    /// Pass-through metrics bag, untouched by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
    pub trajectory: TrajectoryPolynomial,
}

#[cfg(test)]
mod hits_test {
    use super::*;

    #[test]
    fn test_interval_rejects_reversed_bounds() {
        assert!(Interval::new(0.0, 4.5).is_ok());
        assert!(matches!(
            Interval::new(4.5, 0.0),
            Err(DingerError::InvalidInterval(_, _))
        ));
        assert!(Interval::new(1.0, 1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_from_descending_reverses_each_axis() {
        let interval = Interval::new(0.0, 5.0).unwrap();
        let poly = TrajectoryPolynomial::from_descending(
            vec![3.0, 2.0, 1.0],
            vec![5.0, 4.0],
            vec![-1.0, 8.0, -12.0],
            interval,
        );
        assert_eq!(poly.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(poly.y, vec![4.0, 5.0]);
        assert_eq!(poly.z, vec![-12.0, 8.0, -1.0]);
    }
}
