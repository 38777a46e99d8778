//! # Trajectory reconstruction engine
//!
//! The single shared per-hit pipeline and its batch driver. The original
//! system duplicated this computation near-verbatim across several entry
//! points with only the output shape differing; here every entry point runs
//! the same engine and the caller picks the shape afterwards.
//!
//! Pipeline
//! -----------------
//! 1. **Landing time** – solve the vertical polynomial for the smallest
//!    admissible real root ([`landing_time`](landing_time::landing_time)).
//! 2. **Sampling** – evaluate all three axes on a fixed-resolution linear time
//!    grid over `[t0, landing]` ([`sampler::sample`]).
//! 3. **Speed** (optional) – Euclidean norm of the derivative polynomials on
//!    the same grid ([`speed::speeds`]).
//!
//! Failure policy
//! -----------------
//! Per-hit errors are caught at the single-hit boundary: the hit is dropped,
//! the failure is recorded in [`BatchReconstruction::failures`] and logged,
//! and every other hit still completes. Configuration errors (a degenerate
//! sample count) abort the batch before any per-hit work.
//!
//! Output shapes
//! -----------------
//! * [`BatchReconstruction::into_flat`] – flat ordered list of per-hit series.
//! * [`BatchReconstruction::into_aggregate`] – nested player → round → hit-list
//!   structure ([`HitSet`](crate::hits::aggregate::HitSet)).
//!
//! Every stage is a pure function of its inputs; reconstruction of distinct
//! hits shares nothing, so callers may shard a batch across threads and
//! concatenate results in original index order before aggregating. The driver
//! itself is a single sequential pass, which is what the aggregation
//! insertion-order invariant needs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dinger::{reconstruct_batch, HitRecord, ReconstructionParams};
//!
//! # fn run(records: Vec<HitRecord>) -> Result<(), dinger::DingerError> {
//! let params = ReconstructionParams::builder()
//!     .n_samples(100)
//!     .with_speed(true)
//!     .build()?;
//!
//! let batch = reconstruct_batch(&records, &params)?;
//! let by_player = batch.into_aggregate();
//! # Ok(())
//! # }
//! ```
pub mod landing_time;
pub mod sampler;
pub mod speed;

use tracing::{debug, warn};

use crate::dinger_errors::DingerError;
use crate::hits::aggregate::{aggregate_hits, HitSet, ReconstructedHit};
use crate::hits::HitRecord;
use self::landing_time::landing_time;
use self::sampler::sample;
use self::speed::speeds;

/// Configuration shared by every hit of a batch.
///
/// Centralizes the observed defaults of the original system: 100 samples per
/// trajectory, a landing-root admissibility threshold of 1.0 time units and a
/// 1e-8 imaginary tolerance when promoting complex roots to real. The Aberth
/// controls mirror the solver's own defaults.
///
/// Fields
/// -----------------
/// * `n_samples` – number of samples per trajectory; shared by the whole
///   batch, never derived per hit. Must be at least 2.
/// * `min_landing_time` – real roots strictly below this value are discarded;
///   the fit is only meaningful from shortly after launch, and near-zero roots
///   describe the initial position rather than the landing.
/// * `root_imag_eps` – maximum imaginary magnitude for a complex root to be
///   treated as a numerically perturbed real root.
/// * `aberth_max_iter` – iteration cap for the Aberth–Ehrlich solver.
/// * `aberth_eps` – convergence threshold for the Aberth iterations.
/// * `with_speed` – attach the instantaneous-speed series to each trajectory.
#[derive(Debug, Clone)]
pub struct ReconstructionParams {
    pub n_samples: usize,
    pub min_landing_time: f64,
    pub root_imag_eps: f64,
    pub aberth_max_iter: u32,
    pub aberth_eps: f64,
    pub with_speed: bool,
}

impl ReconstructionParams {
    /// Construct parameters with the observed production defaults.
    ///
    /// Equivalent to [`ReconstructionParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fluent [`ReconstructionParamsBuilder`] to override defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dinger::ReconstructionParams;
    ///
    /// let params = ReconstructionParams::builder()
    ///     .n_samples(250)
    ///     .with_speed(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.n_samples, 250);
    /// ```
    pub fn builder() -> ReconstructionParamsBuilder {
        ReconstructionParamsBuilder::new()
    }
}

impl Default for ReconstructionParams {
    fn default() -> Self {
        ReconstructionParams {
            n_samples: 100,
            min_landing_time: 1.0,
            root_imag_eps: 1e-8,
            aberth_max_iter: 50,
            aberth_eps: 1e-6,
            with_speed: true,
        }
    }
}

/// Builder for [`ReconstructionParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct ReconstructionParamsBuilder {
    params: ReconstructionParams,
}

impl ReconstructionParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_samples(mut self, v: usize) -> Self {
        self.params.n_samples = v;
        self
    }
    pub fn min_landing_time(mut self, v: f64) -> Self {
        self.params.min_landing_time = v;
        self
    }
    pub fn root_imag_eps(mut self, v: f64) -> Self {
        self.params.root_imag_eps = v;
        self
    }
    pub fn aberth_max_iter(mut self, v: u32) -> Self {
        self.params.aberth_max_iter = v;
        self
    }
    pub fn aberth_eps(mut self, v: f64) -> Self {
        self.params.aberth_eps = v;
        self
    }
    pub fn with_speed(mut self, v: bool) -> Self {
        self.params.with_speed = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `n_samples >= 2` – anything smaller cannot hold both interval bounds
    ///   ([`DingerError::DegenerateSampling`]).
    /// * `min_landing_time` finite, `root_imag_eps >= 0.0`,
    ///   `aberth_eps > 0.0`, `aberth_max_iter >= 1`
    ///   ([`DingerError::InvalidConfiguration`]).
    pub fn build(self) -> Result<ReconstructionParams, DingerError> {
        let p = &self.params;
        if p.n_samples < 2 {
            return Err(DingerError::DegenerateSampling(p.n_samples));
        }
        if !p.min_landing_time.is_finite() {
            return Err(DingerError::InvalidConfiguration(format!(
                "min_landing_time must be finite, got {}",
                p.min_landing_time
            )));
        }
        if !(p.root_imag_eps >= 0.0) {
            return Err(DingerError::InvalidConfiguration(format!(
                "root_imag_eps must be non-negative, got {}",
                p.root_imag_eps
            )));
        }
        if !(p.aberth_eps > 0.0) {
            return Err(DingerError::InvalidConfiguration(format!(
                "aberth_eps must be strictly positive, got {}",
                p.aberth_eps
            )));
        }
        if p.aberth_max_iter == 0 {
            return Err(DingerError::InvalidConfiguration(
                "aberth_max_iter must be at least 1".into(),
            ));
        }
        Ok(self.params)
    }
}

/// One hit the batch driver had to drop, with the reason.
///
/// `index` is the hit's position in the input batch, so callers that shard
/// work can still report failures against the original ordering.
#[derive(Debug)]
pub struct HitFailure {
    pub index: usize,
    pub player_id: String,
    pub error: DingerError,
}

/// Outcome of a batch run: reconstructed hits in input order, plus the
/// failures that were skipped along the way.
///
/// A batch over `N` hits where `M` fail yields exactly `N - M` entries in
/// `hits` and `M` entries in `failures`; there are no partial entries.
#[derive(Debug)]
pub struct BatchReconstruction {
    pub hits: Vec<ReconstructedHit>,
    pub failures: Vec<HitFailure>,
}

impl BatchReconstruction {
    /// Output shape (a): the flat ordered list of per-hit trajectories.
    pub fn into_flat(self) -> Vec<ReconstructedHit> {
        self.hits
    }

    /// Output shape (b): the nested player → round → hit-list aggregate.
    pub fn into_aggregate(self) -> HitSet {
        aggregate_hits(self.hits)
    }

    /// True when every hit of the input batch reconstructed cleanly.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reconstruct a single hit: landing time, sampled series, optional speed.
///
/// Arguments
/// -----------------
/// * `record`: The raw hit; read-only, cloned where the output needs it.
/// * `params`: Batch-wide configuration.
///
/// Return
/// ----------
/// * `Ok(ReconstructedHit)` – Series of length `params.n_samples`, metrics
///   carried through verbatim.
/// * `Err(DingerError)` – Any per-hit failure listed in
///   [`DingerError`](crate::dinger_errors::DingerError); the caller decides
///   whether it is fatal (single-hit use) or recorded (batch use).
pub fn reconstruct_hit(
    record: &HitRecord,
    params: &ReconstructionParams,
) -> Result<ReconstructedHit, DingerError> {
    let beta = landing_time(&record.trajectory.z, params)?;
    let mut trajectory = sample(&record.trajectory, beta, params.n_samples)?;
    if params.with_speed {
        trajectory.speed = Some(speeds(&record.trajectory, &trajectory.t));
    }
    Ok(ReconstructedHit {
        player_id: record.player_id.clone(),
        player_name: record.player_name.clone(),
        num_home_runs: record.num_home_runs,
        round: record.round,
        metrics: record.metrics.clone(),
        trajectory,
    })
}

/// Reconstruct every hit of a batch, in input order.
///
/// Per-hit failures are logged at `warn` level, recorded in the returned
/// [`BatchReconstruction::failures`] and never abort the remaining hits. The
/// shared configuration is validated up front: a degenerate sample count
/// aborts the whole run before any reconstruction starts.
///
/// Arguments
/// -----------------
/// * `records`: The loaded batch; treated as an immutable value, never
///   process-wide state.
/// * `params`: Batch-wide configuration.
///
/// Return
/// ----------
/// * `Ok(BatchReconstruction)` – Results for all solvable hits.
/// * `Err(DingerError::DegenerateSampling)` – `params.n_samples < 2`.
///
/// See also
/// ------------
/// * [`BatchReconstruction::into_flat`] / [`BatchReconstruction::into_aggregate`] –
///   The two supported output shapes.
pub fn reconstruct_batch(
    records: &[HitRecord],
    params: &ReconstructionParams,
) -> Result<BatchReconstruction, DingerError> {
    // Re-checked here because the params fields are public: a hand-built
    // params value never went through the builder.
    if params.n_samples < 2 {
        return Err(DingerError::DegenerateSampling(params.n_samples));
    }

    let mut hits = Vec::with_capacity(records.len());
    let mut failures = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match reconstruct_hit(record, params) {
            Ok(hit) => hits.push(hit),
            Err(error) => {
                warn!(
                    index,
                    player_id = %record.player_id,
                    %error,
                    "skipping hit: trajectory reconstruction failed"
                );
                failures.push(HitFailure {
                    index,
                    player_id: record.player_id.clone(),
                    error,
                });
            }
        }
    }
    debug!(
        reconstructed = hits.len(),
        skipped = failures.len(),
        "batch reconstruction complete"
    );
    Ok(BatchReconstruction { hits, failures })
}
