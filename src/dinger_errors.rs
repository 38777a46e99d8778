use thiserror::Error;

/// Error taxonomy of the reconstruction engine.
///
/// Two failure classes exist and they propagate differently:
///
/// * **Per-hit failures** — [`InvalidPolynomial`](DingerError::InvalidPolynomial),
///   [`NoLandingRoot`](DingerError::NoLandingRoot),
///   [`PolynomialRootFindingFailed`](DingerError::PolynomialRootFindingFailed),
///   [`UnsupportedPolynomialDegree`](DingerError::UnsupportedPolynomialDegree) and
///   [`InvalidInterval`](DingerError::InvalidInterval) are data-quality conditions
///   on a single hit. The batch driver catches them at the per-hit boundary,
///   records the failure and keeps processing the remaining hits.
/// * **Configuration failures** — [`DegenerateSampling`](DingerError::DegenerateSampling)
///   and [`InvalidConfiguration`](DingerError::InvalidConfiguration) concern
///   parameters shared by every hit in a batch and abort the whole run before
///   any reconstruction starts.
#[derive(Error, Debug)]
pub enum DingerError {
    #[error("Invalid polynomial: {0}")]
    InvalidPolynomial(String),

    #[error("No real landing root at or above t = {0} for the vertical polynomial")]
    NoLandingRoot(f64),

    #[error("Degenerate sampling resolution {0}: at least 2 samples per trajectory are required")]
    DegenerateSampling(usize),

    #[error("Aberth–Ehrlich method failed to find acceptable complex roots")]
    PolynomialRootFindingFailed,

    #[error("Unsupported polynomial degree: {0}")]
    UnsupportedPolynomialDegree(usize),

    #[error("Invalid fit interval: start {0} must be strictly below end {1}")]
    InvalidInterval(f64, f64),

    #[error("Invalid reconstruction parameter: {0}")]
    InvalidConfiguration(String),
}
