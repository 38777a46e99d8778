pub mod dinger_errors;
pub mod hits;
pub mod polynomial;
pub mod reconstruction;

pub use dinger_errors::DingerError;
pub use hits::aggregate::{aggregate_hits, HitSet, PlayerHits, ReconstructedHit};
pub use hits::{HitRecord, Interval, TrajectoryPolynomial};
pub use reconstruction::sampler::SampledTrajectory;
pub use reconstruction::{
    reconstruct_batch, reconstruct_hit, BatchReconstruction, HitFailure, ReconstructionParams,
};
