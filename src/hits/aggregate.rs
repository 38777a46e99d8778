//! # Aggregation: the nested player → round → hit-list output
//!
//! The serving layer consumes reconstruction results in one of two shapes:
//! a flat ordered list of per-hit trajectories, or the nested [`HitSet`]
//! keyed by player id and round number. This module owns the nested shape and
//! the single sequential pass that builds it.
//!
//! Ordering guarantees
//! -----------------
//! * Within a `(player, round)` bucket, hits appear in **input order** — the
//!   aggregation pass is a plain fold over the already-ordered batch.
//! * Map keys are held in [`BTreeMap`]s, so serialized output enumerates
//!   players and rounds in a deterministic sorted order.
//!
//! First-occurrence semantics
//! -----------------
//! The first hit seen for a player fixes the stored display name and home-run
//! count; later hits for the same player never overwrite them.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reconstruction::sampler::SampledTrajectory;

/// The nested aggregate: player id → per-player hits grouped by round.
///
/// Built once per batch by [`aggregate_hits`], immutable afterwards.
pub type HitSet = BTreeMap<String, PlayerHits>;

/// One fully reconstructed hit.
///
/// Serializes to the per-hit object the front end consumes: `player_id`,
/// `round`, the pass-through `metrics` bag, and the flattened sampled series
/// (`t`, `x`, `y`, `z`, optionally `speeds`). The player display name and
/// home-run count ride along for the aggregation pass but serialize at player
/// level only, never per hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructedHit {
    pub player_id: String,
    #[serde(skip)]
    pub player_name: String,
    #[serde(skip)]
    pub num_home_runs: Option<u32>,
    pub round: u32,
    /// Externally computed metrics, carried through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
    #[serde(flatten)]
    pub trajectory: SampledTrajectory,
}

/// Per-player entry of the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHits {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_home_runs: Option<u32>,
    pub rounds: BTreeMap<u32, Vec<ReconstructedHit>>,
}

/// Fold reconstructed hits into the nested [`HitSet`].
///
/// A single pass in input order: look up or create the player entry (first
/// occurrence fixes `name` and `num_home_runs`), look up or create the round
/// list, append the hit. Aggregation has no rejection logic — upstream
/// reconstruction already dropped unsolvable hits.
///
/// Arguments
/// -----------------
/// * `hits`: Reconstructed hits in original batch order.
///
/// Return
/// ----------
/// * The nested aggregate, ready for serialization.
///
/// See also
/// ------------
/// * [`BatchReconstruction::into_aggregate`](crate::reconstruction::BatchReconstruction::into_aggregate) –
///   The batch-level entry point selecting this output shape.
pub fn aggregate_hits(hits: Vec<ReconstructedHit>) -> HitSet {
    let mut set = HitSet::new();
    for hit in hits {
        let player = set
            .entry(hit.player_id.clone())
            .or_insert_with(|| PlayerHits {
                name: hit.player_name.clone(),
                num_home_runs: hit.num_home_runs,
                rounds: BTreeMap::new(),
            });
        player.rounds.entry(hit.round).or_default().push(hit);
    }
    set
}
