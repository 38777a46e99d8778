//! Aggregation over reconstructed batches: nesting, ordering and the exact
//! serialized shape the serving layer forwards to the front end.
use serde_json::json;

use dinger::{reconstruct_batch, HitRecord, Interval, ReconstructionParams, TrajectoryPolynomial};

fn hit(player_id: &str, name: &str, round: u32, hrs: Option<u32>, tag: i64) -> HitRecord {
    HitRecord {
        player_id: player_id.into(),
        player_name: name.into(),
        round,
        num_home_runs: hrs,
        metrics: Some(json!({ "tag": tag })),
        trajectory: TrajectoryPolynomial::new(
            vec![0.0, 50.0],
            vec![0.0, 45.0],
            // -(t - 5)(t - 0.2): lands at t = 5.
            vec![-1.0, 5.2, -1.0],
            Interval::new(0.0, 0.4).unwrap(),
        ),
    }
}

#[test]
fn test_nested_shape_groups_and_orders() {
    let records = vec![
        hit("A", "Player A", 1, Some(4), 0),
        hit("A", "Other Name", 1, Some(99), 1),
        hit("B", "Player B", 2, Some(2), 2),
    ];

    let set = reconstruct_batch(&records, &ReconstructionParams::default())
        .unwrap()
        .into_aggregate();

    assert_eq!(set.len(), 2);

    let a = &set["A"];
    assert_eq!(a.name, "Player A");
    assert_eq!(a.num_home_runs, Some(4));
    assert_eq!(a.rounds.len(), 1);
    let a_round1 = &a.rounds[&1];
    assert_eq!(a_round1.len(), 2);
    let tags: Vec<i64> = a_round1
        .iter()
        .map(|h| h.metrics.as_ref().unwrap()["tag"].as_i64().unwrap())
        .collect();
    assert_eq!(tags, vec![0, 1]);

    let b = &set["B"];
    assert_eq!(b.name, "Player B");
    assert_eq!(b.rounds.len(), 1);
    assert_eq!(b.rounds[&2].len(), 1);
}

#[test]
fn test_failed_hits_never_reach_the_aggregate() {
    let mut bad = hit("A", "Player A", 1, None, 0);
    bad.trajectory.z = vec![1.0, 0.0, 1.0]; // no real roots
    let records = vec![bad, hit("A", "Player A", 1, None, 1)];

    let set = reconstruct_batch(&records, &ReconstructionParams::default())
        .unwrap()
        .into_aggregate();

    assert_eq!(set["A"].rounds[&1].len(), 1);
}

#[test]
fn test_serialized_hit_shape() {
    let records = vec![hit("A", "Player A", 1, Some(4), 7)];
    let set = reconstruct_batch(&records, &ReconstructionParams::default())
        .unwrap()
        .into_aggregate();

    let value = serde_json::to_value(&set).unwrap();
    let player = &value["A"];
    assert_eq!(player["name"], "Player A");
    assert_eq!(player["num_home_runs"], 4);

    let hit = &player["rounds"]["1"][0];
    assert_eq!(hit["player_id"], "A");
    assert_eq!(hit["round"], 1);
    assert_eq!(hit["metrics"]["tag"], 7);
    for series in ["t", "x", "y", "z", "speeds"] {
        let array = hit[series].as_array().unwrap_or_else(|| {
            panic!("missing series field `{series}` in serialized hit")
        });
        assert_eq!(array.len(), 100);
    }
    // Player-level fields must not leak into per-hit objects.
    assert!(hit.get("name").is_none());
    assert!(hit.get("player_name").is_none());
    assert!(hit.get("num_home_runs").is_none());
}

#[test]
fn test_flat_shape_serializes_without_player_fields() {
    let records = vec![hit("A", "Player A", 1, Some(4), 7)];
    let flat = reconstruct_batch(&records, &ReconstructionParams::default())
        .unwrap()
        .into_flat();

    let value = serde_json::to_value(&flat).unwrap();
    let hit = &value[0];
    assert_eq!(hit["player_id"], "A");
    assert!(hit.get("player_name").is_none());
    assert_eq!(hit["t"].as_array().unwrap().len(), 100);
}
