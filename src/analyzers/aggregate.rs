//! Per-bucket ranking of inventory entries and the accident-side join.

use crate::analyzers::types::AggregateRow;
use crate::analyzers::utility::mean;
use crate::features::{PlaneSize, ScoredAccident, SizedInventory};
use std::collections::{HashMap, HashSet};
use tracing::debug;

const BUCKETS: [PlaneSize; 3] = [PlaneSize::Small, PlaneSize::Medium, PlaneSize::Large];

/// Ranks the top `top_n` make/model entries per size bucket and joins in
/// accident counts and mean severity scores.
///
/// Bucket membership is tested on the combined `make_model + " " + size`
/// string containing the bucket name, preserving the upstream selection
/// rule. Equal counts are broken by lexicographic order of that combined
/// string so the ranking is deterministic.
pub fn aggregate(
    accidents: &[ScoredAccident],
    inventory: &[SizedInventory],
    top_n: usize,
) -> Vec<AggregateRow> {
    let combined: Vec<String> = inventory
        .iter()
        .map(|record| {
            let size = record.plane_size.map(PlaneSize::as_str).unwrap_or("");
            format!("{} {}", record.make_model, size)
        })
        .collect();

    // (size, make_model, number_of_planes) per retained entry, in
    // small/medium/large order.
    let mut retained: Vec<(&'static str, String, u64)> = Vec::new();
    for bucket in BUCKETS {
        let name = bucket.as_str();
        let suffix = format!(" {name}");

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for key in &combined {
            if key.contains(name) {
                *counts.entry(key.as_str()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(top_n);

        debug!(bucket = name, entries = ranked.len(), "Bucket ranked");

        for (key, count) in ranked {
            let make_model = key.strip_suffix(&suffix).unwrap_or(key).to_string();
            retained.push((name, make_model, count));
        }
    }

    let retained_keys: HashSet<&str> = retained
        .iter()
        .map(|(_, make_model, _)| make_model.as_str())
        .collect();

    let mut accident_counts: HashMap<&str, u64> = HashMap::new();
    for accident in accidents {
        if retained_keys.contains(accident.make_model.as_str()) {
            *accident_counts.entry(accident.make_model.as_str()).or_default() += 1;
        }
    }

    retained
        .into_iter()
        .map(|(size, make_model, number_of_planes)| {
            let matching: Vec<&ScoredAccident> = accidents
                .iter()
                .filter(|a| a.make_model == make_model)
                .collect();

            let injuries: Vec<f64> = matching.iter().map(|a| a.human_injury_numeric).collect();
            let damages: Vec<f64> = matching
                .iter()
                .filter_map(|a| a.aircraft_damage_numeric)
                .collect();
            let dangers: Vec<f64> = matching.iter().filter_map(|a| a.danger_score).collect();

            let recorded = accident_counts.get(make_model.as_str()).copied();
            let rate = match recorded {
                Some(n) if number_of_planes > 0 => Some(n as f64 / number_of_planes as f64),
                _ => None,
            };

            AggregateRow {
                size: size.to_string(),
                make_model,
                number_of_planes,
                recorded_accidents_for_plane_model: recorded,
                mean_human_injury_score: mean(&injuries),
                mean_aircraft_damage_score: mean(&damages),
                mean_danger_score: mean(&dangers),
                recorded_accidents_per_plane_in_inventory: rate,
            }
        })
        .collect()
}
