//! Data types used by the aggregation pipeline.

use crate::features::{DangerWeights, SizeBounds};
use serde::Serialize;

/// One row of the final aggregate table: a top-ranked make/model within one
/// size bucket, with accident counts and mean severity scores joined in.
///
/// Missing values are first-class here. A make/model with no recorded
/// accidents carries `None`, not zero, and serializes as an empty CSV field.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRow {
    pub size: String,
    pub make_model: String,
    pub number_of_planes: u64,
    pub recorded_accidents_for_plane_model: Option<u64>,
    pub mean_human_injury_score: Option<f64>,
    pub mean_aircraft_damage_score: Option<f64>,
    pub mean_danger_score: Option<f64>,
    pub recorded_accidents_per_plane_in_inventory: Option<f64>,
}

/// Tunable knobs for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct RaterConfig {
    /// How many make/model entries to keep per size bucket.
    pub top_n: usize,
    pub weights: DangerWeights,
    pub size_bounds: SizeBounds,
}

impl Default for RaterConfig {
    fn default() -> Self {
        RaterConfig {
            top_n: 10,
            weights: DangerWeights::default(),
            size_bounds: SizeBounds::default(),
        }
    }
}
