//! Derived per-record features: the `make_model` join key, injury and damage
//! severity numerics, the composite danger score, and plane size buckets.

use crate::clean::{AccidentRecord, InventoryRecord};
use serde::Serialize;

/// Injury severity category for one accident record.
///
/// Assigned in fixed priority order: a record with both fatal and minor
/// injuries is `Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InjuryCategory {
    Unknown,
    Minor,
    Serious,
    Fatal,
}

impl InjuryCategory {
    pub fn from_counts(fatal: u32, serious: u32, minor: u32) -> Self {
        if fatal > 0 {
            InjuryCategory::Fatal
        } else if serious > 0 {
            InjuryCategory::Serious
        } else if minor > 0 {
            InjuryCategory::Minor
        } else {
            InjuryCategory::Unknown
        }
    }

    pub fn numeric(self) -> f64 {
        match self {
            InjuryCategory::Unknown => 0.0,
            InjuryCategory::Minor => 1.0,
            InjuryCategory::Serious => 2.0,
            InjuryCategory::Fatal => 3.0,
        }
    }
}

/// Seat-count size class. Out-of-range seat counts have no class and render
/// as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneSize {
    Small,
    Medium,
    Large,
}

impl PlaneSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaneSize::Small => "small",
            PlaneSize::Medium => "medium",
            PlaneSize::Large => "large",
        }
    }
}

/// Inclusive seat-count boundaries for each size class.
#[derive(Debug, Clone, Copy)]
pub struct SizeBounds {
    pub small: (u32, u32),
    pub medium: (u32, u32),
    pub large: (u32, u32),
}

impl Default for SizeBounds {
    fn default() -> Self {
        SizeBounds {
            small: (3, 20),
            medium: (21, 100),
            large: (101, 524),
        }
    }
}

impl SizeBounds {
    pub fn classify(&self, seats: Option<u32>) -> Option<PlaneSize> {
        let seats = seats?;
        let within = |(lo, hi): (u32, u32)| seats >= lo && seats <= hi;
        if within(self.small) {
            Some(PlaneSize::Small)
        } else if within(self.medium) {
            Some(PlaneSize::Medium)
        } else if within(self.large) {
            Some(PlaneSize::Large)
        } else {
            None
        }
    }
}

/// Weights for the composite danger score. Not required to sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct DangerWeights {
    pub aircraft_damage: f64,
    pub human_injury: f64,
}

impl Default for DangerWeights {
    fn default() -> Self {
        DangerWeights {
            aircraft_damage: 0.75,
            human_injury: 0.25,
        }
    }
}

/// An accident record with its engineered severity features.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAccident {
    pub make_model: String,
    pub human_injury: InjuryCategory,
    pub human_injury_numeric: f64,
    pub aircraft_damage_numeric: Option<f64>,
    pub danger_score: Option<f64>,
}

/// An inventory record keyed and bucketed for aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct SizedInventory {
    pub make_model: String,
    pub plane_size: Option<PlaneSize>,
}

/// The join key: normalized make and model-code, space separated. Must be
/// derived identically on both tables.
pub fn make_model_key(make: &str, model: &str) -> String {
    format!("{make} {model}")
}

/// Engineers severity features for the whole accident table.
///
/// Injury and damage numerics are min-max rescaled to [0, 10] across this
/// record set, so the scale is dataset-relative. Damage labels outside the
/// known vocabulary produce a missing numeric, and the danger score is
/// missing whenever the damage numeric is.
pub fn engineer_accident_features(
    records: &[AccidentRecord],
    weights: DangerWeights,
) -> Vec<ScoredAccident> {
    let categories: Vec<InjuryCategory> = records
        .iter()
        .map(|r| {
            InjuryCategory::from_counts(
                r.total_fatal_injuries,
                r.total_serious_injuries,
                r.total_minor_injuries,
            )
        })
        .collect();

    let injury_raw: Vec<Option<f64>> = categories.iter().map(|c| Some(c.numeric())).collect();
    let damage_raw: Vec<Option<f64>> = records
        .iter()
        .map(|r| damage_numeric(&r.aircraft_damage))
        .collect();

    let injury_scaled = rescale_to_ten(&injury_raw);
    let damage_scaled = rescale_to_ten(&damage_raw);

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let human_injury_numeric = injury_scaled[i].unwrap_or(0.0);
            let aircraft_damage_numeric = damage_scaled[i];
            let danger_score = aircraft_damage_numeric.map(|damage| {
                damage * weights.aircraft_damage + human_injury_numeric * weights.human_injury
            });
            ScoredAccident {
                make_model: make_model_key(&record.make, &record.model),
                human_injury: categories[i],
                human_injury_numeric,
                aircraft_damage_numeric,
                danger_score,
            }
        })
        .collect()
}

/// Keys and buckets the inventory table.
pub fn engineer_inventory_features(
    records: &[InventoryRecord],
    bounds: SizeBounds,
) -> Vec<SizedInventory> {
    records
        .iter()
        .map(|record| SizedInventory {
            make_model: make_model_key(&record.make, &record.model),
            plane_size: bounds.classify(record.number_of_seats),
        })
        .collect()
}

fn damage_numeric(label: &str) -> Option<f64> {
    match label {
        "Unknown" => Some(0.0),
        "Minor" => Some(1.0),
        "Substantial" => Some(2.0),
        "Destroyed" => Some(3.0),
        _ => None,
    }
}

/// Min-max rescales the present values to [0, 10], leaving missing values
/// missing. A set with a single distinct value rescales to 0.0.
fn rescale_to_ten(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let (Some(min), Some(max)) = (
        present.iter().copied().reduce(f64::min),
        present.iter().copied().reduce(f64::max),
    ) else {
        return values.to_vec();
    };
    let span = max - min;

    values
        .iter()
        .map(|v| {
            v.map(|v| {
                if span == 0.0 {
                    0.0
                } else {
                    10.0 * (v - min) / span
                }
            })
        })
        .collect()
}
