//! End-to-end pipeline orchestration.

use crate::analyzers::aggregate::aggregate;
use crate::analyzers::types::{AggregateRow, RaterConfig};
use crate::clean::{clean_accidents, clean_inventory};
use crate::error::PipelineError;
use crate::features::{engineer_accident_features, engineer_inventory_features};
use crate::parser::RawTable;
use tracing::info;

/// Runs the full clean → feature → aggregate pipeline over the two raw
/// tables. Each stage consumes the previous stage's complete output; the raw
/// inputs are never mutated.
///
/// # Errors
///
/// Propagates [`PipelineError`] from the cleaning stage; later stages are
/// total.
pub fn run_pipeline(
    raw_accidents: &RawTable,
    raw_inventory: &RawTable,
    config: &RaterConfig,
) -> Result<Vec<AggregateRow>, PipelineError> {
    let accidents = clean_accidents(raw_accidents)?;
    info!(
        raw = raw_accidents.len(),
        cleaned = accidents.len(),
        "Accident records cleaned"
    );

    let inventory = clean_inventory(raw_inventory)?;
    info!(
        raw = raw_inventory.len(),
        cleaned = inventory.len(),
        "Inventory records cleaned"
    );

    let scored = engineer_accident_features(&accidents, config.weights);
    let sized = engineer_inventory_features(&inventory, config.size_bounds);

    let rows = aggregate(&scored, &sized, config.top_n);
    info!(rows = rows.len(), top_n = config.top_n, "Aggregate table built");

    Ok(rows)
}
