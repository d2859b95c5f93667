//! Pipeline error types.

use thiserror::Error;

/// Fatal errors raised while cleaning an input table.
///
/// Everything else in the pipeline degrades to a missing value instead of
/// failing: digit-free model codes become empty strings, unmapped
/// manufacturers fall through to the generic rewrite, and empty aggregations
/// yield missing means.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// One or more required columns are absent after header normalization.
    #[error("{table} table is missing required column(s): {}", .missing.join(", "))]
    Schema {
        table: &'static str,
        missing: Vec<String>,
    },

    /// An event date could not be converted to a calendar year.
    #[error("unparsable event date {value:?} in row {row}")]
    Parse { row: usize, value: String },
}
