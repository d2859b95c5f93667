//! Output formatting and persistence for pipeline tables.
//!
//! Supports pretty-printing, JSON serialization, and CSV writing. Missing
//! values serialize as empty CSV fields, keeping "no accidents recorded"
//! distinct from zero.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Logs rows using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(rows: &[T]) {
    debug!("{:#?}", rows);
}

/// Logs rows as pretty-printed JSON.
pub fn print_json<T: Serialize>(rows: &[T]) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// Writes serializable rows to a CSV file with a header, overwriting any
/// existing file.
pub fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    debug!(path = %path.as_ref().display(), rows = rows.len(), "Writing CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
