//! Aggregation and risk-metric computation.
//!
//! This module ranks the most common make/model entries per size bucket,
//! joins accident counts and mean severity scores onto them, and computes
//! per-plane accident rates.

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;
