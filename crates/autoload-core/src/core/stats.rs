// crates/autoload-core/src/core/stats.rs
// ============================================================================
// Module: Statistics Snapshot
// Description: Aggregate counts and byte totals over the options table.
// Purpose: Provide a zero-defaulting, never-null aggregate view.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`StatsSnapshot`] is recomputed fresh on every request and is never
//! persisted. All fields default to zero for an empty table; backends clamp
//! NULL aggregates to zero before constructing a snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Aggregate statistics over all non-ephemeral options.
///
/// # Invariants
/// - `autoload_count <= total_count`
/// - `autoload_size <= total_size`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Count of all non-ephemeral options.
    pub total_count: u64,
    /// Count of non-ephemeral options with autoload enabled.
    pub autoload_count: u64,
    /// Sum of value byte lengths over all non-ephemeral options.
    pub total_size: u64,
    /// Sum of value byte lengths over autoload-enabled options.
    pub autoload_size: u64,
}

impl StatsSnapshot {
    /// Returns the autoload share of total bytes as a percentage.
    ///
    /// Defined as `0.0` when `total_size` is zero.
    #[must_use]
    pub fn usage_percent(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Byte totals far below 2^52 in practice; display-only value."
        )]
        let ratio = self.autoload_size as f64 / self.total_size as f64;
        ratio * 100.0
    }
}
