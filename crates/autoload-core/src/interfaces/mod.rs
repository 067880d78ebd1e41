// crates/autoload-core/src/interfaces/mod.rs
// ============================================================================
// Module: Autoload Manager Interfaces
// Description: Backend-agnostic interfaces for statistics and option storage.
// Purpose: Define the contract surfaces used by the admin page controller.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the admin page integrates with the host options
//! table without embedding backend-specific details. Implementations must
//! exclude ephemeral rows consistently between listings and aggregates, and
//! must return empty/zero results rather than failing on an empty table.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Autoload;
use crate::core::OptionId;
use crate::core::OptionRow;
use crate::core::StatsSnapshot;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Option storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage I/O error.
    #[error("options store io error: {0}")]
    Io(String),
    /// Backend query or update error.
    #[error("options store error: {0}")]
    Store(String),
    /// Invalid stored data.
    #[error("options store invalid data: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Stats Reader
// ============================================================================

/// Read-only aggregate statistics over the options table.
pub trait StatsReader: Send + Sync {
    /// Computes counts and byte totals over all non-ephemeral options.
    ///
    /// An empty table yields an all-zero snapshot, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend query fails.
    fn compute_stats(&self) -> Result<StatsSnapshot, StoreError>;
}

// ============================================================================
// SECTION: Options Store
// ============================================================================

/// Listing and single-row autoload updates over the options table.
pub trait OptionsStore: Send + Sync {
    /// Lists all non-ephemeral options ordered by value size descending.
    ///
    /// Ties are broken arbitrarily. No rows yields an empty vector, never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend query fails.
    fn list_options(&self) -> Result<Vec<OptionRow>, StoreError>;

    /// Sets the autoload flag on exactly the row matching `id`.
    ///
    /// Returns whether the update affected a row; a nonexistent id yields
    /// `Ok(false)` without error and without touching any other row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend update fails.
    fn set_autoload(&self, id: OptionId, autoload: Autoload) -> Result<bool, StoreError>;
}
