// crates/autoload-core/src/core/mod.rs
// ============================================================================
// Module: Autoload Manager Core Types
// Description: Canonical option and statistics structures.
// Purpose: Provide stable, serializable types for option rows and aggregates.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types model a single host configuration option (identity, name,
//! autoload flag, payload size) and the aggregate statistics snapshot derived
//! from the options table. These types are the canonical source of truth for
//! any derived rendering or storage surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod options;
pub mod stats;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use options::Autoload;
pub use options::EPHEMERAL_PREFIX;
pub use options::OptionId;
pub use options::OptionName;
pub use options::OptionRow;
pub use stats::StatsSnapshot;
