// crates/autoload-store-sqlite/src/lib.rs
// ============================================================================
// Module: SQLite Options Store
// Description: StatsReader and OptionsStore backends using SQLite.
// Purpose: Provide persistence against the host options table.
// Dependencies: autoload-core, rusqlite
// ============================================================================

//! ## Overview
//! This crate provides a SQLite-backed implementation of the core
//! [`StatsReader`](autoload_core::StatsReader) and
//! [`OptionsStore`](autoload_core::OptionsStore) interfaces over the host's
//! existing options table. Only the autoload column is ever written; row
//! lifecycle stays with the host platform.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteJournalMode;
pub use store::SqliteOptionsStore;
pub use store::SqliteOptionsStoreConfig;
pub use store::SqliteOptionsStoreError;
pub use store::SqliteSyncMode;
