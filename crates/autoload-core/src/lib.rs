// crates/autoload-core/src/lib.rs
// ============================================================================
// Module: Autoload Manager Core Library
// Description: Public API surface for the Autoload Manager core.
// Purpose: Expose domain types and store interfaces.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Autoload Manager core provides the domain types for host configuration
//! options (id, name, autoload flag, payload size) and the interfaces a
//! storage backend must implement. It is backend-agnostic and integrates
//! through explicit interfaces rather than reaching into ambient database
//! handles.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::Autoload;
pub use self::core::EPHEMERAL_PREFIX;
pub use self::core::OptionId;
pub use self::core::OptionName;
pub use self::core::OptionRow;
pub use self::core::StatsSnapshot;
pub use interfaces::OptionsStore;
pub use interfaces::StatsReader;
pub use interfaces::StoreError;
