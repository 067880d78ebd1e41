// crates/autoload-admin/src/lib.rs
// ============================================================================
// Module: Autoload Manager Admin Library
// Description: Admin page controller and its collaborator surfaces.
// Purpose: Expose the page controller, auth, token guard, rendering, audit,
//          and configuration APIs.
// Dependencies: autoload-core, autoload-store-sqlite
// ============================================================================

//! ## Overview
//! This crate hosts the single-page admin workflow: authorize the actor,
//! process an optional autoload update submission guarded by an anti-forgery
//! token, gather fresh statistics and listings, and render the page. Host
//! concerns (routing, identity, process bootstrap) stay outside; they are
//! represented by the injected [`Authorizer`], [`TokenGuard`], and store
//! collaborators.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod auth;
pub mod config;
pub mod forgery;
pub mod form;
pub mod format;
pub mod page;
pub mod render;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSink;
pub use audit::NoopAuditSink;
pub use audit::PageAuditEvent;
pub use audit::StderrAuditSink;
pub use auth::Authorizer;
pub use auth::StaticAuthorizer;
pub use config::AdminConfig;
pub use config::ConfigError;
pub use config::PageSection;
pub use config::SecuritySection;
pub use forgery::ForgeryError;
pub use forgery::KeyedTokenGuard;
pub use forgery::TokenGuard;
pub use forgery::UPDATE_ACTION;
pub use form::PendingUpdate;
pub use page::AdminPage;
pub use page::PageError;
pub use page::PageRequest;
pub use page::PageResponse;
