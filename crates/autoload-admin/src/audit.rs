// crates/autoload-admin/src/audit.rs
// ============================================================================
// Module: Page Audit Events
// Description: Structured audit trail for admin page decisions.
// Purpose: Record authz outcomes and applied updates as JSON lines.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Audit events cover capability allow/deny, rejected forgery checks, and
//! applied autoload updates. Events carry identifiers and flag values only;
//! option value payloads are never logged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use autoload_core::Autoload;
use autoload_core::OptionId;
use serde::Serialize;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Admin page audit event payload.
#[derive(Debug, Serialize)]
pub struct PageAuditEvent {
    /// Event identifier.
    event: &'static str,
    /// Decision outcome.
    decision: &'static str,
    /// Capability the decision concerned (authz events).
    capability: Option<String>,
    /// Target option id (update events).
    option_id: Option<i64>,
    /// Applied autoload value (update events).
    autoload: Option<&'static str>,
    /// Failure reason (deny events).
    reason: Option<String>,
}

impl PageAuditEvent {
    /// Builds a capability-allow event.
    #[must_use]
    pub fn access_allowed(capability: &str) -> Self {
        Self {
            event: "admin_page_authz",
            decision: "allow",
            capability: Some(capability.to_string()),
            option_id: None,
            autoload: None,
            reason: None,
        }
    }

    /// Builds a capability-deny event.
    #[must_use]
    pub fn access_denied(capability: &str) -> Self {
        Self {
            event: "admin_page_authz",
            decision: "deny",
            capability: Some(capability.to_string()),
            option_id: None,
            autoload: None,
            reason: Some("missing capability".to_string()),
        }
    }

    /// Builds a forgery-rejection event.
    #[must_use]
    pub fn forgery_rejected(reason: &str) -> Self {
        Self {
            event: "admin_page_update",
            decision: "deny",
            capability: None,
            option_id: None,
            autoload: None,
            reason: Some(reason.to_string()),
        }
    }

    /// Builds an applied-update event.
    #[must_use]
    pub const fn update_applied(id: OptionId, autoload: Autoload) -> Self {
        Self {
            event: "admin_page_update",
            decision: "allow",
            capability: None,
            option_id: Some(id.get()),
            autoload: Some(autoload.as_db_str()),
            reason: None,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for admin page decisions.
pub trait AuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &PageAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    #[allow(clippy::print_stderr, reason = "Stderr is this sink's output channel.")]
    fn record(&self, event: &PageAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            eprintln!("{payload}");
        }
    }
}

/// No-op audit sink for tests.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &PageAuditEvent) {}
}
