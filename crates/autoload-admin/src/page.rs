// crates/autoload-admin/src/page.rs
// ============================================================================
// Module: Admin Page Controller
// Description: Linear request workflow for the autoload admin page.
// Purpose: Authorize, process submissions, gather data, and render.
// Dependencies: autoload-core, crate::{auth, forgery, form, render, audit}
// ============================================================================

//! ## Overview
//! One request runs a fixed sequence: capability check, optional update
//! submission guarded by the anti-forgery token, fresh stats and listing
//! queries, then rendering. Authorization failure terminates the request
//! before any query runs. A failed token check aborts before any write.
//! Malformed update fields are a silent no-op; the page still renders,
//! minus the success notice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use autoload_core::OptionsStore;
use autoload_core::StatsReader;
use autoload_core::StoreError;
use thiserror::Error;

use crate::audit::AuditSink;
use crate::audit::PageAuditEvent;
use crate::auth::Authorizer;
use crate::config::PageSection;
use crate::forgery::ForgeryError;
use crate::forgery::TokenGuard;
use crate::forgery::UPDATE_ACTION;
use crate::form;
use crate::form::TOKEN_FIELD;
use crate::render;

// ============================================================================
// SECTION: Request / Response
// ============================================================================

/// One inbound page request.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Submitted form fields, when the request carries a POST body.
    pub form: Option<Vec<(String, String)>>,
}

impl PageRequest {
    /// Builds a plain render request with no submission.
    #[must_use]
    pub const fn render_only() -> Self {
        Self {
            form: None,
        }
    }

    /// Builds a request carrying submitted form fields.
    #[must_use]
    pub fn with_form(fields: Vec<(&str, &str)>) -> Self {
        Self {
            form: Some(
                fields.into_iter().map(|(key, value)| (key.to_string(), value.to_string())).collect(),
            ),
        }
    }
}

/// Rendered page response.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Full page markup.
    pub html: String,
    /// Whether this request applied an autoload update.
    pub updated: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Admin page request errors.
#[derive(Debug, Error)]
pub enum PageError {
    /// Actor lacks the required capability.
    #[error("access denied: missing capability {capability}")]
    AccessDenied {
        /// Capability the page requires.
        capability: String,
    },
    /// Anti-forgery check failed on a submitted update.
    #[error("forgery check failed: {0}")]
    Forgery(#[from] ForgeryError),
    /// Storage failure on read or write.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

// ============================================================================
// SECTION: Controller
// ============================================================================

/// Admin page controller with injected collaborators.
pub struct AdminPage {
    /// Page configuration (capability, title).
    page: PageSection,
    /// Capability check for the current actor.
    authorizer: Arc<dyn Authorizer>,
    /// Anti-forgery token mint/verify pair.
    token_guard: Arc<dyn TokenGuard>,
    /// Aggregate statistics reader.
    stats: Arc<dyn StatsReader>,
    /// Option listing and update store.
    options: Arc<dyn OptionsStore>,
    /// Audit sink for page decisions.
    audit: Arc<dyn AuditSink>,
}

impl AdminPage {
    /// Builds the controller from its collaborators.
    #[must_use]
    pub fn new(
        page: PageSection,
        authorizer: Arc<dyn Authorizer>,
        token_guard: Arc<dyn TokenGuard>,
        stats: Arc<dyn StatsReader>,
        options: Arc<dyn OptionsStore>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            page,
            authorizer,
            token_guard,
            stats,
            options,
            audit,
        }
    }

    /// Handles one page request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::AccessDenied`] when the actor lacks the required
    /// capability (nothing downstream runs), [`PageError::Forgery`] when a
    /// submitted update fails the token check (no partial update), and
    /// [`PageError::Storage`] when a read or write fails.
    pub fn handle(&self, request: &PageRequest) -> Result<PageResponse, PageError> {
        let capability = self.page.required_capability.as_str();
        if !self.authorizer.has_capability(capability) {
            self.audit.record(&PageAuditEvent::access_denied(capability));
            return Err(PageError::AccessDenied {
                capability: capability.to_string(),
            });
        }
        self.audit.record(&PageAuditEvent::access_allowed(capability));

        let updated = self.process_submission(request)?;

        let stats = self.stats.compute_stats()?;
        let options = self.options.list_options()?;
        let html = render::render_page(
            &self.page.page_title,
            &stats,
            &options,
            updated,
            &*self.token_guard,
        );
        Ok(PageResponse {
            html,
            updated,
        })
    }

    /// Processes an optional update submission.
    ///
    /// Returns whether an update was applied. Token failure aborts; malformed
    /// fields and no-op updates return `false`.
    fn process_submission(&self, request: &PageRequest) -> Result<bool, PageError> {
        let Some(fields) = request.form.as_deref() else {
            return Ok(false);
        };
        if !form::has_update_marker(fields) {
            return Ok(false);
        }

        let token = form::field_value(fields, TOKEN_FIELD).unwrap_or("");
        if let Err(error) = self.token_guard.verify(UPDATE_ACTION, token) {
            self.audit.record(&PageAuditEvent::forgery_rejected(&error.to_string()));
            return Err(PageError::Forgery(error));
        }

        let Some(update) = form::parse_update(fields) else {
            return Ok(false);
        };
        let changed = self.options.set_autoload(update.id, update.autoload)?;
        if changed {
            self.audit.record(&PageAuditEvent::update_applied(update.id, update.autoload));
        }
        Ok(changed)
    }
}
