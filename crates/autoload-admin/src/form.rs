// crates/autoload-admin/src/form.rs
// ============================================================================
// Module: Update Form Parsing
// Description: Validation of submitted autoload update fields.
// Purpose: Turn raw form pairs into a typed pending update, or nothing.
// Dependencies: autoload-core
// ============================================================================

//! ## Overview
//! Submissions are lenient-in, strict-out: the marker field may carry any
//! value, `option_id` must parse as a strictly positive integer, and
//! `autoload` must be exactly one of the two storage literals. Any violation
//! yields no pending update; the page still renders, just without a success
//! notice. Token verification is the page controller's job and happens before
//! parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use autoload_core::Autoload;
use autoload_core::OptionId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Marker field whose presence triggers update processing.
pub const MARKER_FIELD: &str = "update_autoload";
/// Field carrying the target option id.
pub const OPTION_ID_FIELD: &str = "option_id";
/// Field carrying the requested autoload value.
pub const AUTOLOAD_FIELD: &str = "autoload";
/// Field carrying the anti-forgery token.
pub const TOKEN_FIELD: &str = "wam_token";

// ============================================================================
// SECTION: Types
// ============================================================================

/// A fully validated autoload update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpdate {
    /// Target option row.
    pub id: OptionId,
    /// Requested autoload value.
    pub autoload: Autoload,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Returns the first value for a named field.
#[must_use]
pub fn field_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

/// Returns true when the submission carries the update marker.
#[must_use]
pub fn has_update_marker(fields: &[(String, String)]) -> bool {
    fields.iter().any(|(key, _)| key == MARKER_FIELD)
}

/// Parses a pending update from submitted fields.
///
/// Returns `None` when either field is missing or malformed; the caller
/// treats that as a validation no-op rather than an error.
#[must_use]
pub fn parse_update(fields: &[(String, String)]) -> Option<PendingUpdate> {
    let raw_id = field_value(fields, OPTION_ID_FIELD)?;
    let id = raw_id.trim().parse::<i64>().ok().and_then(OptionId::from_raw)?;
    let autoload = Autoload::parse(field_value(fields, AUTOLOAD_FIELD)?)?;
    Some(PendingUpdate {
        id,
        autoload,
    })
}
