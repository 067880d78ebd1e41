// crates/autoload-core/src/core/options.rs
// ============================================================================
// Module: Option Types
// Description: Typed identity, name, and autoload flag for host options.
// Purpose: Provide strongly typed option rows with stable storage forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the typed view of a host options-table row. The
//! autoload flag is a two-value enumeration at the API boundary; the literal
//! `"yes"` / `"no"` strings the host table stores exist only in
//! [`Autoload::as_db_str`] and [`Autoload::parse`]. Option identifiers are
//! strictly positive; zero and negative raw values are rejected at
//! construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name prefix marking ephemeral cache-like rows.
///
/// Rows whose name starts with this prefix never appear in listings and never
/// contribute to aggregate statistics.
pub const EPHEMERAL_PREFIX: &str = "_transient";

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Primary-key identifier of an option row.
///
/// # Invariants
/// - The wrapped value is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(i64);

impl OptionId {
    /// Creates an option identifier from a raw integer.
    ///
    /// Returns `None` when the value is zero or negative.
    #[must_use]
    pub const fn from_raw(id: i64) -> Option<Self> {
        if id > 0 { Some(Self(id)) } else { None }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique option name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionName(String);

impl OptionName {
    /// Creates a new option name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the name carries the ephemeral prefix.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.0.starts_with(EPHEMERAL_PREFIX)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for OptionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OptionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Autoload Flag
// ============================================================================

/// Per-option flag controlling eager loading by the host platform.
///
/// # Invariants
/// - Storage and form forms are exactly the literals `"yes"` and `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autoload {
    /// Option is loaded on every host request.
    Yes,
    /// Option is loaded on demand only.
    No,
}

impl Autoload {
    /// Parses the literal storage string.
    ///
    /// Accepts exactly `"yes"` or `"no"`; anything else is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    /// Returns the literal string stored in the options table.
    #[must_use]
    pub const fn as_db_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Returns the opposite flag value.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    /// Returns true when the flag is [`Autoload::Yes`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Autoload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

// ============================================================================
// SECTION: Option Row
// ============================================================================

/// One non-ephemeral options-table row as listed by the store.
///
/// The option value payload is never materialized; only its byte length is
/// carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRow {
    /// Primary-key identifier.
    pub id: OptionId,
    /// Unique option name.
    pub name: OptionName,
    /// Current autoload flag.
    pub autoload: Autoload,
    /// Byte length of the stored option value.
    pub size: u64,
}
