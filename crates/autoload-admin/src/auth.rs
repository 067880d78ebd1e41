// crates/autoload-admin/src/auth.rs
// ============================================================================
// Module: Page Authorization
// Description: Capability checks for the admin page.
// Purpose: Provide a fail-closed capability interface with a static policy.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The host platform owns identity; this module only asks whether the current
//! actor holds a named capability. The default implementation is a static
//! grant set resolved at construction time, which is also what tests inject.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Capability check for the current actor.
pub trait Authorizer: Send + Sync {
    /// Returns true when the actor holds the named capability.
    fn has_capability(&self, capability: &str) -> bool;
}

// ============================================================================
// SECTION: Default Policy
// ============================================================================

/// Authorizer over a fixed set of granted capabilities.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizer {
    /// Capabilities granted to the actor.
    granted: BTreeSet<String>,
}

impl StaticAuthorizer {
    /// Builds an authorizer from granted capability names.
    #[must_use]
    pub fn new(granted: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns an authorizer granting nothing.
    #[must_use]
    pub fn deny_all() -> Self {
        Self::default()
    }
}

impl Authorizer for StaticAuthorizer {
    fn has_capability(&self, capability: &str) -> bool {
        self.granted.contains(capability)
    }
}
