// crates/autoload-admin/src/forgery.rs
// ============================================================================
// Module: Anti-Forgery Token Guard
// Description: Per-action token mint and verification.
// Purpose: Prove that a state-changing submission came from a rendered form.
// Dependencies: sha2, subtle, thiserror
// ============================================================================

//! ## Overview
//! Every rendered update form carries a token bound to the update action
//! name. Submissions must present the same token; verification compares a
//! freshly derived value in constant time and fails closed. Tokens are
//! derived with SHA-256 over the configured secret and the action name and
//! are not time-limited; rotation happens by changing the secret.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sha2::Digest;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Action name bound to autoload update submissions.
pub const UPDATE_ACTION: &str = "wam_update_autoload";

/// Maximum accepted token length on the verify path.
const MAX_TOKEN_LENGTH: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Anti-forgery verification errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForgeryError {
    /// Submission carried no token field.
    #[error("forgery token missing")]
    Missing,
    /// Submitted token did not match the expected value.
    #[error("forgery token invalid")]
    Invalid,
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Mint/verify pair for per-action anti-forgery tokens.
pub trait TokenGuard: Send + Sync {
    /// Mints the token embedded in a rendered form for `action`.
    fn mint(&self, action: &str) -> String;

    /// Verifies a submitted token against `action`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeryError`] when the token does not match.
    fn verify(&self, action: &str, token: &str) -> Result<(), ForgeryError>;
}

// ============================================================================
// SECTION: Default Guard
// ============================================================================

/// Token guard deriving tokens from a shared secret.
pub struct KeyedTokenGuard {
    /// Secret mixed into every derived token.
    secret: Vec<u8>,
}

impl KeyedTokenGuard {
    /// Builds a guard over the provided secret.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Derives the expected token for an action.
    fn derive(&self, action: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update([0x1f]);
        hasher.update(action.as_bytes());
        hex_encode(&hasher.finalize())
    }
}

impl TokenGuard for KeyedTokenGuard {
    fn mint(&self, action: &str) -> String {
        self.derive(action)
    }

    fn verify(&self, action: &str, token: &str) -> Result<(), ForgeryError> {
        if token.is_empty() {
            return Err(ForgeryError::Missing);
        }
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(ForgeryError::Invalid);
        }
        let expected = self.derive(action);
        // Length is public (fixed digest size); the content comparison is
        // constant time.
        if expected.len() != token.len() {
            return Err(ForgeryError::Invalid);
        }
        if bool::from(expected.as_bytes().ct_eq(token.as_bytes())) {
            Ok(())
        } else {
            Err(ForgeryError::Invalid)
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Encodes bytes as lowercase hex.
fn hex_encode(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        encoded.push_str(&format!("{byte:02x}"));
    }
    encoded
}
