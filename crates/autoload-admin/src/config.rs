// crates/autoload-admin/src/config.rs
// ============================================================================
// Module: Admin Configuration
// Description: Configuration loading and validation for the admin page.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: autoload-store-sqlite, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Missing
//! or invalid configuration fails closed: there are no permissive fallbacks
//! for the token secret, and the capability and slug values are validated
//! against tight character sets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use autoload_store_sqlite::SqliteOptionsStoreConfig;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "autoload-manager.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "AUTOLOAD_MANAGER_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;
/// Maximum capability name length.
pub(crate) const MAX_CAPABILITY_LENGTH: usize = 128;
/// Maximum menu slug length.
pub(crate) const MAX_MENU_SLUG_LENGTH: usize = 64;
/// Maximum page title length.
pub(crate) const MAX_PAGE_TITLE_LENGTH: usize = 128;
/// Minimum token secret length.
pub(crate) const MIN_TOKEN_SECRET_LENGTH: usize = 16;
/// Maximum token secret length.
pub(crate) const MAX_TOKEN_SECRET_LENGTH: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Configuration file exceeded the size limit.
    #[error("config file too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: u64,
        /// Actual file size in bytes.
        actual_bytes: u64,
    },
    /// Configuration failed validation.
    #[error("config invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Admin page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Page identity and capability settings.
    #[serde(default)]
    pub page: PageSection,
    /// Anti-forgery secret settings.
    pub security: SecuritySection,
    /// Options store settings.
    pub store: SqliteOptionsStoreConfig,
}

/// Page identity and capability settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    /// Capability required to view the page or apply updates.
    #[serde(default = "default_required_capability")]
    pub required_capability: String,
    /// Menu slug registered with the host.
    #[serde(default = "default_menu_slug")]
    pub menu_slug: String,
    /// Page heading shown to the actor.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            required_capability: default_required_capability(),
            menu_slug: default_menu_slug(),
            page_title: default_page_title(),
        }
    }
}

/// Anti-forgery secret settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySection {
    /// Shared secret for token derivation. Rotating it invalidates all
    /// outstanding form tokens.
    pub token_secret: String,
}

/// Returns the default required capability.
fn default_required_capability() -> String {
    "manage_options".to_string()
}

/// Returns the default menu slug.
fn default_menu_slug() -> String {
    "autoload-manager".to_string()
}

/// Returns the default page title.
fn default_page_title() -> String {
    "Autoload Manager".to_string()
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl AdminConfig {
    /// Loads and validates configuration.
    ///
    /// Resolution order: explicit `path`, then the `AUTOLOAD_MANAGER_CONFIG`
    /// environment variable, then `autoload-manager.toml` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the size
    /// limit, fails to parse, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_config_path(path);
        let metadata =
            fs::metadata(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                max_bytes: MAX_CONFIG_FILE_SIZE,
                actual_bytes: metadata.len(),
            });
        }
        let contents =
            fs::read_to_string(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        let config: Self =
            toml::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates field-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_capability(&self.page.required_capability)?;
        validate_menu_slug(&self.page.menu_slug)?;
        if self.page.page_title.is_empty() || self.page.page_title.len() > MAX_PAGE_TITLE_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "page_title length out of range (max {MAX_PAGE_TITLE_LENGTH})"
            )));
        }
        let secret_len = self.security.token_secret.len();
        if !(MIN_TOKEN_SECRET_LENGTH..=MAX_TOKEN_SECRET_LENGTH).contains(&secret_len) {
            return Err(ConfigError::Invalid(format!(
                "token_secret length out of range: {secret_len} (expected \
                 {MIN_TOKEN_SECRET_LENGTH}..={MAX_TOKEN_SECRET_LENGTH})"
            )));
        }
        Ok(())
    }
}

/// Resolves the configuration path.
fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}

/// Validates the required capability name.
fn validate_capability(capability: &str) -> Result<(), ConfigError> {
    if capability.is_empty() || capability.len() > MAX_CAPABILITY_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "required_capability length out of range (max {MAX_CAPABILITY_LENGTH})"
        )));
    }
    if !capability.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'_') {
        return Err(ConfigError::Invalid(
            "required_capability must contain only [A-Za-z0-9_]".to_string(),
        ));
    }
    Ok(())
}

/// Validates the menu slug.
fn validate_menu_slug(slug: &str) -> Result<(), ConfigError> {
    if slug.is_empty() || slug.len() > MAX_MENU_SLUG_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "menu_slug length out of range (max {MAX_MENU_SLUG_LENGTH})"
        )));
    }
    if !slug.bytes().all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-')
    {
        return Err(ConfigError::Invalid("menu_slug must contain only [a-z0-9-]".to_string()));
    }
    Ok(())
}
