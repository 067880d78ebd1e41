// crates/autoload-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Options Store
// Description: Aggregate statistics and autoload updates over SQLite.
// Purpose: Implement the core store interfaces against the host options table.
// Dependencies: autoload-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! This module implements [`StatsReader`] and [`OptionsStore`] over a single
//! `SQLite` connection guarded by a mutex. Ephemeral rows (name prefix
//! `_transient`) are excluded from every listing and aggregate via an escaped
//! LIKE pattern, so the underscore in the prefix matches literally rather
//! than acting as a single-character wildcard. Only the autoload column is
//! ever written; rows are created and deleted by the host platform.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Mutex;

use autoload_core::Autoload;
use autoload_core::EPHEMERAL_PREFIX;
use autoload_core::OptionId;
use autoload_core::OptionName;
use autoload_core::OptionRow;
use autoload_core::OptionsStore;
use autoload_core::StatsReader;
use autoload_core::StatsSnapshot;
use autoload_core::StoreError;
use rusqlite::Connection;
use rusqlite::params;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Default options table name (host installs usually prefix it).
const DEFAULT_TABLE_NAME: &str = "options";
/// Maximum accepted table name length.
const MAX_TABLE_NAME_LENGTH: usize = 64;

// ============================================================================
// SECTION: Config
// ============================================================================

/// `SQLite` journal mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteJournalMode {
    /// WAL journal mode (recommended).
    #[default]
    Wal,
    /// Delete journal mode (legacy).
    Delete,
}

impl SqliteJournalMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
        }
    }
}

/// `SQLite` sync mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteSyncMode {
    /// Full synchronous mode (safest).
    #[default]
    Full,
    /// Normal synchronous mode (balanced).
    Normal,
}

impl SqliteSyncMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
        }
    }
}

/// Configuration for the `SQLite` options store.
///
/// # Invariants
/// - `path` must resolve to a file path (not a directory).
/// - `table` contains only `[a-z0-9_]` and is at most 64 bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteOptionsStoreConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// `SQLite` journal mode.
    #[serde(default)]
    pub journal_mode: SqliteJournalMode,
    /// `SQLite` sync mode.
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
    /// Options table name. Host installs prefix it, e.g. `wp_options`.
    #[serde(default = "default_table_name")]
    pub table: String,
}

/// Returns the default busy timeout for `SQLite` connections.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

/// Returns the default options table name.
fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

/// Validates the configured table name before SQL interpolation.
fn validate_table_name(table: &str) -> Result<(), SqliteOptionsStoreError> {
    if table.is_empty() || table.len() > MAX_TABLE_NAME_LENGTH {
        return Err(SqliteOptionsStoreError::Invalid(format!(
            "table name length out of range: {} (max {MAX_TABLE_NAME_LENGTH})",
            table.len()
        )));
    }
    if !table.bytes().all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_')
    {
        return Err(SqliteOptionsStoreError::Invalid(
            "table name must contain only [a-z0-9_]".to_string(),
        ));
    }
    Ok(())
}

/// Validates the configured database path.
fn validate_store_path(path: &PathBuf) -> Result<(), SqliteOptionsStoreError> {
    if path.as_os_str().is_empty() {
        return Err(SqliteOptionsStoreError::Invalid("database path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(SqliteOptionsStoreError::Invalid(format!(
            "database path is a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` options store errors.
///
/// # Invariants
/// - Error messages never embed option value payloads.
#[derive(Debug, Error)]
pub enum SqliteOptionsStoreError {
    /// Store I/O error.
    #[error("sqlite options store io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite options store db error: {0}")]
    Db(String),
    /// Invalid configuration or stored data.
    #[error("sqlite options store invalid data: {0}")]
    Invalid(String),
}

impl From<SqliteOptionsStoreError> for StoreError {
    fn from(error: SqliteOptionsStoreError) -> Self {
        match error {
            SqliteOptionsStoreError::Io(message) => Self::Io(message),
            SqliteOptionsStoreError::Db(message) => Self::Store(message),
            SqliteOptionsStoreError::Invalid(message) => Self::Invalid(message),
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed options store.
///
/// # Invariants
/// - Connection access is serialized through a mutex.
/// - Listings and aggregates apply the same ephemeral-prefix exclusion.
pub struct SqliteOptionsStore {
    /// Shared connection guarded by a mutex.
    connection: Mutex<Connection>,
    /// Validated options table name.
    table: String,
    /// Escaped LIKE pattern excluding ephemeral rows.
    ephemeral_pattern: String,
}

impl SqliteOptionsStore {
    /// Opens a `SQLite` options store.
    ///
    /// The options table is created idempotently so a fresh database is
    /// usable; on host installations the table already exists and the DDL is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteOptionsStoreError`] when the configuration is invalid
    /// or the database cannot be opened or initialized.
    pub fn new(config: SqliteOptionsStoreConfig) -> Result<Self, SqliteOptionsStoreError> {
        validate_store_path(&config.path)?;
        validate_table_name(&config.table)?;
        let conn = Connection::open(&config.path)
            .map_err(|err| SqliteOptionsStoreError::Io(err.to_string()))?;
        conn.busy_timeout(std::time::Duration::from_millis(config.busy_timeout_ms))
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        conn.execute_batch(&format!(
            "PRAGMA journal_mode={journal};PRAGMA synchronous={sync};CREATE TABLE IF NOT EXISTS \
             {table} (option_id INTEGER PRIMARY KEY AUTOINCREMENT,option_name TEXT NOT NULL \
             UNIQUE,option_value TEXT NOT NULL DEFAULT '',autoload TEXT NOT NULL DEFAULT 'yes');",
            journal = config.journal_mode.pragma_value(),
            sync = config.sync_mode.pragma_value(),
            table = config.table,
        ))
        .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        Ok(Self {
            connection: Mutex::new(conn),
            table: config.table,
            ephemeral_pattern: like_prefix_pattern(EPHEMERAL_PREFIX),
        })
    }

    /// Inserts an option row and returns its identifier.
    ///
    /// Row lifecycle belongs to the host platform in production; this helper
    /// exists for tests and local tooling that need to seed a database.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteOptionsStoreError`] when the insert fails or the
    /// assigned rowid is not positive.
    pub fn insert_option(
        &self,
        name: &OptionName,
        value: &str,
        autoload: Autoload,
    ) -> Result<OptionId, SqliteOptionsStoreError> {
        let conn = self.lock_connection()?;
        conn.execute(
            &format!(
                "INSERT INTO {table} (option_name, option_value, autoload) VALUES (?1, ?2, ?3)",
                table = self.table
            ),
            params![name.as_str(), value, autoload.as_db_str()],
        )
        .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        let id = conn.last_insert_rowid();
        OptionId::from_raw(id)
            .ok_or_else(|| SqliteOptionsStoreError::Invalid(format!("non-positive rowid: {id}")))
    }

    /// Acquires the connection guard.
    fn lock_connection(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Connection>, SqliteOptionsStoreError> {
        self.connection
            .lock()
            .map_err(|_| SqliteOptionsStoreError::Db("options store mutex poisoned".to_string()))
    }

    /// Computes aggregate statistics over non-ephemeral rows.
    fn query_stats(&self) -> Result<StatsSnapshot, SqliteOptionsStoreError> {
        let conn = self.lock_connection()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT COUNT(*), COALESCE(SUM(LENGTH(CAST(option_value AS BLOB))), 0), \
                 COUNT(CASE WHEN autoload = 'yes' THEN 1 END), COALESCE(SUM(CASE WHEN autoload = \
                 'yes' THEN LENGTH(CAST(option_value AS BLOB)) ELSE 0 END), 0) FROM {table} WHERE \
                 option_name NOT LIKE ?1 ESCAPE '\\'",
                table = self.table
            ))
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        let (total_count, total_size, autoload_count, autoload_size) = stmt
            .query_row(params![self.ephemeral_pattern], |row| {
                let total_count: i64 = row.get(0)?;
                let total_size: i64 = row.get(1)?;
                let autoload_count: i64 = row.get(2)?;
                let autoload_size: i64 = row.get(3)?;
                Ok((total_count, total_size, autoload_count, autoload_size))
            })
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        Ok(StatsSnapshot {
            total_count: clamp_non_negative(total_count),
            autoload_count: clamp_non_negative(autoload_count),
            total_size: clamp_non_negative(total_size),
            autoload_size: clamp_non_negative(autoload_size),
        })
    }

    /// Lists non-ephemeral rows ordered by value size descending.
    fn query_options(&self) -> Result<Vec<OptionRow>, SqliteOptionsStoreError> {
        let conn = self.lock_connection()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT option_id, option_name, autoload, LENGTH(CAST(option_value AS BLOB)) \
                 FROM {table} WHERE option_name NOT LIKE ?1 ESCAPE '\\' ORDER BY \
                 LENGTH(CAST(option_value AS BLOB)) DESC",
                table = self.table
            ))
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        let rows = stmt
            .query_map(params![self.ephemeral_pattern], |row| {
                let id: i64 = row.get(0)?;
                let name: String = row.get(1)?;
                let autoload: String = row.get(2)?;
                let size: i64 = row.get(3)?;
                Ok((id, name, autoload, size))
            })
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        let mut results = Vec::new();
        for row in rows {
            let (raw_id, name, raw_autoload, size) =
                row.map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
            let id = OptionId::from_raw(raw_id).ok_or_else(|| {
                SqliteOptionsStoreError::Invalid(format!("non-positive option id: {raw_id}"))
            })?;
            let autoload = Autoload::parse(&raw_autoload).ok_or_else(|| {
                SqliteOptionsStoreError::Invalid(format!(
                    "unexpected autoload value for option {id}: {raw_autoload}"
                ))
            })?;
            results.push(OptionRow {
                id,
                name: OptionName::new(name),
                autoload,
                size: clamp_non_negative(size),
            });
        }
        Ok(results)
    }

    /// Applies a single-row autoload update by primary key.
    fn apply_autoload(
        &self,
        id: OptionId,
        autoload: Autoload,
    ) -> Result<bool, SqliteOptionsStoreError> {
        let conn = self.lock_connection()?;
        let affected = conn
            .execute(
                &format!(
                    "UPDATE {table} SET autoload = ?1 WHERE option_id = ?2",
                    table = self.table
                ),
                params![autoload.as_db_str(), id.get()],
            )
            .map_err(|err| SqliteOptionsStoreError::Db(err.to_string()))?;
        Ok(affected > 0)
    }
}

impl StatsReader for SqliteOptionsStore {
    fn compute_stats(&self) -> Result<StatsSnapshot, StoreError> {
        self.query_stats().map_err(StoreError::from)
    }
}

impl OptionsStore for SqliteOptionsStore {
    fn list_options(&self) -> Result<Vec<OptionRow>, StoreError> {
        self.query_options().map_err(StoreError::from)
    }

    fn set_autoload(&self, id: OptionId, autoload: Autoload) -> Result<bool, StoreError> {
        self.apply_autoload(id, autoload).map_err(StoreError::from)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Clamps a backend aggregate to zero when negative.
fn clamp_non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// Builds an escaped LIKE pattern matching names starting with `prefix`.
///
/// LIKE metacharacters in the prefix (`_`, `%`, `\`) are escaped so they
/// match literally under `ESCAPE '\'`.
fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '_' | '%' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
