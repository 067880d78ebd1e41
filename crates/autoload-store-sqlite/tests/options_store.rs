// crates/autoload-store-sqlite/tests/options_store.rs
// ============================================================================
// Module: SQLite Options Store Unit Tests
// Description: Targeted tests for stats aggregation, listing order, and
//              single-row autoload updates.
// Purpose: Validate ephemeral exclusion, zero-clamping, ordering, and
//          update semantics against a real SQLite database.
// ============================================================================

//! ## Overview
//! Unit-level tests for options store invariants:
//! - Empty table yields an all-zero snapshot, never an error
//! - Aggregates and listings exclude the literal ephemeral prefix only
//! - Listing order is value size descending
//! - Updates affect exactly one row and report nonexistent ids as `false`

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use autoload_core::Autoload;
use autoload_core::OptionId;
use autoload_core::OptionName;
use autoload_core::OptionsStore;
use autoload_core::StatsReader;
use autoload_store_sqlite::SqliteJournalMode;
use autoload_store_sqlite::SqliteOptionsStore;
use autoload_store_sqlite::SqliteOptionsStoreConfig;
use autoload_store_sqlite::SqliteSyncMode;
use proptest::prelude::*;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn store_in(dir: &TempDir) -> SqliteOptionsStore {
    SqliteOptionsStore::new(SqliteOptionsStoreConfig {
        path: dir.path().join("options.db"),
        busy_timeout_ms: 1_000,
        journal_mode: SqliteJournalMode::Wal,
        sync_mode: SqliteSyncMode::Full,
        table: "options".to_string(),
    })
    .expect("store init")
}

fn seed(store: &SqliteOptionsStore, name: &str, size: usize, autoload: Autoload) -> OptionId {
    store
        .insert_option(&OptionName::new(name), &"x".repeat(size), autoload)
        .expect("seed option")
}

// ============================================================================
// SECTION: Stats
// ============================================================================

#[test]
fn empty_table_yields_all_zero_snapshot() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let stats = store.compute_stats().expect("stats");
    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.autoload_count, 0);
    assert_eq!(stats.total_size, 0);
    assert_eq!(stats.autoload_size, 0);
}

#[test]
fn stats_aggregate_counts_and_sizes() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    seed(&store, "widget_settings", 100, Autoload::Yes);
    seed(&store, "theme_mods", 50, Autoload::No);
    seed(&store, "sidebar_layout", 10, Autoload::Yes);

    let stats = store.compute_stats().expect("stats");
    assert_eq!(stats.total_count, 3);
    assert_eq!(stats.autoload_count, 2);
    assert_eq!(stats.total_size, 160);
    assert_eq!(stats.autoload_size, 110);
}

#[test]
fn sizes_measure_bytes_not_characters() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    // 5 characters, 6 bytes.
    store
        .insert_option(&OptionName::new("greeting"), "héllo", Autoload::Yes)
        .expect("seed option");

    let stats = store.compute_stats().expect("stats");
    assert_eq!(stats.total_size, 6);
    assert_eq!(stats.autoload_size, 6);

    let options = store.list_options().expect("list");
    assert_eq!(options[0].size, 6);
}

#[test]
fn listing_orders_by_byte_length_for_multibyte_values() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    // "ééé" is 3 characters but 6 bytes; it must outrank a 5-byte ASCII value.
    seed(&store, "ascii_value", 5, Autoload::Yes);
    store
        .insert_option(&OptionName::new("accented_value"), "ééé", Autoload::Yes)
        .expect("seed option");

    let options = store.list_options().expect("list");
    assert_eq!(options[0].name.as_str(), "accented_value");
    assert_eq!(options[0].size, 6);
    assert_eq!(options[1].size, 5);
}

#[test]
fn stats_invariants_hold() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    seed(&store, "alpha", 30, Autoload::Yes);
    seed(&store, "beta", 70, Autoload::No);

    let stats = store.compute_stats().expect("stats");
    assert!(stats.autoload_count <= stats.total_count);
    assert!(stats.autoload_size <= stats.total_size);
}

// ============================================================================
// SECTION: Ephemeral Exclusion
// ============================================================================

#[test]
fn ephemeral_rows_are_excluded_everywhere() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    seed(&store, "siteurl", 40, Autoload::Yes);
    seed(&store, "_transient_feed_cache", 900, Autoload::Yes);
    seed(&store, "_transient_timeout_feed", 900, Autoload::No);

    let stats = store.compute_stats().expect("stats");
    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.total_size, 40);
    assert_eq!(stats.autoload_size, 40);

    let options = store.list_options().expect("list");
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].name.as_str(), "siteurl");
}

#[test]
fn like_underscore_is_matched_literally() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    // Would be swallowed by an unescaped LIKE '_transient%' where the leading
    // underscore acts as a single-character wildcard.
    seed(&store, "xtransient_cache", 25, Autoload::Yes);
    seed(&store, "_transient_real", 25, Autoload::Yes);

    let options = store.list_options().expect("list");
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].name.as_str(), "xtransient_cache");

    let stats = store.compute_stats().expect("stats");
    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.total_size, 25);
}

// ============================================================================
// SECTION: Listing Order
// ============================================================================

#[test]
fn listing_is_ordered_by_size_descending() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    seed(&store, "small", 10, Autoload::Yes);
    seed(&store, "large", 100, Autoload::Yes);
    seed(&store, "medium", 50, Autoload::No);

    let options = store.list_options().expect("list");
    let sizes: Vec<u64> = options.iter().map(|row| row.size).collect();
    assert_eq!(sizes, vec![100, 50, 10]);
}

#[test]
fn empty_table_lists_no_rows() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    assert!(store.list_options().expect("list").is_empty());
}

// ============================================================================
// SECTION: Updates
// ============================================================================

#[test]
fn toggle_round_trip_leaves_final_state() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let id = seed(&store, "theme_mods", 50, Autoload::Yes);

    assert!(store.set_autoload(id, Autoload::No).expect("first update"));
    assert!(store.set_autoload(id, Autoload::No).expect("repeat update"));

    let options = store.list_options().expect("list");
    let row = options.iter().find(|row| row.id == id).expect("row present");
    assert_eq!(row.autoload, Autoload::No);
}

#[test]
fn nonexistent_id_reports_false_without_side_effects() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let id = seed(&store, "siteurl", 40, Autoload::Yes);

    let missing = OptionId::from_raw(9_999).expect("positive id");
    assert!(!store.set_autoload(missing, Autoload::No).expect("update"));

    let options = store.list_options().expect("list");
    let row = options.iter().find(|row| row.id == id).expect("row present");
    assert_eq!(row.autoload, Autoload::Yes);
}

#[test]
fn update_touches_exactly_one_row() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let first = seed(&store, "alpha", 30, Autoload::Yes);
    let second = seed(&store, "beta", 30, Autoload::Yes);

    assert!(store.set_autoload(first, Autoload::No).expect("update"));

    let options = store.list_options().expect("list");
    let first_row = options.iter().find(|row| row.id == first).expect("first row");
    let second_row = options.iter().find(|row| row.id == second).expect("second row");
    assert_eq!(first_row.autoload, Autoload::No);
    assert_eq!(second_row.autoload, Autoload::Yes);
}

// ============================================================================
// SECTION: Config Validation
// ============================================================================

#[test]
fn hostile_table_names_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    for table in ["", "options; DROP TABLE x", "Options", "opt-ions", &"t".repeat(65)] {
        let result = SqliteOptionsStore::new(SqliteOptionsStoreConfig {
            path: dir.path().join("options.db"),
            busy_timeout_ms: 1_000,
            journal_mode: SqliteJournalMode::Wal,
            sync_mode: SqliteSyncMode::Full,
            table: (*table).to_string(),
        });
        assert!(result.is_err(), "table name accepted: {table:?}");
    }
}

#[test]
fn prefixed_table_name_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let store = SqliteOptionsStore::new(SqliteOptionsStoreConfig {
        path: dir.path().join("options.db"),
        busy_timeout_ms: 1_000,
        journal_mode: SqliteJournalMode::Delete,
        sync_mode: SqliteSyncMode::Normal,
        table: "wp_options".to_string(),
    })
    .expect("store init");
    assert_eq!(store.compute_stats().expect("stats").total_count, 0);
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stats_and_listing_stay_consistent(
        rows in prop::collection::vec((0usize..400, any::<bool>()), 0..24)
    ) {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        for (index, (size, enabled)) in rows.iter().enumerate() {
            let autoload = if *enabled { Autoload::Yes } else { Autoload::No };
            seed(&store, &format!("option_{index}"), *size, autoload);
        }

        let stats = store.compute_stats().expect("stats");
        let options = store.list_options().expect("list");

        prop_assert_eq!(stats.total_count, options.len() as u64);
        let autoload_rows =
            options.iter().filter(|row| row.autoload.is_enabled()).count() as u64;
        prop_assert_eq!(stats.autoload_count, autoload_rows);
        let total: u64 = options.iter().map(|row| row.size).sum();
        prop_assert_eq!(stats.total_size, total);
        let autoload_total: u64 = options
            .iter()
            .filter(|row| row.autoload.is_enabled())
            .map(|row| row.size)
            .sum();
        prop_assert_eq!(stats.autoload_size, autoload_total);
        prop_assert!(stats.autoload_count <= stats.total_count);
        prop_assert!(stats.autoload_size <= stats.total_size);
        for pair in options.windows(2) {
            prop_assert!(pair[0].size >= pair[1].size);
        }
    }
}
