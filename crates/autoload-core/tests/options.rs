// crates/autoload-core/tests/options.rs
// ============================================================================
// Module: Core Option Type Tests
// Description: Unit tests for option identifiers, the autoload flag, and
//              statistics snapshots.
// Purpose: Validate constructor rejection paths and aggregate edge cases.
// ============================================================================

//! ## Overview
//! Unit-level tests for core type invariants:
//! - `OptionId` rejects zero and negative raw values
//! - `Autoload` accepts exactly the two storage literals
//! - `StatsSnapshot` defaults to zero and guards the zero-division edge

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::float_cmp,
    reason = "Test-only assertions and helpers are permitted."
)]

use autoload_core::Autoload;
use autoload_core::OptionId;
use autoload_core::OptionName;
use autoload_core::StatsSnapshot;

#[test]
fn option_id_rejects_non_positive_values() {
    assert!(OptionId::from_raw(0).is_none());
    assert!(OptionId::from_raw(-5).is_none());
    let id = OptionId::from_raw(42).expect("positive id");
    assert_eq!(id.get(), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn autoload_parses_exactly_the_storage_literals() {
    assert_eq!(Autoload::parse("yes"), Some(Autoload::Yes));
    assert_eq!(Autoload::parse("no"), Some(Autoload::No));
    assert_eq!(Autoload::parse("maybe"), None);
    assert_eq!(Autoload::parse("YES"), None);
    assert_eq!(Autoload::parse(""), None);
    assert_eq!(Autoload::parse("yes "), None);
}

#[test]
fn autoload_storage_and_toggle_round_trip() {
    assert_eq!(Autoload::Yes.as_db_str(), "yes");
    assert_eq!(Autoload::No.as_db_str(), "no");
    assert_eq!(Autoload::Yes.toggled(), Autoload::No);
    assert_eq!(Autoload::No.toggled(), Autoload::Yes);
    assert!(Autoload::Yes.is_enabled());
    assert!(!Autoload::No.is_enabled());
    assert_eq!(Autoload::No.to_string(), "no");
}

#[test]
fn option_name_detects_ephemeral_prefix() {
    assert!(OptionName::new("_transient_feed_cache").is_ephemeral());
    assert!(OptionName::new("_transient").is_ephemeral());
    assert!(!OptionName::new("siteurl").is_ephemeral());
    assert!(!OptionName::new("transient_like").is_ephemeral());
    // A literal 'x' in place of the underscore must not count as ephemeral.
    assert!(!OptionName::new("xtransient_cache").is_ephemeral());
}

#[test]
fn stats_snapshot_defaults_to_zero() {
    let stats = StatsSnapshot::default();
    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.autoload_count, 0);
    assert_eq!(stats.total_size, 0);
    assert_eq!(stats.autoload_size, 0);
}

#[test]
fn usage_percent_guards_zero_total_size() {
    let empty = StatsSnapshot::default();
    assert_eq!(empty.usage_percent(), 0.0);

    let stats = StatsSnapshot {
        total_count: 3,
        autoload_count: 2,
        total_size: 160,
        autoload_size: 110,
    };
    let percent = stats.usage_percent();
    assert!((percent - 68.75).abs() < 1e-9);
}

#[test]
fn full_autoload_usage_is_one_hundred_percent() {
    let stats = StatsSnapshot {
        total_count: 1,
        autoload_count: 1,
        total_size: 64,
        autoload_size: 64,
    };
    assert_eq!(stats.usage_percent(), 100.0);
}
