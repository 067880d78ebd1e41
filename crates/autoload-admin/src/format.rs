// crates/autoload-admin/src/format.rs
// ============================================================================
// Module: Display Formatting
// Description: Byte size and thousands-grouped number formatting.
// Purpose: Render aggregate values the way the host platform presents them.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Pure helpers mirroring the host's byte-size and number formatting. Byte
//! sizes use 1024-based units with fixed precision; whole-byte values render
//! without decimals.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Unit labels for 1024-based byte formatting.
const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats a byte count with 1024-based units and fixed precision.
#[must_use]
pub fn format_byte_size(bytes: u64, precision: usize) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "Byte totals far below 2^52 in practice; display-only value."
    )]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.precision$} {}", BYTE_UNITS[unit])
}

/// Formats an integer with comma-grouped thousands.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a percentage with two decimal places.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
