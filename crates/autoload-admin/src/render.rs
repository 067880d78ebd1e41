// crates/autoload-admin/src/render.rs
// ============================================================================
// Module: Page Rendering
// Description: Static HTML templates for the stats block and options table.
// Purpose: Render gathered data into the admin page markup.
// Dependencies: autoload-core
// ============================================================================

//! ## Overview
//! Templates are compiled string builders over static shells; there is no
//! runtime template materialization. Every dynamic value passes through
//! [`escape_html`]. Each table row embeds a toggle form whose hidden autoload
//! value is the opposite of the row's current state, so the action is always
//! "flip this row's flag".

// ============================================================================
// SECTION: Imports
// ============================================================================

use autoload_core::OptionRow;
use autoload_core::StatsSnapshot;

use crate::forgery::TokenGuard;
use crate::forgery::UPDATE_ACTION;
use crate::form::AUTOLOAD_FIELD;
use crate::form::MARKER_FIELD;
use crate::form::OPTION_ID_FIELD;
use crate::form::TOKEN_FIELD;
use crate::format::format_byte_size;
use crate::format::format_percent;
use crate::format::format_thousands;

// ============================================================================
// SECTION: Escaping
// ============================================================================

/// Escapes HTML metacharacters in a dynamic value.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// SECTION: Notices
// ============================================================================

/// Renders the dismissible update-success notice.
#[must_use]
pub fn render_success_notice() -> String {
    "<div class=\"notice notice-success is-dismissible\"><p>Autoload updated.</p></div>\n"
        .to_string()
}

/// Renders a generic error notice for hosts that surface storage failures
/// in-page instead of failing the request.
#[must_use]
pub fn render_error_notice(message: &str) -> String {
    format!("<div class=\"notice notice-error\"><p>{}</p></div>\n", escape_html(message))
}

// ============================================================================
// SECTION: Page
// ============================================================================

/// Renders the full admin page from gathered data.
#[must_use]
pub fn render_page(
    title: &str,
    stats: &StatsSnapshot,
    options: &[OptionRow],
    updated: bool,
    guard: &dyn TokenGuard,
) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"wrap\">\n");
    html.push_str(&format!("<h1 class=\"wp-heading-inline\">{}</h1>\n", escape_html(title)));
    if updated {
        html.push_str(&render_success_notice());
    }
    html.push_str("<div id=\"wam-content\">\n");
    html.push_str(&render_stats(stats));
    html.push_str(&render_options_table(options, guard));
    html.push_str("</div>\n</div>\n");
    html
}

/// Renders the three-box statistics block.
fn render_stats(stats: &StatsSnapshot) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"wam-stats\">\n<h2>Autoload Statistics</h2>\n");
    html.push_str("<div class=\"wam-stats-grid\">\n");
    html.push_str(&format!(
        "<div class=\"wam-stat-box\"><h3>Total Autoload Size</h3><p>{}</p></div>\n",
        format_byte_size(stats.autoload_size, 2)
    ));
    html.push_str(&format!(
        "<div class=\"wam-stat-box\"><h3>Autoloaded Options</h3><p>{} of {}</p></div>\n",
        format_thousands(stats.autoload_count),
        format_thousands(stats.total_count)
    ));
    html.push_str(&format!(
        "<div class=\"wam-stat-box\"><h3>Usage</h3><p>{}</p></div>\n",
        format_percent(stats.usage_percent())
    ));
    html.push_str("</div>\n</div>\n");
    html
}

/// Renders the options table with one toggle form per row.
fn render_options_table(options: &[OptionRow], guard: &dyn TokenGuard) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"wam-options-table\">\n<thead><tr>");
    html.push_str("<th>Option</th><th>Size</th><th>Autoload</th><th>Action</th>");
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in options {
        html.push_str(&render_row(row, guard));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Renders a single option row with its flip form.
fn render_row(row: &OptionRow, guard: &dyn TokenGuard) -> String {
    let target = row.autoload.toggled();
    let label = if row.autoload.is_enabled() { "Disable Autoload" } else { "Enable Autoload" };
    let token = guard.mint(UPDATE_ACTION);
    format!(
        "<tr><td>{name}</td><td>{size}</td><td>{autoload}</td><td><form \
         method=\"post\"><input type=\"hidden\" name=\"{marker}\" value=\"1\"/><input \
         type=\"hidden\" name=\"{id_field}\" value=\"{id}\"/><input type=\"hidden\" \
         name=\"{autoload_field}\" value=\"{target}\"/><input type=\"hidden\" \
         name=\"{token_field}\" value=\"{token}\"/><button type=\"submit\" \
         class=\"button\">{label}</button></form></td></tr>\n",
        name = escape_html(row.name.as_str()),
        size = format_byte_size(row.size, 2),
        autoload = row.autoload.as_db_str(),
        marker = MARKER_FIELD,
        id_field = OPTION_ID_FIELD,
        id = row.id,
        autoload_field = AUTOLOAD_FIELD,
        target = target.as_db_str(),
        token_field = TOKEN_FIELD,
        token = escape_html(&token),
    )
}
