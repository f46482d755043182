//! Default element ids, selectors, and tuning constants.
//!
//! Every value here is a default for a [`crate::config`] field; pages can
//! override them through the embedded JSON config block.

// ── Product form ────────────────────────────────────────────────

/// Selector for the "sold in units" checkbox on the product change form.
pub const SOLD_IN_UNITS_SELECTOR: &str = "#id_sold_in_units";

/// Prefix joined with a field name to select its form-row container.
pub const FORM_ROW_PREFIX: &str = ".form-row.field-";

/// Fields shown only when the product is sold in units.
pub const UNIT_FIELDS: [&str; 2] = ["price_per_unit", "unit_label"];

/// Fields shown only when the product is sold by weight.
pub const GRAM_FIELDS: [&str; 2] = ["package_size_grams", "price_per_100g"];

/// Class the admin stylesheet maps to `display: none`.
pub const HIDDEN_CLASS: &str = "hidden";

/// Event the admin dispatches after inserting an inline formset row.
pub const FORMSET_ADDED_EVENT: &str = "formset:added";

// ── Mobile navigation ───────────────────────────────────────────

/// Id of the hamburger button.
pub const NAV_TOGGLE_ID: &str = "mobileNavToggle";

/// Id of the collapsible navigation panel.
pub const NAV_PANEL_ID: &str = "siteNav";

/// Selector for the page header that the toggle must stack above.
pub const HEADER_SELECTOR: &str = ".site-header";

/// Class marking the navigation panel as open.
pub const OPEN_CLASS: &str = "open";

/// Header z-index applied when the header has none of its own.
pub const HEADER_Z_INDEX: i32 = 10_000;

/// Toggle z-index; one above the header so it stays clickable.
pub const TOGGLE_Z_INDEX: i32 = 10_001;

/// Retries after the first failed mount attempt.
pub const NAV_MOUNT_RETRIES: u32 = 10;

/// Delay between mount attempts, in milliseconds.
pub const NAV_MOUNT_DELAY_MS: u32 = 200;

// ── Page config ─────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "vugri-ui-config";

/// Log level used when the config does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
