use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_fields_match_product_form() {
    let config = FieldConfig::default();
    assert_eq!(config.checkbox_selector, "#id_sold_in_units");
    assert_eq!(config.show_when_checked, vec!["price_per_unit", "unit_label"]);
    assert_eq!(config.show_when_unchecked, vec!["package_size_grams", "price_per_100g"]);
    assert_eq!(config.hidden_class, "hidden");
    assert!(config.observe_mutations);
}

#[test]
fn row_selector_joins_prefix_and_field() {
    let config = FieldConfig::default();
    assert_eq!(config.row_selector("unit_label"), ".form-row.field-unit_label");
}

#[test]
fn default_nav_matches_site_markup() {
    let config = NavConfig::default();
    assert_eq!(config.toggle_id, "mobileNavToggle");
    assert_eq!(config.nav_id, "siteNav");
    assert_eq!(config.header_selector, ".site-header");
    assert_eq!(config.open_class, "open");
    assert_eq!(config.header_z_index, 10_000);
    assert_eq!(config.toggle_z_index, 10_001);
    assert_eq!(config.retry, RetryPolicy::default());
}

#[test]
fn default_log_level_is_warn() {
    assert_eq!(Config::default().log_level().unwrap(), log::Level::Warn);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{"nav": {"nav_id": "mainNav", "retry": {"max_retries": 3}}}"#).unwrap();
    assert_eq!(config.nav.nav_id, "mainNav");
    assert_eq!(config.nav.toggle_id, "mobileNavToggle");
    assert_eq!(config.nav.retry.max_retries, 3);
    assert_eq!(config.nav.retry.delay_ms, 200);
    assert_eq!(config.fields, FieldConfig::default());
}

#[test]
fn log_level_is_case_insensitive() {
    let config = Config::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(config.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref name) if name == "loud"));
}

#[test]
fn malformed_json_is_rejected() {
    let err = Config::from_json("{nav:").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn overlapping_field_groups_are_rejected() {
    let raw = r#"{"fields": {"show_when_checked": ["a", "b"], "show_when_unchecked": ["b", "c"]}}"#;
    let err = Config::from_json(raw).unwrap_err();
    assert!(matches!(err, ConfigError::OverlappingField(ref f) if f == "b"));
}

#[test]
fn disjoint_custom_groups_are_accepted() {
    let raw = r#"{"fields": {"show_when_checked": ["a"], "show_when_unchecked": ["b"], "observe_mutations": false}}"#;
    let config = Config::from_json(raw).unwrap();
    assert_eq!(config.fields.show_when_checked, vec!["a"]);
    assert!(!config.fields.observe_mutations);
}
