use std::collections::HashMap;

use super::*;

/// In-memory stand-in for the product change form.
#[derive(Default)]
struct FakeForm {
    checkbox: Option<bool>,
    rows: HashMap<String, Visibility>,
}

impl FakeForm {
    fn with_all_rows(checked: bool) -> Self {
        let mut form = Self { checkbox: Some(checked), rows: HashMap::new() };
        for field in ["price_per_unit", "unit_label", "package_size_grams", "price_per_100g"] {
            form.rows.insert(field.to_owned(), Visibility::Shown);
        }
        form
    }

    fn visible(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .rows
            .iter()
            .filter(|(_, v)| **v == Visibility::Shown)
            .map(|(k, _)| k.as_str())
            .collect();
        fields.sort_unstable();
        fields
    }
}

impl FieldRows for FakeForm {
    fn checkbox_checked(&self) -> Option<bool> {
        self.checkbox
    }

    fn set_row_visibility(&mut self, field: &str, visibility: Visibility) -> bool {
        match self.rows.get_mut(field) {
            Some(slot) => {
                *slot = visibility;
                true
            }
            None => false,
        }
    }
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_from_shown() {
    assert_eq!(Visibility::from_shown(true), Visibility::Shown);
    assert_eq!(Visibility::from_shown(false), Visibility::Hidden);
    assert!(Visibility::Hidden.is_hidden());
    assert!(!Visibility::Shown.is_hidden());
}

// =============================================================
// plan
// =============================================================

#[test]
fn plan_checked_shows_unit_fields_only() {
    let toggle = FieldToggle::default();
    let plan = toggle.plan(true);
    assert_eq!(
        plan,
        vec![
            ("price_per_unit", Visibility::Shown),
            ("unit_label", Visibility::Shown),
            ("package_size_grams", Visibility::Hidden),
            ("price_per_100g", Visibility::Hidden),
        ]
    );
}

#[test]
fn plan_groups_are_always_complementary() {
    let toggle = FieldToggle::default();
    for checked in [true, false] {
        let plan = toggle.plan(checked);
        let shown = plan.iter().filter(|(_, v)| !v.is_hidden()).count();
        let hidden = plan.iter().filter(|(_, v)| v.is_hidden()).count();
        assert_eq!(shown, 2);
        assert_eq!(hidden, 2);
    }
}

// =============================================================
// toggle_fields
// =============================================================

#[test]
fn checked_shows_exactly_unit_fields() {
    let mut form = FakeForm::with_all_rows(true);
    let outcome = FieldToggle::default().toggle_fields(&mut form).unwrap();
    assert_eq!(outcome, ToggleOutcome { checked: true, updated: 4, missing: 0 });
    assert_eq!(form.visible(), vec!["price_per_unit", "unit_label"]);
}

#[test]
fn unchecked_shows_exactly_gram_fields() {
    let mut form = FakeForm::with_all_rows(false);
    FieldToggle::default().toggle_fields(&mut form);
    assert_eq!(form.visible(), vec!["package_size_grams", "price_per_100g"]);
}

#[test]
fn round_trip_restores_original_visibility() {
    let toggle = FieldToggle::default();
    let mut form = FakeForm::with_all_rows(false);
    toggle.toggle_fields(&mut form);
    let before = form.rows.clone();

    form.checkbox = Some(true);
    toggle.toggle_fields(&mut form);
    assert_ne!(form.rows, before);

    form.checkbox = Some(false);
    toggle.toggle_fields(&mut form);
    assert_eq!(form.rows, before);
}

#[test]
fn missing_checkbox_is_noop() {
    let mut form = FakeForm::with_all_rows(true);
    form.checkbox = None;
    assert_eq!(FieldToggle::default().toggle_fields(&mut form), None);
    assert_eq!(form.visible().len(), 4);
}

#[test]
fn missing_rows_are_skipped() {
    let mut form = FakeForm { checkbox: Some(true), rows: HashMap::new() };
    form.rows.insert("unit_label".into(), Visibility::Hidden);
    let outcome = FieldToggle::default().toggle_fields(&mut form).unwrap();
    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.missing, 3);
    assert_eq!(form.visible(), vec!["unit_label"]);
}

#[test]
fn rows_inserted_later_pick_up_current_state() {
    let toggle = FieldToggle::default();
    let mut form = FakeForm { checkbox: Some(true), rows: HashMap::new() };
    toggle.toggle_fields(&mut form);

    // An inline formset adds rows, and the checkbox flips without a change event.
    form.rows.insert("price_per_100g".into(), Visibility::Shown);
    form.rows.insert("price_per_unit".into(), Visibility::Hidden);
    form.checkbox = Some(false);

    // Mutation-driven rerun.
    toggle.toggle_fields(&mut form);
    assert_eq!(form.visible(), vec!["price_per_100g"]);
}

#[test]
fn custom_config_drives_groups() {
    let config = FieldConfig {
        show_when_checked: vec!["a".into()],
        show_when_unchecked: vec!["b".into(), "c".into()],
        ..FieldConfig::default()
    };
    let toggle = FieldToggle::new(config);
    assert_eq!(
        toggle.plan(false),
        vec![("a", Visibility::Hidden), ("b", Visibility::Shown), ("c", Visibility::Shown)]
    );
    assert_eq!(toggle.config().show_when_checked, vec!["a"]);
}
