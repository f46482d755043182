//! Product form field visibility.
//!
//! The product change form carries two mutually exclusive pricing groups:
//! per-unit fields and per-weight fields. Which group is visible is a pure
//! function of the "sold in units" checkbox, recomputed from scratch on every
//! trigger so rows inserted later by inline formsets pick up the right state.
//!
//! DOM access goes through [`FieldRows`] so the decision logic runs without a
//! browser. The `dom` module provides the web-sys implementation.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use crate::config::FieldConfig;

/// Semantic visibility for one form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn from_shown(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

/// Access to the checkbox and form rows of one page.
pub trait FieldRows {
    /// Current checkbox value, or `None` when the checkbox is not on the page.
    fn checkbox_checked(&self) -> Option<bool>;

    /// Apply `visibility` to the row for `field`. Returns `false` if the row
    /// does not exist.
    fn set_row_visibility(&mut self, field: &str, visibility: Visibility) -> bool;
}

/// Result of one [`FieldToggle::toggle_fields`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub checked: bool,
    pub updated: usize,
    pub missing: usize,
}

/// Keeps the two field groups in step with the checkbox.
#[derive(Debug, Clone, Default)]
pub struct FieldToggle {
    config: FieldConfig,
}

impl FieldToggle {
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Visibility of every managed field for a given checkbox value.
    #[must_use]
    pub fn plan(&self, checked: bool) -> Vec<(&str, Visibility)> {
        let shown = self.config.show_when_checked.iter().map(|f| (f.as_str(), Visibility::from_shown(checked)));
        let other = self.config.show_when_unchecked.iter().map(|f| (f.as_str(), Visibility::from_shown(!checked)));
        shown.chain(other).collect()
    }

    /// Recompute visibility from the checkbox and apply it to every row.
    ///
    /// Returns `None` when the checkbox is absent; nothing is touched then.
    pub fn toggle_fields<R: FieldRows>(&self, rows: &mut R) -> Option<ToggleOutcome> {
        let Some(checked) = rows.checkbox_checked() else {
            log::trace!("{} not on page; skipping field toggle", self.config.checkbox_selector);
            return None;
        };

        let mut outcome = ToggleOutcome { checked, updated: 0, missing: 0 };
        for (field, visibility) in self.plan(checked) {
            if rows.set_row_visibility(field, visibility) {
                outcome.updated += 1;
            } else {
                log::trace!("no form row for {field}");
                outcome.missing += 1;
            }
        }
        Some(outcome)
    }
}
