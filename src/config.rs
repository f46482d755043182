//! Page-level configuration.
//!
//! Defaults match the storefront's markup. A page may embed a JSON object in
//! `<script type="application/json" id="vugri-ui-config">` to override any
//! subset of keys; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_LOG_LEVEL, FORM_ROW_PREFIX, GRAM_FIELDS, HEADER_SELECTOR, HEADER_Z_INDEX, HIDDEN_CLASS, NAV_PANEL_ID,
    NAV_TOGGLE_ID, OPEN_CLASS, SOLD_IN_UNITS_SELECTOR, TOGGLE_Z_INDEX, UNIT_FIELDS,
};
use crate::error::ConfigError;
use crate::retry::RetryPolicy;

/// Top-level config for both widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
    pub fields: FieldConfig,
    pub nav: NavConfig,
}

impl Config {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown log level or a field listed in
    /// both visibility groups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        self.fields.validate()
    }

    /// Resolved log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if the name is not a `log` level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        let name = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        name.parse().map_err(|_| ConfigError::LogLevel(name.to_owned()))
    }
}

/// Product form field toggle settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub checkbox_selector: String,
    pub row_prefix: String,
    /// Fields visible while the checkbox is checked.
    pub show_when_checked: Vec<String>,
    /// Fields visible while the checkbox is unchecked.
    pub show_when_unchecked: Vec<String>,
    pub hidden_class: String,
    /// Also rerun on any body subtree child-list mutation.
    pub observe_mutations: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            checkbox_selector: SOLD_IN_UNITS_SELECTOR.to_owned(),
            row_prefix: FORM_ROW_PREFIX.to_owned(),
            show_when_checked: UNIT_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
            show_when_unchecked: GRAM_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
            hidden_class: HIDDEN_CLASS.to_owned(),
            observe_mutations: true,
        }
    }
}

impl FieldConfig {
    /// Selector for the form-row container of `field`.
    #[must_use]
    pub fn row_selector(&self, field: &str) -> String {
        format!("{}{field}", self.row_prefix)
    }

    /// Reject fields that appear in both groups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OverlappingField`] naming the first overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.show_when_checked.iter().find(|f| self.show_when_unchecked.contains(f)) {
            Some(field) => Err(ConfigError::OverlappingField(field.clone())),
            None => Ok(()),
        }
    }
}

/// Mobile navigation toggle settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub nav_id: String,
    pub header_selector: String,
    pub open_class: String,
    pub header_z_index: i32,
    pub toggle_z_index: i32,
    pub retry: RetryPolicy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: NAV_TOGGLE_ID.to_owned(),
            nav_id: NAV_PANEL_ID.to_owned(),
            header_selector: HEADER_SELECTOR.to_owned(),
            open_class: OPEN_CLASS.to_owned(),
            header_z_index: HEADER_Z_INDEX,
            toggle_z_index: TOGGLE_Z_INDEX,
            retry: RetryPolicy::default(),
        }
    }
}
