//! Error types for widget mounting and page configuration.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// TYPES
// =============================================================================

/// Failure while resolving or wiring DOM elements.
///
/// `MissingElement` is the expected "not on this page" case and callers treat
/// it as a silent no-op or a reason to retry. `Dom` wraps an exception thrown
/// by the browser, such as a malformed selector.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl WidgetError {
    /// Whether this error only means the page lacks the widget's markup.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

/// Rejected page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("field listed as both unit and gram field: {0}")]
    OverlappingField(String),
}
