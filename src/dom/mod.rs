//! Browser glue: web-sys implementations of the widget seams and the wasm
//! entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here so `fields` and `nav` stay
//! testable natively. Listeners are registered for the page lifetime and
//! their closures are leaked with `Closure::forget`.

pub mod fields;
pub mod nav;
pub mod ready;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::WidgetError;

/// The current window's document.
pub(crate) fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::MissingElement("document".into()))
}

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>, WidgetError> {
    Ok(document.query_selector(selector)?)
}

/// Element with `id`, or [`WidgetError::MissingElement`].
pub(crate) fn require_id(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(format!("#{id}")))
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, passive: bool, handler: F) -> Result<(), WidgetError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Read the page's JSON config block, falling back to defaults.
fn page_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("vugri-ui: ignoring page config: {err}").into());
            Config::default()
        }
    }
}

fn init_logging(config: &Config) {
    console_error_panic_hook::set_once();
    let level = config.log_level().unwrap_or(log::Level::Warn);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("vugri-ui: logger unavailable: {err}").into());
    }
}

/// Mount both widgets once the document is ready.
///
/// # Errors
///
/// Fails only if there is no document or the readiness listener cannot be
/// registered.
pub fn mount_all(config: Config) -> Result<(), WidgetError> {
    let document = document()?;
    let Config { fields: field_config, nav: nav_config, .. } = config;
    ready::on_ready(&document, move || {
        if let Err(err) = fields::mount(field_config) {
            log::warn!("field toggle not mounted: {err}");
        }
        nav::mount(nav_config);
    })
}

/// Wasm entry point; runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    let config = match document() {
        Ok(document) => page_config(&document),
        Err(_) => return,
    };
    init_logging(&config);
    if let Err(err) = mount_all(config) {
        log::warn!("vugri-ui not started: {err}");
    }
}
