//! Mobile navigation backed by the live document.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use super::{document, listen, query, require_id};
use crate::config::NavConfig;
use crate::error::WidgetError;
use crate::nav::{Key, NavEvent, NavSurface, NavToggle, header_z_index};
use crate::retry::Retry;

/// [`NavSurface`] over the nav panel, toggle button, `<html>`, and `<body>`.
pub struct DocumentNav {
    nav: Element,
    toggle: Element,
    scroll_roots: Vec<HtmlElement>,
    open_class: String,
}

impl DocumentNav {
    fn new(document: &Document, nav: Element, toggle: Element, open_class: String) -> Self {
        let root = document.document_element().and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let scroll_roots = root.into_iter().chain(document.body()).collect();
        Self { nav, toggle, scroll_roots, open_class }
    }

    /// Whether `target` lies inside the nav panel or the toggle button.
    fn contains(&self, target: Option<&Node>) -> bool {
        self.nav.contains(target) || self.toggle.contains(target)
    }
}

impl NavSurface for DocumentNav {
    fn is_open(&self) -> bool {
        self.nav.class_list().contains(&self.open_class)
    }

    fn set_open_class(&mut self, open: bool) {
        if let Err(err) = self.nav.class_list().toggle_with_force(&self.open_class, open) {
            log::warn!("could not toggle nav class: {err:?}");
        }
    }

    fn set_expanded(&mut self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        if let Err(err) = self.toggle.set_attribute("aria-expanded", value) {
            log::warn!("could not set aria-expanded: {err:?}");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        for el in &self.scroll_roots {
            let style = el.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(drop)
            };
            if let Err(err) = result {
                log::warn!("could not update overflow: {err:?}");
            }
        }
    }
}

/// Mount the nav toggle, retrying while its elements are missing.
pub fn mount(config: NavConfig) {
    let retry = Retry::new(config.retry);
    attempt(Rc::new(config), retry);
}

fn attempt(config: Rc<NavConfig>, mut retry: Retry) {
    match try_mount(&config) {
        Ok(()) => log::debug!("nav toggle mounted after {} retries", retry.used()),
        Err(err) if err.is_missing() => match retry.next_delay_ms() {
            Some(delay) => {
                Timeout::new(delay, move || attempt(config, retry)).forget();
            }
            None => log::debug!("nav toggle gave up: {err}"),
        },
        Err(err) => log::warn!("nav toggle not mounted: {err}"),
    }
}

fn try_mount(config: &NavConfig) -> Result<(), WidgetError> {
    let document = document()?;
    let toggle = require_id(&document, &config.toggle_id)?;
    let nav = require_id(&document, &config.nav_id)?;

    if let Err(err) = raise_layers(&document, &toggle, config) {
        log::warn!("nav layering skipped: {err}");
    }

    let surface = DocumentNav::new(&document, nav, toggle.clone(), config.open_class.clone());
    let widget = Rc::new(RefCell::new(NavToggle::attach(surface)));

    let w = Rc::clone(&widget);
    listen(&toggle, "click", false, move |event: Event| {
        event.prevent_default();
        w.borrow_mut().handle(&NavEvent::Activate);
    })?;

    // Non-passive so preventDefault suppresses the synthetic click.
    let w = Rc::clone(&widget);
    listen(&toggle, "touchstart", false, move |event: Event| {
        event.prevent_default();
        w.borrow_mut().handle(&NavEvent::Activate);
    })?;

    let w = Rc::clone(&widget);
    listen(&document, "click", true, move |event: Event| {
        let mut widget = w.borrow_mut();
        if !widget.state().is_open() {
            return;
        }
        let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
        let inside = widget.surface().contains(target.as_ref());
        widget.handle(&NavEvent::DocumentClick { inside });
    })?;

    let w = widget;
    listen(&document, "keydown", true, move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        w.borrow_mut().handle(&NavEvent::KeyDown(Key(key)));
    })?;

    Ok(())
}

/// Keep the toggle clickable above the sticky header.
fn raise_layers(document: &Document, toggle: &Element, config: &NavConfig) -> Result<(), WidgetError> {
    if let Some(header) = query(document, &config.header_selector)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
        let style = header.style();
        if let Some(z) = header_z_index(&style.get_property_value("z-index")?, config.header_z_index) {
            style.set_property("z-index", &z)?;
        }
    }
    if let Some(toggle) = toggle.dyn_ref::<HtmlElement>() {
        let style = toggle.style();
        style.set_property("z-index", &config.toggle_z_index.to_string())?;
        style.set_property("cursor", "pointer")?;
    }
    Ok(())
}
