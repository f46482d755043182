//! Product form rows backed by the live document.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlInputElement, MutationObserver, MutationObserverInit};

use super::{document, listen, query};
use crate::config::FieldConfig;
use crate::consts::FORMSET_ADDED_EVENT;
use crate::error::WidgetError;
use crate::fields::{FieldRows, FieldToggle, Visibility};

/// [`FieldRows`] over the current document. Rows are looked up on every call
/// so rows added or removed between passes are handled.
pub struct DocumentRows<'a> {
    document: &'a Document,
    config: &'a FieldConfig,
}

impl<'a> DocumentRows<'a> {
    pub fn new(document: &'a Document, config: &'a FieldConfig) -> Self {
        Self { document, config }
    }
}

impl FieldRows for DocumentRows<'_> {
    fn checkbox_checked(&self) -> Option<bool> {
        match query(self.document, &self.config.checkbox_selector) {
            Ok(Some(el)) => Some(el.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)),
            Ok(None) => None,
            Err(err) => {
                log::warn!("checkbox lookup failed: {err}");
                None
            }
        }
    }

    fn set_row_visibility(&mut self, field: &str, visibility: Visibility) -> bool {
        let row = match query(self.document, &self.config.row_selector(field)) {
            Ok(Some(row)) => row,
            Ok(None) => return false,
            Err(err) => {
                log::warn!("row lookup for {field} failed: {err}");
                return false;
            }
        };
        match row.class_list().toggle_with_force(&self.config.hidden_class, visibility.is_hidden()) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("could not toggle {field}: {err:?}");
                false
            }
        }
    }
}

fn run(toggle: &FieldToggle, document: &Document) {
    let mut rows = DocumentRows::new(document, toggle.config());
    if let Some(outcome) = toggle.toggle_fields(&mut rows) {
        log::trace!("field toggle: {outcome:?}");
    }
}

/// Wire the field toggle into the page.
///
/// Returns `Ok(false)` without side effects when the checkbox is absent.
///
/// # Errors
///
/// Returns [`WidgetError::Dom`] if a listener or the observer cannot be set up.
pub fn mount(config: FieldConfig) -> Result<bool, WidgetError> {
    let document = document()?;
    let Some(checkbox) = query(&document, &config.checkbox_selector)? else {
        log::debug!("{} not on page; field toggle idle", config.checkbox_selector);
        return Ok(false);
    };

    let observe = config.observe_mutations;
    let toggle = Rc::new(FieldToggle::new(config));
    run(&toggle, &document);

    let (t, d) = (Rc::clone(&toggle), document.clone());
    listen(&checkbox, "change", true, move |_| run(&t, &d))?;

    // Inline formsets announce inserted rows with this event.
    let (t, d) = (Rc::clone(&toggle), document.clone());
    listen(&document, FORMSET_ADDED_EVENT, true, move |_| run(&t, &d))?;

    if observe {
        observe_body(&document, toggle)?;
    }
    Ok(true)
}

/// Rerun on any child-list change in the body subtree.
fn observe_body(document: &Document, toggle: Rc<FieldToggle>) -> Result<(), WidgetError> {
    let Some(body) = document.body() else {
        return Err(WidgetError::MissingElement("body".into()));
    };
    let d = document.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |_records: js_sys::Array, _observer: MutationObserver| run(&toggle, &d),
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&body, &options)?;
    callback.forget();
    Ok(())
}
