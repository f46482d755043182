//! Document readiness.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use super::listen;
use crate::error::WidgetError;

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), WidgetError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let pending = Rc::new(RefCell::new(Some(f)));
    listen(document, "DOMContentLoaded", true, move |_| {
        if let Some(f) = pending.borrow_mut().take() {
            f();
        }
    })
}
