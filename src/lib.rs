//! Page enhancements for the storefront, compiled to WebAssembly.
//!
//! Two independent widgets mount on document readiness:
//!
//! - the product form field toggle, which shows either the per-unit or the
//!   per-weight pricing rows depending on the "sold in units" checkbox, and
//! - the mobile navigation toggle, which opens and closes the site nav and
//!   dismisses it on outside clicks or Escape.
//!
//! Decision logic is plain Rust behind small traits ([`fields::FieldRows`],
//! [`nav::NavSurface`]) so it runs under `cargo test` without a browser. The
//! web-sys bindings and the wasm entry point live in `dom`, behind the
//! `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`fields`] | Field visibility toggle for the product form |
//! | [`nav`] | Open/closed state machine for the mobile nav |
//! | [`retry`] | Bounded retry for late-arriving markup |
//! | [`config`] | Page-overridable settings |
//! | [`error`] | Widget and config errors |
//! | [`consts`] | Default ids, selectors, and tuning values |
//! | `dom` | Browser bindings and entry point (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod error;
pub mod fields;
pub mod nav;
pub mod retry;

#[cfg(feature = "hydrate")]
pub mod dom;
