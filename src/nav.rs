//! Mobile navigation toggle: a two-state open/closed machine.
//!
//! The open state lives on the page itself as the nav panel's open class, so
//! [`NavToggle`] reads it back from the [`NavSurface`] on every event rather
//! than caching a copy. Opening and closing always update the class, the
//! toggle's `aria-expanded`, and the page scroll lock together.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether the navigation panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Input the toggle reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Click or touch on the toggle button.
    Activate,
    /// Click anywhere on the document. `inside` is true when the target lies
    /// within the nav panel or the toggle button.
    DocumentClick { inside: bool },
    /// Key pressed anywhere on the document.
    KeyDown(Key),
}

/// Next state for `event`, or `None` if the event leaves the state alone.
#[must_use]
pub fn transition(state: NavState, event: &NavEvent) -> Option<NavState> {
    match (state, event) {
        (_, NavEvent::Activate) => Some(state.flipped()),
        (NavState::Open, NavEvent::DocumentClick { inside: false }) => Some(NavState::Closed),
        (NavState::Open, NavEvent::KeyDown(key)) if key.is_escape() => Some(NavState::Closed),
        _ => None,
    }
}

/// Page elements the toggle drives.
pub trait NavSurface {
    /// Whether the nav panel carries the open class.
    fn is_open(&self) -> bool;

    fn set_open_class(&mut self, open: bool);

    /// Set the toggle button's `aria-expanded`.
    fn set_expanded(&mut self, expanded: bool);

    /// Suppress or restore scrolling on the root element and body.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Open/close controller bound to one nav panel and toggle button.
#[derive(Debug)]
pub struct NavToggle<S> {
    surface: S,
}

impl<S: NavSurface> NavToggle<S> {
    /// Bind to `surface`, bringing `aria-expanded` in line with the panel.
    pub fn attach(mut surface: S) -> Self {
        let open = surface.is_open();
        surface.set_expanded(open);
        Self { surface }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        NavState::from_open(self.surface.is_open())
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply `event` and return the new state if it changed.
    pub fn handle(&mut self, event: &NavEvent) -> Option<NavState> {
        let next = transition(self.state(), event)?;
        self.apply(next);
        log::debug!("nav {event:?} -> {next:?}");
        Some(next)
    }

    fn apply(&mut self, state: NavState) {
        let open = state.is_open();
        self.surface.set_open_class(open);
        self.surface.set_expanded(open);
        self.surface.set_scroll_locked(open);
    }
}

/// Inline header z-index to write, or `None` when the header already has one.
#[must_use]
pub fn header_z_index(current: &str, fallback: i32) -> Option<String> {
    if current.trim().is_empty() { Some(fallback.to_string()) } else { None }
}
