//! Page view state for the SpaceGen landing page.
//! Two flags live for the page session: whether the mobile menu is open and
//! whether the viewport has scrolled past the navbar threshold.

use std::rc::Rc;
use yew::Reducible;

/// Vertical offset (px) above which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Mobile navigation panel visible.
    pub menu_open: bool,
    /// Viewport scrolled past `SCROLL_THRESHOLD_PX`.
    pub scrolled: bool,
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageAction {
    Scrolled { offset: f64 },
    ToggleMenu,
    CloseMenu,
}

impl PageState {
    pub fn apply(self, action: PageAction) -> PageState {
        use PageAction::*;
        let mut new = self;
        match action {
            Scrolled { offset } => { new.scrolled = offset > SCROLL_THRESHOLD_PX; }
            ToggleMenu => { new.menu_open = !new.menu_open; }
            CloseMenu => { new.menu_open = false; }
        }
        new
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let new = (*self).apply(action);
        // Same Rc means no re-render; most scroll events land here.
        if new == *self { self } else { Rc::new(new) }
    }
}
