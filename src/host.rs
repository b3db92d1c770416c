use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::util::clog;

/// What the page needs from its surroundings: the viewport and the ability
/// to open links. Every method swallows host failures.
pub trait Host {
    /// Current vertical scroll offset in px.
    fn scroll_offset(&self) -> f64;
    /// Smooth-scroll until the element's top meets the viewport top.
    /// Returns false when no element carries `id`.
    fn scroll_to_anchor(&self, id: &str) -> bool;
    fn scroll_to_top(&self);
    fn open_external(&self, url: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            clog(&format!("no section #{} on this page", id));
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    fn scroll_to_top(&self) {
        if let Some(win) = web_sys::window() {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }
    }

    fn open_external(&self, url: &str) {
        if let Some(win) = web_sys::window() {
            // Popup blockers return Ok(None) or Err; both are ignored.
            if win.open_with_url_and_target(url, "_blank").is_err() {
                clog(&format!("could not open {}", url));
            }
        }
    }
}
