//! Page View Controller: turns navigation intents into host calls and the
//! state transitions they imply. Callers dispatch the returned action.

use crate::content::Target;
use crate::host::Host;
use crate::model::PageAction;

pub fn on_scroll<H: Host + ?Sized>(host: &H) -> PageAction {
    PageAction::Scrolled { offset: host.scroll_offset() }
}

pub fn toggle_menu() -> PageAction {
    PageAction::ToggleMenu
}

/// Unknown anchors are ignored and leave the menu as it was.
pub fn navigate_to_section<H: Host + ?Sized>(host: &H, id: &str) -> Option<PageAction> {
    if host.scroll_to_anchor(id) {
        Some(PageAction::CloseMenu)
    } else {
        None
    }
}

pub fn navigate_to_top<H: Host + ?Sized>(host: &H) {
    host.scroll_to_top();
}

pub fn open_external<H: Host + ?Sized>(host: &H, url: &str) {
    host.open_external(url);
}

pub fn follow<H: Host + ?Sized>(host: &H, target: &Target) -> Option<PageAction> {
    match target {
        Target::Section(id) => navigate_to_section(host, id),
        Target::Top => {
            navigate_to_top(host);
            None
        }
        Target::External(url) => {
            open_external(host, url);
            None
        }
    }
}

/// Follows `target` and hands any resulting transition to `dispatch`.
pub fn navigate<H, D>(host: &H, target: &Target, dispatch: D)
where
    H: Host + ?Sized,
    D: FnOnce(PageAction),
{
    if let Some(action) = follow(host, target) {
        dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageState;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeHost {
        offset: Cell<f64>,
        anchors: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
        top_calls: Cell<u32>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeHost {
        fn with_anchors(anchors: &[&'static str]) -> Self {
            FakeHost { anchors: anchors.to_vec(), ..Default::default() }
        }
    }

    impl Host for FakeHost {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }
        fn scroll_to_anchor(&self, id: &str) -> bool {
            if self.anchors.iter().any(|a| *a == id) {
                self.scrolled_to.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
        fn scroll_to_top(&self) {
            self.top_calls.set(self.top_calls.get() + 1);
            self.offset.set(0.0);
        }
        fn open_external(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn run(state: PageState, action: Option<PageAction>) -> PageState {
        action.map_or(state, |a| state.apply(a))
    }

    #[test]
    fn scroll_reads_offset_from_host() {
        let host = FakeHost::default();
        host.offset.set(50.0);
        assert!(!PageState::default().apply(on_scroll(&host)).scrolled);
        host.offset.set(51.0);
        assert!(PageState::default().apply(on_scroll(&host)).scrolled);
    }

    #[test]
    fn section_navigation_closes_menu_from_any_state() {
        let host = FakeHost::with_anchors(&["mission", "maps", "data"]);
        for menu_open in [true, false] {
            let s = PageState { menu_open, scrolled: false };
            let s = run(s, navigate_to_section(&host, "mission"));
            assert!(!s.menu_open);
        }
        assert_eq!(*host.scrolled_to.borrow(), vec!["mission", "mission"]);
    }

    #[test]
    fn missing_section_is_silent_no_op() {
        let host = FakeHost::with_anchors(&["mission"]);
        let open = PageState { menu_open: true, scrolled: true };
        assert_eq!(navigate_to_section(&host, "does-not-exist"), None);
        assert_eq!(run(open, navigate_to_section(&host, "does-not-exist")), open);
        assert!(host.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn top_navigation_keeps_menu() {
        let host = FakeHost::default();
        for menu_open in [true, false] {
            let s = PageState { menu_open, scrolled: true };
            assert_eq!(follow(&host, &Target::Top), None);
            assert_eq!(run(s, follow(&host, &Target::Top)).menu_open, menu_open);
        }
        assert_eq!(host.top_calls.get(), 4);
    }

    #[test]
    fn external_urls_pass_through_untouched() {
        let host = FakeHost::default();
        let url = "mailto:hello@spacegen.org?subject=Hi there";
        let s = PageState { menu_open: true, scrolled: false };
        assert_eq!(run(s, follow(&host, &Target::External(url.into()))), s);
        assert_eq!(*host.opened.borrow(), vec![url.to_string()]);
    }

    #[test]
    fn scroll_open_menu_then_pick_maps() {
        let host = FakeHost::with_anchors(&["mission", "maps", "data"]);
        let mut s = PageState::default();
        assert_eq!(s, PageState { menu_open: false, scrolled: false });

        host.offset.set(120.0);
        s = s.apply(on_scroll(&host));
        assert_eq!(s, PageState { menu_open: false, scrolled: true });

        s = s.apply(toggle_menu());
        assert_eq!(s, PageState { menu_open: true, scrolled: true });

        s = run(s, follow(&host, &Target::Section("maps".into())));
        assert_eq!(s, PageState { menu_open: false, scrolled: true });
    }

    #[test]
    fn navigate_dispatches_only_real_transitions() {
        let host = FakeHost::with_anchors(&["maps"]);
        let sent = RefCell::new(Vec::new());
        let record = |a: PageAction| sent.borrow_mut().push(a);

        navigate(&host, &Target::Section("maps".into()), record);
        navigate(&host, &Target::Section("gone".into()), record);
        navigate(&host, &Target::Top, record);
        navigate(&host, &Target::External("https://pds.nasa.gov/".into()), record);

        assert_eq!(*sent.borrow(), vec![PageAction::CloseMenu]);
        assert_eq!(host.top_calls.get(), 1);
        assert_eq!(*host.opened.borrow(), vec!["https://pds.nasa.gov/".to_string()]);
    }
}
