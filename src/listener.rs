//! Event listener registration tied to a guard's lifetime: dropping the
//! `Subscription` removes the listener it added.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::util::clog;

pub trait ListenTarget {
    type Handler;
    /// Returns false when the host refused the registration.
    fn listen(&self, event: &'static str, handler: &Self::Handler) -> bool;
    fn unlisten(&self, event: &'static str, handler: &Self::Handler);
}

impl ListenTarget for web_sys::Window {
    type Handler = Closure<dyn FnMut(web_sys::Event)>;

    fn listen(&self, event: &'static str, handler: &Self::Handler) -> bool {
        self.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .is_ok()
    }

    fn unlisten(&self, event: &'static str, handler: &Self::Handler) {
        let _ = self.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
}

pub struct Subscription<T: ListenTarget> {
    target: T,
    event: &'static str,
    handler: T::Handler,
    active: bool,
}

impl<T: ListenTarget> Subscription<T> {
    pub fn new(target: T, event: &'static str, handler: T::Handler) -> Self {
        let active = target.listen(event, &handler);
        if !active {
            clog(&format!("{} listener not registered", event));
        }
        Subscription { target, event, handler, active }
    }
}

impl<T: ListenTarget> Drop for Subscription<T> {
    fn drop(&mut self) {
        if self.active {
            self.target.unlisten(self.event, &self.handler);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeTarget {
        refuse: bool,
        live: Rc<RefCell<Vec<(&'static str, u32)>>>,
        removed: Rc<RefCell<Vec<(&'static str, u32)>>>,
    }

    impl ListenTarget for FakeTarget {
        type Handler = u32;

        fn listen(&self, event: &'static str, handler: &u32) -> bool {
            if self.refuse {
                return false;
            }
            self.live.borrow_mut().push((event, *handler));
            true
        }

        fn unlisten(&self, event: &'static str, handler: &u32) {
            self.live.borrow_mut().retain(|l| *l != (event, *handler));
            self.removed.borrow_mut().push((event, *handler));
        }
    }

    #[test]
    fn listener_lives_until_guard_drops() {
        let target = FakeTarget::default();
        let sub = Subscription::new(target.clone(), "scroll", 7);
        assert_eq!(*target.live.borrow(), vec![("scroll", 7)]);

        drop(sub);
        assert!(target.live.borrow().is_empty());
        assert_eq!(*target.removed.borrow(), vec![("scroll", 7)]);
    }

    #[test]
    fn refused_registration_is_not_removed() {
        let target = FakeTarget { refuse: true, ..Default::default() };
        let sub = Subscription::new(target.clone(), "scroll", 1);
        assert!(target.live.borrow().is_empty());
        drop(sub);
        assert!(target.removed.borrow().is_empty());
    }

    #[test]
    fn remount_leaves_one_listener() {
        let target = FakeTarget::default();
        let first = Subscription::new(target.clone(), "scroll", 1);
        drop(first);
        let _second = Subscription::new(target.clone(), "scroll", 2);
        assert_eq!(*target.live.borrow(), vec![("scroll", 2)]);
    }
}
