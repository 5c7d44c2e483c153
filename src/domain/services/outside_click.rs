//! Scoped registration of the document-level pointer listener.
//!
//! The listener is acquired when the shell mounts and released when the
//! guard is dropped, so registration and removal are always paired.

use crate::domain::models::PointerTarget;
use crate::shared::errors::Result;

pub type PointerHandler = Box<dyn FnMut(PointerTarget)>;

/// Something that can deliver classified pointer events, e.g. the document.
pub trait PointerEventSource {
    type Handle;

    fn subscribe(&self, handler: PointerHandler) -> Result<Self::Handle>;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Live subscription. Dropping it removes the listener.
pub struct OutsideClickSubscription<S: PointerEventSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: PointerEventSource> OutsideClickSubscription<S> {
    pub fn acquire(source: S, handler: PointerHandler) -> Result<Self> {
        let handle = source.subscribe(handler)?;
        Ok(Self { source, handle: Some(handle) })
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

impl<S: PointerEventSource> Drop for OutsideClickSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MenuEvent, NavigationState};
    use crate::shared::errors::AppError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeDocument {
        listeners: Rc<RefCell<HashMap<u32, PointerHandler>>>,
        next: Rc<RefCell<u32>>,
        fail: bool,
    }

    impl FakeDocument {
        fn dispatch(&self, target: PointerTarget) {
            for handler in self.listeners.borrow_mut().values_mut() {
                handler(target);
            }
        }

        fn active(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl PointerEventSource for FakeDocument {
        type Handle = u32;

        fn subscribe(&self, handler: PointerHandler) -> Result<u32> {
            if self.fail {
                return Err(AppError::Listener("document unavailable".into()));
            }
            let mut next = self.next.borrow_mut();
            *next += 1;
            self.listeners.borrow_mut().insert(*next, handler);
            Ok(*next)
        }

        fn unsubscribe(&self, handle: u32) {
            self.listeners.borrow_mut().remove(&handle);
        }
    }

    fn mount(doc: &FakeDocument, state: &Rc<RefCell<NavigationState>>, closes: &Rc<RefCell<u32>>) -> OutsideClickSubscription<FakeDocument> {
        let state = state.clone();
        let closes = closes.clone();
        OutsideClickSubscription::acquire(
            doc.clone(),
            Box::new(move |target| {
                if state.borrow_mut().apply_menu(MenuEvent::OutsideClick(target)) {
                    *closes.borrow_mut() += 1;
                }
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_outside_pointer_closes_open_menu() {
        let doc = FakeDocument::default();
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let closes = Rc::new(RefCell::new(0));
        let _sub = mount(&doc, &state, &closes);

        state.borrow_mut().apply_menu(MenuEvent::Toggle);
        doc.dispatch(PointerTarget::InsideNav);
        assert!(state.borrow().is_mobile_menu_open());

        doc.dispatch(PointerTarget::Elsewhere);
        assert!(!state.borrow().is_mobile_menu_open());
    }

    #[test]
    fn test_drop_removes_listener() {
        let doc = FakeDocument::default();
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let closes = Rc::new(RefCell::new(0));

        let sub = mount(&doc, &state, &closes);
        assert!(sub.is_active());
        assert_eq!(doc.active(), 1);
        drop(sub);
        assert_eq!(doc.active(), 0);
    }

    #[test]
    fn test_remount_does_not_duplicate_handling() {
        let doc = FakeDocument::default();
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let closes = Rc::new(RefCell::new(0));

        drop(mount(&doc, &state, &closes));
        let _second = mount(&doc, &state, &closes);
        assert_eq!(doc.active(), 1);

        state.borrow_mut().apply_menu(MenuEvent::Toggle);
        doc.dispatch(PointerTarget::Unresolved);
        assert_eq!(*closes.borrow(), 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let doc = FakeDocument::default();
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let closes = Rc::new(RefCell::new(0));

        let mut sub = mount(&doc, &state, &closes);
        sub.release();
        sub.release();
        assert!(!sub.is_active());
        assert_eq!(doc.active(), 0);
    }

    #[test]
    fn test_failed_subscribe_registers_nothing() {
        let doc = FakeDocument { fail: true, ..FakeDocument::default() };
        let result = OutsideClickSubscription::acquire(doc.clone(), Box::new(|_| {}));
        assert!(matches!(result, Err(AppError::Listener(_))));
        assert_eq!(doc.active(), 0);
    }
}
