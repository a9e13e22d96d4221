//! Synchronous single-channel notification
//!
//! Handlers run in registration order, on the caller's thread, before
//! `emit` returns. There is no buffering. Handlers stay registered while
//! they run, including when one of them panics.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Handle returned by [`UpdateEvent::connect`], used to disconnect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(Uuid);

impl HandlerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Handler<S> = Rc<RefCell<dyn FnMut(&S, bool)>>;

/// Update event carrying `(source, has_new_element)`
pub struct UpdateEvent<S> {
    handlers: Vec<(HandlerId, Handler<S>)>,
}

impl<S> UpdateEvent<S> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler; it is called after all earlier handlers
    pub fn connect(&mut self, handler: impl FnMut(&S, bool) + 'static) -> HandlerId {
        let id = HandlerId::new();
        let handler: Handler<S> = Rc::new(RefCell::new(handler));
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler; returns false if it was not registered
    pub fn disconnect(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Deliver one notification to every handler
    pub fn emit(&self, source: &S, has_new: bool) {
        let handlers: Vec<Handler<S>> = self.handlers.iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in handlers {
            let mut call = handler.borrow_mut();
            (&mut *call)(source, has_new);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S> Default for UpdateEvent<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for UpdateEvent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateEvent")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;

    #[test]
    fn test_emit_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut event = UpdateEvent::<u32>::new();

        let c = calls.clone();
        event.connect(move |src, flag| c.borrow_mut().push(("first", *src, flag)));
        let c = calls.clone();
        event.connect(move |src, flag| c.borrow_mut().push(("second", *src, flag)));

        event.emit(&7, true);

        assert_eq!(
            *calls.borrow(),
            vec![("first", 7, true), ("second", 7, true)]
        );
    }

    #[test]
    fn test_disconnect() {
        let count = Rc::new(RefCell::new(0));
        let mut event = UpdateEvent::<()>::new();

        let c = count.clone();
        let id = event.connect(move |_, _| *c.borrow_mut() += 1);
        event.emit(&(), false);

        assert!(event.disconnect(id));
        assert!(!event.disconnect(id));
        assert!(event.is_empty());

        event.emit(&(), false);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_panicking_handler_stays_registered() {
        let calls = Rc::new(RefCell::new(0));
        let mut event = UpdateEvent::<bool>::new();

        let c = calls.clone();
        event.connect(move |_, _| *c.borrow_mut() += 1);
        event.connect(|explode, _| assert!(!*explode, "handler failed"));

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| event.emit(&true, true)));
        assert!(result.is_err());
        assert_eq!(event.len(), 2);

        event.emit(&false, true);
        assert_eq!(*calls.borrow(), 2);
    }
}
