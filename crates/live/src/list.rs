//! Live list: the growing result of one streaming subscription
//!
//! A live list only grows or rewrites its last element. Each successful
//! mutation produces exactly one update notification, delivered to every
//! observer before the mutating call returns. Equality is identity: two
//! lists are equal only if they are the same list.

use log::{debug, trace, warn};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use uuid::Uuid;

use crate::error::{LiveListError, LiveListResult};
use crate::event::{HandlerId, UpdateEvent};
use crate::params::SubscriptionParams;
use crate::period::Periodic;
use tws_core::Contract;

/// Identity of a live list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(Uuid);

impl ListId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append/tail-mutate-only sequence of `T`, tagged with subscription parameters `P`
pub struct LiveList<T, P> {
    id: ListId,
    params: P,
    items: Vec<T>,
    frozen: bool,
    update_event: UpdateEvent<LiveList<T, P>>,
}

impl<T, P> LiveList<T, P> {
    /// Create an empty, active list for a subscription
    pub fn new(params: P) -> Self {
        Self {
            id: ListId::new(),
            params,
            items: Vec::new(),
            frozen: false,
            update_event: UpdateEvent::new(),
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Store an element and notify observers
    ///
    /// With `is_new` the element is appended and observers see `true`.
    /// Otherwise it replaces the last element and observers see `false`;
    /// on an empty list there is no tail to refine, so it is appended.
    pub fn append_or_update(&mut self, element: T, is_new: bool) -> LiveListResult<()> {
        if self.frozen {
            warn!("Rejected update on frozen live list {}", self.id);
            return Err(LiveListError::Frozen { list_id: self.id });
        }

        let has_new = match self.items.last_mut() {
            Some(last) if !is_new => {
                *last = element;
                false
            }
            _ => {
                if !is_new {
                    debug!(
                        "Live list {} is empty, appending refinement as new element",
                        self.id
                    );
                }
                self.items.push(element);
                true
            }
        };

        trace!(
            "Live list {} {} (len={})",
            self.id,
            if has_new { "appended" } else { "updated tail" },
            self.items.len()
        );
        self.notify(has_new);
        Ok(())
    }

    /// Append a new element
    pub fn append(&mut self, element: T) -> LiveListResult<()> {
        self.append_or_update(element, true)
    }

    /// Replace the last element in place
    pub fn update_last(&mut self, element: T) -> LiveListResult<()> {
        self.append_or_update(element, false)
    }

    /// Register an observer called with `(list, has_new_element)`
    pub fn subscribe(&mut self, observer: impl FnMut(&Self, bool) + 'static) -> HandlerId {
        let handler_id = self.update_event.connect(observer);
        debug!("Observer {} subscribed to live list {}", handler_id, self.id);
        handler_id
    }

    /// Remove an observer; returns false if it was not subscribed
    pub fn unsubscribe(&mut self, handler_id: HandlerId) -> bool {
        let removed = self.update_event.disconnect(handler_id);
        if removed {
            debug!("Observer {} unsubscribed from live list {}", handler_id, self.id);
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.update_event.len()
    }

    /// Stop accepting mutations (subscription cancelled or feed torn down)
    pub fn freeze(&mut self) {
        if !self.frozen {
            self.frozen = true;
            debug!("Live list {} frozen with {} elements", self.id, self.items.len());
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn notify(&self, has_new: bool) {
        self.update_event.emit(self, has_new);
    }
}

impl<T, P: SubscriptionParams> LiveList<T, P> {
    pub fn req_id(&self) -> i32 {
        self.params.req_id()
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.params.contract()
    }
}

impl<T: Periodic, P> LiveList<T, P> {
    /// True when `element` opens a new period relative to the last element
    pub fn is_new_period(&self, element: &T) -> bool {
        self.items
            .last()
            .is_none_or(|last| last.period_key() != element.period_key())
    }
}

impl<T, P> Deref for LiveList<T, P> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T, P> IntoIterator for &'a LiveList<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, P> PartialEq for LiveList<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T, P> Eq for LiveList<T, P> {}

impl<T, P> Hash for LiveList<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for LiveList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveList")
            .field("id", &self.id)
            .field("params", &self.params)
            .field("items", &self.items)
            .field("frozen", &self.frozen)
            .field("observers", &self.update_event.len())
            .finish()
    }
}
