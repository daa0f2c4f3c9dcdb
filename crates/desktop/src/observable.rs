//! Observable fields
//!
//! A single-threaded observable cell, the building block of every view-model field. A host UI
//! subscribes to the fields it renders; the view-models only ever mutate state through `set`,
//! so every change reaches the subscribers. All of this runs on the one UI thread, hence
//! `RefCell` instead of locks.

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Observable::subscribe`]. Pass it back to
/// [`Observable::unsubscribe`] to stop receiving notifications.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: usize,
}

/// A value plus the list of callbacks interested in it.
pub struct Observable<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(usize, Callback<T>)>>,
    next_id: RefCell<usize>,
}

impl<T> Observable<T> {
    #[must_use]
    #[inline]
    pub const fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: RefCell::new(0),
        }
    }

    /// Register `callback` to run after every `set`, with the new value.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per binding, never in a hot path"
    )]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let mut next_id = self.next_id.borrow_mut();
        let id = *next_id;
        *next_id = id.wrapping_add(1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription { id }
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Replace the value, then notify every subscriber with the new value. The borrow is
    /// released before the callbacks run, so a callback may call `get` on this same field.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Notification loop, not worth inlining"
    )]
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;

        // Snapshot the callbacks so a subscriber may (un)subscribe while being notified
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        let value = self.value.borrow();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Current value, cloned out of the cell.
    #[must_use]
    #[inline]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}
