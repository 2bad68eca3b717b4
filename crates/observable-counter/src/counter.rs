//! Implementation of the [`ObservableCounter`].

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use crate::{same_observer, Observer, Subscription};

/// State of an [`ObservableCounter`] shared with its [`Subscription`]s.
pub(crate) struct Inner {
    /// Current count.
    value: Cell<i64>,

    /// Observers in the order of their subscription.
    observers: RefCell<Vec<Observer>>,
}

impl Inner {
    /// Removes every occurrence of the provided [`Observer`].
    pub(crate) fn remove(&self, observer: &Observer) {
        self.observers
            .borrow_mut()
            .retain(|o| !same_observer(o, observer));
    }

    /// Calls every [`Observer`] with the current count.
    ///
    /// Works on a snapshot of the observers list, so no borrow is held while
    /// an [`Observer`] runs and (un)subscriptions made by an [`Observer`]
    /// apply starting from the next notification.
    fn notify(&self) {
        let observers = self.observers.borrow().clone();
        for observer in observers {
            (observer)(self.value.get());
        }
    }
}

/// Integer counter notifying its [`Observer`]s on every [`get`] and [`set`].
///
/// Notification is synchronous and happens in the subscription order. A panic
/// in an [`Observer`] propagates to the caller and the remaining
/// [`Observer`]s are not notified.
///
/// [`get`]: ObservableCounter::get
/// [`set`]: ObservableCounter::set
pub struct ObservableCounter(Rc<Inner>);

impl ObservableCounter {
    /// Returns new [`ObservableCounter`] holding the `initial` count and
    /// having no [`Observer`]s.
    #[inline]
    pub fn new(initial: i64) -> Self {
        Self(Rc::new(Inner {
            value: Cell::new(initial),
            observers: RefCell::new(Vec::new()),
        }))
    }

    /// Appends the provided [`Observer`] to the end of the observers list.
    ///
    /// The same [`Observer`] may be subscribed several times, and will be
    /// notified once per each subscription.
    pub fn subscribe(&self, observer: Observer) -> Subscription {
        self.0.observers.borrow_mut().push(Rc::clone(&observer));
        Subscription::new(Rc::downgrade(&self.0), observer)
    }

    /// Wraps the provided closure into an [`Observer`] and subscribes it.
    ///
    /// Returns the created [`Observer`] along with its [`Subscription`].
    pub fn subscribe_fn<F>(&self, f: F) -> (Observer, Subscription)
    where
        F: Fn(i64) + 'static,
    {
        let observer: Observer = Rc::new(f);
        let subscription = self.subscribe(Rc::clone(&observer));
        (observer, subscription)
    }

    /// Removes every occurrence of the provided [`Observer`].
    ///
    /// Does nothing if it isn't subscribed.
    #[inline]
    pub fn unsubscribe(&self, observer: &Observer) {
        self.0.remove(observer);
    }

    /// Notifies all [`Observer`]s with the current count and returns it.
    pub fn get(&self) -> i64 {
        self.0.notify();
        self.0.value.get()
    }

    /// Sets the `new_value` as the current count, notifies all [`Observer`]s
    /// with it and returns it.
    pub fn set(&self, new_value: i64) -> i64 {
        self.0.value.set(new_value);
        self.0.notify();
        self.0.value.get()
    }

    /// Returns the current count without notifying anyone.
    #[inline]
    pub fn peek(&self) -> i64 {
        self.0.value.get()
    }

    /// Returns count of the currently subscribed [`Observer`]s, including
    /// repeated ones.
    #[inline]
    pub fn observers_count(&self) -> usize {
        self.0.observers.borrow().len()
    }

    /// Indicates whether the provided [`Observer`] is subscribed at least
    /// once.
    pub fn is_subscribed(&self, observer: &Observer) -> bool {
        self.0
            .observers
            .borrow()
            .iter()
            .any(|o| same_observer(o, observer))
    }
}

impl Default for ObservableCounter {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for ObservableCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCounter")
            .field("value", &self.0.value.get())
            .field("observers", &self.observers_count())
            .finish()
    }
}
