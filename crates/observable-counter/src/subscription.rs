//! Handle of a single [`ObservableCounter`] subscription.
//!
//! [`ObservableCounter`]: crate::ObservableCounter

use std::{fmt, rc::Weak};

use crate::{counter::Inner, Observer};

/// Handle returned by [`ObservableCounter::subscribe`], bound to the
/// subscribed [`Observer`].
///
/// Dropping it does __not__ unsubscribe anything.
///
/// [`ObservableCounter::subscribe`]: crate::ObservableCounter::subscribe
pub struct Subscription {
    /// Counter the [`Observer`] was subscribed to.
    counter: Weak<Inner>,

    /// Subscribed [`Observer`].
    observer: Observer,
}

impl Subscription {
    #[inline]
    pub(crate) fn new(counter: Weak<Inner>, observer: Observer) -> Self {
        Self { counter, observer }
    }

    /// Returns the [`Observer`] this [`Subscription`] is bound to.
    #[inline]
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Removes every occurrence of the bound [`Observer`] from the counter.
    ///
    /// Does nothing if the counter is already dropped.
    pub fn unsubscribe(self) {
        if let Some(counter) = self.counter.upgrade() {
            counter.remove(&self.observer);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("alive", &(self.counter.strong_count() > 0))
            .finish()
    }
}
