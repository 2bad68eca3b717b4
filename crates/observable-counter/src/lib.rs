//! This crate provides an integer counter which synchronously notifies its
//! observers on every read and every write.
//!
//! # Basic interaction with an `ObservableCounter`
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use observable_counter::ObservableCounter;
//!
//! let counter = ObservableCounter::new(0);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let (_, _subscription) = counter.subscribe_fn({
//!     let seen = Rc::clone(&seen);
//!     move |count| seen.borrow_mut().push(count)
//! });
//!
//! // Writing notifies observers with the new value:
//! assert_eq!(counter.set(5), 5);
//! // And so does reading:
//! assert_eq!(counter.get(), 5);
//!
//! assert_eq!(*seen.borrow(), vec![5, 5]);
//! ```
//!
//! # Unsubscribing
//!
//! Every [`ObservableCounter::subscribe`] call returns a [`Subscription`]
//! bound to the subscribed [`Observer`]. Dropping it keeps the observer
//! subscribed, so the handle may be freely ignored.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use observable_counter::{ObservableCounter, Observer};
//!
//! let counter = ObservableCounter::new(0);
//!
//! let calls = Rc::new(Cell::new(0));
//! let observer: Observer = {
//!     let calls = Rc::clone(&calls);
//!     Rc::new(move |_: i64| calls.set(calls.get() + 1))
//! };
//!
//! // Subscribing the same observer twice makes it fire twice:
//! let subscription = counter.subscribe(Rc::clone(&observer));
//! counter.subscribe(Rc::clone(&observer));
//! counter.set(1);
//! assert_eq!(calls.get(), 2);
//!
//! // But unsubscribing removes every occurrence of it:
//! subscription.unsubscribe();
//! counter.set(2);
//! assert_eq!(calls.get(), 2);
//!
//! // Unsubscribing an absent observer is a no-op:
//! counter.unsubscribe(&observer);
//! ```

#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![deny(missing_docs)]

mod counter;
mod subscription;

use std::rc::Rc;

#[doc(inline)]
pub use self::{counter::ObservableCounter, subscription::Subscription};

/// Callback notified with the current count of an [`ObservableCounter`].
///
/// Observers are compared by identity of their allocation, so the same
/// [`Observer`] must be cloned (not re-created) to be unsubscribed later.
pub type Observer = Rc<dyn Fn(i64)>;

/// Indicates whether both [`Observer`]s point to the same callback.
#[inline]
pub(crate) fn same_observer(a: &Observer, b: &Observer) -> bool {
    // Only data pointers are compared, since vtable pointers of the same
    // type are not guaranteed to be unique.
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}
