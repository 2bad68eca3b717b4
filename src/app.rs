//! Application context binding an [`ObservableCounter`] to a display surface.

use std::rc::Rc;

use observable_counter::{ObservableCounter, Observer, Subscription};

use crate::{conf, display::CountDisplay, errors::AppError, log::prelude::*};

/// Returns [`Observer`] logging every notified count on `INFO` level.
pub fn logging_observer() -> Observer {
    Rc::new(|count: i64| info!("current count"; "count" => count))
}

/// Owner of the [`ObservableCounter`] and the [`CountDisplay`] it is rendered
/// on.
///
/// Click events are expected to be delivered via [`App::on_increment_click`].
#[derive(Debug)]
pub struct App<D> {
    /// Counter being displayed.
    counter: ObservableCounter,

    /// Surface the count is rendered on.
    display: D,

    /// [`Subscription`] of the [`logging_observer`], if [`App::start`] was
    /// called.
    logging: Option<Subscription>,
}

impl<D: CountDisplay> App<D> {
    /// Creates new [`App`] with a counter set to the configured initial count.
    ///
    /// Nothing is subscribed or rendered until [`App::start`] is called.
    pub fn new(conf: &conf::Counter, display: D) -> Self {
        Self {
            counter: ObservableCounter::new(conf.initial),
            display,
            logging: None,
        }
    }

    /// Subscribes the [`logging_observer`] (once, no matter how many times
    /// this is called) and renders the current count.
    ///
    /// # Errors
    ///
    /// With [`AppError::Display`] if rendering fails.
    pub fn start(&mut self) -> Result<i64, AppError> {
        if self.logging.is_none() {
            self.logging = Some(self.counter.subscribe(logging_observer()));
            debug!("Logging observer subscribed");
        }
        let count = self.counter.get();
        self.display.show(count)?;
        Ok(count)
    }

    /// Handles a single click on the increment control.
    ///
    /// Reads the current count, writes the incremented one back and renders
    /// the written count. Both the read and the write notify observers.
    ///
    /// # Errors
    ///
    /// With [`AppError::Display`] if rendering fails. The counter is
    /// incremented anyway.
    pub fn on_increment_click(&mut self) -> Result<i64, AppError> {
        let count = self.counter.get().wrapping_add(1);
        let count = self.counter.set(count);
        self.display.show(count)?;
        Ok(count)
    }

    /// Unsubscribes the [`logging_observer`], if it was subscribed.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.logging.take() {
            subscription.unsubscribe();
            debug!("Logging observer unsubscribed");
        }
    }

    /// Returns the underlying [`ObservableCounter`].
    #[inline]
    pub fn counter(&self) -> &ObservableCounter {
        &self.counter
    }

    /// Returns the display surface.
    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }
}
