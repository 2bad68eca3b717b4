//! Click counter rendering an [`ObservableCounter`] on a display surface.
//!
//! [`ObservableCounter`]: observable_counter::ObservableCounter

#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod app;
pub mod conf;
pub mod display;
pub mod errors;
pub mod log;

#[doc(inline)]
pub use self::{app::App, conf::Conf, errors::AppError};
