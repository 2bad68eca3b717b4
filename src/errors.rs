//! Errors which may occur in application.

use std::io;

use derive_more::From;
use failure::Fail;

/// Any error that may occur while driving the counter.
#[derive(Debug, Fail, From)]
pub enum AppError {
    /// Display surface failed to render the count.
    #[fail(display = "Failed to render count: {}", _0)]
    Display(#[fail(cause)] io::Error),
}
