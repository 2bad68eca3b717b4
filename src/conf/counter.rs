//! Counter settings.

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Counter settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct Counter {
    /// Count the counter starts with.
    ///
    /// Defaults to `0`.
    #[default(0)]
    pub initial: i64,
}
