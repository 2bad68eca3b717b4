//! Logging settings.

use std::{convert::TryFrom, str::FromStr};

use failure::Fail;
use serde::{Deserialize, Serialize};

/// Logging settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Log {
    /// Most verbose level of logged records, or `OFF`.
    ///
    /// Defaults to `INFO`.
    pub level: LogLevel,
}

impl Log {
    /// Returns the most verbose [`slog::Level`] to log. `None` if logging is
    /// disabled.
    #[inline]
    pub fn level(&self) -> Option<slog::Level> {
        match self.level {
            LogLevel::Off => None,
            LogLevel::Max(level) => Some(level),
        }
    }
}

/// Configured logging level, parsed case-insensitively from its name.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Nothing is logged.
    Off,

    /// Records of this level and more severe ones are logged.
    Max(slog::Level),
}

impl Default for LogLevel {
    #[inline]
    fn default() -> Self {
        Self::Max(slog::Level::Info)
    }
}

/// Error of parsing an unknown [`LogLevel`] name.
#[derive(Debug, Fail)]
#[fail(display = "Unknown log level: {}", _0)]
pub struct UnknownLogLevel(String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        if name == "OFF" {
            return Ok(Self::Off);
        }
        slog::Level::from_str(&name)
            .map(Self::Max)
            .map_err(|_| UnknownLogLevel(s.to_owned()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = UnknownLogLevel;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => "OFF".to_owned(),
            LogLevel::Max(level) => level.as_str().to_owned(),
        }
    }
}
