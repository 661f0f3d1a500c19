//! Common types and utilities shared across domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration in whole seconds
///
/// The catalog dataset reports media durations in integer seconds, so that
/// is the unit stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(u64);

impl Duration {
    /// Zero duration constant
    pub const ZERO: Self = Self(0);

    /// Creates a duration from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the duration in seconds
    pub fn as_seconds(&self) -> u64 {
        self.0
    }

    /// Returns true if the duration is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats as HH:MM:SS with every unit zero-padded to two digits
    pub fn as_time_string(&self) -> String {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_time_string())
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d.as_secs())
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        std::time::Duration::from_secs(d.0)
    }
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
