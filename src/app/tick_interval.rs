// SPDX-License-Identifier: MPL-2.0
//! Tick interval domain type for the auto-dismiss subscription.

use crate::config::{DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use std::time::Duration;

/// Polling interval in milliseconds, always within 16–1000 ms.
///
/// # Example
///
/// ```
/// use iced_toasts::app::TickInterval;
///
/// let interval = TickInterval::new(250);
/// assert_eq!(interval.value(), 250);
///
/// // Values outside range are clamped
/// assert_eq!(TickInterval::new(5).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_TICK_INTERVAL_MS)
    }
}

impl From<Option<u64>> for TickInterval {
    fn from(value: Option<u64>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}
