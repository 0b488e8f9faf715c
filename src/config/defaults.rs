// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: display duration of a toast
//! - **Tick**: polling interval used by the Iced subscription

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Seconds a toast stays on screen when no duration is given.
pub const DEFAULT_TOAST_DURATION_SECS: i64 = 4;

/// Longest countdown that is still armed (one year). Longer durations keep
/// the toast up until it is dismissed.
pub const MAX_TOAST_DURATION_SECS: i64 = 365 * 24 * 60 * 60;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default polling interval for auto-dismiss checks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum polling interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum polling interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_SECS > 0);
    assert!(MAX_TOAST_DURATION_SECS >= DEFAULT_TOAST_DURATION_SECS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
