// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss countdown for the current toast.
//!
//! A [`DismissTimer`] is armed when a toast becomes current and lives inside
//! that toast's slot. Replacing or dismissing the slot drops the timer, so a
//! countdown can never outlive the toast it was started for.

use crate::toast::{ToastConfig, ToastId};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    toast: ToastId,
    deadline: Instant,
}

impl DismissTimer {
    /// Arms a countdown for `config` starting at `now`.
    ///
    /// Returns `None` when the toast has no auto-dismiss duration or when
    /// its deadline does not fit in an [`Instant`].
    #[must_use]
    pub fn arm(config: &ToastConfig, now: Instant) -> Option<Self> {
        let after = config.auto_dismiss_after()?;
        let deadline = now.checked_add(after)?;
        Some(Self {
            toast: config.id(),
            deadline,
        })
    }

    /// ID of the toast this countdown belongs to.
    #[must_use]
    pub fn toast(&self) -> ToastId {
        self.toast
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
