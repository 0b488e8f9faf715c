// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastConfig`] is an immutable description of one toast: what it says,
//! how severe it is, and how long it stays on screen before auto-dismissing.

use crate::config::{DEFAULT_TOAST_DURATION_SECS, MAX_TOAST_DURATION_SECS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a caller-supplied raw identifier.
    ///
    /// Uniqueness is the caller's responsibility; two configs sharing an ID
    /// are indistinguishable to tap and expiry routing.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity of a toast. Only affects the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl ToastLevel {
    /// All levels, in declaration order.
    pub const ALL: [ToastLevel; 4] = [
        ToastLevel::Info,
        ToastLevel::Warning,
        ToastLevel::Error,
        ToastLevel::Success,
    ];
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastLevel::Info => "info",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
            ToastLevel::Success => "success",
        };
        f.write_str(name)
    }
}

fn default_duration() -> i64 {
    DEFAULT_TOAST_DURATION_SECS
}

/// A toast to be displayed to the user.
///
/// Values are immutable once built; the `with_*` methods consume and return
/// a new value. Equality compares every field, including the ID, so two
/// toasts with identical text are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    id: ToastId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default)]
    level: ToastLevel,
    /// Whole seconds on screen; zero or negative disables auto-dismiss.
    #[serde(default = "default_duration")]
    duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    button_label: Option<String>,
}

impl ToastConfig {
    /// Creates a toast with a fresh ID and the default duration.
    pub fn new(level: ToastLevel, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            title: title.into(),
            subtitle: None,
            level,
            duration: DEFAULT_TOAST_DURATION_SECS,
            button_label: None,
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title)
    }

    /// Replaces the generated ID with a caller-supplied one.
    #[must_use]
    pub fn with_id(mut self, id: ToastId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the on-screen duration in seconds. `0` or less keeps the toast
    /// visible until it is dismissed explicitly.
    #[must_use]
    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = seconds;
        self
    }

    /// Adds a secondary action button with the given label.
    #[must_use]
    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn level(&self) -> ToastLevel {
        self.level
    }

    /// Returns the raw duration in seconds, as configured.
    #[must_use]
    pub fn duration(&self) -> i64 {
        self.duration
    }

    #[must_use]
    pub fn button_label(&self) -> Option<&str> {
        self.button_label.as_deref()
    }

    /// Returns how long the toast stays up before auto-dismissing.
    /// Returns `None` when the toast must be dismissed manually, which covers
    /// `duration <= 0` and anything past [`MAX_TOAST_DURATION_SECS`].
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if !(1..=MAX_TOAST_DURATION_SECS).contains(&self.duration) {
            return None;
        }
        u64::try_from(self.duration).ok().map(Duration::from_secs)
    }
}
