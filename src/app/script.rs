// SPDX-License-Identifier: MPL-2.0
//! Toast scripts for the demo binary.
//!
//! A script is a TOML file with one `[[toast]]` table per toast. Every
//! [`ToastConfig`] field is accepted, plus `after_ms`, the pause before the
//! toast is enqueued.
//!
//! ```toml
//! [[toast]]
//! title = "Game added!"
//! subtitle = "It went well!"
//! level = "success"
//!
//! [[toast]]
//! after_ms = 500
//! title = "Some error has happened."
//! level = "error"
//! button_label = "Retry"
//! ```

use crate::error::{Error, Result};
use crate::toast::ToastConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEntry {
    #[serde(default)]
    pub after_ms: u64,
    #[serde(flatten)]
    pub toast: ToastConfig,
}

impl ScriptEntry {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.after_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "toast")]
    pub entries: Vec<ScriptEntry>,
}

impl Script {
    /// Builds a script of info toasts shown back to back.
    pub fn from_titles<I>(titles: I, duration_secs: i64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let entries = titles
            .into_iter()
            .map(|title| ScriptEntry {
                after_ms: 0,
                toast: ToastConfig::info(title).with_duration(duration_secs),
            })
            .collect();
        Self { entries }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Script(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
