// SPDX-License-Identifier: MPL-2.0
//! State and actions of the single toast currently on screen.
//!
//! The queue scopes every tap into the feature of its current toast. The
//! feature does not interpret taps; it turns them into outward events keyed
//! by the toast's ID.

use super::timer::DismissTimer;
use super::Event;
use crate::toast::{ToastConfig, ToastId};
use std::time::Instant;

/// User interactions a rendered toast can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The action button was pressed.
    ButtonTapped,
    /// The toast body was pressed.
    ToastTapped,
}

/// The current toast together with its auto-dismiss countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    config: ToastConfig,
    timer: Option<DismissTimer>,
}

impl State {
    /// Makes `config` the shown toast, arming its countdown at `now`.
    pub fn present(config: ToastConfig, now: Instant) -> Self {
        let timer = DismissTimer::arm(&config, now);
        Self { config, timer }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn id(&self) -> ToastId {
        self.config.id()
    }

    pub fn timer(&self) -> Option<&DismissTimer> {
        self.timer.as_ref()
    }
}

/// Process an action for the shown toast and return the event to surface.
pub fn update(state: &State, action: Action) -> Event {
    match action {
        Action::ButtonTapped => Event::ButtonTapped(state.id()),
        Action::ToastTapped => Event::ToastTapped(state.id()),
    }
}
