// SPDX-License-Identifier: MPL-2.0
//! Owners that drive a [`ToastQueue`] over time.
//!
//! - [`Toaster`] runs the queue headless on a tokio task: commands arrive
//!   through a [`ToasterHandle`], the countdown is a `sleep_until` on the
//!   current toast's deadline.
//! - [`subscription`] is the Iced-side equivalent for applications that keep
//!   the queue in their own state.

pub mod script;
pub mod subscription;
mod tick_interval;

pub use script::{Script, ScriptEntry};
pub use tick_interval::TickInterval;

use crate::error::{Error, Result};
use crate::queue::{Action, DismissTimer, Event, Message, TapPolicy, ToastQueue};
use crate::toast::{ToastConfig, ToastId};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::{self, Instant};

/// Capacity of the event broadcast; slow listeners skip older events.
const EVENT_CAPACITY: usize = 64;

/// Requests a [`ToasterHandle`] can send to a running [`Toaster`].
#[derive(Debug, Clone)]
pub enum Command {
    Enqueue(ToastConfig),
    DismissCurrent,
    ToastTapped(ToastId),
    ButtonTapped(ToastId),
    Clear,
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        match command {
            Command::Enqueue(config) => Message::Enqueue(config),
            Command::DismissCurrent => Message::DismissCurrent,
            Command::ToastTapped(id) => Message::Toast(id, Action::ToastTapped),
            Command::ButtonTapped(id) => Message::Toast(id, Action::ButtonTapped),
            Command::Clear => Message::Clear,
        }
    }
}

/// Cheap, clonable sender for a [`Toaster`].
#[derive(Debug, Clone)]
pub struct ToasterHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ToasterHandle {
    pub fn enqueue(&self, config: ToastConfig) -> Result<()> {
        self.send(Command::Enqueue(config))
    }

    pub fn dismiss_current(&self) -> Result<()> {
        self.send(Command::DismissCurrent)
    }

    pub fn toast_tapped(&self, id: ToastId) -> Result<()> {
        self.send(Command::ToastTapped(id))
    }

    pub fn button_tapped(&self, id: ToastId) -> Result<()> {
        self.send(Command::ButtonTapped(id))
    }

    pub fn clear(&self) -> Result<()> {
        self.send(Command::Clear)
    }

    pub fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| Error::Closed)
    }
}

/// Single owner of a [`ToastQueue`] running on one tokio task.
#[derive(Debug)]
pub struct Toaster {
    queue: ToastQueue,
    commands: mpsc::UnboundedReceiver<Command>,
    events: broadcast::Sender<Event>,
}

impl Toaster {
    /// Creates an idle toaster and the handle used to feed it.
    #[must_use]
    pub fn new(policy: TapPolicy) -> (Self, ToasterHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let toaster = Self {
            queue: ToastQueue::with_policy(policy),
            commands: rx,
            events,
        };
        (toaster, ToasterHandle { commands: tx })
    }

    #[must_use]
    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    /// Returns a receiver that sees every change of the current toast.
    pub fn subscribe(&self) -> watch::Receiver<Option<ToastConfig>> {
        self.queue.subscribe()
    }

    /// Returns a receiver for queue events (presented, dismissed, taps).
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Serves commands and the countdown until every handle is dropped and
    /// no countdown is left to run.
    pub async fn run(mut self) {
        let mut accepting = true;
        loop {
            let armed = self.queue.timer().copied();
            if !accepting && armed.is_none() {
                break;
            }

            tokio::select! {
                command = self.commands.recv(), if accepting => match command {
                    Some(command) => self.apply(command.into()),
                    None => {
                        tracing::debug!("all toaster handles dropped");
                        accepting = false;
                    }
                },
                () = wait_for(armed) => {
                    if let Some(timer) = armed {
                        self.apply(Message::Expired(timer.toast()));
                    }
                }
            }
        }

        if !self.queue.is_idle() {
            tracing::warn!(
                pending = self.queue.pending_count(),
                "toaster stopped with a toast that only a manual dismiss can clear"
            );
        }
    }

    fn apply(&mut self, message: Message) {
        let now = Instant::now().into_std();
        for event in self.queue.update_at(message, now) {
            match &event {
                Event::Presented(config) => {
                    tracing::info!(toast = %config.id(), title = config.title(), "showing toast");
                }
                Event::Dismissed { id, reason } => {
                    tracing::info!(toast = %id, ?reason, "toast gone");
                }
                Event::Queued { .. } | Event::ToastTapped(_) | Event::ButtonTapped(_) => {}
            }
            // No listener is not an error.
            let _ = self.events.send(event);
        }
    }
}

/// Sleeps until the countdown's deadline, or forever without one.
async fn wait_for(timer: Option<DismissTimer>) {
    match timer {
        Some(timer) => time::sleep_until(Instant::from_std(timer.deadline())).await,
        None => std::future::pending().await,
    }
}
