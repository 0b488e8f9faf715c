// SPDX-License-Identifier: MPL-2.0
//! Iced subscriptions driving the queue countdown.
//!
//! An Iced application that owns a [`ToastQueue`] directly maps this
//! subscription into its own message type and forwards the resulting
//! [`Message::Tick`]s to [`ToastQueue::update`].

use super::TickInterval;
use crate::queue::{Message, ToastQueue};
use iced::{time, Subscription};

/// Returns true while the toast on screen has a countdown running.
#[must_use]
pub fn needs_tick(queue: &ToastQueue) -> bool {
    queue.next_deadline().is_some()
}

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Ticks only while a timed toast is shown; manual toasts and an idle queue
/// cost nothing.
pub fn create_tick_subscription(
    queue: &ToastQueue,
    interval: TickInterval,
) -> Subscription<Message> {
    if needs_tick(queue) {
        time::every(interval.as_duration()).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
