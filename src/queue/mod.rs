// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast queue.
//!
//! [`ToastQueue`] shows at most one toast at a time and keeps the rest in a
//! FIFO backlog. Dismissing the current toast (explicitly, or when its
//! countdown runs out) promotes the next pending one.
//!
//! # Components
//!
//! - [`feature`] - state and taps of the toast currently on screen
//! - [`timer`] - [`DismissTimer`] countdown owned by the current slot
//!
//! # Usage
//!
//! ```
//! use iced_toasts::queue::ToastQueue;
//! use iced_toasts::toast::ToastConfig;
//!
//! let mut queue = ToastQueue::new();
//! queue.enqueue(ToastConfig::success("Image saved"));
//! queue.enqueue(ToastConfig::warning("Low disk space"));
//!
//! assert_eq!(queue.current().map(|t| t.title()), Some("Image saved"));
//! assert_eq!(queue.pending_count(), 1);
//!
//! queue.dismiss_current();
//! assert_eq!(queue.current().map(|t| t.title()), Some("Low disk space"));
//! ```
//!
//! # Countdown
//!
//! The queue never spawns anything. Whoever owns it drives the countdown,
//! either by polling [`ToastQueue::tick`] or by delivering
//! [`Message::Expired`] once [`ToastQueue::next_deadline`] has passed. Both
//! paths check the live current toast, so an expiry meant for a toast that is
//! already gone is ignored.

pub mod feature;
pub mod timer;

pub use feature::Action;
pub use timer::DismissTimer;

use crate::toast::{ToastConfig, ToastId, ToastPresentation};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::watch;

/// Messages for queue state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a toast, or queue it behind the current one.
    Enqueue(ToastConfig),
    /// Drop the current toast and promote the next pending one.
    DismissCurrent,
    /// A tap on the toast with the given ID.
    Toast(ToastId, Action),
    /// The countdown started for the given toast ran out.
    Expired(ToastId),
    /// Periodic tick for checking the countdown.
    Tick(Instant),
    /// Drop the current toast and everything pending.
    Clear,
}

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Manual,
    Expired,
    Cleared,
}

/// Events propagated to the owner of the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The toast became current.
    Presented(ToastConfig),
    /// The toast was appended to the backlog at the given position.
    Queued { id: ToastId, position: usize },
    /// The toast left the current slot.
    Dismissed { id: ToastId, reason: DismissReason },
    /// The body of the current toast was tapped.
    ToastTapped(ToastId),
    /// The action button of the current toast was tapped.
    ButtonTapped(ToastId),
}

/// What the queue does on its own after a tap has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapPolicy {
    pub dismiss_on_tap: bool,
    pub dismiss_on_button: bool,
}

/// Holds the toast on screen and the backlog behind it.
#[derive(Debug)]
pub struct ToastQueue {
    current: Option<feature::State>,
    pending: VecDeque<ToastConfig>,
    policy: TapPolicy,
    observers: watch::Sender<Option<ToastConfig>>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    /// Creates an idle queue with the default tap policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(TapPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: TapPolicy) -> Self {
        let (observers, _) = watch::channel(None);
        Self {
            current: None,
            pending: VecDeque::new(),
            policy,
            observers,
        }
    }

    /// Handles a message using the current time for any countdown it arms.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        self.update_at(message, Instant::now())
    }

    /// Handles a message, arming countdowns relative to `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();
        match message {
            Message::Enqueue(config) => self.push(config, now, &mut events),
            Message::DismissCurrent => self.dismiss(DismissReason::Manual, now, &mut events),
            Message::Toast(id, action) => self.tap(id, action, now, &mut events),
            Message::Expired(id) => {
                let armed_for_id = self
                    .current
                    .as_ref()
                    .and_then(feature::State::timer)
                    .is_some_and(|timer| timer.toast() == id);
                if armed_for_id {
                    self.dismiss(DismissReason::Expired, now, &mut events);
                } else {
                    tracing::trace!(toast = %id, "ignoring stale expiry");
                }
            }
            Message::Tick(tick) => {
                let expired = self
                    .current
                    .as_ref()
                    .and_then(feature::State::timer)
                    .is_some_and(|timer| timer.is_expired(tick));
                if expired {
                    self.dismiss(DismissReason::Expired, tick, &mut events);
                }
            }
            Message::Clear => {
                let dropped = self.pending.len();
                self.pending.clear();
                self.dismiss(DismissReason::Cleared, now, &mut events);
                if dropped > 0 {
                    tracing::debug!(dropped, "cleared pending toasts");
                }
            }
        }
        events
    }

    /// Shows `config` immediately if idle, otherwise queues it.
    pub fn enqueue(&mut self, config: ToastConfig) -> Vec<Event> {
        self.update(Message::Enqueue(config))
    }

    /// Dismisses the current toast. No-op when idle.
    pub fn dismiss_current(&mut self) -> Vec<Event> {
        self.update(Message::DismissCurrent)
    }

    /// Reports a tap on the action button of toast `id`.
    ///
    /// Ignored unless `id` is the current toast.
    pub fn button_tapped(&mut self, id: ToastId) -> Vec<Event> {
        self.update(Message::Toast(id, Action::ButtonTapped))
    }

    /// Reports a tap on the body of toast `id`.
    ///
    /// Ignored unless `id` is the current toast.
    pub fn toast_tapped(&mut self, id: ToastId) -> Vec<Event> {
        self.update(Message::Toast(id, Action::ToastTapped))
    }

    /// Delivers the expiry of the countdown started for `id`.
    pub fn expire(&mut self, id: ToastId) -> Vec<Event> {
        self.update(Message::Expired(id))
    }

    /// Dismisses the current toast if its countdown has run out by `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.update_at(Message::Tick(now), now)
    }

    /// Drops the current toast and the whole backlog.
    pub fn clear(&mut self) -> Vec<Event> {
        self.update(Message::Clear)
    }

    /// Returns the toast on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ToastConfig> {
        self.current.as_ref().map(feature::State::config)
    }

    /// Returns the renderer projection of the toast on screen.
    #[must_use]
    pub fn presentation(&self) -> Option<ToastPresentation<'_>> {
        self.current().map(ToastPresentation::from)
    }

    /// Returns the backlog in display order.
    pub fn pending(&self) -> impl Iterator<Item = &ToastConfig> {
        self.pending.iter()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the countdown of the toast on screen, if it has one.
    #[must_use]
    pub fn timer(&self) -> Option<&DismissTimer> {
        self.current.as_ref().and_then(feature::State::timer)
    }

    /// Returns when the toast on screen auto-dismisses.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer().map(DismissTimer::deadline)
    }

    /// Returns a receiver that sees every change of the current toast.
    pub fn subscribe(&self) -> watch::Receiver<Option<ToastConfig>> {
        self.observers.subscribe()
    }

    fn push(&mut self, config: ToastConfig, now: Instant, events: &mut Vec<Event>) {
        if self.current.is_none() {
            self.show(config, now, events);
        } else {
            let id = config.id();
            self.pending.push_back(config);
            let position = self.pending.len() - 1;
            tracing::debug!(toast = %id, position, "toast queued");
            events.push(Event::Queued { id, position });
        }
    }

    fn tap(&mut self, id: ToastId, action: Action, now: Instant, events: &mut Vec<Event>) {
        let Some(state) = self.current.as_ref().filter(|state| state.id() == id) else {
            tracing::trace!(toast = %id, ?action, "ignoring tap on stale toast");
            return;
        };
        events.push(feature::update(state, action));

        let dismiss = match action {
            Action::ToastTapped => self.policy.dismiss_on_tap,
            Action::ButtonTapped => self.policy.dismiss_on_button,
        };
        if dismiss {
            self.dismiss(DismissReason::Manual, now, events);
        }
    }

    fn dismiss(&mut self, reason: DismissReason, now: Instant, events: &mut Vec<Event>) {
        let Some(state) = self.current.take() else {
            return;
        };
        let id = state.id();
        tracing::debug!(toast = %id, ?reason, "toast dismissed");
        events.push(Event::Dismissed { id, reason });

        match self.pending.pop_front() {
            Some(next) => self.show(next, now, events),
            None => self.publish(),
        }
    }

    fn show(&mut self, config: ToastConfig, now: Instant, events: &mut Vec<Event>) {
        let state = feature::State::present(config, now);
        tracing::debug!(
            toast = %state.id(),
            level = %state.config().level(),
            timed = state.timer().is_some(),
            "toast presented"
        );
        events.push(Event::Presented(state.config().clone()));
        self.current = Some(state);
        self.publish();
    }

    fn publish(&self) {
        self.observers.send_replace(self.current().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn titles(queue: &ToastQueue) -> Vec<&str> {
        queue.pending().map(ToastConfig::title).collect()
    }

    #[test]
    fn new_queue_is_idle() {
        let queue = ToastQueue::new();
        assert!(queue.is_idle());
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.next_deadline().is_none());
    }

    #[test]
    fn first_enqueue_becomes_current_rest_queue_in_order() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A");
        let events = queue.enqueue(a.clone());
        assert_eq!(events, vec![Event::Presented(a.clone())]);

        for title in ["B", "C", "D"] {
            queue.enqueue(ToastConfig::info(title));
        }

        assert_eq!(queue.current(), Some(&a));
        assert_eq!(titles(&queue), vec!["B", "C", "D"]);
    }

    #[test]
    fn enqueue_while_showing_reports_position() {
        let mut queue = ToastQueue::new();
        queue.enqueue(ToastConfig::info("A"));
        let b = ToastConfig::info("B");
        let c = ToastConfig::info("C");

        assert_eq!(
            queue.enqueue(b.clone()),
            vec![Event::Queued { id: b.id(), position: 0 }]
        );
        assert_eq!(
            queue.enqueue(c.clone()),
            vec![Event::Queued { id: c.id(), position: 1 }]
        );
    }

    #[test]
    fn scenario_enqueue_three_then_dismiss_all() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A").with_duration(4);
        let b = ToastConfig::info("B");
        let c = ToastConfig::info("C");

        queue.enqueue(a.clone());
        assert_eq!(queue.current(), Some(&a));
        assert_eq!(queue.pending_count(), 0);

        queue.enqueue(b.clone());
        queue.enqueue(c.clone());
        assert_eq!(queue.current(), Some(&a));
        assert_eq!(titles(&queue), vec!["B", "C"]);

        let events = queue.dismiss_current();
        assert_eq!(
            events,
            vec![
                Event::Dismissed { id: a.id(), reason: DismissReason::Manual },
                Event::Presented(b.clone()),
            ]
        );
        assert_eq!(queue.current(), Some(&b));
        assert_eq!(titles(&queue), vec!["C"]);

        queue.dismiss_current();
        queue.dismiss_current();
        assert!(queue.is_idle());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn n_plus_one_dismissals_drain_queue() {
        let mut queue = ToastQueue::new();
        let n = 5;
        for i in 0..=n {
            queue.enqueue(ToastConfig::info(format!("toast-{i}")));
        }
        assert_eq!(queue.pending_count(), n);

        for _ in 0..=n {
            queue.dismiss_current();
        }
        assert!(queue.is_idle());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn dismiss_on_idle_is_noop() {
        let mut queue = ToastQueue::new();
        assert!(queue.dismiss_current().is_empty());
        assert!(queue.is_idle());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn tick_before_deadline_keeps_toast() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        queue.update_at(Message::Enqueue(ToastConfig::info("A").with_duration(4)), start);

        assert!(queue.tick(start + Duration::from_secs(3)).is_empty());
        assert!(!queue.is_idle());
    }

    #[test]
    fn tick_after_deadline_advances_like_dismiss() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let a = ToastConfig::info("A").with_duration(4);
        let b = ToastConfig::info("B").with_duration(4);
        queue.update_at(Message::Enqueue(a.clone()), start);
        queue.update_at(Message::Enqueue(b.clone()), start);

        let fired = start + Duration::from_secs(4);
        let events = queue.tick(fired);
        assert_eq!(
            events,
            vec![
                Event::Dismissed { id: a.id(), reason: DismissReason::Expired },
                Event::Presented(b.clone()),
            ]
        );

        // B's countdown starts when B is shown, not when it was queued.
        assert_eq!(queue.next_deadline(), Some(fired + Duration::from_secs(4)));
        assert!(queue.tick(fired + Duration::from_secs(3)).is_empty());
        assert_eq!(queue.current(), Some(&b));
    }

    #[test]
    fn expired_toast_never_reappears() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A");
        queue.enqueue(a.clone());
        queue.expire(a.id());

        assert!(queue.is_idle());
        assert!(queue.expire(a.id()).is_empty());
        queue.enqueue(ToastConfig::info("B"));
        assert_ne!(queue.current().map(ToastConfig::id), Some(a.id()));
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let a = ToastConfig::info("A").with_duration(0);
        queue.update_at(Message::Enqueue(a.clone()), start);

        assert!(queue.next_deadline().is_none());
        assert!(queue.tick(start + Duration::from_secs(3600)).is_empty());
        assert!(queue.expire(a.id()).is_empty());
        assert_eq!(queue.current(), Some(&a));

        queue.dismiss_current();
        assert!(queue.is_idle());
    }

    #[test]
    fn negative_duration_stays_until_dismissed() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let a = ToastConfig::warning("A").with_duration(-1);
        let b = ToastConfig::info("B");
        queue.update_at(Message::Enqueue(a.clone()), start);
        queue.update_at(Message::Enqueue(b.clone()), start);

        assert!(queue.next_deadline().is_none());
        assert!(queue.tick(start + Duration::from_secs(86_400)).is_empty());
        assert!(queue.update(Message::Expired(a.id())).is_empty());
        assert_eq!(queue.current(), Some(&a));
        assert_eq!(titles(&queue), vec!["B"]);

        queue.dismiss_current();
        assert_eq!(queue.current(), Some(&b));
    }

    #[test]
    fn huge_duration_is_shown_without_countdown() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let a = ToastConfig::info("A").with_duration(i64::MAX);
        let b = ToastConfig::info("B").with_duration(2);

        let events = queue.update_at(Message::Enqueue(a.clone()), start);
        assert_eq!(events, vec![Event::Presented(a.clone())]);
        queue.update_at(Message::Enqueue(b.clone()), start);

        assert!(queue.next_deadline().is_none());
        assert!(queue.tick(start + Duration::from_secs(86_400)).is_empty());
        assert!(queue.expire(a.id()).is_empty());
        assert_eq!(queue.current(), Some(&a));

        // The next toast still gets its own countdown.
        queue.update_at(Message::DismissCurrent, start);
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_secs(2)));
    }

    #[test]
    fn stale_expiry_does_not_touch_new_toast() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A");
        let b = ToastConfig::info("B");
        queue.enqueue(a.clone());
        queue.enqueue(b.clone());

        // A is dismissed by hand before its countdown fires.
        queue.dismiss_current();
        assert_eq!(queue.current(), Some(&b));

        // The countdown for A fires late.
        assert!(queue.expire(a.id()).is_empty());
        assert_eq!(queue.current(), Some(&b));
        assert_eq!(queue.timer().map(DismissTimer::toast), Some(b.id()));
    }

    #[test]
    fn taps_are_reported_without_dismissing() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A").with_button("Undo");
        queue.enqueue(a.clone());

        assert_eq!(queue.toast_tapped(a.id()), vec![Event::ToastTapped(a.id())]);
        assert_eq!(queue.button_tapped(a.id()), vec![Event::ButtonTapped(a.id())]);
        assert_eq!(queue.current(), Some(&a));
    }

    #[test]
    fn taps_for_other_ids_are_dropped() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A");
        let b = ToastConfig::info("B");
        queue.enqueue(a.clone());
        queue.enqueue(b.clone());

        assert!(queue.button_tapped(b.id()).is_empty());
        assert!(queue.toast_tapped(ToastId::from_raw(u64::MAX)).is_empty());
        assert_eq!(queue.current(), Some(&a));
    }

    #[test]
    fn tap_policy_can_dismiss_on_button() {
        let mut queue = ToastQueue::with_policy(TapPolicy {
            dismiss_on_tap: false,
            dismiss_on_button: true,
        });
        let a = ToastConfig::info("A").with_button("Open");
        queue.enqueue(a.clone());

        assert_eq!(queue.toast_tapped(a.id()), vec![Event::ToastTapped(a.id())]);
        assert!(!queue.is_idle());

        let events = queue.button_tapped(a.id());
        assert_eq!(
            events,
            vec![
                Event::ButtonTapped(a.id()),
                Event::Dismissed { id: a.id(), reason: DismissReason::Manual },
            ]
        );
        assert!(queue.is_idle());
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = ToastQueue::new();
        let a = ToastConfig::info("A");
        queue.enqueue(a.clone());
        queue.enqueue(ToastConfig::info("B"));
        queue.enqueue(ToastConfig::info("C"));

        let events = queue.clear();
        assert_eq!(
            events,
            vec![Event::Dismissed { id: a.id(), reason: DismissReason::Cleared }]
        );
        assert!(queue.is_idle());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn subscribers_see_current_changes() {
        let mut queue = ToastQueue::new();
        let mut rx = queue.subscribe();
        assert!(rx.borrow_and_update().is_none());

        let a = ToastConfig::info("A");
        let b = ToastConfig::info("B");
        queue.enqueue(a.clone());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref(), Some(&a));

        // Queuing behind A does not change what is shown.
        queue.enqueue(b.clone());
        assert!(!rx.has_changed().unwrap());

        queue.dismiss_current();
        assert_eq!(rx.borrow_and_update().as_ref(), Some(&b));

        queue.dismiss_current();
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn presentation_follows_current() {
        let mut queue = ToastQueue::new();
        assert!(queue.presentation().is_none());

        let a = ToastConfig::warning("Watch out!");
        queue.enqueue(a.clone());
        let view = queue.presentation().unwrap();
        assert_eq!(view.id, a.id());
        assert_eq!(view.title, "Watch out!");
    }
}
