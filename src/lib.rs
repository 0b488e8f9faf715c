// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification queue for Iced applications.
//!
//! It shows at most one toast at a time, keeps the others in a FIFO backlog
//! and auto-dismisses each toast after its configured duration.
//!
//! - [`toast`] - the immutable [`toast::ToastConfig`] and its presentation table
//! - [`queue`] - the single-slot [`queue::ToastQueue`] reducer
//! - [`app`] - owners that drive the countdown (tokio task or Iced subscription)
//! - [`config`] - user settings stored in `settings.toml`

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod queue;
pub mod toast;
