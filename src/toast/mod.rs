// SPDX-License-Identifier: MPL-2.0
//! Toast values and their presentation table.
//!
//! - [`config`] - immutable [`ToastConfig`] with its [`ToastId`] and [`ToastLevel`]
//! - [`presentation`] - level → icon/color table and the renderer projection

pub mod config;
pub mod presentation;

pub use config::{ToastConfig, ToastId, ToastLevel};
pub use presentation::{ToastIcon, ToastPresentation};
