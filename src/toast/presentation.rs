// SPDX-License-Identifier: MPL-2.0
//! Read-only projection of a toast for renderers.
//!
//! The level → icon/color mapping is a static table; nothing here holds
//! state. Renderers subscribe to the queue's current toast and build a
//! [`ToastPresentation`] from it each time it changes.

use super::config::{ToastConfig, ToastId, ToastLevel};
use iced::Color;

pub mod palette {
    use iced::Color;

    pub const ORANGE_500: Color = Color::from_rgb(1.0, 0.584, 0.0);
    pub const BROWN_500: Color = Color::from_rgb(0.635, 0.518, 0.369);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

/// Icon shown in the leading circle of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastIcon {
    Lightbulb,
    DoubleExclamation,
    Cross,
    Checkmark,
}

impl ToastIcon {
    /// Symbol name as used by system icon sets.
    #[must_use]
    pub fn symbol_name(self) -> &'static str {
        match self {
            ToastIcon::Lightbulb => "lightbulb",
            ToastIcon::DoubleExclamation => "exclamationmark.2",
            ToastIcon::Cross => "xmark",
            ToastIcon::Checkmark => "checkmark",
        }
    }

    /// Plain-text fallback for terminals and logs.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            ToastIcon::Lightbulb => '💡',
            ToastIcon::DoubleExclamation => '‼',
            ToastIcon::Cross => '✗',
            ToastIcon::Checkmark => '✓',
        }
    }
}

impl ToastLevel {
    #[must_use]
    pub fn icon(self) -> ToastIcon {
        match self {
            ToastLevel::Info => ToastIcon::Lightbulb,
            ToastLevel::Warning => ToastIcon::DoubleExclamation,
            ToastLevel::Error => ToastIcon::Cross,
            ToastLevel::Success => ToastIcon::Checkmark,
        }
    }

    /// Returns the accent color used for the icon.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            ToastLevel::Info => palette::ORANGE_500,
            ToastLevel::Warning => palette::BROWN_500,
            ToastLevel::Error => palette::ERROR_500,
            ToastLevel::Success => palette::SUCCESS_500,
        }
    }
}

/// Everything a renderer needs to draw one toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastPresentation<'a> {
    pub id: ToastId,
    pub icon: ToastIcon,
    pub accent: Color,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Present when the card exposes a secondary action.
    pub button_label: Option<&'a str>,
}

impl<'a> ToastPresentation<'a> {
    /// Title and subtitle joined the way the card lays them out on one line.
    #[must_use]
    pub fn headline(&self) -> String {
        match self.subtitle {
            Some(subtitle) => format!("{} {}", self.title, subtitle),
            None => self.title.to_owned(),
        }
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.button_label.is_some()
    }
}

impl<'a> From<&'a ToastConfig> for ToastPresentation<'a> {
    fn from(config: &'a ToastConfig) -> Self {
        Self {
            id: config.id(),
            icon: config.level().icon(),
            accent: config.level().accent_color(),
            title: config.title(),
            subtitle: config.subtitle(),
            button_label: config.button_label(),
        }
    }
}
