//! Display preferences (language and theme)
//!
//! Preferences are owned by a [`PreferenceStore`] that is constructed once and
//! handed to the app. Views subscribe to it and refresh their cached
//! translator and palette when it changes.

use crate::i18n::Language;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Light/dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Translation key for the mode the toggle switches to
    pub fn toggle_label_key(self) -> (&'static str, &'static str) {
        match self {
            Self::Dark => ("messages.lightMode", "Light Mode"),
            Self::Light => ("messages.darkMode", "Dark Mode"),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                error: Color::Red,
                success: Color::Green,
                status_bar: Color::DarkGray,
            },
            Self::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                error: Color::Red,
                success: Color::Green,
                status_bar: Color::Gray,
            },
        }
    }
}

/// Resolved colors for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub status_bar: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// Holder of the current preferences with change notification
pub struct PreferenceStore {
    tx: watch::Sender<Preferences>,
}

impl PreferenceStore {
    pub fn new(initial: Preferences) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Preferences {
        *self.tx.borrow()
    }

    /// Subscribe to preference changes
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.tx.subscribe()
    }

    /// Apply `change`; subscribers are only notified when a value actually changed
    pub fn update(&self, change: impl FnOnce(&mut Preferences)) -> bool {
        self.tx.send_if_modified(|prefs| {
            let before = *prefs;
            change(prefs);
            *prefs != before
        })
    }

    pub fn toggle_theme(&self) -> bool {
        self.update(|p| p.theme = p.theme.toggle())
    }

    pub fn toggle_language(&self) -> bool {
        self.update(|p| p.language = p.language.toggle())
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
